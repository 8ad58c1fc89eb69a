use serde::Serialize;

/// The dashboard view currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Maintenance,
    Mess,
    Occupancy,
    Guests,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Maintenance,
        Section::Mess,
        Section::Occupancy,
        Section::Guests,
    ];

    /// Sidebar label.
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Maintenance => "Maintenance",
            Section::Mess => "Mess Feedback",
            Section::Occupancy => "Occupancy",
            Section::Guests => "Guest Meals",
        }
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Maintenance => "Maintenance",
            Section::Mess => "Mess",
            Section::Occupancy => "Occupancy",
            Section::Guests => "Guests",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Maintenance => "maintenance",
            Section::Mess => "mess",
            Section::Occupancy => "occupancy",
            Section::Guests => "guests",
        }
    }

    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }

    /// Sections still waiting on the central hostel server.
    pub fn is_placeholder(self) -> bool {
        matches!(self, Section::Occupancy | Section::Guests)
    }
}
