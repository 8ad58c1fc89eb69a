use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ParseEnumError, parse_label};

/// Lifecycle of a maintenance ticket. Tickets only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::InProgress,
        RequestStatus::Resolved,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Resolved => "Resolved",
        }
    }

    /// Pending -> In Progress -> Resolved, one step at a time.
    pub fn can_transition_to(self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (RequestStatus::Pending, RequestStatus::InProgress)
                | (RequestStatus::InProgress, RequestStatus::Resolved)
        )
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RequestStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "status", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MaintenanceCategory {
    #[default]
    Electrical,
    Plumbing,
    Carpentry,
    Cleaning,
    Others,
}

impl MaintenanceCategory {
    pub const ALL: [MaintenanceCategory; 5] = [
        MaintenanceCategory::Electrical,
        MaintenanceCategory::Plumbing,
        MaintenanceCategory::Carpentry,
        MaintenanceCategory::Cleaning,
        MaintenanceCategory::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MaintenanceCategory::Electrical => "Electrical",
            MaintenanceCategory::Plumbing => "Plumbing",
            MaintenanceCategory::Carpentry => "Carpentry",
            MaintenanceCategory::Cleaning => "Cleaning",
            MaintenanceCategory::Others => "Others",
        }
    }
}

impl fmt::Display for MaintenanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MaintenanceCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "category", s)
    }
}

/// A facility repair ticket filed by a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: String,
    pub student_name: String,
    pub room_number: String,
    pub hostel: String,
    pub category: MaintenanceCategory,
    pub description: String,
    pub status: RequestStatus,
    pub timestamp: DateTime<Utc>,
}

impl MaintenanceRequest {
    /// Short ticket label such as `#0002`, built from the leading digits of the id.
    pub fn ticket_label(&self) -> String {
        let digits: String = self.id.chars().take_while(|c| c.is_ascii_digit()).collect();
        let number = digits.parse::<u64>().unwrap_or(0);
        format!("#{number:04}")
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

/// Unsaved values of the "Raise Issue" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceDraft {
    pub category: MaintenanceCategory,
    pub description: String,
    pub room: String,
}
