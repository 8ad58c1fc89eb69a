use askama::Template;
use chrono::{DateTime, Utc};

use super::{Choice, PageContext};
use crate::models::MaintenanceRequest;

pub struct MaintenanceRow {
    pub ticket: String,
    pub description: String,
    pub category: String,
    pub room: String,
    pub hostel: String,
    pub status: String,
    pub is_pending: bool,
    pub elapsed: String,
}

impl MaintenanceRow {
    pub fn from_request(req: &MaintenanceRequest, now: DateTime<Utc>) -> Self {
        Self {
            ticket: req.ticket_label(),
            description: req.description.clone(),
            category: req.category.to_string(),
            room: req.room_number.clone(),
            hostel: req.hostel.clone(),
            status: req.status.to_string(),
            is_pending: req.is_pending(),
            elapsed: format_elapsed(now, req.timestamp),
        }
    }
}

/// Compact age such as `2h 15m`; future timestamps count as `0m`.
pub fn format_elapsed(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes().max(0);
    let (days, hours, mins) = (minutes / 1440, (minutes % 1440) / 60, minutes % 60);
    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

#[derive(Template)]
#[template(path = "maintenance.html")]
pub struct MaintenanceTemplate {
    pub ctx: PageContext,
    pub show_form: bool,
    pub categories: Vec<Choice>,
    pub draft_description: String,
    pub draft_room: String,
    pub rows: Vec<MaintenanceRow>,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn elapsed_is_compact() {
        let now = Utc::now();
        assert_eq!(format_elapsed(now, now), "0m");
        assert_eq!(format_elapsed(now, now - Duration::minutes(42)), "42m");
        assert_eq!(format_elapsed(now, now - Duration::minutes(135)), "2h 15m");
        assert_eq!(format_elapsed(now, now - Duration::hours(27)), "1d 3h");
        assert_eq!(format_elapsed(now, now + Duration::minutes(5)), "0m");
    }
}
