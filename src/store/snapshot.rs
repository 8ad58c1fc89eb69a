use serde::Serialize;

use crate::models::{
    ChatEntry, FeedbackDraft, GuestMeal, MaintenanceDraft, MaintenanceRequest, MessFeedback,
    RoomOccupancy, Section,
};

/// Read-only copy of the store, handed to views and the JSON API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub active_section: Section,
    pub maintenance_requests: Vec<MaintenanceRequest>,
    pub mess_feedbacks: Vec<MessFeedback>,
    pub guest_meals: Vec<GuestMeal>,
    pub room_occupancy: Vec<RoomOccupancy>,
    pub show_maintenance_form: bool,
    pub maintenance_draft: MaintenanceDraft,
    pub feedback_draft: FeedbackDraft,
    pub transcript: Vec<ChatEntry>,
    pub is_typing: bool,
    pub summary: String,
}

impl StoreSnapshot {
    pub fn pending_count(&self) -> usize {
        self.maintenance_requests.iter().filter(|r| r.is_pending()).count()
    }

    /// Mean star rating, `None` before any feedback arrives.
    pub fn average_rating(&self) -> Option<f64> {
        if self.mess_feedbacks.is_empty() {
            return None;
        }
        let total: u32 = self
            .mess_feedbacks
            .iter()
            .map(|f| u32::from(f.rating.get()))
            .sum();
        Some(f64::from(total) / self.mess_feedbacks.len() as f64)
    }
}
