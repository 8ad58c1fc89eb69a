use askama::Template;

use super::PageContext;
use crate::models::ChatEntry;

pub struct ChatLine {
    pub is_user: bool,
    pub text: String,
}

impl From<&ChatEntry> for ChatLine {
    fn from(entry: &ChatEntry) -> Self {
        Self {
            is_user: entry.is_user(),
            text: entry.text.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub pending_count: usize,
    pub average_rating: String,
    pub feedback_count: usize,
    pub summary: String,
    pub transcript: Vec<ChatLine>,
    pub is_typing: bool,
}
