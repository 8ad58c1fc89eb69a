use serde::Serialize;

use crate::models::Section;

/// Published on every store mutation so views can re-render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    SectionChanged { section: Section },
    MaintenanceAdded { id: String },
    FeedbackAdded { id: String },
    DraftChanged,
    ChatUpdated { entries: usize },
    TypingChanged { typing: bool },
    SummaryUpdated,
}
