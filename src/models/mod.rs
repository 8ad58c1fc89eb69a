//! Domain vocabulary shared by the store, the assistant and the views.

pub mod chat;
pub mod feedback;
pub mod guest;
pub mod maintenance;
pub mod occupancy;
pub mod section;
pub mod seed;

use std::fmt;

pub use chat::{ChatEntry, ChatRole};
pub use feedback::{FeedbackDraft, MealType, MessFeedback, Rating, RatingError};
pub use guest::{GuestMeal, GuestMealError, GuestMealStatus};
pub use maintenance::{MaintenanceCategory, MaintenanceDraft, MaintenanceRequest, RequestStatus};
pub use occupancy::{OccupancyError, RoomOccupancy};
pub use section::Section;

/// A label that does not name any member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub field: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.field, self.value)
    }
}

impl std::error::Error for ParseEnumError {}

/// Case-insensitive lookup of a label among the members of a closed enumeration.
pub(crate) fn parse_label<T: Copy>(
    all: &[T],
    label: impl Fn(T) -> &'static str,
    field: &'static str,
    input: &str,
) -> Result<T, ParseEnumError> {
    let wanted = input.trim();
    all.iter()
        .copied()
        .find(|v| label(*v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ParseEnumError::new(field, input))
}
