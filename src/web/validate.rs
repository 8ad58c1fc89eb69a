use std::str::FromStr;

use crate::models::{ParseEnumError, Rating};

pub const MAX_DESCRIPTION: usize = 500;
pub const MAX_ROOM: usize = 20;
pub const MAX_COMMENT: usize = 1000;
pub const MAX_CHAT_MESSAGE: usize = 1000;

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Parse a closed-enumeration form value (category, meal type, ...).
pub fn parse_choice<T>(value: &str) -> Result<T, String>
where
    T: FromStr<Err = ParseEnumError>,
{
    value.parse::<T>().map_err(|e| e.to_string())
}

/// Parse a star rating submitted as text.
pub fn parse_rating(value: &str) -> Result<Rating, String> {
    let number = value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("Rating must be a whole number (got '{}')", value.trim()))?;
    Rating::new(number).map_err(|e| e.to_string())
}
