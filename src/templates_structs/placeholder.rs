use askama::Template;

use super::PageContext;
use crate::models::GuestMeal;

pub struct GuestRow {
    pub guest_name: String,
    pub host_student: String,
    pub date: String,
    pub meals: String,
    pub status: String,
}

impl From<&GuestMeal> for GuestRow {
    fn from(g: &GuestMeal) -> Self {
        Self {
            guest_name: g.guest_name.clone(),
            host_student: g.host_student.clone(),
            date: g.date.format("%Y-%m-%d").to_string(),
            meals: g.meals_label(),
            status: g.status.to_string(),
        }
    }
}

/// Occupancy and guest sections, pending the central server sync.
#[derive(Template)]
#[template(path = "placeholder.html")]
pub struct PlaceholderTemplate {
    pub ctx: PageContext,
    pub guest_meals: Vec<GuestRow>,
}
