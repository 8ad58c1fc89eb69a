// Template context structures for Askama templates, one module per dashboard section.

use actix_session::Session;
use chrono::{Local, Timelike};

use crate::config::AppConfig;
use crate::models::Section;
use crate::web::{csrf, flash};

mod dashboard;
mod maintenance;
mod mess;
mod placeholder;

pub use self::dashboard::{ChatLine, DashboardTemplate};
pub use self::maintenance::{MaintenanceRow, MaintenanceTemplate, format_elapsed};
pub use self::mess::{FeedbackRow, MessTemplate, StarChoice};
pub use self::placeholder::{GuestRow, PlaceholderTemplate};

pub struct NavItem {
    pub label: String,
    pub url: String,
    pub is_active: bool,
}

/// An option in a select or button group.
pub struct Choice {
    pub label: String,
    pub selected: bool,
}

impl Choice {
    pub fn list<T: Copy + PartialEq>(all: &[T], label: impl Fn(T) -> &'static str, current: T) -> Vec<Choice> {
        all.iter()
            .map(|v| Choice {
                label: label(*v).to_string(),
                selected: *v == current,
            })
            .collect()
    }
}

/// Common context shared by all pages.
/// Templates access these as `ctx.title`, `ctx.nav`, etc.
pub struct PageContext {
    pub app_name: String,
    pub institute: String,
    pub title: String,
    pub section: String,
    pub greeting: String,
    pub nav: Vec<NavItem>,
    pub flash: Option<String>,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig, section: Section) -> Self {
        let nav = Section::ALL
            .iter()
            .map(|s| NavItem {
                label: s.nav_label().to_string(),
                url: s.path(),
                is_active: *s == section,
            })
            .collect();
        Self {
            app_name: config.app_name.clone(),
            institute: config.institute.clone(),
            title: section.title().to_string(),
            section: section.slug().to_string(),
            greeting: time_greeting(Local::now().hour()),
            nav,
            flash: flash::take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}

fn time_greeting(hour: u32) -> String {
    let period = match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    };
    period.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    #[test]
    fn greeting_follows_the_clock() {
        assert_eq!(time_greeting(6), "Good morning");
        assert_eq!(time_greeting(13), "Good afternoon");
        assert_eq!(time_greeting(23), "Good evening");
        assert_eq!(time_greeting(2), "Good evening");
    }

    #[test]
    fn choices_mark_the_current_value() {
        let choices = Choice::list(&MealType::ALL, MealType::label, MealType::Snacks);
        assert_eq!(choices.len(), 4);
        let selected: Vec<_> = choices.iter().filter(|c| c.selected).map(|c| c.label.as_str()).collect();
        assert_eq!(selected, vec!["Snacks"]);
    }
}
