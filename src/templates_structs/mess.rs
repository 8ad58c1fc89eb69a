use askama::Template;

use super::{Choice, PageContext};
use crate::models::{MessFeedback, Rating};

pub struct StarChoice {
    pub value: u8,
    pub filled: bool,
}

impl StarChoice {
    pub fn list(current: Rating) -> Vec<StarChoice> {
        (Rating::MIN..=Rating::MAX)
            .map(|value| StarChoice {
                value,
                filled: current.get() >= value,
            })
            .collect()
    }
}

pub struct FeedbackRow {
    pub meal: String,
    pub stars: Vec<StarChoice>,
    pub comment: String,
    pub time: String,
}

impl From<&MessFeedback> for FeedbackRow {
    fn from(f: &MessFeedback) -> Self {
        Self {
            meal: f.meal_type.to_string(),
            stars: StarChoice::list(f.rating),
            comment: f.comment.clone(),
            time: f.timestamp.format("%H:%M:%S").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "mess.html")]
pub struct MessTemplate {
    pub ctx: PageContext,
    pub meals: Vec<Choice>,
    pub stars: Vec<StarChoice>,
    pub draft_meal: String,
    pub draft_rating: u8,
    pub draft_comment: String,
    pub rows: Vec<FeedbackRow>,
    pub errors: Vec<String>,
}
