use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use super::see_other;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::{FeedbackDraft, MealType, Section};
use crate::store::{Store, StoreSnapshot};
use crate::templates_structs::{Choice, FeedbackRow, MessTemplate, PageContext, StarChoice};
use crate::web::csrf;
use crate::web::flash::set_flash;
use crate::web::validate::{MAX_COMMENT, parse_choice, parse_rating, validate_optional};

/// The "Rate Current Meal" form. Meal and star buttons post to
/// `/mess/draft` with `pick_meal` / `pick_rating` set.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackForm {
    pub csrf_token: String,
    pub meal: String,
    pub rating: String,
    #[serde(default)]
    pub comment: String,
    pub pick_meal: Option<String>,
    pub pick_rating: Option<String>,
}

fn page(
    session: &Session,
    config: &AppConfig,
    snap: &StoreSnapshot,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let draft = &snap.feedback_draft;
    let tmpl = MessTemplate {
        ctx: PageContext::build(session, config, Section::Mess),
        meals: Choice::list(&MealType::ALL, MealType::label, draft.meal),
        stars: StarChoice::list(draft.rating),
        draft_meal: draft.meal.to_string(),
        draft_rating: draft.rating.get(),
        draft_comment: draft.comment.clone(),
        rows: snap.mess_feedbacks.iter().map(FeedbackRow::from).collect(),
        errors,
    };
    render(tmpl)
}

/// Parse the form into a typed draft, collecting every problem found.
fn parse_draft(form: &FeedbackForm, fallback: &FeedbackDraft) -> (FeedbackDraft, Vec<String>) {
    let mut errors = Vec::new();
    let meal_raw = form.pick_meal.as_deref().unwrap_or(&form.meal);
    let rating_raw = form.pick_rating.as_deref().unwrap_or(&form.rating);

    let meal = parse_choice::<MealType>(meal_raw).unwrap_or_else(|e| {
        errors.push(e);
        fallback.meal
    });
    let rating = parse_rating(rating_raw).unwrap_or_else(|e| {
        errors.push(e);
        fallback.rating
    });
    errors.extend(validate_optional(&form.comment, "Comment", MAX_COMMENT));

    let draft = FeedbackDraft {
        meal,
        rating,
        comment: form.comment.clone(),
    };
    (draft, errors)
}

/// GET /mess
pub async fn list(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    store.set_active_section(Section::Mess);
    page(&session, &config, &store.snapshot(), vec![])
}

/// POST /mess/draft
/// Remembers the selected meal, stars and comment without submitting.
pub async fn update_draft(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<FeedbackForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let current = store.snapshot().feedback_draft;
    let (draft, errors) = parse_draft(&form, &current);
    if !errors.is_empty() {
        // Keep what was typed; rejected values fall back to the previous draft
        store.update_feedback_draft(draft);
        return page(&session, &config, &store.snapshot(), errors);
    }
    store.update_feedback_draft(draft);
    Ok(see_other("/mess"))
}

/// POST /mess
pub async fn create(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<FeedbackForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let current = store.snapshot().feedback_draft;
    let (draft, errors) = parse_draft(&form, &current);
    if !errors.is_empty() {
        // Keep what was typed; rejected values fall back to the previous draft
        store.update_feedback_draft(draft);
        return page(&session, &config, &store.snapshot(), errors);
    }

    let feedback = store.add_mess_feedback(draft.meal, draft.rating, &draft.comment);
    set_flash(
        &session,
        format!("Thanks! {} rated {} stars", feedback.meal_type, feedback.rating),
    );
    Ok(see_other("/mess"))
}
