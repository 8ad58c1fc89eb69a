use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::Section;
use crate::store::Store;
use crate::templates_structs::{GuestRow, PageContext, PlaceholderTemplate};

fn placeholder(
    store: &Store,
    config: &AppConfig,
    session: &Session,
    section: Section,
) -> Result<HttpResponse, AppError> {
    store.set_active_section(section);
    let guest_meals = if section == Section::Guests {
        store.snapshot().guest_meals.iter().map(GuestRow::from).collect()
    } else {
        Vec::new()
    };
    render(PlaceholderTemplate {
        ctx: PageContext::build(session, config, section),
        guest_meals,
    })
}

/// GET /occupancy
pub async fn occupancy(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    placeholder(&store, &config, &session, Section::Occupancy)
}

/// GET /guests
pub async fn guests(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    placeholder(&store, &config, &session, Section::Guests)
}
