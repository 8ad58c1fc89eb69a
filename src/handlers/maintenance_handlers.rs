use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;

use super::see_other;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::{MaintenanceCategory, MaintenanceDraft, Section};
use crate::store::{Store, StoreSnapshot};
use crate::templates_structs::{Choice, MaintenanceRow, MaintenanceTemplate, PageContext};
use crate::web::csrf;
use crate::web::flash::set_flash;
use crate::web::validate::{MAX_DESCRIPTION, MAX_ROOM, parse_choice, validate_optional};

#[derive(Debug, Clone, Deserialize)]
pub struct MaintenanceForm {
    pub csrf_token: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub room: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn page(
    session: &Session,
    config: &AppConfig,
    snap: &StoreSnapshot,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let now = Utc::now();
    let draft = &snap.maintenance_draft;
    let tmpl = MaintenanceTemplate {
        ctx: PageContext::build(session, config, Section::Maintenance),
        show_form: snap.show_maintenance_form,
        categories: Choice::list(&MaintenanceCategory::ALL, MaintenanceCategory::label, draft.category),
        draft_description: draft.description.clone(),
        draft_room: draft.room.clone(),
        rows: snap
            .maintenance_requests
            .iter()
            .map(|r| MaintenanceRow::from_request(r, now))
            .collect(),
        errors,
    };
    render(tmpl)
}

/// GET /maintenance
pub async fn list(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    store.set_active_section(Section::Maintenance);
    page(&session, &config, &store.snapshot(), vec![])
}

/// GET /maintenance/new
/// Shows the "Raise Issue" form above the ticket table.
pub async fn new_form(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    store.open_maintenance_form();
    page(&session, &config, &store.snapshot(), vec![])
}

/// POST /maintenance
pub async fn create(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<MaintenanceForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut errors = Vec::new();
    let category = match parse_choice::<MaintenanceCategory>(&form.category) {
        Ok(c) => c,
        Err(e) => {
            errors.push(e);
            MaintenanceCategory::default()
        }
    };
    errors.extend(validate_optional(&form.description, "Description", MAX_DESCRIPTION));
    errors.extend(validate_optional(&form.room, "Room", MAX_ROOM));

    if !errors.is_empty() {
        store.update_maintenance_draft(MaintenanceDraft {
            category,
            description: form.description.clone(),
            room: form.room.clone(),
        });
        return page(&session, &config, &store.snapshot(), errors);
    }

    let request = store.add_maintenance_request(category, &form.description, &form.room);
    set_flash(
        &session,
        format!("Requisition {} raised for room {}", request.ticket_label(), request.room_number),
    );
    Ok(see_other("/maintenance"))
}

/// POST /maintenance/cancel
pub async fn cancel(
    store: web::Data<Store>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    store.close_maintenance_form();
    Ok(see_other("/maintenance"))
}
