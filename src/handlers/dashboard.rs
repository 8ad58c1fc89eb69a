use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::Section;
use crate::store::Store;
use crate::templates_structs::{ChatLine, DashboardTemplate, PageContext};

pub async fn index(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    store.set_active_section(Section::Dashboard);
    let snap = store.snapshot();

    let tmpl = DashboardTemplate {
        ctx: PageContext::build(&session, &config, Section::Dashboard),
        pending_count: snap.pending_count(),
        average_rating: snap
            .average_rating()
            .map(|avg| format!("{avg:.1}"))
            .unwrap_or_else(|| "–".to_string()),
        feedback_count: snap.mess_feedbacks.len(),
        summary: snap.summary.clone(),
        transcript: snap.transcript.iter().map(ChatLine::from).collect(),
        is_typing: snap.is_typing,
    };
    render(tmpl)
}
