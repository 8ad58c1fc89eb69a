pub mod api_handlers;
pub mod chat_handlers;
pub mod dashboard;
pub mod maintenance_handlers;
pub mod mess_handlers;
pub mod placeholder_handlers;
pub mod ws_handlers;

use actix_web::{HttpResponse, web};

/// 303 redirect after a form post.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Register every dashboard route. Expects `web::Data<Store>` and
/// `web::Data<AppConfig>` plus session middleware on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(|| async { see_other("/dashboard") }))
        .route("/dashboard", web::get().to(dashboard::index))
        // /maintenance/new BEFORE the POST to /maintenance for readability
        .route("/maintenance", web::get().to(maintenance_handlers::list))
        .route("/maintenance/new", web::get().to(maintenance_handlers::new_form))
        .route("/maintenance", web::post().to(maintenance_handlers::create))
        .route("/maintenance/cancel", web::post().to(maintenance_handlers::cancel))
        .route("/mess", web::get().to(mess_handlers::list))
        .route("/mess/draft", web::post().to(mess_handlers::update_draft))
        .route("/mess", web::post().to(mess_handlers::create))
        .route("/occupancy", web::get().to(placeholder_handlers::occupancy))
        .route("/guests", web::get().to(placeholder_handlers::guests))
        .route("/chat", web::post().to(chat_handlers::send))
        .route("/api/state", web::get().to(api_handlers::state))
        .route("/ws", web::get().to(ws_handlers::ws_connect));
}
