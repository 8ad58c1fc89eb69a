use actix_web::{HttpResponse, web};

use crate::store::Store;

/// GET /api/state
/// Read-only JSON snapshot of the whole store.
pub async fn state(store: web::Data<Store>) -> HttpResponse {
    HttpResponse::Ok().json(store.snapshot())
}
