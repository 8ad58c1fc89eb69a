use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use super::see_other;
use crate::errors::AppError;
use crate::store::Store;
use crate::web::csrf;
use crate::web::flash::set_flash;
use crate::web::validate::{MAX_CHAT_MESSAGE, validate_optional};

#[derive(Debug, Clone, Deserialize)]
pub struct ChatForm {
    pub csrf_token: String,
    #[serde(default)]
    pub message: String,
}

/// POST /chat
/// Runs one chat round, then returns to the dashboard. The exchange runs on
/// its own task so a dropped connection cannot leave the typing flag set.
pub async fn send(
    store: web::Data<Store>,
    session: Session,
    form: web::Form<ChatForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    if let Some(error) = validate_optional(&form.message, "Message", MAX_CHAT_MESSAGE) {
        set_flash(&session, error);
        return Ok(see_other("/dashboard"));
    }

    let store = store.get_ref().clone();
    let message = form.into_inner().message;
    let exchange = tokio::spawn(async move { store.send_chat_message(&message).await }).await;

    match exchange {
        Ok(Some(exchange)) if exchange.outcome.is_fallback() => {
            log::warn!("Chat reply fell back: {:?}", exchange.outcome.error_kind());
        }
        Ok(_) => {}
        Err(e) => log::error!("Chat task failed: {e}"),
    }
    Ok(see_other("/dashboard"))
}
