use actix_web::{HttpRequest, HttpResponse, web};
use actix_ws::Message;
use tokio::sync::broadcast::error::RecvError;

use crate::store::Store;

/// WebSocket upgrade handler. Forwards every store event to the browser as JSON.
pub async fn ws_connect(
    req: HttpRequest,
    body: web::Payload,
    store: web::Data<Store>,
) -> Result<HttpResponse, actix_web::Error> {
    let (response, mut ws_session, mut msg_stream) = actix_ws::handle(&req, body)?;
    let mut events = store.subscribe();

    actix_web::rt::spawn(async move {
        loop {
            tokio::select! {
                event = events.recv() => {
                    let event = match event {
                        Ok(event) => event,
                        Err(RecvError::Lagged(skipped)) => {
                            log::debug!("Live view lagged by {skipped} events");
                            continue;
                        }
                        Err(RecvError::Closed) => break,
                    };
                    let payload = match serde_json::to_string(&event) {
                        Ok(json) => json,
                        Err(e) => {
                            log::error!("Failed to encode store event: {e}");
                            continue;
                        }
                    };
                    if ws_session.text(payload).await.is_err() {
                        break;
                    }
                }
                Some(Ok(msg)) = msg_stream.recv() => {
                    match msg {
                        Message::Ping(bytes) => {
                            if ws_session.pong(&bytes).await.is_err() {
                                break;
                            }
                        }
                        Message::Close(_) => break,
                        // Mutations arrive via HTTP POST, not WS
                        _ => {}
                    }
                }
                else => break,
            }
        }
        let _ = ws_session.close(None).await;
    });

    Ok(response)
}
