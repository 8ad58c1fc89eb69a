use actix_session::Session;

const SESSION_KEY: &str = "flash";

pub fn set_flash(session: &Session, message: impl Into<String>) {
    let _ = session.insert(SESSION_KEY, message.into());
}

/// Returns the pending flash message once, then clears it.
pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(SESSION_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(SESSION_KEY);
    }
    flash
}
