use tokio::task::JoinHandle;

use super::Store;

/// Keeps the feedback summary current: once at startup, then once per
/// feedback change. Bursts of changes collapse into a single refresh.
///
/// Writing the summary does not touch the feedback revision, so a refresh
/// never schedules another one.
pub fn spawn_summarizer(store: Store) -> JoinHandle<()> {
    let mut revisions = store.watch_feedback();
    tokio::spawn(async move {
        revisions.borrow_and_update();
        loop {
            let outcome = store.refresh_summary().await;
            match outcome.error_kind() {
                None => log::info!("Feedback summary refreshed"),
                Some(kind) => log::warn!("Feedback summary unavailable ({kind:?})"),
            }
            if revisions.changed().await.is_err() {
                log::info!("Feedback revisions closed; summarizer stopping");
                break;
            }
        }
    })
}
