use chrono::{DateTime, Utc};
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TICKET_ID_LEN: usize = 9;

fn random_ticket_id() -> String {
    let mut rng = rand::rng();
    (0..TICKET_ID_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Random base36 id, redrawn until `taken` rejects it.
pub fn ticket_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = random_ticket_id();
        if !taken(&id) {
            return id;
        }
    }
}

/// Epoch-millisecond id; moves forward past ids already in use.
pub fn timestamp_id(now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let id = millis.to_string();
        if !taken(&id) {
            return id;
        }
        millis += 1;
    }
}
