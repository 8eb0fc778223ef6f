use chrono::{DateTime, Utc};

/// Hour and minute of a message timestamp, e.g. `09:05`.
pub fn clock_label(at: &DateTime<Utc>) -> String {
    at.format("%H:%M").to_string()
}
