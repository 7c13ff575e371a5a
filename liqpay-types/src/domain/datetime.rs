//! Conversions for the gateway's two timestamp encodings.
//!
//! Request fields such as `expired_date` and `subscribe_date_start` are plain
//! strings in `YYYY-MM-DD HH:MM:SS` (UTC). Response fields such as
//! `create_date` are integer epoch milliseconds.

use chrono::{DateTime, Utc};

/// Format used by `expired_date` and `subscribe_date_start`.
pub const GATEWAY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a UTC instant in the request date format.
pub fn format_gateway_datetime(at: DateTime<Utc>) -> String {
    at.format(GATEWAY_DATETIME_FORMAT).to_string()
}

/// Interprets an epoch-millisecond field. Zero (the "absent" value) maps to `None`.
pub fn epoch_millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}
