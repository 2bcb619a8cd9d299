//! Wall-clock timestamps stamped onto artifacts and change events.

use chrono::Local;

/// Layout of every timestamp written by declmgr (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
