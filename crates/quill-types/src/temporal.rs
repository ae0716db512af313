//! Presentation renderings of stored timestamps.
//!
//! A post stores exactly one instant (`date`, stamped at creation). The two
//! functions here derive the strings shown to people and machines from that
//! instant without ever mutating it.

use chrono::{DateTime, SecondsFormat, Utc};

pub use chrono::Locale;

/// Long-form, locale-aware calendar date for detail-page display:
/// full weekday, full month name, numeric day, numeric year.
///
/// `Locale::en_US` renders e.g. `Thursday, August 31, 2023`.
pub fn display_date(instant: &DateTime<Utc>, locale: Locale) -> String {
    instant.format_localized("%A, %B %-d, %Y", locale).to_string()
}

/// Canonical, UTC-normalized, round-trippable date string for any
/// machine-readable output, e.g. `2023-08-31T12:30:45.000Z`.
pub fn wire_date(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
