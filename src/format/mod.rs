//! Display formatting for normalized values.
//!
//! The normalizer returns numbers only; all string shaping lives here.

use chrono::{DateTime, Utc};

use crate::risk::normalize_percentage;

/// Formats a raw probability as a percentage string with one decimal,
/// e.g. `Some(0.45)` becomes `"45.0%"`. Degraded input reads `"0.0%"`.
#[must_use]
pub fn format_probability(raw: impl Into<Option<f64>>) -> String {
    format!("{:.1}%", normalize_percentage(raw))
}

/// Formats a raw wellness score as `"<rounded>/100"`.
#[must_use]
pub fn format_wellness_score(raw: impl Into<Option<f64>>) -> String {
    format!("{:.0}/100", normalize_percentage(raw))
}

/// Timestamp rendering for list rows and detail headers.
#[must_use]
pub fn format_date_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}
