// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

/// Date pattern used when a locale's pattern cannot be rendered.
pub const FALLBACK_DATE_PATTERN: &str = "%d.%m.%Y";

/// Number of trailing epoch-millisecond digits kept in a workout ID.
const WORKOUT_ID_DIGITS: usize = 10;

/// Derive a workout ID from its creation time.
///
/// Keeps the last ten digits of the Unix epoch in milliseconds, so IDs are
/// monotonic within a session but collide for two workouts created in the
/// same millisecond.
pub fn workout_id_from_timestamp(created_at: DateTime<Utc>) -> String {
    let millis = created_at.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(WORKOUT_ID_DIGITS);
    millis[start..].to_string()
}

/// Format a timestamp as a date in the local time zone.
///
/// An unrenderable `strftime` pattern falls back to [`FALLBACK_DATE_PATTERN`].
pub fn format_local_date(date: DateTime<Utc>, pattern: &str) -> String {
    let local = date.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(pattern)).is_ok() {
        return out;
    }

    tracing::warn!(pattern, "Invalid date pattern, using fallback");
    local.format(FALLBACK_DATE_PATTERN).to_string()
}
