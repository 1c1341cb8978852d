// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout validation and construction from raw form input.

use crate::config::Locale;
use crate::models::{Coords, RawFormFields, UnknownKind, Workout, WorkoutKind};
use chrono::{DateTime, Utc};

/// Builds workouts from user input.
#[derive(Debug, Clone, Default)]
pub struct WorkoutFactory {
    locale: Locale,
}

impl WorkoutFactory {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Validate raw input and build the matching workout.
    ///
    /// Every number must be finite, and distance and duration must be
    /// positive. Running also requires a positive temp; a cycling climb may
    /// be zero or negative.
    pub fn create_workout(
        &self,
        kind: &str,
        coords: Coords,
        raw_distance: &str,
        raw_duration: &str,
        raw_extra: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Workout, ValidationError> {
        let kind: WorkoutKind = kind.parse()?;
        let distance = coerce_number(raw_distance);
        let duration = coerce_number(raw_duration);
        let extra = coerce_number(raw_extra);

        let extra_field = match kind {
            WorkoutKind::Running => "temp",
            WorkoutKind::Cycling => "climb",
        };
        let fields = [
            ("distance", distance),
            ("duration", duration),
            (extra_field, extra),
        ];

        if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ValidationError::NotFinite { field });
        }

        let must_be_positive = match kind {
            WorkoutKind::Running => &fields[..],
            WorkoutKind::Cycling => &fields[..2],
        };
        if let Some(&(field, value)) = must_be_positive.iter().find(|(_, value)| *value <= 0.0) {
            return Err(ValidationError::NotPositive { field, value });
        }

        let workout = match kind {
            WorkoutKind::Running => {
                Workout::running(created_at, coords, distance, duration, extra, &self.locale)
            }
            WorkoutKind::Cycling => {
                Workout::cycling(created_at, coords, distance, duration, extra, &self.locale)
            }
        };
        Ok(workout)
    }

    /// Validate a submitted form.
    pub fn create_from_form(
        &self,
        fields: &RawFormFields,
        coords: Coords,
        created_at: DateTime<Utc>,
    ) -> Result<Workout, ValidationError> {
        self.create_workout(
            &fields.kind,
            coords,
            &fields.distance,
            &fields.duration,
            fields.extra_metric(),
            created_at,
        )
    }
}

/// Read a number-input value: blank reads as zero, junk as NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Rejected form input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    UnknownKind(#[from] UnknownKind),

    #[error("{field} is not a number")]
    NotFinite { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}
