// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout model.
//!
//! A workout is built once from validated input and never changes afterwards.
//! Derived values (description, pace or speed) are computed eagerly at
//! construction. Validation lives in [`crate::services::WorkoutFactory`].

use crate::config::Locale;
use crate::time_utils::{format_local_date, workout_id_from_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A map position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Activity kind, as selected in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Form value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃",
            WorkoutKind::Cycling => "🚵‍♂️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// A form kind value that is neither running nor cycling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown workout kind: {0:?}")]
pub struct UnknownKind(pub String);

/// Kind-specific payload of a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutDetail {
    Running {
        /// Temperature/effort proxy entered with the run
        temp: f64,
        /// `distance / (duration / 60)`
        pace: f64,
    },
    Cycling {
        /// Elevation gain in meters
        climb: f64,
        /// `distance / (duration / 60)`, km/h
        speed: f64,
    },
}

/// A recorded workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: String,
    created_at: DateTime<Utc>,
    coords: Coords,
    /// Kilometers
    distance: f64,
    /// Minutes
    duration: f64,
    description: String,
    #[serde(flatten)]
    detail: WorkoutDetail,
}

impl Workout {
    /// Build a running workout. Arguments must already be validated.
    pub fn running(
        created_at: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        temp: f64,
        locale: &Locale,
    ) -> Self {
        let pace = distance / (duration / 60.0);
        Self::build(
            created_at,
            coords,
            distance,
            duration,
            WorkoutDetail::Running { temp, pace },
            locale,
        )
    }

    /// Build a cycling workout. Arguments must already be validated.
    pub fn cycling(
        created_at: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        climb: f64,
        locale: &Locale,
    ) -> Self {
        let speed = distance / (duration / 60.0);
        Self::build(
            created_at,
            coords,
            distance,
            duration,
            WorkoutDetail::Cycling { climb, speed },
            locale,
        )
    }

    fn build(
        created_at: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        detail: WorkoutDetail,
        locale: &Locale,
    ) -> Self {
        let kind = detail.kind();
        let description = format!(
            "{} {}",
            locale.kind_label(kind),
            format_local_date(created_at, &locale.date_pattern)
        );

        Self {
            id: workout_id_from_timestamp(created_at),
            created_at,
            coords,
            distance,
            duration,
            description,
            detail,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn detail(&self) -> &WorkoutDetail {
        &self.detail
    }

    pub fn kind(&self) -> WorkoutKind {
        self.detail.kind()
    }
}

impl WorkoutDetail {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetail::Running { .. } => WorkoutKind::Running,
            WorkoutDetail::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}
