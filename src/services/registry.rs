// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store of the workouts recorded this session.

use crate::models::Workout;

/// Append-only, insertion-ordered list of workouts.
#[derive(Debug, Default, Clone)]
pub struct WorkoutRegistry {
    workouts: Vec<Workout>,
}

impl WorkoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a workout.
    pub fn add(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// Find a workout by ID (linear scan; first match wins).
    pub fn find_by_id(&self, id: &str) -> Result<&Workout, RegistryError> {
        self.workouts
            .iter()
            .find(|w| w.id() == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Workouts in insertion order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Workout> {
        self.workouts.iter()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

impl<'a> IntoIterator for &'a WorkoutRegistry {
    type Item = &'a Workout;
    type IntoIter = std::slice::Iter<'a, Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Errors from registry lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("Workout not found: {0}")]
    NotFound(String),
}
