// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types and how they surface to the user.

use crate::config::Locale;
use crate::services::{GeolocationError, RegistryError, ValidationError};

/// Any failure of a single interaction. None of them is fatal.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid workout input: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] RegistryError),

    #[error("Geolocation failed: {0}")]
    Geolocation(#[from] GeolocationError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether the user should be alerted about this error.
    ///
    /// Stale sidebar lookups and hosts without geolocation fail silently.
    pub fn is_user_visible(&self) -> bool {
        match self {
            AppError::Validation(_) => true,
            AppError::Geolocation(GeolocationError::Unsupported) => false,
            AppError::Geolocation(_) => true,
            AppError::NotFound(_) | AppError::Internal(_) => false,
        }
    }

    /// Alert text for user-visible errors.
    pub fn user_message<'a>(&self, locale: &'a Locale) -> Option<&'a str> {
        if !self.is_user_visible() {
            return None;
        }
        match self {
            AppError::Validation(_) => Some(locale.invalid_input_message.as_str()),
            AppError::Geolocation(_) => Some(locale.location_unavailable_message.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, AppError>;
