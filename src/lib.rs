// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout tracker: record runs and rides by clicking on a map.
//!
//! This crate provides the workout model, input validation, the session
//! registry and the coordinator that drives the map, form and sidebar.

pub mod app;
pub mod config;
pub mod error;
pub mod headless;
pub mod models;
pub mod number_format;
pub mod services;
pub mod time_utils;

pub use app::{App, SessionOutcome};
