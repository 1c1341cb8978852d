// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod event;
pub mod summary;
pub mod workout;

pub use event::{RawFormFields, UiEvent};
pub use summary::{PopupContent, PopupOptions, SidebarSummary, SummaryDetail};
pub use workout::{Coords, UnknownKind, Workout, WorkoutDetail, WorkoutKind};
