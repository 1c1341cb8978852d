// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod boundary;
pub mod coordinator;
pub mod factory;
pub mod presenter;
pub mod registry;

pub use boundary::{
    event_channel, ClickListener, Clock, EventSink, EventStream, FormIo, GeolocationError,
    GeolocationService, MapService, Notifier, PositionRequest, PositionResolver, SidebarRenderer,
    SystemClock, TileLayer,
};
pub use coordinator::{Collaborators, Coordinator, FormState, SubmitOutcome};
pub use factory::{coerce_number, ValidationError, WorkoutFactory};
pub use registry::{RegistryError, WorkoutRegistry};
