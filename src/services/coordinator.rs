// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interaction coordinator.
//!
//! Owns the form state and the workout registry, and reacts to one UI event
//! at a time:
//! 1. Map click opens the form at the clicked position
//! 2. Submit validates, records the workout, places a marker, appends a
//!    sidebar entry and resets the form
//! 3. Sidebar click recenters the map on the chosen workout

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Coords, RawFormFields, UiEvent};
use crate::services::presenter::{popup_content, sidebar_summary};
use crate::services::{
    Clock, FormIo, MapService, Notifier, SidebarRenderer, ValidationError, WorkoutFactory,
    WorkoutRegistry,
};

/// The collaborators a coordinator drives.
pub struct Collaborators {
    pub map: Box<dyn MapService>,
    pub form: Box<dyn FormIo>,
    pub sidebar: Box<dyn SidebarRenderer>,
    pub notifier: Box<dyn Notifier>,
    pub clock: Box<dyn Clock>,
}

/// Form visibility state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Idle,
    /// The form is shown for a click at `pending`.
    FormOpen { pending: Coords },
}

/// What a form submission led to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A workout was recorded under this ID.
    Recorded(String),
    /// The input was rejected; the form stays open.
    Rejected(ValidationError),
    /// No form was open.
    Ignored,
}

/// Reacts to UI events. Created once the map is on screen.
pub struct Coordinator {
    config: Config,
    factory: WorkoutFactory,
    registry: WorkoutRegistry,
    state: FormState,
    ui: Collaborators,
}

impl Coordinator {
    pub fn new(config: Config, ui: Collaborators) -> Self {
        let factory = WorkoutFactory::new(config.locale.clone());
        Self {
            config,
            factory,
            registry: WorkoutRegistry::new(),
            state: FormState::Idle,
            ui,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn registry(&self) -> &WorkoutRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> WorkoutRegistry {
        self.registry
    }

    /// Dispatch a UI event.
    pub fn handle(&mut self, event: UiEvent) {
        tracing::trace!(event = event.name(), "Handling UI event");
        match event {
            UiEvent::MapClick { lat, lng } => self.map_clicked(Coords::new(lat, lng)),
            UiEvent::KindChanged => self.kind_changed(),
            UiEvent::Submit { fields: Some(fields) } => {
                self.submit_fields(fields);
            }
            UiEvent::Submit { fields: None } => {
                self.submit();
            }
            UiEvent::SidebarClick { id } => {
                self.sidebar_clicked(id.as_deref());
            }
        }
    }

    /// Open the form for a new workout at `coords`.
    ///
    /// A click while the form is already open moves the pending position.
    pub fn map_clicked(&mut self, coords: Coords) {
        match self.state {
            FormState::Idle => {
                tracing::debug!(%coords, "Opening workout form");
                self.ui.form.show();
            }
            FormState::FormOpen { pending } => {
                tracing::debug!(from = %pending, to = %coords, "Moving pending workout position");
            }
        }
        self.state = FormState::FormOpen { pending: coords };
        self.ui.form.focus_distance_field();
    }

    /// Swap the kind-specific input and clear the numbers.
    pub fn kind_changed(&mut self) {
        if self.state == FormState::Idle {
            tracing::debug!("Ignoring kind change while form is hidden");
            return;
        }
        self.ui.form.toggle_extra_field_visibility();
        self.ui.form.clear_fields();
    }

    /// Submit the form, reading its fields through the form boundary.
    pub fn submit(&mut self) -> SubmitOutcome {
        let fields = self.ui.form.read_fields();
        self.submit_fields(fields)
    }

    /// Submit already-read form fields.
    pub fn submit_fields(&mut self, fields: RawFormFields) -> SubmitOutcome {
        let FormState::FormOpen { pending } = self.state else {
            tracing::debug!("Ignoring submit without an open form");
            return SubmitOutcome::Ignored;
        };

        let created_at = self.ui.clock.now();
        let workout = match self.factory.create_from_form(&fields, pending, created_at) {
            Ok(workout) => workout,
            Err(e) => {
                tracing::warn!(error = %e, kind = %fields.kind, "Rejected workout input");
                self.report(&AppError::Validation(e.clone()));
                return SubmitOutcome::Rejected(e);
            }
        };

        let id = workout.id().to_string();
        let popup = popup_content(&workout, &self.config.popup, &self.config.locale);
        let summary = sidebar_summary(&workout, &self.config.locale);

        tracing::info!(
            id = %id,
            kind = %workout.kind(),
            distance = workout.distance(),
            duration = workout.duration(),
            coords = %pending,
            "Workout recorded"
        );
        self.registry.add(workout);

        self.ui.map.place_marker(pending, &popup);
        self.ui.sidebar.append_entry(summary);
        self.ui.form.clear_fields();
        self.ui.form.hide();
        self.state = FormState::Idle;

        SubmitOutcome::Recorded(id)
    }

    /// Recenter the map on a sidebar entry.
    ///
    /// Returns `false` when the click hit no entry or a stale one.
    pub fn sidebar_clicked(&mut self, id: Option<&str>) -> bool {
        let Some(id) = id else {
            return false;
        };

        match self.registry.find_by_id(id) {
            Ok(workout) => {
                let coords = workout.coords();
                tracing::debug!(id, %coords, "Recentering on workout");
                self.ui
                    .map
                    .recenter(coords, self.config.map.focus_zoom, self.config.map.pan);
                true
            }
            Err(e) => {
                self.report(&AppError::NotFound(e));
                false
            }
        }
    }

    fn report(&mut self, error: &AppError) {
        match error.user_message(&self.config.locale) {
            Some(message) => self.ui.notifier.alert(message),
            None => tracing::debug!(error = %error, "Ignoring non-user-visible error"),
        }
    }
}
