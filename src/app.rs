// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session runner: the single-threaded event loop around the coordinator.
//!
//! Handles the core workflow:
//! 1. Wait for the one-shot position request
//! 2. Render the map there and attach the click listener
//! 3. Feed queued UI events to the coordinator, one at a time
//!
//! If the position cannot be determined the map is never rendered and the
//! session stays degraded until the host stops sending events.

use crate::config::Config;
use crate::error::AppError;
use crate::models::Coords;
use crate::services::{
    Collaborators, Coordinator, EventStream, GeolocationError, PositionRequest, TileLayer,
    WorkoutRegistry,
};
use std::pin::pin;

/// How a session ended.
#[derive(Debug)]
pub enum SessionOutcome {
    /// The map was shown; holds every workout recorded.
    Completed(WorkoutRegistry),
    /// The position was never determined, so no map-dependent feature ran.
    Degraded(GeolocationError),
}

/// One application session.
pub struct App {
    config: Config,
    ui: Collaborators,
}

impl App {
    pub fn new(config: Config, ui: Collaborators) -> Self {
        Self { config, ui }
    }

    /// Run until every event sink has been dropped.
    pub async fn run(self, position: PositionRequest, mut events: EventStream) -> SessionOutcome {
        let mut position = pin!(position.resolve());
        let mut events_open = true;

        let result = loop {
            tokio::select! {
                biased;
                result = &mut position => break result,
                event = events.recv(), if events_open => match event {
                    Some(event) => {
                        tracing::debug!(event = event.name(), "Ignoring event before map is ready");
                    }
                    None => events_open = false,
                },
            }
        };

        match result {
            Ok(coords) => self.run_map(coords, events).await,
            Err(e) => Self::run_degraded(self.config, self.ui, e, events).await,
        }
    }

    async fn run_map(self, coords: Coords, mut events: EventStream) -> SessionOutcome {
        let App { config, mut ui } = self;

        let tiles = TileLayer {
            url: config.map.tile_url.clone(),
            attribution: config.map.attribution.clone(),
        };
        tracing::info!(%coords, zoom = config.map.initial_zoom, "Rendering map");
        ui.map.render_at(coords, config.map.initial_zoom, &tiles);
        ui.map.on_user_click(events.click_listener());

        let mut coordinator = Coordinator::new(config, ui);
        while let Some(event) = events.recv().await {
            coordinator.handle(event);
        }

        let registry = coordinator.into_registry();
        tracing::info!(workouts = registry.len(), "Session ended");
        SessionOutcome::Completed(registry)
    }

    async fn run_degraded(
        config: Config,
        mut ui: Collaborators,
        error: GeolocationError,
        mut events: EventStream,
    ) -> SessionOutcome {
        tracing::warn!(error = %error, "Current position unavailable; map disabled");
        let app_error = AppError::from(error);
        if let Some(message) = app_error.user_message(&config.locale) {
            ui.notifier.alert(message);
        }

        while let Some(event) = events.recv().await {
            tracing::debug!(event = event.name(), "Ignoring event without a map");
        }
        SessionOutcome::Degraded(error)
    }
}
