// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout tracker headless host.
//!
//! Reads newline-delimited JSON UI events from stdin and runs a session
//! against logging collaborators, starting at a fixed position.

use anyhow::Context;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{
    config::Config,
    headless::{
        feed_events, LoggingForm, LoggingMap, LoggingNotifier, LoggingSidebar, StaticGeolocation,
    },
    models::Coords,
    services::{event_channel, Collaborators, GeolocationService, SystemClock},
    App, SessionOutcome,
};

/// Position reported by the headless geolocation (Kyiv).
const START_POSITION: Coords = Coords {
    lat: 50.4501,
    lng: 30.5234,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    let config = Config::default();
    tracing::info!("Starting workout tracker session");

    let ui = Collaborators {
        map: Box::new(LoggingMap),
        form: Box::new(LoggingForm::default()),
        sidebar: Box::new(LoggingSidebar),
        notifier: Box::new(LoggingNotifier),
        clock: Box::new(SystemClock),
    };

    let position = StaticGeolocation::at(START_POSITION).request_current_position();
    let (sink, events) = event_channel();

    let app = App::new(config, ui);
    let (outcome, fed) = tokio::join!(app.run(position, events), async move {
        // The sink drops at the end of input, which closes the session.
        feed_events(BufReader::new(tokio::io::stdin()), &sink).await
    });

    match outcome {
        SessionOutcome::Completed(registry) => {
            let workouts = serde_json::to_string(registry.workouts())
                .context("Failed to encode recorded workouts")?;
            tracing::info!(count = registry.len(), workouts = %workouts, "Session summary");
        }
        SessionOutcome::Degraded(error) => {
            tracing::warn!(error = %error, "Session ran without a map");
        }
    }

    match fed {
        Ok(count) => {
            tracing::debug!(count, "Event feed finished");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Event feed failed");
            Err(e.into())
        }
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
