// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session lifecycle tests: geolocation, map rendering and event delivery.

use workout_tracker::config::{Config, Locale};
use workout_tracker::models::{Coords, RawFormFields, UiEvent};
use workout_tracker::services::{event_channel, GeolocationError, PositionRequest};
use workout_tracker::{App, SessionOutcome};

mod common;
use common::{Call, Recorder};

const START: Coords = Coords {
    lat: 50.45,
    lng: 30.52,
};

fn running_submit(distance: &str) -> UiEvent {
    UiEvent::Submit {
        fields: Some(RawFormFields {
            kind: "running".to_string(),
            distance: distance.to_string(),
            duration: "25".to_string(),
            temp: "2".to_string(),
            ..Default::default()
        }),
    }
}

#[tokio::test]
async fn test_session_renders_map_then_records_workout() {
    let recorder = Recorder::default();
    let app = App::new(Config::default(), recorder.collaborators());
    let (sink, events) = event_channel();

    sink.send(UiEvent::map_click(START));
    sink.send(running_submit("5"));
    drop(sink);

    let outcome = app.run(PositionRequest::ready(Ok(START)), events).await;

    let SessionOutcome::Completed(registry) = outcome else {
        panic!("expected completed session");
    };
    assert_eq!(registry.len(), 1);

    let calls = recorder.calls();
    assert_eq!(calls[0], Call::RenderAt(START, 13));
    assert_eq!(calls[1], Call::ListenerAttached);
    assert_eq!(recorder.markers().len(), 1);
    assert_eq!(recorder.markers()[0].0, START);
}

#[tokio::test]
async fn test_events_before_position_are_ignored() {
    let recorder = Recorder::default();
    let app = App::new(Config::default(), recorder.collaborators());
    let (sink, events) = event_channel();
    let (resolver, position) = PositionRequest::pending();

    let run = app.run(position, events);
    tokio::pin!(run);

    sink.send(UiEvent::map_click(START));
    sink.send(running_submit("5"));

    // Let the session drain the early events while still waiting.
    tokio::select! {
        biased;
        _ = &mut run => panic!("session ended before position resolved"),
        _ = tokio::task::yield_now() => {}
    }
    assert!(recorder.calls().is_empty());

    resolver.succeed(START);
    sink.send(running_submit("5"));
    drop(sink);

    let SessionOutcome::Completed(registry) = run.await else {
        panic!("expected completed session");
    };
    // Submit without a click after the map came up: nothing recorded.
    assert!(registry.is_empty());
    assert_eq!(recorder.calls()[0], Call::RenderAt(START, 13));
    assert!(recorder.markers().is_empty());
}

#[tokio::test]
async fn test_map_clicks_flow_through_listener() {
    let recorder = Recorder::default();
    let app = App::new(Config::default(), recorder.collaborators());
    let (sink, events) = event_channel();
    let (resolver, position) = PositionRequest::pending();
    resolver.succeed(START);

    let clicked = Coords::new(50.40, 30.60);
    let host = recorder.clone();
    let driver = async move {
        // Wait until the map is up and listening.
        while !host.click_map(clicked) {
            tokio::task::yield_now().await;
        }
        sink.send(running_submit("5"));
        drop(sink);
    };

    let (outcome, ()) = tokio::join!(app.run(position, events), driver);

    let SessionOutcome::Completed(registry) = outcome else {
        panic!("expected completed session");
    };
    assert_eq!(registry.workouts()[0].coords(), clicked);
    assert_eq!(recorder.markers()[0].0, clicked);
}

#[tokio::test]
async fn test_denied_geolocation_degrades_with_alert() {
    let recorder = Recorder::default();
    let app = App::new(Config::with_locale(Locale::english()), recorder.collaborators());
    let (sink, events) = event_channel();

    sink.send(UiEvent::map_click(START));
    sink.send(running_submit("5"));
    drop(sink);

    let outcome = app
        .run(PositionRequest::ready(Err(GeolocationError::Denied)), events)
        .await;

    assert!(matches!(
        outcome,
        SessionOutcome::Degraded(GeolocationError::Denied)
    ));
    assert_eq!(
        recorder.calls(),
        vec![Call::Alert(Locale::english().location_unavailable_message)]
    );
}

#[tokio::test]
async fn test_unsupported_geolocation_is_silent() {
    let recorder = Recorder::default();
    let app = App::new(Config::default(), recorder.collaborators());
    let (sink, events) = event_channel();
    drop(sink);

    let outcome = app
        .run(
            PositionRequest::ready(Err(GeolocationError::Unsupported)),
            events,
        )
        .await;

    assert!(matches!(
        outcome,
        SessionOutcome::Degraded(GeolocationError::Unsupported)
    ));
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn test_abandoned_position_request_is_unavailable() {
    let recorder = Recorder::default();
    let app = App::new(Config::default(), recorder.collaborators());
    let (sink, events) = event_channel();
    let (resolver, position) = PositionRequest::pending();
    drop(resolver);
    drop(sink);

    let outcome = app.run(position, events).await;

    assert!(matches!(
        outcome,
        SessionOutcome::Degraded(GeolocationError::Unavailable)
    ));
    assert_eq!(recorder.alerts().len(), 1);
}

#[tokio::test]
async fn test_position_resolved_after_events_closed() {
    let recorder = Recorder::default();
    let app = App::new(Config::default(), recorder.collaborators());
    let (sink, events) = event_channel();
    let (resolver, position) = PositionRequest::pending();
    drop(sink);

    let driver = async move {
        tokio::task::yield_now().await;
        resolver.succeed(START);
    };
    let (outcome, ()) = tokio::join!(app.run(position, events), driver);

    let SessionOutcome::Completed(registry) = outcome else {
        panic!("expected completed session");
    };
    assert!(registry.is_empty());
    assert_eq!(recorder.calls()[0], Call::RenderAt(START, 13));
}
