// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collaborator interfaces and the event/geolocation plumbing between them.
//!
//! The map widget, form, sidebar and alert mechanism are opaque to the
//! coordinator. It only talks to them through these traits, so a browser
//! host, the headless binary and the test doubles are interchangeable.

use crate::config::PanAnimation;
use crate::models::{Coords, PopupContent, RawFormFields, SidebarSummary, UiEvent};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot};

/// Tile layer settings handed to the map on first render.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

/// Interactive map widget.
pub trait MapService {
    /// Show the map centered on `coords`.
    fn render_at(&mut self, coords: Coords, zoom: u8, tiles: &TileLayer);
    /// Forward clicks on the map as [`UiEvent::MapClick`] through `listener`.
    fn on_user_click(&mut self, listener: ClickListener);
    /// Add a marker with an open popup.
    fn place_marker(&mut self, coords: Coords, popup: &PopupContent);
    /// Move the view to `coords`.
    fn recenter(&mut self, coords: Coords, zoom: u8, pan: PanAnimation);
}

/// The workout entry form.
pub trait FormIo {
    fn read_fields(&self) -> RawFormFields;
    fn show(&mut self);
    fn hide(&mut self);
    fn clear_fields(&mut self);
    fn focus_distance_field(&mut self);
    /// Swap which kind-specific input (temp or climb) is visible.
    fn toggle_extra_field_visibility(&mut self);
}

/// The workout list next to the map.
pub trait SidebarRenderer {
    fn append_entry(&mut self, summary: SidebarSummary);
}

/// Blocking user-visible notification.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Source of creation timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Device position lookup.
pub trait GeolocationService {
    /// Start a one-shot position request.
    fn request_current_position(&self) -> PositionRequest;
}

/// Why the current position could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Geolocation permission denied")]
    Denied,

    #[error("Position unavailable")]
    Unavailable,

    #[error("Geolocation is not supported")]
    Unsupported,
}

/// Pending result of a position request. Resolves at most once.
#[derive(Debug)]
pub struct PositionRequest {
    rx: oneshot::Receiver<Result<Coords, GeolocationError>>,
}

/// Completes a [`PositionRequest`].
#[derive(Debug)]
pub struct PositionResolver {
    tx: oneshot::Sender<Result<Coords, GeolocationError>>,
}

impl PositionRequest {
    /// A request paired with the handle that completes it.
    pub fn pending() -> (PositionResolver, PositionRequest) {
        let (tx, rx) = oneshot::channel();
        (PositionResolver { tx }, PositionRequest { rx })
    }

    /// A request that has already completed.
    pub fn ready(result: Result<Coords, GeolocationError>) -> Self {
        let (resolver, request) = Self::pending();
        resolver.resolve(result);
        request
    }

    /// Wait for the position.
    ///
    /// Never completes while the resolver is alive but unused. A resolver
    /// dropped without answering counts as [`GeolocationError::Unavailable`].
    pub async fn resolve(self) -> Result<Coords, GeolocationError> {
        self.rx
            .await
            .unwrap_or(Err(GeolocationError::Unavailable))
    }
}

impl PositionResolver {
    pub fn resolve(self, result: Result<Coords, GeolocationError>) {
        // Receiver gone means the session already ended.
        let _ = self.tx.send(result);
    }

    pub fn succeed(self, coords: Coords) {
        self.resolve(Ok(coords));
    }

    pub fn fail(self, error: GeolocationError) {
        self.resolve(Err(error));
    }
}

/// Create the UI event queue for one session.
pub fn event_channel() -> (EventSink, EventStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    let weak = tx.downgrade();
    (EventSink { tx }, EventStream { rx, weak })
}

/// Host-side sender of UI events. The session ends once every sink is dropped.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl EventSink {
    /// Queue an event. Returns `false` if the session has ended.
    pub fn send(&self, event: UiEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Receiving end of the UI event queue.
#[derive(Debug)]
pub struct EventStream {
    rx: mpsc::UnboundedReceiver<UiEvent>,
    weak: mpsc::WeakUnboundedSender<UiEvent>,
}

impl EventStream {
    pub async fn recv(&mut self) -> Option<UiEvent> {
        self.rx.recv().await
    }

    /// A map click listener feeding this stream.
    pub fn click_listener(&self) -> ClickListener {
        ClickListener {
            tx: self.weak.clone(),
        }
    }
}

/// Map click callback. Does not keep the session alive on its own.
#[derive(Debug, Clone)]
pub struct ClickListener {
    tx: mpsc::WeakUnboundedSender<UiEvent>,
}

impl ClickListener {
    /// Report a click. Returns `false` if the session has ended.
    pub fn clicked(&self, coords: Coords) -> bool {
        match self.tx.upgrade() {
            Some(tx) => tx.send(UiEvent::map_click(coords)).is_ok(),
            None => false,
        }
    }
}
