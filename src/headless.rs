// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Headless collaborators that report every call as a structured log event.
//!
//! Used by the binary to drive a session without a browser.

use crate::config::PanAnimation;
use crate::error::Result;
use crate::models::{Coords, PopupContent, RawFormFields, SidebarSummary, UiEvent};
use crate::services::{
    ClickListener, EventSink, FormIo, GeolocationError, GeolocationService, MapService, Notifier,
    PositionRequest, SidebarRenderer, TileLayer,
};
use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Geolocation with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct StaticGeolocation {
    result: std::result::Result<Coords, GeolocationError>,
}

impl StaticGeolocation {
    pub fn at(coords: Coords) -> Self {
        Self { result: Ok(coords) }
    }

    pub fn failing(error: GeolocationError) -> Self {
        Self { result: Err(error) }
    }
}

impl GeolocationService for StaticGeolocation {
    fn request_current_position(&self) -> PositionRequest {
        PositionRequest::ready(self.result)
    }
}

/// Map that logs what it would draw.
///
/// Clicks come from the host's event feed, so the listener is not kept.
#[derive(Debug, Default)]
pub struct LoggingMap;

impl MapService for LoggingMap {
    fn render_at(&mut self, coords: Coords, zoom: u8, tiles: &TileLayer) {
        tracing::info!(%coords, zoom, tiles = %tiles.url, "render_at");
    }

    fn on_user_click(&mut self, _listener: ClickListener) {
        tracing::debug!("Click listener attached");
    }

    fn place_marker(&mut self, coords: Coords, popup: &PopupContent) {
        tracing::info!(
            %coords,
            popup = %popup.text,
            class = %popup.options.class_name,
            "place_marker"
        );
    }

    fn recenter(&mut self, coords: Coords, zoom: u8, pan: PanAnimation) {
        tracing::info!(
            %coords,
            zoom,
            animate = pan.animate,
            duration_secs = pan.duration_secs,
            "recenter"
        );
    }
}

/// Form whose fields only arrive with submit events.
#[derive(Debug, Default)]
pub struct LoggingForm {
    visible: bool,
}

impl FormIo for LoggingForm {
    fn read_fields(&self) -> RawFormFields {
        RawFormFields::default()
    }

    fn show(&mut self) {
        self.visible = true;
        tracing::debug!("show");
    }

    fn hide(&mut self) {
        self.visible = false;
        tracing::debug!("hide");
    }

    fn clear_fields(&mut self) {
        tracing::debug!(visible = self.visible, "clear_fields");
    }

    fn focus_distance_field(&mut self) {
        tracing::debug!("focus_distance_field");
    }

    fn toggle_extra_field_visibility(&mut self) {
        tracing::debug!("toggle_extra_field_visibility");
    }
}

/// Sidebar that logs each entry as JSON.
#[derive(Debug, Default)]
pub struct LoggingSidebar;

impl SidebarRenderer for LoggingSidebar {
    fn append_entry(&mut self, summary: SidebarSummary) {
        match serde_json::to_string(&summary) {
            Ok(json) => tracing::info!(entry = %json, "append_entry"),
            Err(e) => tracing::error!(error = %e, "Failed to encode entry"),
        }
    }
}

/// Alerts go to the log at warn level.
#[derive(Debug, Default)]
pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn alert(&mut self, message: &str) {
        tracing::warn!(text = message, "alert");
    }
}

/// Forward newline-delimited JSON events until end of input.
///
/// Blank and malformed lines are skipped. Stops early once the session has
/// ended. Returns the number of events forwarded; read failures surface as
/// [`AppError::Internal`](crate::error::AppError::Internal).
pub async fn feed_events<R>(reader: R, sink: &EventSink) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut line_no = 0usize;
    let mut forwarded = 0usize;

    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("Failed to read event line {}", line_no + 1))?
    {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<UiEvent>(&line) {
            Ok(event) => {
                if !sink.send(event) {
                    tracing::debug!(line = line_no, "Session ended, stopping event feed");
                    break;
                }
                forwarded += 1;
            }
            Err(e) => tracing::warn!(line = line_no, error = %e, "Skipping malformed event"),
        }
    }
    Ok(forwarded)
}
