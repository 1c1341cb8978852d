// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recording collaborators shared by the integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use workout_tracker::config::PanAnimation;
use workout_tracker::models::{Coords, PopupContent, RawFormFields, SidebarSummary};
use workout_tracker::services::{
    ClickListener, Clock, Collaborators, FormIo, MapService, Notifier, SidebarRenderer, TileLayer,
};

/// Every collaborator call, in order.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Call {
    RenderAt(Coords, u8),
    ListenerAttached,
    PlaceMarker(Coords, PopupContent),
    Recenter(Coords, u8, PanAnimation),
    ShowForm,
    HideForm,
    ClearFields,
    FocusDistance,
    ToggleExtraField,
    AppendEntry(SidebarSummary),
    Alert(String),
}

/// Shared view of what the doubles recorded.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
    fields: Rc<RefCell<RawFormFields>>,
    listener: Rc<RefCell<Option<ClickListener>>>,
}

#[allow(dead_code)]
impl Recorder {
    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn markers(&self) -> Vec<(Coords, PopupContent)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::PlaceMarker(coords, popup) => Some((coords, popup)),
                _ => None,
            })
            .collect()
    }

    pub fn entries(&self) -> Vec<SidebarSummary> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::AppendEntry(summary) => Some(summary),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn recenters(&self) -> Vec<Coords> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Recenter(coords, _, _) => Some(coords),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Type values into the form.
    pub fn fill_form(&self, kind: &str, distance: &str, duration: &str, extra: &str) {
        let mut fields = self.fields.borrow_mut();
        fields.kind = kind.to_string();
        fields.distance = distance.to_string();
        fields.duration = duration.to_string();
        match kind {
            "running" => fields.temp = extra.to_string(),
            _ => fields.climb = extra.to_string(),
        }
    }

    pub fn form_fields(&self) -> RawFormFields {
        self.fields.borrow().clone()
    }

    /// Click the rendered map through the attached listener.
    pub fn click_map(&self, coords: Coords) -> bool {
        self.listener
            .borrow()
            .as_ref()
            .is_some_and(|listener| listener.clicked(coords))
    }

    /// Collaborators wired to this recorder, with a clock stepping 1 ms per call.
    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            map: Box::new(RecordingMap(self.clone())),
            form: Box::new(RecordingForm(self.clone())),
            sidebar: Box::new(RecordingSidebar(self.clone())),
            notifier: Box::new(RecordingNotifier(self.clone())),
            clock: Box::new(SteppingClock::new(start_time())),
        }
    }
}

/// Fixed start time for the stepping clock.
#[allow(dead_code)]
pub fn start_time() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_760_700_000_000).unwrap()
}

pub struct SteppingClock {
    next: Cell<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            next: Cell::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + Duration::milliseconds(1));
        now
    }
}

struct RecordingMap(Recorder);

impl MapService for RecordingMap {
    fn render_at(&mut self, coords: Coords, zoom: u8, _tiles: &TileLayer) {
        self.0.push(Call::RenderAt(coords, zoom));
    }

    fn on_user_click(&mut self, listener: ClickListener) {
        *self.0.listener.borrow_mut() = Some(listener);
        self.0.push(Call::ListenerAttached);
    }

    fn place_marker(&mut self, coords: Coords, popup: &PopupContent) {
        self.0.push(Call::PlaceMarker(coords, popup.clone()));
    }

    fn recenter(&mut self, coords: Coords, zoom: u8, pan: PanAnimation) {
        self.0.push(Call::Recenter(coords, zoom, pan));
    }
}

struct RecordingForm(Recorder);

impl FormIo for RecordingForm {
    fn read_fields(&self) -> RawFormFields {
        self.0.form_fields()
    }

    fn show(&mut self) {
        self.0.push(Call::ShowForm);
    }

    fn hide(&mut self) {
        self.0.push(Call::HideForm);
    }

    fn clear_fields(&mut self) {
        let mut fields = self.0.fields.borrow_mut();
        fields.distance.clear();
        fields.duration.clear();
        fields.temp.clear();
        fields.climb.clear();
        drop(fields);
        self.0.push(Call::ClearFields);
    }

    fn focus_distance_field(&mut self) {
        self.0.push(Call::FocusDistance);
    }

    fn toggle_extra_field_visibility(&mut self) {
        self.0.push(Call::ToggleExtraField);
    }
}

struct RecordingSidebar(Recorder);

impl SidebarRenderer for RecordingSidebar {
    fn append_entry(&mut self, summary: SidebarSummary) {
        self.0.push(Call::AppendEntry(summary));
    }
}

struct RecordingNotifier(Recorder);

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.0.push(Call::Alert(message.to_string()));
    }
}
