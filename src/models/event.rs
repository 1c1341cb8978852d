// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UI events fed to the coordinator.

use crate::models::Coords;
use serde::{Deserialize, Serialize};

/// Raw form values, exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFormFields {
    /// `running` or `cycling`
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub temp: String,
    pub climb: String,
}

impl RawFormFields {
    /// Value of the kind-specific field for the selected kind.
    ///
    /// Unknown kinds have no extra field; the factory rejects them anyway.
    pub fn extra_metric(&self) -> &str {
        match self.kind.as_str() {
            "running" => &self.temp,
            "cycling" => &self.climb,
            _ => "",
        }
    }
}

/// An externally triggered interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// The map was clicked at a position.
    MapClick { lat: f64, lng: f64 },
    /// The activity kind select changed.
    KindChanged,
    /// The form was submitted. Hosts that read the form themselves may carry
    /// the submitted values here; the coordinator reads them via `FormIo`.
    Submit {
        #[serde(default)]
        fields: Option<RawFormFields>,
    },
    /// A sidebar click; `id` is `None` when the click landed outside any entry.
    SidebarClick {
        #[serde(default)]
        id: Option<String>,
    },
}

impl UiEvent {
    pub fn map_click(coords: Coords) -> Self {
        UiEvent::MapClick {
            lat: coords.lat,
            lng: coords.lng,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::MapClick { .. } => "map_click",
            UiEvent::KindChanged => "kind_changed",
            UiEvent::Submit { .. } => "submit",
            UiEvent::SidebarClick { .. } => "sidebar_click",
        }
    }
}
