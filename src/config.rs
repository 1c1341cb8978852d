// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration.
//!
//! Everything here is compiled in: tile source, zoom levels, popup sizing and
//! the user-facing strings. There is no environment or file overlay.

use crate::models::WorkoutKind;

/// Application configuration, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub map: MapConfig,
    pub popup: PopupConfig,
    pub locale: Locale,
}

impl Config {
    /// Default configuration with a different locale.
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }
}

/// Map view and tile settings.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Tile URL template handed to the map widget
    pub tile_url: String,
    /// Attribution shown alongside the tiles
    pub attribution: String,
    /// Zoom level used when the map is first rendered
    pub initial_zoom: u8,
    /// Zoom level used when recentering on a workout
    pub focus_zoom: u8,
    /// Pan animation used when recentering
    pub pan: PanAnimation,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://tiles.stadiamaps.com/tiles/alidade_smooth_dark/{z}/{x}/{y}{r}.png"
                .to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
            initial_zoom: 13,
            focus_zoom: 15,
            pan: PanAnimation::default(),
        }
    }
}

/// Animation options for moving the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanAnimation {
    pub animate: bool,
    pub duration_secs: f64,
}

impl Default for PanAnimation {
    fn default() -> Self {
        Self {
            animate: true,
            duration_secs: 1.0,
        }
    }
}

/// Marker popup sizing and behaviour.
#[derive(Debug, Clone, Copy)]
pub struct PopupConfig {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            max_width: 200,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// User-facing strings and formats.
#[derive(Debug, Clone)]
pub struct Locale {
    pub running_label: String,
    pub cycling_label: String,
    /// chrono `strftime` pattern for workout dates
    pub date_pattern: String,
    pub distance_unit: String,
    pub duration_unit: String,
    pub speed_unit: String,
    pub pace_unit: String,
    pub climb_unit: String,
    /// Alert shown when a submitted form fails validation
    pub invalid_input_message: String,
    /// Alert shown when the current position cannot be determined
    pub location_unavailable_message: String,
}

impl Locale {
    /// Ukrainian strings (the default).
    pub fn ukrainian() -> Self {
        Self {
            running_label: "Пробіжка".to_string(),
            cycling_label: "Вело".to_string(),
            date_pattern: "%d.%m.%Y".to_string(),
            distance_unit: "км".to_string(),
            duration_unit: "хв".to_string(),
            speed_unit: "км/год".to_string(),
            pace_unit: "крок/хв".to_string(),
            climb_unit: "м".to_string(),
            invalid_input_message: "Choose correct answer".to_string(),
            location_unavailable_message: "Неможливо получити ваше місцезнаходження".to_string(),
        }
    }

    /// US English strings.
    pub fn english() -> Self {
        Self {
            running_label: "Running".to_string(),
            cycling_label: "Cycling".to_string(),
            date_pattern: "%m/%d/%Y".to_string(),
            distance_unit: "km".to_string(),
            duration_unit: "min".to_string(),
            speed_unit: "km/h".to_string(),
            pace_unit: "spm".to_string(),
            climb_unit: "m".to_string(),
            invalid_input_message: "Inputs have to be positive numbers".to_string(),
            location_unavailable_message: "Could not get your position".to_string(),
        }
    }

    /// Label for a workout kind.
    pub fn kind_label(&self, kind: WorkoutKind) -> &str {
        match kind {
            WorkoutKind::Running => &self.running_label,
            WorkoutKind::Cycling => &self.cycling_label,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ukrainian()
    }
}
