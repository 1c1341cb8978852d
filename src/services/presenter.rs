// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout → view data conversions for the map popup and the sidebar.

use crate::config::{Locale, PopupConfig};
use crate::models::{
    PopupContent, PopupOptions, SidebarSummary, SummaryDetail, Workout, WorkoutDetail,
};
use crate::number_format::{format_fixed1, format_number};

const DURATION_ICON: &str = "⏱";
const SPEED_ICON: &str = "📏⏱";
const PACE_ICON: &str = "👟⏱";
const CLIMB_ICON: &str = "🏔";

/// Build the marker popup for a workout.
pub fn popup_content(workout: &Workout, popup: &PopupConfig, locale: &Locale) -> PopupContent {
    let kind = workout.kind();
    PopupContent {
        text: format!("{} {}", locale.kind_label(kind), kind.icon()),
        options: PopupOptions {
            max_width: popup.max_width,
            min_width: popup.min_width,
            auto_close: popup.auto_close,
            close_on_click: popup.close_on_click,
            class_name: format!("{}-popup", kind.as_str()),
        },
    }
}

/// Build the sidebar card for a workout.
pub fn sidebar_summary(workout: &Workout, locale: &Locale) -> SidebarSummary {
    let kind = workout.kind();
    let mut details = vec![
        SummaryDetail::new(
            kind.icon(),
            format_number(workout.distance()),
            &locale.distance_unit,
        ),
        SummaryDetail::new(
            DURATION_ICON,
            format_number(workout.duration()),
            &locale.duration_unit,
        ),
    ];

    match workout.detail() {
        WorkoutDetail::Running { temp, pace } => {
            details.push(SummaryDetail::new(
                SPEED_ICON,
                format_fixed1(*temp),
                &locale.speed_unit,
            ));
            details.push(SummaryDetail::new(
                PACE_ICON,
                format_number(*pace),
                &locale.pace_unit,
            ));
        }
        WorkoutDetail::Cycling { climb, speed } => {
            details.push(SummaryDetail::new(
                SPEED_ICON,
                format_fixed1(*speed),
                &locale.speed_unit,
            ));
            details.push(SummaryDetail::new(
                CLIMB_ICON,
                format_fixed1(*climb),
                &locale.climb_unit,
            ));
        }
    }

    SidebarSummary {
        id: workout.id().to_string(),
        kind,
        title: workout.description().to_string(),
        details,
    }
}
