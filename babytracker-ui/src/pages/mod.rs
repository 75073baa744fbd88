//! Pages
//!
//! One logging view per route.

use babytracker::{DiaperChange, Feed, GrowthMeasurement, SleepSession};
use leptos::*;

use crate::components::record_log;

#[component]
pub fn Feeds() -> impl IntoView {
    record_log::<Feed>()
}

#[component]
pub fn Sleep() -> impl IntoView {
    record_log::<SleepSession>()
}

#[component]
pub fn Growth() -> impl IntoView {
    record_log::<GrowthMeasurement>()
}

/// Diaper changes
#[component]
pub fn SusuPoty() -> impl IntoView {
    record_log::<DiaperChange>()
}
