//! Baby Tracker Web App
//!
//! Client-side rendered Leptos application compiled to WebAssembly.
//!
//! # Features
//!
//! - Log feeds, sleep, growth measurements and diaper changes
//! - Quick-fill buttons for the most common entries
//! - Ten most recent entries per view, newest first
//!
//! # Architecture
//!
//! Records, forms and the logging workflow live in the `babytracker` core
//! crate. This crate renders them and supplies a browser transport built on
//! `gloo-net`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
