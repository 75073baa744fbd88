//! UI Components
//!
//! Reusable Leptos components for the logging views.

pub mod banner;
pub mod nav;
pub mod record_log;

pub use banner::{Banner, BannerVariant};
pub use nav::Nav;
pub use record_log::record_log;
