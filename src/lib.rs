//! # Baby Tracker
//!
//! Client for the Baby Tracker REST API: log feeds, sleep sessions, growth
//! measurements and diaper changes, and see the most recent entries of each.
//!
//! ## Modules
//!
//! - [`records`]: the four record kinds and their wire formats
//! - [`form`]: field specifications and form state
//! - [`workflow`]: the generic record-logging state machine
//! - [`transport`]: the HTTP seam and typed list/create/get calls
//! - [`routes`] and [`shell`]: navigation between the four views
//! - [`config`] and [`logging`]: ambient setup for the terminal client
//!   (feature `native`)
//!
//! The core builds without the `native` feature so the browser app can
//! supply its own [`Transport`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use babytracker::records::Feed;
//! use babytracker::{HttpTransport, Workflow};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::new("http://localhost:8080/api");
//!
//!     let mut feeds: Workflow<Feed> = Workflow::new();
//!     feeds.load_recents(&transport).await;
//!
//!     feeds.quick_fill("bottle")?;
//!     feeds.set_field("quantity", "120")?;
//!     feeds.submit(&transport).await?;
//!
//!     if let Some(message) = feeds.feedback() {
//!         println!("{}", message);
//!     }
//!     Ok(())
//! }
//! ```

pub mod form;
pub mod records;
pub mod routes;
pub mod shell;
pub mod transport;
pub mod workflow;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

pub use form::{FieldKind, FieldSpec, Form, FormError, QuickFill};
pub use records::{
    DiaperChange, DiaperType, Feed, FeedType, GrowthMeasurement, Labels, RecordKind,
    SleepQuality, SleepSession, SleepType, Summary,
};
pub use routes::{resolve, Navigation, Route};
pub use shell::{Screen, Shell};
pub use transport::{RequestError, Transport};
pub use workflow::{
    Phase, PendingSubmit, SubmitOutcome, Workflow, FEEDBACK_TTL, FEEDBACK_TTL_MS,
    RECENT_LIMIT,
};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
#[cfg(feature = "native")]
pub use transport::HttpTransport;
