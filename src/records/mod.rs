//! Record Kinds
//!
//! The four record kinds the client logs, plus the [`RecordKind`] trait that
//! parameterizes the generic record-logging workflow.
//!
//! ## Kinds
//!
//! - [`Feed`]: bottle, breast and solid feeds (`/feeds`)
//! - [`SleepSession`]: naps and night sleep (`/sleep`)
//! - [`GrowthMeasurement`]: weight, height, head circumference (`/growth`)
//! - [`DiaperChange`]: wet, dirty and mixed changes (`/diapers`)

mod diaper;
mod feed;
mod growth;
mod sleep;

pub use diaper::{DiaperChange, DiaperType};
pub use feed::{Feed, FeedType};
pub use growth::GrowthMeasurement;
pub use sleep::{SleepQuality, SleepSession, SleepType};

use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

use crate::form::{FieldSpec, Form, FormError, QuickFill};

/// A value that is not one of a choice field's options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown choice: {0}")]
pub struct UnknownChoice(pub String);

/// Declares a closed set of choices whose wire strings double as labels.
macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Wire strings in display order
            pub const OPTIONS: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::records::UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err($crate::records::UnknownChoice(other.to_string())),
                }
            }
        }
    };
}

pub(crate) use choice_enum;

/// Static text shown around a workflow's form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Form heading
    pub heading: &'static str,
    /// Submit button text
    pub submit: &'static str,
    /// Heading above the recents list
    pub recent_heading: &'static str,
    /// Shown when the recents list is empty
    pub empty: &'static str,
}

/// One rendered line of a recents list: an emphasized headline and the rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub headline: String,
    pub detail: String,
}

impl Summary {
    fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            detail: String::new(),
        }
    }

    fn push(&mut self, part: impl AsRef<str>) {
        self.detail.push_str(part.as_ref());
    }

    fn push_notes(&mut self, notes: &str) {
        if !notes.is_empty() {
            self.push(format!(" - {}", notes));
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.headline, self.detail)
    }
}

/// A record kind the workflow can log.
///
/// Implementors describe everything that differs between the four forms:
/// where they live on the API, which fields they show, how the form values
/// become a payload, and how created records are summarized.
pub trait RecordKind: Serialize + DeserializeOwned + Clone + fmt::Debug + 'static {
    /// Collection path on the API, e.g. `/feeds`
    const COLLECTION: &'static str;

    const LABELS: Labels;

    /// Form fields in display order
    const FIELDS: &'static [FieldSpec];

    /// Shortcut buttons that pre-select a choice and restamp date/time
    const QUICK_FILLS: &'static [QuickFill] = &[];

    /// Build the payload from an already validated form
    fn compose(form: &Form) -> Result<Self, FormError>;

    /// Success message for a form that was just logged
    fn feedback(form: &Form) -> String;

    /// Server-assigned identifier, absent until created
    fn id(&self) -> Option<u64>;

    fn summarize(&self) -> Summary;
}

/// Combine a date field and a time field into the wire's date+time form.
///
/// Minute-precision times gain `:00` seconds; anything else is kept verbatim.
pub(crate) fn combine_date_time(date: &str, time: &str, pad_seconds: bool) -> String {
    if pad_seconds && time.matches(':').count() == 1 {
        format!("{}T{}:00", date, time)
    } else {
        format!("{}T{}", date, time)
    }
}

/// Serialize whole amounts as JSON integers (`120`, not `120.0`)
pub(crate) fn whole_as_integer<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if value.fract() == 0.0 && value.abs() < MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Deserialize the server's zero value (`""` or null) as `None`
pub(crate) fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => T::deserialize(s.into_deserializer()).map(Some),
        _ => Ok(None),
    }
}

/// Deserialize the server's zero time (`0001-01-01T00:00:00Z`) as `None`
pub(crate) fn unset_time_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = blank_as_none(deserializer)?;
    Ok(value.filter(|t| !t.starts_with("0001-01-01")))
}
