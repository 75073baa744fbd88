//! Record-Logging Workflow
//!
//! One generic state machine behind all four logging forms.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Logged (feedback, form reset, recents reloaded)
//!                             └─err─▶ Failed (error, form untouched)
//! ```
//!
//! The state machine is split into synchronous steps ([`Workflow::begin_submit`],
//! [`Workflow::finish_submit`], [`Workflow::apply_recents`]) so reactive UIs can
//! drive it between awaits, plus async drivers ([`Workflow::submit`],
//! [`Workflow::load_recents`]) for callers that own the state outright.
//!
//! Reads are best effort: a failed load leaves the recents list as it was and
//! is only logged. Writes report their error message to the user.

use chrono::NaiveDateTime;
use std::time::Duration;

use crate::form::{local_now, Form, FormError, QuickFill};
use crate::records::RecordKind;
use crate::transport::{self, RequestError, Transport};

/// How many records the recents list shows
pub const RECENT_LIMIT: usize = 10;

/// How long a success message stays up, in milliseconds for browser timers
pub const FEEDBACK_TTL_MS: u32 = 3_000;

/// How long a success message stays up
pub const FEEDBACK_TTL: Duration = Duration::from_millis(FEEDBACK_TTL_MS as u64);

/// Where a workflow is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    /// Showing a success message
    Logged,
    /// Showing an error message
    Failed,
}

/// A submission that has passed validation and is waiting on the API
#[derive(Debug, Clone)]
pub struct PendingSubmit<K> {
    record: K,
    feedback: String,
}

impl<K> PendingSubmit<K> {
    /// Payload to send
    pub fn record(&self) -> &K {
        &self.record
    }
}

/// What happened to a finished submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Created. Recents should be reloaded and the feedback cleared after
    /// [`FEEDBACK_TTL`] via [`Workflow::clear_feedback`] with this generation.
    Logged { generation: u64 },
    /// The API refused or was unreachable
    Failed,
}

/// State of one logging form
#[derive(Debug, Clone)]
pub struct Workflow<K: RecordKind> {
    form: Form,
    feedback: Option<String>,
    error: Option<String>,
    in_flight: bool,
    recents: Vec<K>,
    generation: u64,
    clock: fn() -> NaiveDateTime,
}

impl<K: RecordKind> Default for Workflow<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RecordKind> Workflow<K> {
    pub fn new() -> Self {
        Self::with_clock(local_now)
    }

    /// A workflow whose defaults come from `clock` instead of the local time
    pub fn with_clock(clock: fn() -> NaiveDateTime) -> Self {
        Self {
            form: Form::blank(K::FIELDS, clock()),
            feedback: None,
            error: None,
            in_flight: false,
            recents: Vec::new(),
            generation: 0,
            clock,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.form.set(name, value)
    }

    pub fn quick_fills(&self) -> &'static [QuickFill] {
        K::QUICK_FILLS
    }

    /// Apply a quick-fill preset: select its choice and restamp date/time.
    /// Never submits.
    pub fn quick_fill(&mut self, key: &str) -> Result<(), FormError> {
        let preset = K::QUICK_FILLS
            .iter()
            .find(|q| q.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| FormError::UnknownQuickFill(key.to_string()))?;

        self.form.set(preset.field, preset.value)?;
        self.form.stamp((self.clock)());
        Ok(())
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Most recent records, newest first
    pub fn recents(&self) -> &[K] {
        &self.recents
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight {
            Phase::Submitting
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.feedback.is_some() {
            Phase::Logged
        } else {
            Phase::Idle
        }
    }

    /// Take the result of listing the collection.
    ///
    /// Keeps the last [`RECENT_LIMIT`] records in server order, newest first.
    /// A failure leaves the list untouched.
    pub fn apply_recents(&mut self, result: Result<Vec<K>, RequestError>) {
        match result {
            Ok(mut records) => {
                let start = records.len().saturating_sub(RECENT_LIMIT);
                records.drain(..start);
                records.reverse();
                self.recents = records;
            }
            Err(e) => {
                tracing::warn!(collection = K::COLLECTION, error = %e, "Could not load recent records");
            }
        }
    }

    /// Validate the form and move to `Submitting`.
    ///
    /// On error nothing changes and no request should be made.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit<K>, FormError> {
        if self.in_flight {
            return Err(FormError::Busy);
        }

        self.form.validate()?;
        let record = K::compose(&self.form)?;
        let feedback = K::feedback(&self.form);

        self.error = None;
        self.feedback = None;
        self.in_flight = true;

        Ok(PendingSubmit { record, feedback })
    }

    /// Record how the creation request ended
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmit<K>,
        result: Result<K, RequestError>,
    ) -> SubmitOutcome {
        self.in_flight = false;

        match result {
            Ok(created) => {
                tracing::info!(
                    collection = K::COLLECTION,
                    id = ?created.id(),
                    "Record logged"
                );
                self.generation += 1;
                self.feedback = Some(pending.feedback);
                self.form = Form::blank(K::FIELDS, (self.clock)());
                SubmitOutcome::Logged {
                    generation: self.generation,
                }
            }
            Err(e) => {
                self.error = Some(e.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Clear the success message set by submission `generation`.
    ///
    /// Returns false when a newer submission has replaced it.
    pub fn clear_feedback(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.feedback.is_some() {
            self.feedback = None;
            true
        } else {
            false
        }
    }

    /// Fetch the collection and refresh the recents list
    pub async fn load_recents<T>(&mut self, transport: &T)
    where
        T: Transport + ?Sized,
    {
        let result = transport::list::<K, T>(transport).await;
        self.apply_recents(result);
    }

    /// Submit the form and, once the record is created, reload recents
    pub async fn submit<T>(&mut self, transport: &T) -> Result<SubmitOutcome, FormError>
    where
        T: Transport + ?Sized,
    {
        let pending = self.begin_submit()?;
        let result = transport::create(transport, pending.record()).await;
        let outcome = self.finish_submit(pending, result);

        if let SubmitOutcome::Logged { .. } = outcome {
            self.load_recents(transport).await;
        }

        Ok(outcome)
    }
}
