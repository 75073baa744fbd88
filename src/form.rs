//! Form Schema
//!
//! Field specifications and the string-valued form state shared by every
//! record-logging workflow. Values are kept as entered, the way an HTML form
//! holds them, and only parsed when a payload is composed.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What kind of input a field is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Pick one of a fixed set of wire strings
    Choice(&'static [&'static str]),
    /// Calendar date, defaults to today
    Date,
    /// Time of day, defaults to now when required and blank otherwise
    Time { with_seconds: bool },
    /// Non-negative number, blank means zero
    Number { step: &'static str },
    /// Free text
    Text,
}

/// A single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used in the form state
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: "",
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder,
            ..self
        }
    }

    /// Default value for a fresh form opened at `now`
    fn default_value(&self, now: NaiveDateTime) -> String {
        match self.kind {
            FieldKind::Date => now.format(DATE_FORMAT).to_string(),
            FieldKind::Time { with_seconds } if self.required => format_time(now, with_seconds),
            _ => String::new(),
        }
    }

    /// Whether quick-fill refreshes this field to the current moment
    fn is_stamped(&self) -> bool {
        match self.kind {
            FieldKind::Date => true,
            FieldKind::Time { .. } => self.required,
            _ => false,
        }
    }

    fn check(&self, value: &str) -> Result<(), FormError> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required {
                Err(FormError::Missing(self.label))
            } else {
                Ok(())
            };
        }

        let valid = match self.kind {
            FieldKind::Choice(options) => options.contains(&value),
            FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok(),
            FieldKind::Time { .. } => parse_time(value).is_some(),
            FieldKind::Number { .. } => value
                .parse::<f64>()
                .map(|n| n.is_finite() && n >= 0.0)
                .unwrap_or(false),
            FieldKind::Text => true,
        };

        if valid {
            Ok(())
        } else {
            Err(FormError::Invalid(self.label))
        }
    }
}

/// A shortcut that pre-selects a choice without submitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickFill {
    /// Short key, e.g. `bottle`
    pub key: &'static str,
    /// Button text
    pub label: &'static str,
    /// Choice field it sets
    pub field: &'static str,
    pub value: &'static str,
}

/// Reasons a form cannot be submitted or edited.
///
/// These stand in for the browser's native constraint validation: none of
/// them ever results in a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} is not valid")]
    Invalid(&'static str),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown quick fill: {0}")]
    UnknownQuickFill(String),

    #[error("A submission is already in progress")]
    Busy,
}

/// Current values of a form, one string per field
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    fields: &'static [FieldSpec],
    values: Vec<String>,
}

impl Form {
    /// A form with every field at its default for `now`
    pub fn blank(fields: &'static [FieldSpec], now: NaiveDateTime) -> Self {
        Self {
            fields,
            values: fields.iter().map(|f| f.default_value(now)).collect(),
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    fn index(&self, name: &str) -> Result<usize, FormError> {
        self.fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Current value of a field; empty for unknown names
    pub fn value(&self, name: &str) -> &str {
        self.index(name)
            .map(|i| self.values[i].as_str())
            .unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let i = self.index(name)?;
        self.values[i] = value.into();
        Ok(())
    }

    /// Refresh date and required time fields to `now`
    pub fn stamp(&mut self, now: NaiveDateTime) {
        for (spec, value) in self.fields.iter().zip(self.values.iter_mut()) {
            if spec.is_stamped() {
                *value = spec.default_value(now);
            }
        }
    }

    /// Check every field against its constraints, first failure wins
    pub fn validate(&self) -> Result<(), FormError> {
        self.fields
            .iter()
            .zip(&self.values)
            .try_for_each(|(spec, value)| spec.check(value))
    }

    /// Trimmed text value
    pub fn text(&self, name: &str) -> String {
        self.value(name).trim().to_string()
    }

    /// Numeric value, zero when blank
    pub fn number(&self, name: &str) -> Result<f64, FormError> {
        let raw = self.value(name).trim();
        if raw.is_empty() {
            return Ok(0.0);
        }
        raw.parse()
            .map_err(|_| FormError::Invalid(self.label(name)))
    }

    /// Parsed choice, `None` when nothing is selected
    pub fn optional_choice<T: FromStr>(&self, name: &str) -> Result<Option<T>, FormError> {
        let raw = self.value(name).trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse()
            .map(Some)
            .map_err(|_| FormError::Invalid(self.label(name)))
    }

    /// Parsed choice that must be selected
    pub fn choice<T: FromStr>(&self, name: &str) -> Result<T, FormError> {
        self.optional_choice(name)?
            .ok_or_else(|| FormError::Missing(self.label(name)))
    }

    fn label(&self, name: &str) -> &'static str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.label)
            .unwrap_or("Field")
    }
}

/// Current local date and time
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn format_time(now: NaiveDateTime, with_seconds: bool) -> String {
    if with_seconds {
        now.format("%H:%M:%S").to_string()
    } else {
        now.format("%H:%M").to_string()
    }
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::new("type", "Type", FieldKind::Choice(&["A", "B"])).required(),
        FieldSpec::new("date", "Date", FieldKind::Date).required(),
        FieldSpec::new("time", "Time", FieldKind::Time { with_seconds: true }).required(),
        FieldSpec::new("until", "Until", FieldKind::Time { with_seconds: false }),
        FieldSpec::new("amount", "Amount", FieldKind::Number { step: "any" }),
        FieldSpec::new("notes", "Notes", FieldKind::Text).placeholder("Anything?"),
    ];

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_blank_defaults() {
        let form = Form::blank(FIELDS, at(2024, 1, 15, 8, 30, 5));
        assert_eq!(form.value("type"), "");
        assert_eq!(form.value("date"), "2024-01-15");
        assert_eq!(form.value("time"), "08:30:05");
        assert_eq!(form.value("until"), "");
        assert_eq!(form.value("amount"), "");
        assert_eq!(form.value("notes"), "");
    }

    #[test]
    fn test_required_choice() {
        let mut form = Form::blank(FIELDS, at(2024, 1, 15, 8, 30, 0));
        assert_eq!(form.validate(), Err(FormError::Missing("Type")));

        form.set("type", "C").unwrap();
        assert_eq!(form.validate(), Err(FormError::Invalid("Type")));

        form.set("type", "B").unwrap();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_date_and_number() {
        let mut form = Form::blank(FIELDS, at(2024, 1, 15, 8, 30, 0));
        form.set("type", "A").unwrap();

        form.set("date", "2024-02-30").unwrap();
        assert_eq!(form.validate(), Err(FormError::Invalid("Date")));

        form.set("date", "2024-02-29").unwrap();
        form.set("amount", "-1").unwrap();
        assert_eq!(form.validate(), Err(FormError::Invalid("Amount")));

        form.set("amount", "").unwrap();
        assert_eq!(form.number("amount"), Ok(0.0));
    }

    #[test]
    fn test_unknown_field() {
        let mut form = Form::blank(FIELDS, at(2024, 1, 15, 8, 30, 0));
        assert_eq!(
            form.set("colour", "red"),
            Err(FormError::UnknownField("colour".to_string()))
        );
        assert_eq!(form.value("colour"), "");
    }

    #[test]
    fn test_stamp_skips_optional_times() {
        let mut form = Form::blank(FIELDS, at(2024, 1, 15, 8, 30, 0));
        form.set("until", "10:00").unwrap();
        form.set("amount", "4").unwrap();

        form.stamp(at(2024, 1, 16, 9, 45, 12));
        assert_eq!(form.value("date"), "2024-01-16");
        assert_eq!(form.value("time"), "09:45:12");
        assert_eq!(form.value("until"), "10:00");
        assert_eq!(form.value("amount"), "4");
    }
}
