//! Growth Measurements

use serde::{Deserialize, Serialize};

use super::{whole_as_integer, Labels, RecordKind, Summary};
use crate::form::{FieldKind, FieldSpec, Form, FormError};

/// Weight, height and head circumference taken on one day.
///
/// Each measurement is optional; zero means it was not taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthMeasurement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub date: String,
    /// kg
    #[serde(default, serialize_with = "whole_as_integer")]
    pub weight: f64,
    /// cm
    #[serde(default, serialize_with = "whole_as_integer")]
    pub height: f64,
    /// cm
    #[serde(default, serialize_with = "whole_as_integer")]
    pub head_circ: f64,
    #[serde(default)]
    pub notes: String,
}

impl GrowthMeasurement {
    pub fn has_weight(&self) -> bool {
        self.weight > 0.0
    }

    pub fn has_height(&self) -> bool {
        self.height > 0.0
    }

    pub fn has_head_circ(&self) -> bool {
        self.head_circ > 0.0
    }
}

impl RecordKind for GrowthMeasurement {
    const COLLECTION: &'static str = "/growth";

    const LABELS: Labels = Labels {
        heading: "Log Growth",
        submit: "Log Growth",
        recent_heading: "Recent Measurements",
        empty: "No growth measurements logged yet.",
    };

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("date", "Date", FieldKind::Date).required(),
        FieldSpec::new("weight", "Weight (kg)", FieldKind::Number { step: "0.01" })
            .placeholder("kg"),
        FieldSpec::new("height", "Height (cm)", FieldKind::Number { step: "0.1" })
            .placeholder("cm"),
        FieldSpec::new(
            "head_circ",
            "Head Circumference (cm)",
            FieldKind::Number { step: "0.1" },
        )
        .placeholder("cm"),
        FieldSpec::new("notes", "Notes", FieldKind::Text).placeholder("Growth observations..."),
    ];

    fn compose(form: &Form) -> Result<Self, FormError> {
        Ok(Self {
            id: None,
            date: form.text("date"),
            weight: form.number("weight")?,
            height: form.number("height")?,
            head_circ: form.number("head_circ")?,
            notes: form.text("notes"),
        })
    }

    fn feedback(form: &Form) -> String {
        format!("Growth logged for {}", form.text("date"))
    }

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn summarize(&self) -> Summary {
        let mut summary = Summary::new(self.date.as_str());
        if self.has_weight() {
            summary.push(format!(" - {} kg", self.weight));
        }
        if self.has_height() {
            summary.push(format!(" - {} cm", self.height));
        }
        if self.has_head_circ() {
            summary.push(format!(" - Head: {} cm", self.head_circ));
        }
        summary.push_notes(&self.notes);
        summary
    }
}
