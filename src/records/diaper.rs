//! Diaper Changes

use serde::{Deserialize, Serialize};

use super::{choice_enum, combine_date_time, Labels, RecordKind, Summary};
use crate::form::{FieldKind, FieldSpec, Form, FormError, QuickFill};

choice_enum! {
    DiaperType {
        Wet => "Wet",
        Dirty => "Dirty",
        Mixed => "Mixed",
    }
}

/// A single diaper change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaperChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub diaper_type: DiaperType,
    #[serde(default)]
    pub notes: String,
}

impl RecordKind for DiaperChange {
    const COLLECTION: &'static str = "/diapers";

    const LABELS: Labels = Labels {
        heading: "The Susu-Poty Chronicles",
        submit: "Log Change",
        recent_heading: "Recent Changes",
        empty: "No diaper changes logged yet.",
    };

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("type", "Diaper Type", FieldKind::Choice(DiaperType::OPTIONS))
            .required()
            .placeholder("Select type..."),
        FieldSpec::new("date", "Date", FieldKind::Date).required(),
        FieldSpec::new("time", "Time", FieldKind::Time { with_seconds: true }).required(),
        FieldSpec::new("notes", "Notes", FieldKind::Text).placeholder("Any observations..."),
    ];

    const QUICK_FILLS: &'static [QuickFill] = &[
        QuickFill {
            key: "wet",
            label: "Quick Wet",
            field: "type",
            value: "Wet",
        },
        QuickFill {
            key: "dirty",
            label: "Quick Dirty",
            field: "type",
            value: "Dirty",
        },
    ];

    fn compose(form: &Form) -> Result<Self, FormError> {
        let date = form.text("date");
        Ok(Self {
            id: None,
            time: combine_date_time(&date, &form.text("time"), false),
            date,
            diaper_type: form.choice("type")?,
            notes: form.text("notes"),
        })
    }

    fn feedback(form: &Form) -> String {
        format!(
            "Diaper change logged: {} on {}",
            form.text("type"),
            form.text("date")
        )
    }

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn summarize(&self) -> Summary {
        let mut summary = Summary::new(self.diaper_type.as_str());
        summary.push(format!(" on {}", self.date));
        summary.push_notes(&self.notes);
        summary
    }
}
