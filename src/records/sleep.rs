//! Sleep Sessions

use serde::{Deserialize, Serialize};

use super::{blank_as_none, choice_enum, combine_date_time, unset_time_as_none};
use super::{Labels, RecordKind, Summary};
use crate::form::{FieldKind, FieldSpec, Form, FormError};

choice_enum! {
    SleepType {
        Nap => "Nap",
        Night => "Night",
    }
}

choice_enum! {
    SleepQuality {
        Good => "Good",
        Fair => "Fair",
        Poor => "Poor",
    }
}

/// A nap or a night's sleep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub date: String,
    pub start_time: String,
    /// Left out of the payload while the baby is still asleep
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "unset_time_as_none"
    )]
    pub end_time: Option<String>,
    #[serde(rename = "type")]
    pub sleep_type: SleepType,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub quality: Option<SleepQuality>,
    #[serde(default)]
    pub notes: String,
}

impl RecordKind for SleepSession {
    const COLLECTION: &'static str = "/sleep";

    const LABELS: Labels = Labels {
        heading: "Log Sleep",
        submit: "Log Sleep",
        recent_heading: "Recent Sleep",
        empty: "No sleep entries logged yet.",
    };

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("type", "Sleep Type", FieldKind::Choice(SleepType::OPTIONS))
            .required()
            .placeholder("Select type..."),
        FieldSpec::new("date", "Date", FieldKind::Date).required(),
        FieldSpec::new("start_time", "Start Time", FieldKind::Time { with_seconds: false })
            .required(),
        FieldSpec::new(
            "end_time",
            "End Time (optional)",
            FieldKind::Time { with_seconds: false },
        ),
        FieldSpec::new("quality", "Quality", FieldKind::Choice(SleepQuality::OPTIONS))
            .placeholder("Select quality..."),
        FieldSpec::new("notes", "Notes", FieldKind::Text).placeholder("Sleep observations..."),
    ];

    fn compose(form: &Form) -> Result<Self, FormError> {
        let date = form.text("date");
        let end = form.text("end_time");
        Ok(Self {
            id: None,
            start_time: combine_date_time(&date, &form.text("start_time"), true),
            end_time: (!end.is_empty()).then(|| combine_date_time(&date, &end, true)),
            date,
            sleep_type: form.choice("type")?,
            quality: form.optional_choice("quality")?,
            notes: form.text("notes"),
        })
    }

    fn feedback(form: &Form) -> String {
        format!("Sleep logged: {} on {}", form.text("type"), form.text("date"))
    }

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn summarize(&self) -> Summary {
        let mut summary = Summary::new(self.sleep_type.as_str());
        summary.push(format!(" on {}", self.date));
        if let Some(quality) = self.quality {
            summary.push(format!(" - Quality: {}", quality));
        }
        summary.push_notes(&self.notes);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form() -> Form {
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(13, 5, 0)
            .unwrap();
        let mut form = Form::blank(SleepSession::FIELDS, now);
        form.set("type", "Nap").unwrap();
        form
    }

    #[test]
    fn test_missing_end_time_is_omitted() {
        let form = form();
        form.validate().unwrap();

        let body = serde_json::to_value(SleepSession::compose(&form).unwrap()).unwrap();
        assert_eq!(body["start_time"], "2024-01-15T13:05:00");
        assert!(body.get("end_time").is_none());
        assert!(body.get("quality").is_none());
    }

    #[test]
    fn test_end_time_and_quality() {
        let mut form = form();
        form.set("end_time", "14:20").unwrap();
        form.set("quality", "Good").unwrap();

        let session = SleepSession::compose(&form).unwrap();
        assert_eq!(session.end_time.as_deref(), Some("2024-01-15T14:20:00"));
        assert_eq!(session.quality, Some(SleepQuality::Good));
        assert_eq!(SleepSession::feedback(&form), "Sleep logged: Nap on 2024-01-15");
    }

    #[test]
    fn test_server_zero_values() {
        let session: SleepSession = serde_json::from_value(serde_json::json!({
            "id": 2,
            "date": "2024-01-15",
            "start_time": "2024-01-15T13:05:00Z",
            "end_time": "0001-01-01T00:00:00Z",
            "duration": 0,
            "type": "Night",
            "quality": "",
            "notes": "",
        }))
        .unwrap();
        assert_eq!(session.end_time, None);
        assert_eq!(session.quality, None);
        assert_eq!(session.summarize().to_string(), "Night on 2024-01-15");
    }

    #[test]
    fn test_summary_with_quality() {
        let session: SleepSession = serde_json::from_value(serde_json::json!({
            "date": "2024-01-15",
            "start_time": "2024-01-15T20:00:00",
            "type": "Night",
            "quality": "Fair",
            "notes": "woke twice",
        }))
        .unwrap();
        assert_eq!(
            session.summarize().to_string(),
            "Night on 2024-01-15 - Quality: Fair - woke twice"
        );
    }
}
