//! Feeds

use serde::{Deserialize, Serialize};

use super::{choice_enum, combine_date_time, whole_as_integer, Labels, RecordKind, Summary};
use crate::form::{FieldKind, FieldSpec, Form, FormError, QuickFill};

choice_enum! {
    /// How the baby was fed
    FeedType {
        Bottle => "Bottle",
        BreastLeft => "Breast (Left)",
        BreastRight => "Breast (Right)",
        BreastBoth => "Breast (Both)",
        SolidFood => "Solid Food",
    }
}

/// A single feeding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub feed_type: FeedType,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Date and time of the feed
    pub time: String,
    /// Amount in ml or oz, zero when not measured
    #[serde(default, serialize_with = "whole_as_integer")]
    pub quantity: f64,
    #[serde(default)]
    pub notes: String,
}

impl RecordKind for Feed {
    const COLLECTION: &'static str = "/feeds";

    const LABELS: Labels = Labels {
        heading: "Log New Feed",
        submit: "Log Feed",
        recent_heading: "Recent Feeds",
        empty: "No feeds logged yet.",
    };

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("type", "Feed Type", FieldKind::Choice(FeedType::OPTIONS))
            .required()
            .placeholder("Select feed type..."),
        FieldSpec::new("date", "Date", FieldKind::Date).required(),
        FieldSpec::new("time", "Time", FieldKind::Time { with_seconds: true }).required(),
        FieldSpec::new("quantity", "Quantity (optional)", FieldKind::Number { step: "any" })
            .placeholder("ml or oz"),
        FieldSpec::new("notes", "Notes", FieldKind::Text)
            .placeholder("How did baby respond? Any concerns?"),
    ];

    const QUICK_FILLS: &'static [QuickFill] = &[
        QuickFill {
            key: "bottle",
            label: "Quick Bottle",
            field: "type",
            value: "Bottle",
        },
        QuickFill {
            key: "breast",
            label: "Quick Breast",
            field: "type",
            value: "Breast (Both)",
        },
    ];

    fn compose(form: &Form) -> Result<Self, FormError> {
        let date = form.text("date");
        Ok(Self {
            id: None,
            feed_type: form.choice("type")?,
            time: combine_date_time(&date, &form.text("time"), false),
            date,
            quantity: form.number("quantity")?,
            notes: form.text("notes"),
        })
    }

    fn feedback(form: &Form) -> String {
        format!(
            "Feed logged: {} on {} at {}",
            form.text("type"),
            form.text("date"),
            form.text("time")
        )
    }

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn summarize(&self) -> Summary {
        let mut summary = Summary::new(self.feed_type.as_str());
        summary.push(format!(" on {}", self.date));
        if self.quantity > 0.0 {
            summary.push(format!(" - {} ml/oz", self.quantity));
        }
        summary.push_notes(&self.notes);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled_form() -> Form {
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        let mut form = Form::blank(Feed::FIELDS, now);
        form.set("type", "Bottle").unwrap();
        form.set("date", "2024-01-15").unwrap();
        form.set("time", "08:30").unwrap();
        form.set("quantity", "120").unwrap();
        form.set("notes", "ate well").unwrap();
        form
    }

    #[test]
    fn test_compose_payload() {
        let form = filled_form();
        form.validate().unwrap();

        let feed = Feed::compose(&form).unwrap();
        let body = serde_json::to_value(&feed).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "type": "Bottle",
                "date": "2024-01-15",
                "time": "2024-01-15T08:30",
                "quantity": 120,
                "notes": "ate well",
            })
        );
        assert!(body.get("id").is_none());
    }

    #[test]
    fn test_feedback_text() {
        assert_eq!(
            Feed::feedback(&filled_form()),
            "Feed logged: Bottle on 2024-01-15 at 08:30"
        );
    }

    #[test]
    fn test_blank_quantity_is_zero() {
        let mut form = filled_form();
        form.set("quantity", "").unwrap();
        assert_eq!(Feed::compose(&form).unwrap().quantity, 0.0);
    }

    #[test]
    fn test_summary() {
        let feed: Feed = serde_json::from_value(serde_json::json!({
            "id": 4,
            "type": "Breast (Left)",
            "date": "2024-01-15",
            "time": "2024-01-15T08:30:00Z",
            "quantity": 0,
            "notes": "",
            "duration": 0,
        }))
        .unwrap();
        assert_eq!(feed.id(), Some(4));
        assert_eq!(feed.summarize().to_string(), "Breast (Left) on 2024-01-15");

        let bottle = Feed {
            quantity: 120.0,
            feed_type: FeedType::Bottle,
            notes: "ate well".to_string(),
            ..feed
        };
        let summary = bottle.summarize();
        assert_eq!(summary.headline, "Bottle");
        assert_eq!(summary.detail, " on 2024-01-15 - 120 ml/oz - ate well");
    }
}
