//! Product fields extracted from descriptive text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display format for parsed expiry dates.
pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Structured fields extracted from one block of text.
///
/// Every field is independent and may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Brand name.
    pub brand_name: Option<String>,

    /// Expiry date as matched in the text.
    pub expiry_date: Option<ExpiryDate>,

    /// Whether the expiry date lies in the past. Unknown when no date parsed.
    pub expired: Option<bool>,

    /// Whole days until expiry, only for parsed dates not in the past.
    pub life_span_days: Option<i64>,

    /// Number of objects or items mentioned.
    pub object_count: Option<u64>,
}

/// An expiry date found in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryDate {
    /// The matched substring.
    pub raw: String,

    /// Calendar date, when `raw` parsed as day/month/four-digit year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ExpiryDate {
    /// Human-readable form: `DD/MM/YYYY` when parsed, the raw text otherwise.
    pub fn display(&self) -> String {
        match self.date {
            Some(date) => date.format(DATE_DISPLAY_FORMAT).to_string(),
            None => self.raw.clone(),
        }
    }
}

impl ExtractionResult {
    /// Whether no field was found at all.
    pub fn is_empty(&self) -> bool {
        self.brand_name.is_none()
            && self.expiry_date.is_none()
            && self.expired.is_none()
            && self.life_span_days.is_none()
            && self.object_count.is_none()
    }

    /// Labelled, display-ready values for each field.
    pub fn display_fields(&self) -> [(&'static str, String); 5] {
        [
            (
                "Brand Name",
                self.brand_name.clone().unwrap_or_else(|| "Not found".to_string()),
            ),
            (
                "Expiry Date",
                self.expiry_date
                    .as_ref()
                    .map(ExpiryDate::display)
                    .unwrap_or_else(|| "Not found".to_string()),
            ),
            (
                "Expired",
                match self.expired {
                    Some(true) => "Yes".to_string(),
                    Some(false) => "No".to_string(),
                    None => "Unknown".to_string(),
                },
            ),
            (
                "Expected Life Span in Days",
                self.life_span_days
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
            (
                "Object Count",
                self.object_count
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "Not found".to_string()),
            ),
        ]
    }
}
