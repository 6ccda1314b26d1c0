//! Expiry date extraction.
//!
//! Dates are located with a priority list of shapes but always parsed as
//! day/month/four-digit year. `03/04/2030` is therefore the 3rd of April even
//! when the label was printed month first; the two orders are never told apart.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use tracing::debug;

use super::patterns::{
    DATE_DASH_LONG, DATE_DASH_SHORT, DATE_DMY_STRICT, DATE_MONTH_WORD, DATE_SLASH_LONG,
    DATE_SLASH_SHORT, DATE_SPACED,
};
use super::{all_hits, first_hit, ExtractionMatch, FieldRule};
use crate::models::product::ExpiryDate;

/// Expiry date extractor. Produces the raw matched substring.
pub struct DateRule {
    chain: [(&'static str, &'static Regex); 6],
}

impl DateRule {
    pub fn new() -> Self {
        Self {
            chain: [
                ("dd/mm/yyyy", &*DATE_SLASH_LONG),
                ("dd-mm-yyyy", &*DATE_DASH_LONG),
                ("dd/mm/yy", &*DATE_SLASH_SHORT),
                ("dd-mm-yy", &*DATE_DASH_SHORT),
                ("dd month yyyy", &*DATE_MONTH_WORD),
                ("dd mm yyyy", &*DATE_SPACED),
            ],
        }
    }
}

impl Default for DateRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for DateRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<Self::Output>> {
        first_hit(&self.chain, text, |caps| Some(caps[1].to_string()))
    }

    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<Self::Output>> {
        all_hits(&self.chain, text, |caps| Some(caps[1].to_string()))
    }
}

/// Expiry-related fields of an extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpiryFields {
    pub expiry_date: Option<ExpiryDate>,
    pub expired: Option<bool>,
    pub life_span_days: Option<i64>,
}

/// Result of comparing a parsed expiry date with the current moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryStatus {
    pub expired: bool,
    /// Whole days left, `None` once expired.
    pub life_span_days: Option<i64>,
}

/// Parse `raw` as `day/month/four-digit-year`.
pub fn parse_day_month_year(raw: &str) -> Option<NaiveDate> {
    let caps = DATE_DMY_STRICT.captures(raw)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;

    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Compare an expiry date, taken at midnight, against `now`.
pub fn expiry_status(date: NaiveDate, now: NaiveDateTime) -> ExpiryStatus {
    let expires_at = date.and_time(NaiveTime::MIN);

    if expires_at < now {
        ExpiryStatus {
            expired: true,
            life_span_days: None,
        }
    } else {
        ExpiryStatus {
            expired: false,
            // num_days truncates toward zero
            life_span_days: Some((expires_at - now).num_days()),
        }
    }
}

/// Extract the expiry date and derive its status against `now`.
pub fn extract_expiry(text: &str, now: NaiveDateTime) -> ExpiryFields {
    let Some(found) = DateRule::new().extract(text) else {
        return ExpiryFields::default();
    };

    let date = parse_day_month_year(&found.value);
    debug!(
        "Matched expiry date {:?} via {} (parsed: {})",
        found.value,
        found.rule,
        date.is_some()
    );

    let status = date.map(|d| expiry_status(d, now));

    ExpiryFields {
        expiry_date: Some(ExpiryDate {
            raw: found.value,
            date,
        }),
        expired: status.map(|s| s.expired),
        life_span_days: status.and_then(|s| s.life_span_days),
    }
}
