//! Text to product fields.

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use super::rules::{dates::extract_expiry, BrandRule, CountRule, FieldRule};
use crate::models::product::ExtractionResult;

/// Derives brand, expiry and count fields from descriptive text.
///
/// Stateless; one instance can serve any number of requests.
pub struct FieldExtractor {
    brands: BrandRule,
    counts: CountRule,
}

impl FieldExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self {
            brands: BrandRule::new(),
            counts: CountRule::new(),
        }
    }

    /// Extract fields, comparing dates against the local wall-clock time.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        self.extract_at(text, Local::now().naive_local())
    }

    /// Extract fields, comparing dates against `now`.
    pub fn extract_at(&self, text: &str, now: NaiveDateTime) -> ExtractionResult {
        let expiry = extract_expiry(text, now);
        let brand_name = self.brands.extract(text).map(|m| m.value);
        let object_count = self.counts.extract(text).map(|m| m.value);

        let result = ExtractionResult {
            brand_name,
            expiry_date: expiry.expiry_date,
            expired: expiry.expired,
            life_span_days: expiry.life_span_days,
            object_count,
        };

        debug!("Extracted fields from {} characters: {:?}", text.len(), result);

        result
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::ExpiryDate;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_no_patterns_all_absent() {
        let extractor = FieldExtractor::new();

        for text in ["", "a plain photo of a kitchen table", "2024 was a year"] {
            assert!(extractor.extract(text).is_empty(), "unexpected fields in {text:?}");
        }
    }

    #[test]
    fn test_full_label() {
        let extractor = FieldExtractor::new();
        let text = "Image description: a carton, brand: Acme\nUse by 15/01/2030, 3 items";

        let result = extractor.extract_at(text, fixed_now());

        let expires = NaiveDate::from_ymd_opt(2030, 1, 15).unwrap();
        let expected_days = (expires.and_hms_opt(0, 0, 0).unwrap() - fixed_now()).num_days();

        assert_eq!(
            result,
            ExtractionResult {
                brand_name: Some("Acme\nUse by 15".to_string()),
                expiry_date: Some(ExpiryDate {
                    raw: "15/01/2030".to_string(),
                    date: Some(expires),
                }),
                expired: Some(false),
                life_span_days: Some(expected_days),
                object_count: Some(3),
            }
        );
    }

    #[test]
    fn test_brand_acme() {
        let result = FieldExtractor::new().extract("Label reads brand: Acme");
        assert_eq!(result.brand_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_past_date_is_expired() {
        let result = FieldExtractor::new().extract("best before 15/01/2020");

        assert_eq!(result.expiry_date.as_ref().map(|d| d.raw.as_str()), Some("15/01/2020"));
        assert_eq!(result.expired, Some(true));
        assert_eq!(result.life_span_days, None);
    }

    #[test]
    fn test_future_date_life_span() {
        let before = Local::now().naive_local();
        let result = FieldExtractor::new().extract("best before 15/01/2099");
        let after = Local::now().naive_local();

        let expires = NaiveDate::from_ymd_opt(2099, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let latest = (expires - before).num_days();
        let earliest = (expires - after).num_days();

        assert_eq!(result.expired, Some(false));
        let days = result.life_span_days.unwrap();
        assert!(
            (earliest..=latest).contains(&days),
            "{days} not within {earliest}..={latest}"
        );
    }

    #[test]
    fn test_unparseable_date_keeps_raw() {
        let result = FieldExtractor::new().extract_at("exp 15 January 2030", fixed_now());

        assert_eq!(
            result.expiry_date,
            Some(ExpiryDate {
                raw: "15 January 2030".to_string(),
                date: None,
            })
        );
        assert_eq!(result.expired, None);
        assert_eq!(result.life_span_days, None);
    }

    #[test]
    fn test_slash_date_beats_spaced_date() {
        let result = FieldExtractor::new().extract_at("packed 01 02 2024 expires 15/01/2030", fixed_now());
        assert_eq!(result.expiry_date.unwrap().raw, "15/01/2030");
    }

    #[test]
    fn test_count_keywords() {
        let extractor = FieldExtractor::new();

        assert_eq!(extractor.extract("3 objects").object_count, Some(3));
        assert_eq!(extractor.extract("3 items").object_count, Some(3));
        assert_eq!(extractor.extract("3 bottles").object_count, None);
    }

    #[test]
    fn test_idempotent_with_fixed_time() {
        let extractor = FieldExtractor::new();
        let text = "Acme brand, 2 objects, expires 01/01/2025";

        let first = extractor.extract_at(text, fixed_now());
        let second = extractor.extract_at(text, fixed_now());

        assert_eq!(first, second);
        assert_eq!(first.expired, Some(false));
        assert_eq!(first.life_span_days, Some(213));
    }
}
