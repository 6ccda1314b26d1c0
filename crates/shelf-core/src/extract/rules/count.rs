//! Object count extraction.

use regex::Regex;
use tracing::debug;

use super::patterns::OBJECT_COUNT;
use super::{all_hits, first_hit, ExtractionMatch, FieldRule};

/// Object count extractor for "3 objects", "1 item", "12items".
pub struct CountRule {
    chain: [(&'static str, &'static Regex); 1],
}

impl CountRule {
    pub fn new() -> Self {
        Self {
            chain: [("count", &*OBJECT_COUNT)],
        }
    }
}

impl Default for CountRule {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_count(caps: &regex::Captures<'_>) -> Option<u64> {
    match caps[1].parse() {
        Ok(count) => Some(count),
        Err(e) => {
            debug!("Ignoring object count {:?}: {}", &caps[1], e);
            None
        }
    }
}

impl FieldRule for CountRule {
    type Output = u64;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<Self::Output>> {
        first_hit(&self.chain, text, parse_count)
    }

    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<Self::Output>> {
        all_hits(&self.chain, text, parse_count)
    }
}

/// Extract the object count from text.
pub fn extract_object_count(text: &str) -> Option<u64> {
    CountRule::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_objects() {
        assert_eq!(extract_object_count("3 objects"), Some(3));
        assert_eq!(extract_object_count("1 object on the shelf"), Some(1));
    }

    #[test]
    fn test_extract_items() {
        assert_eq!(extract_object_count("3 items"), Some(3));
        assert_eq!(extract_object_count("pack of 12items"), Some(12));
    }

    #[test]
    fn test_first_count_wins() {
        let rule = CountRule::new();

        assert_eq!(rule.extract("2 items and 5 objects").unwrap().value, 2);
        let all: Vec<u64> = rule
            .extract_all("2 items and 5 objects")
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(all, vec![2, 5]);
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        assert_eq!(extract_object_count("3 Objects"), None);
        assert_eq!(extract_object_count("3 ITEMS"), None);
    }

    #[test]
    fn test_no_keyword() {
        assert_eq!(extract_object_count("3 bottles"), None);
        assert_eq!(extract_object_count("objects everywhere"), None);
    }

    #[test]
    fn test_overflowing_count_is_absent() {
        assert_eq!(extract_object_count("99999999999999999999999 items"), None);
    }
}
