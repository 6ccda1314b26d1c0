//! Brand name extraction.

use regex::Regex;

use super::patterns::{BRAND_LABELED, BRAND_PREFIX};
use super::{all_hits, first_hit, ExtractionMatch, FieldRule};

/// Brand name extractor.
///
/// Tries `brand: <name>` first, then `<Name> brand`. The first pattern that
/// matches decides the result: a label with nothing after it yields no brand
/// rather than falling back to the prefix form.
pub struct BrandRule {
    chain: [(&'static str, &'static Regex); 2],
}

impl BrandRule {
    pub fn new() -> Self {
        Self {
            chain: [("labeled", &*BRAND_LABELED), ("prefix", &*BRAND_PREFIX)],
        }
    }
}

impl Default for BrandRule {
    fn default() -> Self {
        Self::new()
    }
}

fn trimmed_name(caps: &regex::Captures<'_>) -> Option<String> {
    Some(caps[1].trim().to_string())
}

impl FieldRule for BrandRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<Self::Output>> {
        first_hit(&self.chain, text, trimmed_name).filter(|m| !m.value.is_empty())
    }

    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<Self::Output>> {
        let mut hits = all_hits(&self.chain, text, trimmed_name);
        hits.retain(|m| !m.value.is_empty());
        hits
    }
}

/// Extract the brand name from text.
pub fn extract_brand(text: &str) -> Option<String> {
    BrandRule::new().extract(text).map(|m| m.value)
}
