//! Rule-based field extractors for product labels.

pub mod brand;
pub mod count;
pub mod dates;
pub mod patterns;

pub use brand::{extract_brand, BrandRule};
pub use count::{extract_object_count, CountRule};
pub use dates::{expiry_status, extract_expiry, parse_day_month_year, DateRule, ExpiryFields};

use regex::{Captures, Regex};

/// Trait for field extractors.
pub trait FieldRule {
    /// The type of value this rule produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<ExtractionMatch<Self::Output>>;

    /// Extract every occurrence found by the first pattern that matches.
    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<Self::Output>>;
}

/// An ordered list of named patterns, highest priority first.
pub type PatternChain = [(&'static str, &'static Regex)];

/// A single rule hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Name of the pattern that matched.
    pub rule: &'static str,
    /// Source text that was matched.
    pub source: String,
    /// Byte span in source text.
    pub position: Option<(usize, usize)>,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, rule: &'static str, source: impl Into<String>) -> Self {
        Self {
            value,
            rule,
            source: source.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Walk `chain` in order and return the first pattern's first match that
/// `convert` accepts.
///
/// Only the first match of each pattern is considered; a rejected match
/// moves on to the next pattern rather than to a later match.
pub fn first_hit<T>(
    chain: &PatternChain,
    text: &str,
    convert: impl Fn(&Captures<'_>) -> Option<T>,
) -> Option<ExtractionMatch<T>> {
    chain.iter().find_map(|(name, re)| {
        let caps = re.captures(text)?;
        let value = convert(&caps)?;
        Some(to_match(value, *name, &caps))
    })
}

/// Every accepted match of the first pattern in `chain` with at least one.
pub fn all_hits<T>(
    chain: &PatternChain,
    text: &str,
    convert: impl Fn(&Captures<'_>) -> Option<T>,
) -> Vec<ExtractionMatch<T>> {
    for (name, re) in chain {
        let hits: Vec<_> = re
            .captures_iter(text)
            .filter_map(|caps| convert(&caps).map(|value| to_match(value, *name, &caps)))
            .collect();
        if !hits.is_empty() {
            return hits;
        }
    }
    Vec::new()
}

fn to_match<T>(value: T, rule: &'static str, caps: &Captures<'_>) -> ExtractionMatch<T> {
    // Group 0 always participates in a successful match
    match caps.get(0) {
        Some(m) => ExtractionMatch::new(value, rule, m.as_str()).with_position(m.start(), m.end()),
        None => ExtractionMatch::new(value, rule, ""),
    }
}
