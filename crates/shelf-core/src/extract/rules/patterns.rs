//! Regex patterns for product label extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Expiry dates, in priority order
    pub static ref DATE_SLASH_LONG: Regex = Regex::new(
        r"\b(\d{2}/\d{2}/\d{4})\b"
    ).unwrap();

    pub static ref DATE_DASH_LONG: Regex = Regex::new(
        r"\b(\d{2}-\d{2}-\d{4})\b"
    ).unwrap();

    pub static ref DATE_SLASH_SHORT: Regex = Regex::new(
        r"\b(\d{2}/\d{2}/\d{2})\b"
    ).unwrap();

    pub static ref DATE_DASH_SHORT: Regex = Regex::new(
        r"\b(\d{2}-\d{2}-\d{2})\b"
    ).unwrap();

    // \w also matches digits, so "15 01 2030" is caught here before DATE_SPACED
    pub static ref DATE_MONTH_WORD: Regex = Regex::new(
        r"\b(\d{2} \w+ \d{4})\b"
    ).unwrap();

    pub static ref DATE_SPACED: Regex = Regex::new(
        r"\b(\d{2} \d{2} \d{4})\b"
    ).unwrap();

    // The only form a matched date is parsed in
    pub static ref DATE_DMY_STRICT: Regex = Regex::new(
        r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$"
    ).unwrap();

    // Brand names
    pub static ref BRAND_LABELED: Regex = Regex::new(
        r"(?i)brand[\s:]*([A-Za-z0-9\s]+)"
    ).unwrap();

    // Only the labeled form ignores case
    pub static ref BRAND_PREFIX: Regex = Regex::new(
        r"([A-Za-z]+)\s+brand"
    ).unwrap();

    // Object counts ("3 objects", "12items")
    pub static ref OBJECT_COUNT: Regex = Regex::new(
        r"(\d+)\s*(objects?|items?)"
    ).unwrap();
}
