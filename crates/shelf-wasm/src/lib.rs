//! WASM bindings for product label field extraction.
//!
//! The browser runs its own captioning step and passes the resulting text in.

use chrono::NaiveDateTime;
use wasm_bindgen::prelude::*;

use shelf_core::{ExtractionResult, FieldExtractor};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract product fields from text.
///
/// Returns an object with `brand_name`, `expiry_date`, `expired`,
/// `life_span_days` and `object_count`; absent fields are `undefined`.
#[wasm_bindgen]
pub fn extract_fields(text: &str) -> Result<JsValue, JsValue> {
    to_js(&FieldExtractor::new().extract(text))
}

/// Extract product fields, comparing dates against `now`
/// (`YYYY-MM-DDTHH:MM:SS`, local time).
#[wasm_bindgen]
pub fn extract_fields_at(text: &str, now: &str) -> Result<JsValue, JsValue> {
    let now = parse_now(now)?;
    to_js(&FieldExtractor::new().extract_at(text, now))
}

/// Extract product fields and return them as a JSON string.
#[wasm_bindgen]
pub fn extract_fields_json(text: &str) -> Result<String, JsValue> {
    serde_json::to_string(&FieldExtractor::new().extract(text))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Display-ready summary, one `Label: value` line per field.
#[wasm_bindgen]
pub fn summarize(text: &str) -> String {
    summary_lines(&FieldExtractor::new().extract(text))
}

/// Product field extractor class for browser use.
#[wasm_bindgen]
pub struct ProductExtractor {
    extractor: FieldExtractor,
}

#[wasm_bindgen]
impl ProductExtractor {
    /// Create a new extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            extractor: FieldExtractor::new(),
        }
    }

    /// Extract fields from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.extractor.extract(text))
    }

    /// Summary lines for text.
    #[wasm_bindgen]
    pub fn summarize(&self, text: &str) -> String {
        summary_lines(&self.extractor.extract(text))
    }
}

impl Default for ProductExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(result: &ExtractionResult) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(result).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_now(now: &str) -> Result<NaiveDateTime, JsValue> {
    NaiveDateTime::parse_from_str(now, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| JsValue::from_str(&format!("invalid time '{}': {}", now, e)))
}

fn summary_lines(result: &ExtractionResult) -> String {
    result
        .display_fields()
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_summarize() {
        let summary = summarize("brand: Acme, 2 items");
        assert!(summary.contains("Brand Name: Acme"));
        assert!(summary.contains("Object Count: 2"));
        assert!(summary.contains("Expired: Unknown"));
    }

    #[wasm_bindgen_test]
    fn test_extract_fields_json() {
        let json = extract_fields_json("best before 15/01/2020").unwrap();
        assert!(json.contains("\"expired\":true"));
        assert!(json.contains("\"raw\":\"15/01/2020\""));
    }

    #[wasm_bindgen_test]
    fn test_extractor_class() {
        let extractor = ProductExtractor::new();
        assert_eq!(
            extractor.summarize(""),
            "Brand Name: Not found\nExpiry Date: Not found\nExpired: Unknown\n\
             Expected Life Span in Days: N/A\nObject Count: Not found"
        );
    }
}
