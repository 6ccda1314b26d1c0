//! Rendering of extraction results.

use std::fs;
use std::path::Path;

use console::style;

use shelf_core::{ExtractionResult, ScanReport};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for files written in this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub const CSV_HEADER: [&str; 5] = [
    "brand_name",
    "expiry_date",
    "expired",
    "life_span_days",
    "object_count",
];

/// Raw CSV cells for a result; empty for absent fields.
pub fn csv_record(result: &ExtractionResult) -> [String; 5] {
    [
        result.brand_name.clone().unwrap_or_default(),
        result
            .expiry_date
            .as_ref()
            .map(|d| d.display())
            .unwrap_or_default(),
        result.expired.map(|e| e.to_string()).unwrap_or_default(),
        result
            .life_span_days
            .map(|d| d.to_string())
            .unwrap_or_default(),
        result
            .object_count
            .map(|c| c.to_string())
            .unwrap_or_default(),
    ]
}

pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

pub fn format_report(report: &ScanReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => format_csv(&report.result),
        OutputFormat::Text => {
            let mut output = format_text(&report.result);
            output.push('\n');
            output.push_str(&format!("Generated text ({}):\n", report.generator));
            output.push_str(&format!("  {}\n", report.generated_text));
            if !report.warnings.is_empty() {
                output.push_str("\nWarnings:\n");
                for warning in &report.warnings {
                    output.push_str(&format!("  - {}\n", warning));
                }
            }
            Ok(output)
        }
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(CSV_HEADER)?;
    wtr.write_record(csv_record(result))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::from("Extracted Information\n");

    for (label, value) in result.display_fields() {
        output.push_str(&format!("  {}: {}\n", label, value));
    }

    output
}

/// Write to `path` when given, stdout otherwise.
pub fn emit(output: &str, path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(output_path) = path {
        fs::write(output_path, output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
