//! Extract command - pull product fields out of text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Args;
use tracing::info;

use shelf_core::FieldExtractor;

use super::output::{emit, format_result, OutputFormat};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Text to extract from (reads stdin when neither TEXT nor --file is given)
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Compare expiry dates against this local time instead of now
    #[arg(long, value_parser = super::parse_moment)]
    at: Option<NaiveDateTime>,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            fs::read_to_string(path)?
        }
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    info!("Extracting fields from {} characters of text", text.len());

    let extractor = FieldExtractor::new();
    let result = match args.at {
        Some(now) => extractor.extract_at(&text, now),
        None => extractor.extract(&text),
    };

    let output = format_result(&result, args.format)?;
    emit(&output, args.output.as_deref())
}
