//! Scan command - describe a product image and extract its fields.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Args;
use console::style;
use tracing::{debug, info};

use shelf_core::generation;
use shelf_core::models::config::GeneratorKind;
use shelf_core::{ProductScanner, Upload};

use super::output::{emit, format_report, OutputFormat};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Product image (jpg, jpeg or png)
    #[arg(required = true)]
    input: PathBuf,

    /// Query to send along with the image
    #[arg(short, long)]
    query: Option<String>,

    /// Text generator (overrides config)
    #[arg(short, long, value_enum)]
    generator: Option<GeneratorArg>,

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

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum GeneratorArg {
    /// Fixed mock description
    Mock,
    /// Caption file next to the image
    Sidecar,
}

impl From<GeneratorArg> for GeneratorKind {
    fn from(arg: GeneratorArg) -> Self {
        match arg {
            GeneratorArg::Mock => GeneratorKind::Mock,
            GeneratorArg::Sidecar => GeneratorKind::Sidecar,
        }
    }
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(generator) = args.generator {
        config.generation.generator = generator.into();
    }

    info!("Processing file: {}", args.input.display());

    let upload = Upload::open(&args.input)?;
    let (width, height) = upload.dimensions();
    debug!("Image is {}x{}", width, height);

    let generator = generation::from_config(&config.generation);
    let scanner = ProductScanner::new(generator.as_ref()).with_config(config.extraction);

    let query = args.query.as_deref().unwrap_or("");
    let report = match args.at {
        Some(now) => scanner.scan_at(&upload, query, now)?,
        None => scanner.scan(&upload, query)?,
    };

    for warning in &report.warnings {
        eprintln!("{} {}", style("!").yellow(), warning);
    }

    let output = format_report(&report, args.format)?;
    emit(&output, args.output.as_deref())
}
