//! Batch scanning command for multiple product images.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use shelf_core::generation::{self, TextGenerator};
use shelf_core::upload::is_supported;
use shelf_core::{ProductScanner, ScanReport};

use super::output::{csv_record, format_report, OutputFormat, CSV_HEADER};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Query sent with every image
    #[arg(short, long)]
    query: Option<String>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of scanning a single file.
struct ScanOutcome {
    path: PathBuf,
    report: Option<ScanReport>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_supported(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let generator = generation::from_config(&config.generation);
    let scanner = ProductScanner::new(generator.as_ref()).with_config(config.extraction.clone());
    let query = args.query.as_deref().unwrap_or("");

    let mut outcomes = Vec::with_capacity(files.len());
    let mut written = HashSet::new();

    for path in files {
        let outcome = scan_single_file(&scanner, &path, query);

        match &outcome.error {
            None => debug!("Scanned {}", path.display()),
            Some(e) => {
                error!("Failed to scan {}: {}", path.display(), e);
                if !args.continue_on_error {
                    pb.abandon();
                    anyhow::bail!("Failed to scan {}: {}", path.display(), e);
                }
            }
        }

        if let (Some(report), Some(output_dir)) = (&outcome.report, &args.output_dir) {
            let output_path = output_dir.join(output_name(&path, args.format));
            if !written.insert(output_path.clone()) {
                warn!(
                    "{} overwrites an earlier result at {}",
                    path.display(),
                    output_path.display()
                );
            }
            fs::write(&output_path, format_report(report, args.format)?)?;
        }

        outcomes.push(outcome);
        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.summary {
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("summary.csv");
        write_summary(&outcomes, &summary_path)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    if args.output_dir.is_none() {
        for outcome in &outcomes {
            if let Some(report) = &outcome.report {
                println!("== {}", outcome.path.display());
                println!("{}", format_report(report, args.format)?);
            }
        }
    }

    let succeeded = outcomes.iter().filter(|o| o.report.is_some()).count();
    let failed = outcomes.len() - succeeded;

    eprintln!(
        "{} Processed {} files ({} ok, {} failed) in {:.1}s",
        style("✓").green(),
        outcomes.len(),
        succeeded,
        failed,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Per-file output name keeping the image extension: `a.png` -> `a.png.json`.
fn output_name(path: &Path, format: OutputFormat) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    format!("{}.{}", name, format.extension())
}

fn scan_single_file<G: TextGenerator + ?Sized>(
    scanner: &ProductScanner<'_, G>,
    path: &Path,
    query: &str,
) -> ScanOutcome {
    match scanner.scan_file(path, query) {
        Ok(report) => ScanOutcome {
            path: path.to_path_buf(),
            report: Some(report),
            error: None,
        },
        Err(e) => ScanOutcome {
            path: path.to_path_buf(),
            report: None,
            error: Some(e.to_string()),
        },
    }
}

fn write_summary(outcomes: &[ScanOutcome], path: &Path) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["file"];
    header.extend(CSV_HEADER);
    header.push("error");
    wtr.write_record(&header)?;

    for outcome in outcomes {
        let file = outcome.path.display().to_string();
        let cells = match &outcome.report {
            Some(report) => csv_record(&report.result),
            None => Default::default(),
        };
        let error = outcome.error.clone().unwrap_or_default();

        let mut record = vec![file];
        record.extend(cells);
        record.push(error);
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_name_keeps_image_extension() {
        assert_eq!(output_name(Path::new("shots/a.png"), OutputFormat::Json), "a.png.json");
        assert_eq!(output_name(Path::new("a.jpg"), OutputFormat::Csv), "a.jpg.csv");
    }
}
