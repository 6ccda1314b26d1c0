//! `shelf config`: inspect and edit the config file by dotted key.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;
use tracing::debug;

use shelf_core::models::config::ShelfConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the configuration in effect
    Show,

    /// Write a config file with default values
    Init {
        /// Write here instead of the config file in effect
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value, e.g. `generation.generator`
    Get { key: String },

    /// Change one value; bare words are taken as strings
    Set { key: String, value: String },

    /// Print where the config file lives
    Path,
}

/// The config file the command operates on. A missing file reads as defaults.
struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    fn load(&self) -> anyhow::Result<ShelfConfig> {
        if !self.path.exists() {
            debug!("{} does not exist, using defaults", self.path.display());
            return Ok(ShelfConfig::default());
        }
        Ok(ShelfConfig::from_file(&self.path)?)
    }

    fn store(&self, config: &ShelfConfig) -> anyhow::Result<()> {
        write_config(&self.path, config)
    }
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let file = ConfigFile {
        path: super::config_path(config_path),
    };

    match args.command {
        ConfigCommand::Show => {
            if !file.path.exists() {
                eprintln!("{} No config file found, showing defaults.", style("ℹ").blue());
            }
            println!("{}", serde_json::to_string_pretty(&file.load()?)?);
        }
        ConfigCommand::Init { output, force } => {
            let target = output.unwrap_or_else(|| file.path.clone());
            if target.exists() && !force {
                bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    target.display()
                );
            }
            write_config(&target, &ShelfConfig::default())?;
            println!(
                "{} Created configuration file at {}",
                style("✓").green(),
                target.display()
            );
        }
        ConfigCommand::Get { key } => {
            let tree = serde_json::to_value(file.load()?)?;
            println!("{}", serde_json::to_string_pretty(lookup(&tree, &key)?)?);
        }
        ConfigCommand::Set { key, value } => {
            let value = parse_value(&value);
            let mut tree = serde_json::to_value(file.load()?)?;
            assign(&mut tree, &key, value.clone())?;

            // Rejects values of the wrong type
            let config: ShelfConfig = serde_json::from_value(tree)
                .with_context(|| format!("Invalid value for {}", key))?;
            file.store(&config)?;

            println!("{} Set {} = {}", style("✓").green(), key, value);
        }
        ConfigCommand::Path => {
            println!("Configuration file: {}", file.path.display());
            if file.path.exists() {
                println!("Status: {}", style("exists").green());
            } else {
                println!("Status: {}", style("not created").yellow());
                println!();
                println!("Run 'shelf config init' to create a configuration file.");
            }
        }
    }

    Ok(())
}

fn write_config(path: &Path, config: &ShelfConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

/// JSON when it parses, otherwise the raw text as a string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn lookup<'a>(tree: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.').try_fold(tree, |node, part| {
        node.get(part)
            .ok_or_else(|| anyhow!("Configuration key not found: {}", key))
    })
}

/// Replace an existing leaf. New keys are never created.
fn assign(tree: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let (parent, leaf) = match key.rsplit_once('.') {
        Some((parent, leaf)) => (Some(parent), leaf),
        None => (None, key),
    };

    let mut node = tree;
    for part in parent.into_iter().flat_map(|p| p.split('.')) {
        node = node
            .get_mut(part)
            .ok_or_else(|| anyhow!("Configuration key not found: {}", key))?;
    }

    match node.get_mut(leaf) {
        Some(slot) if !slot.is_object() => {
            *slot = value;
            Ok(())
        }
        Some(_) => bail!("{} is a section, set one of its keys instead", key),
        None => bail!("Configuration key not found: {}", key),
    }
}
