//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Preference storage file
    #[arg(long, value_name = "FILE")]
    data_file: Option<PathBuf>,

    /// Tools per listing page
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Number of tools in the trending list
    #[arg(long, value_name = "N")]
    trending_limit: Option<usize>,

    /// Search debounce period in milliseconds
    #[arg(long, value_name = "MS")]
    search_debounce_ms: Option<u64>,

    /// Keep submitted tools across runs (true or false)
    #[arg(long, value_name = "BOOL")]
    persist_submissions: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    storage: StorageOutput,
    browse: BrowseOutput,
    catalog: CatalogOutput,
}

#[derive(Serialize, Debug)]
struct StorageOutput {
    data_file: String,
}

#[derive(Serialize, Debug)]
struct BrowseOutput {
    page_size: usize,
    trending_limit: usize,
    search_debounce_ms: u64,
}

#[derive(Serialize, Debug)]
struct CatalogOutput {
    persist_submissions: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {}", e)))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.data_file.is_none()
            && self.page_size.is_none()
            && self.trending_limit.is_none()
            && self.search_debounce_ms.is_none()
            && self.persist_submissions.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --data-file, --page-size, \
                 --trending-limit, --search-debounce-ms, or --persist-submissions",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|_| Config::default());

        if let Some(path) = &self.data_file {
            config.storage.data_file.clone_from(path);
        }
        if let Some(page_size) = self.page_size {
            config.browse.page_size = page_size;
        }
        if let Some(limit) = self.trending_limit {
            config.browse.trending_limit = limit;
        }
        if let Some(ms) = self.search_debounce_ms {
            config.browse.search_debounce_ms = ms;
        }
        if let Some(persist) = self.persist_submissions {
            config.catalog.persist_submissions = persist;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {}", e)))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {}", e)))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        storage: StorageOutput {
            data_file: config.storage.data_file.to_string_lossy().to_string(),
        },
        browse: BrowseOutput {
            page_size: config.browse.page_size,
            trending_limit: config.browse.trending_limit,
            search_debounce_ms: config.browse.search_debounce_ms,
        },
        catalog: CatalogOutput {
            persist_submissions: config.catalog.persist_submissions,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Storage:");
    println!("  Data File: {}", config.storage.data_file.display());
    println!();

    println!("Browse:");
    println!("  Page Size: {}", config.browse.page_size);
    println!("  Trending Limit: {}", config.browse.trending_limit);
    println!("  Search Debounce: {}ms", config.browse.search_debounce_ms);
    println!();

    println!("Catalog:");
    println!(
        "  Persist Submissions: {}",
        config.catalog.persist_submissions
    );
    println!();
}
