//! Runtime configuration assembled from command-line arguments.

use crate::domain::coin::Denominations;
use crate::error::Result;
use clap::ValueEnum;
use std::path::PathBuf;

/// Accepted coins when none are configured.
pub const DEFAULT_DENOMINATIONS: &str = "2000,5000";

/// How command results are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// CSV for product records, one `"<quantity> <name>"` line per purchase entry.
    #[default]
    Text,
    /// JSON documents shaped like the product and purchase payloads.
    Json,
}

#[derive(Debug, Clone)]
pub struct VendingConfig {
    pub denominations: Denominations,
    /// Persistent catalog location. `None` keeps the catalog in memory.
    pub db_path: Option<PathBuf>,
    /// CSV file loaded into the catalog before the command runs.
    pub catalog_seed: Option<PathBuf>,
    pub format: OutputFormat,
}

impl VendingConfig {
    pub fn new(
        denominations: &str,
        db_path: Option<PathBuf>,
        catalog_seed: Option<PathBuf>,
        format: OutputFormat,
    ) -> Result<Self> {
        Ok(Self {
            denominations: denominations.parse()?,
            db_path,
            catalog_seed,
            format,
        })
    }
}

impl Default for VendingConfig {
    fn default() -> Self {
        Self {
            denominations: Denominations::default(),
            db_path: None,
            catalog_seed: None,
            format: OutputFormat::default(),
        }
    }
}
