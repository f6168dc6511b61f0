//! Command-line configuration: where sections come from and which design
//! defaults apply.
//!
//! Catalog source precedence: `--builtin`, then `--catalog-file`, then the
//! HTTP API at `--api-url` (env `API_BASE_URL`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use calc_core::catalog::{builtin_universal_beams, SectionCatalog, SectionDb};
use calc_core::settings::DesignSettings;
use clap::Args;

use crate::http_catalog::HttpCatalog;

/// Default base URL of the steel beam API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Base URL of the steel beam API
    #[arg(long, global = true, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Timeout for catalog requests, in seconds
    #[arg(long, global = true, env = "CATALOG_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Read sections from a local JSON file instead of the API
    #[arg(long, global = true, env = "CATALOG_FILE")]
    pub catalog_file: Option<PathBuf>,

    /// Use the built-in universal beam table instead of the API
    #[arg(long, global = true)]
    pub builtin: bool,

    /// TOML file with design defaults (safety factor, grade, deflection ratio)
    #[arg(long, global = true, env = "CALC_SETTINGS")]
    pub settings: Option<PathBuf>,
}

impl CatalogArgs {
    /// Open the configured catalog provider
    pub fn open_catalog(&self) -> Result<Box<dyn SectionCatalog>> {
        if self.builtin {
            log::debug!("Using built-in section table");
            return Ok(Box::new(builtin_universal_beams()));
        }

        if let Some(path) = &self.catalog_file {
            log::debug!("Using catalog file {}", path.display());
            let db = SectionDb::load_from_json(path)
                .with_context(|| format!("failed to load catalog file {}", path.display()))?;
            return Ok(Box::new(db));
        }

        log::debug!("Using catalog API at {}", self.api_url);
        let catalog = HttpCatalog::new(&self.api_url, Duration::from_secs(self.timeout_secs))
            .context("failed to create catalog client")?;
        Ok(Box::new(catalog))
    }

    /// Load design defaults, or the built-in defaults when no file is given
    pub fn design_settings(&self) -> Result<DesignSettings> {
        match &self.settings {
            Some(path) => DesignSettings::load(path)
                .with_context(|| format!("failed to load settings from {}", path.display())),
            None => Ok(DesignSettings::default()),
        }
    }
}
