//! Configuration handling for curve-opdata CLI
//!
//! Priority: CLI flags > environment variables > config file > defaults

use anyhow::{Context, Result};
use curve_opdata_cli::{ConfigFile, CurveRegistry};
use curve_opdata_core::constants::BLS12_384_M_NAME;
use curve_opdata_core::CurveParameters;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Resolved configuration for CLI commands
pub struct Config {
    pub registry: CurveRegistry,
    pub default_curve: String,
    pub quiet: bool,
    pub json_output: bool,
}

impl Config {
    /// Load configuration from file, environment, and CLI args
    pub fn load(common: &super::CommonArgs) -> Result<Self> {
        // An explicit path must exist; the default location is optional
        let file_config = match &common.config {
            Some(path) => Some(load_config_file(path)?),
            None => match config_file_path() {
                Some(path) if path.exists() => Some(load_config_file(&path)?),
                _ => None,
            },
        };

        let registry = file_config
            .as_ref()
            .map(CurveRegistry::from_config)
            .unwrap_or_default();

        let default_curve = file_config
            .as_ref()
            .and_then(|c| c.default_curve())
            .unwrap_or(BLS12_384_M_NAME)
            .to_string();

        Ok(Self {
            registry,
            default_curve,
            quiet: common.quiet,
            json_output: common.output == super::OutputFormat::Json,
        })
    }

    /// Resolve `--curve` (or the configured default) to its display name and parameters
    pub fn curve(&self, requested: Option<&str>) -> Result<(String, CurveParameters)> {
        let name = requested.unwrap_or(&self.default_curve);
        let params = self.registry.resolve(name)?;
        let display = self
            .registry
            .canonical_name(name)
            .unwrap_or_else(|| name.to_string());
        log::debug!("Resolved curve '{}' as '{}'", name, display);
        Ok((display, params))
    }

    /// Print `report` as JSON
    pub fn print_json<T: Serialize>(&self, report: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(report)?);
        Ok(())
    }
}

/// Read and parse a config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config = ConfigFile::from_toml(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    log::debug!("Loaded {} curve(s) from {:?}", config.curves.len(), path);
    Ok(config)
}

/// Get config file path
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("curve-opdata").join("config.toml"))
}
