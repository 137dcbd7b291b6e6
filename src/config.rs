//! Configuration file support for npm-org-sizes.
//!
//! Provides YAML-based configuration through `npm-org-sizes.config.yml`
//! files, and merges it with command-line options into the settings used
//! for a run. Precedence: CLI flag, then config file, then default.

use anyhow::Context;
use npm_org_sizes::adapters::outbound::filesystem::DEFAULT_CSV_PATH;
use npm_org_sizes::adapters::outbound::network::DEFAULT_REGISTRY;
use npm_org_sizes::application::dto::DEFAULT_CONCURRENCY;
use npm_org_sizes::shared::error::SizeReportError;
use npm_org_sizes::shared::Result;
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;

const CONFIG_FILENAME: &str = "npm-org-sizes.config.yml";

/// Default per-request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry: Option<String>,
    pub output: Option<PathBuf>,
    pub concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub npmrc: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(message: impl Into<String>, hint: impl Into<String>) -> anyhow::Error {
    SizeReportError::InvalidConfig {
        message: message.into(),
        hint: hint.into(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.concurrency == Some(0) {
        return Err(invalid(
            "concurrency must be at least 1",
            "Set concurrency to a positive number, e.g. `concurrency: 16`.",
        ));
    }

    if config.timeout_secs == Some(0) {
        return Err(invalid(
            "timeout_secs must be at least 1",
            "Set timeout_secs to a positive number of seconds, e.g. `timeout_secs: 30`.",
        ));
    }

    if let Some(ref registry) = config.registry {
        parse_registry_url(registry)?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Parses a registry base URL, normalized to end with `/`
pub fn parse_registry_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).map_err(|e| {
        invalid(
            format!("registry '{}' is not a valid URL: {}", raw, e),
            "Use a full URL such as https://registry.npmjs.org/",
        )
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            format!("registry '{}' must use http or https", raw),
            "Use a full URL such as https://registry.npmjs.org/",
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Effective settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub registry: Url,
    pub output: PathBuf,
    pub concurrency: usize,
    pub timeout: Duration,
    pub npmrc: Option<PathBuf>,
    pub show_table: bool,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let registry = match args.registry.as_deref().or(config.registry.as_deref()) {
            Some(raw) => parse_registry_url(raw)?,
            None => parse_registry_url(DEFAULT_REGISTRY)?,
        };

        let output = args
            .output
            .clone()
            .or(config.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH));

        let concurrency = args
            .concurrency
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .or(config.concurrency)
            .unwrap_or(DEFAULT_CONCURRENCY);

        let timeout_secs = args
            .timeout
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            registry,
            output,
            concurrency,
            timeout: Duration::from_secs(timeout_secs),
            npmrc: args.npmrc.clone().or(config.npmrc),
            show_table: !args.no_table,
        })
    }
}
