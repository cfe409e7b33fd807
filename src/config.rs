use anyhow::{bail, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default document locations, used when neither a flag nor the config
/// file names a path.
pub const DEFAULT_BENCHMARKS: &str = "models.json";
pub const DEFAULT_ROSTER: &str = "model-scores.json";
pub const DEFAULT_REPORT: &str = "matches_detailed.json";

/// Main configuration structure loaded from scorejoin.toml
#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub paths: Option<PathsConfig>,
}

#[derive(Deserialize, Debug, Default)]
pub struct PathsConfig {
    pub benchmarks: Option<String>,
    pub roster: Option<String>,
    pub report: Option<String>,
}

impl Config {
    /// Load config from file, or return default if no config exists.
    /// If an explicit path is provided via --config, it MUST exist (error if not).
    /// If no path is provided, check ./scorejoin.toml (use default if not found).
    pub fn load(path: Option<&Path>) -> Result<Self, anyhow::Error> {
        let config_path = match path {
            Some(p) => {
                // User explicitly specified a path - it MUST exist
                if !p.exists() {
                    bail!("Config file not found: {}", p.display());
                }
                p
            }
            None => {
                // No path specified - check default location
                let default_path = Path::new("scorejoin.toml");
                if default_path.exists() {
                    default_path
                } else {
                    return Ok(Config::default());
                }
            }
        };

        let contents = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", config_path.display(), e))?;

        // Validate paths don't contain path traversal
        config.validate_paths()?;

        Ok(config)
    }

    /// Validate that configured paths are safe (no path traversal)
    fn validate_paths(&self) -> Result<(), anyhow::Error> {
        if let Some(ref paths) = self.paths {
            if let Some(ref p) = paths.benchmarks {
                Self::validate_path(p, "paths.benchmarks")?;
            }
            if let Some(ref p) = paths.roster {
                Self::validate_path(p, "paths.roster")?;
            }
            if let Some(ref p) = paths.report {
                Self::validate_path(p, "paths.report")?;
            }
        }
        Ok(())
    }

    /// Validate a single path doesn't contain path traversal
    fn validate_path(path: &str, field: &str) -> Result<(), anyhow::Error> {
        if path.contains("..") {
            bail!(
                "Invalid {} path '{}': paths cannot contain '..'",
                field,
                path
            );
        }
        if Path::new(path).is_absolute() {
            bail!("Invalid {} path '{}': paths must be relative", field, path);
        }
        Ok(())
    }

    /// Get benchmark table path
    pub fn benchmarks_path(&self) -> &str {
        self.paths
            .as_ref()
            .and_then(|p| p.benchmarks.as_deref())
            .unwrap_or(DEFAULT_BENCHMARKS)
    }

    /// Get roster document path
    pub fn roster_path(&self) -> &str {
        self.paths
            .as_ref()
            .and_then(|p| p.roster.as_deref())
            .unwrap_or(DEFAULT_ROSTER)
    }

    /// Get match detail report path
    pub fn report_path(&self) -> &str {
        self.paths
            .as_ref()
            .and_then(|p| p.report.as_deref())
            .unwrap_or(DEFAULT_REPORT)
    }
}
