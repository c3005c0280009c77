//! Project-level configuration support
//!
//! Loads configuration from `dindex.toml` or `.dindexrc.json` in the
//! working directory, or from an explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # dindex.toml
//!
//! [scoring]
//! new_degree_threshold = 1
//! new_bonus = 0.8
//! bonus_enabled = false
//! base_gender_factor = 1.0
//! base_nationality_factor = 1.0
//! base_specialization_factor = 1.0
//!
//! [scoring.categorical_weights.nationality]
//! BR = 1.5
//!
//! [scoring.categorical_weights.specialization]
//! Physics = 0.5
//!
//! [graph]
//! shape = "coauthor"   # or "publication"
//!
//! [records]
//! data = "authors.csv"
//! publication_prefix = "pub."
//!
//! [defaults]
//! format = "text"
//! workers = 8
//! ```

use crate::graph::GraphShape;
use crate::records::DEFAULT_PUBLICATION_PREFIX;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Config file names searched in the working directory, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &["dindex.toml", ".dindexrc.json"];

/// Project-level configuration loaded from dindex.toml or similar
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ProjectConfig {
    /// Index calculation tunables
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Degree graph construction
    #[serde(default)]
    pub graph: GraphConfig,

    /// Record store location and id handling
    #[serde(default)]
    pub records: RecordsConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Tunables of the D-Index calculation
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ScoringConfig {
    /// Graph degree that marks a collaborator as new (default: 1)
    #[serde(default = "default_new_degree_threshold")]
    pub new_degree_threshold: usize,

    /// Added to a new collaborator's weight when the bonus is on (default: 0.8)
    #[serde(default = "default_new_bonus")]
    pub new_bonus: f64,

    /// Apply the new-collaborator bonus (default: false)
    #[serde(default)]
    pub bonus_enabled: bool,

    /// Weight per same-gender collaborator (default: 1.0)
    #[serde(default = "default_base_factor")]
    pub base_gender_factor: f64,

    /// Weight per collaborator in the nationality tally (default: 1.0)
    #[serde(default = "default_base_factor")]
    pub base_nationality_factor: f64,

    /// Weight per collaborator in the specialization tally (default: 1.0)
    #[serde(default = "default_base_factor")]
    pub base_specialization_factor: f64,

    /// Optional post-hoc multipliers keyed by the subject's own category value
    #[serde(default)]
    pub categorical_weights: Option<CategoricalWeights>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            new_degree_threshold: default_new_degree_threshold(),
            new_bonus: default_new_bonus(),
            bonus_enabled: false,
            base_gender_factor: default_base_factor(),
            base_nationality_factor: default_base_factor(),
            base_specialization_factor: default_base_factor(),
            categorical_weights: None,
        }
    }
}

fn default_new_degree_threshold() -> usize {
    1
}
fn default_new_bonus() -> f64 {
    0.8
}
fn default_base_factor() -> f64 {
    1.0
}

impl ScoringConfig {
    /// Copy of this config with the bonus switched on or off
    pub fn with_bonus(&self, enabled: bool) -> Self {
        Self {
            bonus_enabled: enabled,
            ..self.clone()
        }
    }
}

/// Multipliers applied to a publication's nationality / specialization factor
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CategoricalWeights {
    /// Country code -> multiplier
    #[serde(default)]
    pub nationality: HashMap<String, f64>,

    /// Specialization -> multiplier
    #[serde(default)]
    pub specialization: HashMap<String, f64>,
}

impl CategoricalWeights {
    /// Multiplier for the subject's country code, if configured
    pub fn nationality_multiplier(&self, country_code: &str) -> Option<f64> {
        self.nationality.get(country_code).copied()
    }

    /// Multiplier for the subject's specialization, if configured
    pub fn specialization_multiplier(&self, specialization: &str) -> Option<f64> {
        self.specialization.get(specialization).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.nationality.is_empty() && self.specialization.is_empty()
    }
}

/// Degree graph configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct GraphConfig {
    #[serde(default)]
    pub shape: GraphShape,
}

/// Record store configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RecordsConfig {
    /// CSV file with authorship rows
    #[serde(default)]
    pub data: Option<PathBuf>,

    /// Prefix stripped from publication ids (default: "pub.")
    #[serde(default = "default_publication_prefix")]
    pub publication_prefix: String,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            data: None,
            publication_prefix: default_publication_prefix(),
        }
    }
}

fn default_publication_prefix() -> String {
    DEFAULT_PUBLICATION_PREFIX.to_string()
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Default number of workers for discovery
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Load project configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `dindex.toml`
/// 2. `.dindexrc.json`
///
/// A file that fails to parse is logged and skipped. Returns defaults if no
/// usable config file is found.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded project config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load one config file, picking the parser from its extension
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let config = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON config {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Invalid TOML config {}", path.display()))?
    };
    Ok(config)
}

#[cfg(test)]
mod tests;
