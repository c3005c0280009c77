//! Configuration module for D-Index
//!
//! This module handles:
//! - Project-level configuration (dindex.toml / .dindexrc.json)
//! - Scoring tunables and categorical weights
//! - Record store and graph settings
//! - CLI defaults

mod project_config;

pub use project_config::{
    load_config_file, load_project_config, CategoricalWeights, CliDefaults, GraphConfig,
    ProjectConfig, RecordsConfig, ScoringConfig, CONFIG_FILE_NAMES,
};
