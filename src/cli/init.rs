//! Init command - write an example dindex.toml

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

pub(crate) const EXAMPLE_CONFIG: &str = r#"# D-Index Configuration

[scoring]
# A collaborator whose degree equals this value counts as new
new_degree_threshold = 1

# Added to a new collaborator's tally weight (1 + new_bonus)
new_bonus = 0.8

# Apply the new-collaborator bonus to `dindex score` by default
bonus_enabled = false

# Base weights per collaborator
base_gender_factor = 1.0
base_nationality_factor = 1.0
base_specialization_factor = 1.0

# Optional multipliers keyed by the author's own country code / specialization
# [scoring.categorical_weights.nationality]
# GB = 1.2
#
# [scoring.categorical_weights.specialization]
# Physics = 0.9

[graph]
# Graph used for the new-collaborator check: "coauthor" or "publication"
shape = "coauthor"

[records]
# Authorship CSV (overridden by --data)
# data = "authors.csv"

# Prefix stripped from publication ids for display
publication_prefix = "pub."

[defaults]
# format = "text"
# workers = 8
"#;

/// Run the init command
pub fn run(dir: &Path) -> Result<()> {
    let config_path = dir.join("dindex.toml");

    if config_path.exists() {
        println!(
            "{} Config already exists at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    Ok(())
}
