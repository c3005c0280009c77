//! Output reporters for D-Index results
//!
//! Supports two output formats:
//! - `text` - Terminal tables styled with `console`
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::discovery::Showcase;
use crate::models::{Author, Category, ComparisonReport, DIndexResult, PaperDetail};
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// A single index calculation, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport<'a> {
    pub author: String,
    pub specialization: &'a Category,
    pub bonus_enabled: bool,
    pub index: i64,
    pub mean_paper_index: f64,
    pub papers: &'a [PaperDetail],
}

impl<'a> ScoreReport<'a> {
    pub fn new(author: &'a Author, result: &'a DIndexResult, bonus_enabled: bool) -> Self {
        Self {
            author: author.name(),
            specialization: &author.specialization,
            bonus_enabled,
            index: result.index,
            mean_paper_index: result.mean_paper_index(),
            papers: &result.papers,
        }
    }
}

/// Render one index calculation
pub fn render_score(report: &ScoreReport<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_score(report),
        OutputFormat::Json => json::render(report),
    }
}

/// Render a bonus-off vs. bonus-on comparison
pub fn render_comparison(report: &ComparisonReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_comparison(report),
        OutputFormat::Json => json::render(report),
    }
}

/// Render the discovered showcase pair
pub fn render_discovery(showcase: Option<&Showcase>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_discovery(showcase),
        OutputFormat::Json => json::render(&showcase),
    }
}

/// Render a showcase pair followed by a comparison report for each author
pub fn render_showcase(
    showcase: Option<&Showcase>,
    reports: &[ComparisonReport],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = text::render_discovery(showcase)?;
            for report in reports {
                out.push_str(&text::render_comparison(report)?);
            }
            Ok(out)
        }
        OutputFormat::Json => json::render_showcase(showcase, reports),
    }
}
