//! JSON reporter
//!
//! Pretty-printed JSON for piping to jq or further processing.

use crate::discovery::Showcase;
use crate::models::ComparisonReport;
use anyhow::Result;
use serde::Serialize;

/// Render any serializable report as JSON
pub fn render<T: Serialize + ?Sized>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[derive(Serialize)]
struct ShowcaseOutput<'a> {
    showcase: Option<&'a Showcase>,
    reports: &'a [ComparisonReport],
}

/// Discovery result and per-author comparisons as one document
pub fn render_showcase(showcase: Option<&Showcase>, reports: &[ComparisonReport]) -> Result<String> {
    render(&ShowcaseOutput { showcase, reports })
}
