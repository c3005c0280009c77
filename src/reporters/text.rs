//! Text (terminal) reporter

use super::ScoreReport;
use crate::discovery::Showcase;
use crate::models::{ComparisonReport, PaperDetail};
use anyhow::Result;
use console::style;
use std::fmt::Write;

const RULE_WIDTH: usize = 95;

fn rule(out: &mut String) {
    out.push_str(&format!("{}\n", style("-".repeat(RULE_WIDTH)).dim()));
}

fn table_header(out: &mut String) {
    let header = format!(
        "{:<17} | {:>12} | {:>15} | {:>16} | {:>15}",
        "Pub ID", "Gender", "Nationality", "Specialization", "Paper Index"
    );
    out.push_str(&format!("{}\n", style(&header).bold()));
    out.push_str(&format!("{}\n", "-".repeat(header.len())));
}

fn table_row(detail: &PaperDetail) -> String {
    format!(
        "{:<17} | {:>12.2} | {:>15.2} | {:>16.2} | {:>15.2}",
        detail.pub_id,
        detail.gender_factor,
        detail.nationality_factor,
        detail.specialization_factor,
        detail.paper_index
    )
}

/// Render a single calculation as a breakdown table
pub fn render_score(report: &ScoreReport<'_>) -> Result<String> {
    let mut out = String::new();

    rule(&mut out);
    writeln!(
        out,
        "D-Index for: {} ({})",
        style(&report.author).bold(),
        report.specialization
    )?;
    rule(&mut out);

    let bonus = if report.bonus_enabled { "on" } else { "off" };
    writeln!(
        out,
        "D-Index: {}  (mean paper index {:.3} over {} publications, new-collaborator bonus {})\n",
        style(report.index).cyan().bold(),
        report.mean_paper_index,
        report.papers.len(),
        bonus
    )?;

    table_header(&mut out);
    for detail in report.papers {
        writeln!(out, "{}", table_row(detail))?;
    }
    rule(&mut out);

    Ok(out)
}

/// Render a bonus-off vs. bonus-on comparison.
///
/// Rows show the factors with the bonus applied; publications whose paper
/// index moved are marked.
pub fn render_comparison(report: &ComparisonReport) -> Result<String> {
    let mut out = String::new();

    rule(&mut out);
    writeln!(
        out,
        "{} ({})",
        style(format!("D-Index Comparison Report for: {}", report.author)).bold(),
        report.specialization
    )?;
    rule(&mut out);

    writeln!(out, "Overall D-Index (No Bonus): {}", report.index_without_bonus)?;
    writeln!(
        out,
        "Overall D-Index (With New Author Bonus): {}\n",
        style(report.index_with_bonus).cyan().bold()
    )?;
    writeln!(out, "Detailed Breakdown (Displaying values with bonus applied):")?;

    table_header(&mut out);
    for row in &report.papers {
        let line = table_row(&row.with_bonus);
        if row.bonus_applied {
            writeln!(out, "{} {}", line, style("<- Bonus Applied").green())?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    rule(&mut out);
    out.push('\n');

    Ok(out)
}

/// Render the discovered authors, or a notice when none qualified
pub fn render_discovery(showcase: Option<&Showcase>) -> Result<String> {
    let mut out = String::new();

    let Some(showcase) = showcase else {
        writeln!(
            out,
            "{}",
            style("Could not find suitable authors with multiple papers.").yellow()
        )?;
        return Ok(out);
    };

    writeln!(
        out,
        "Found High-Repeat Author: {} (repeat rate {:.2}, bonus should have less impact)",
        style(&showcase.high_repeat.name).bold(),
        showcase.high_repeat.repeat_rate
    )?;
    writeln!(
        out,
        "Found High-Newness Author: {} (repeat rate {:.2}, bonus should have more impact)",
        style(&showcase.high_newness.name).bold(),
        showcase.high_newness.repeat_rate
    )?;
    writeln!(
        out,
        "{}\n",
        style(format!("{} authors ranked", showcase.candidates)).dim()
    )?;

    Ok(out)
}
