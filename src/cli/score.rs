//! Score, compare and showcase commands

use super::Session;
use anyhow::Result;
use dindex::discovery::find_showcase_authors;
use dindex::graph::{self, GraphShape};
use dindex::models::{Author, AuthorKey, ComparisonReport};
use dindex::records::{papers_of, resolve_author};
use dindex::reporters::{self, OutputFormat, ScoreReport};
use dindex::scoring::DIndexCalculator;
use tracing::info;

/// Compute and print the index of one author
pub fn run_score(
    session: &Session,
    first: &str,
    last: &str,
    bonus: bool,
    shape: GraphShape,
    format: OutputFormat,
) -> Result<()> {
    let author = resolve_author(&session.store, &AuthorKey::new(first, last))?;
    let map = papers_of(&session.store, &author);
    let graph = graph::build(&map, shape, None);

    let scoring = session
        .config
        .scoring
        .with_bonus(bonus || session.config.scoring.bonus_enabled);
    let result = DIndexCalculator::new(&scoring).calculate(&author, &map, &graph)?;

    let report = ScoreReport::new(&author, &result, scoring.bonus_enabled);
    print!("{}", reporters::render_score(&report, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Print a bonus-off vs. bonus-on comparison for one author
pub fn run_compare(
    session: &Session,
    first: &str,
    last: &str,
    shape: GraphShape,
    format: OutputFormat,
) -> Result<()> {
    let author = resolve_author(&session.store, &AuthorKey::new(first, last))?;
    let report = compare(session, &author, shape)?;

    print!("{}", reporters::render_comparison(&report, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Discover the showcase pair and compare both authors
pub fn run_showcase(session: &Session, shape: GraphShape, format: OutputFormat) -> Result<()> {
    let showcase = find_showcase_authors(&session.store, session.workers)?;

    let mut reports = Vec::new();
    if let Some(found) = &showcase {
        for stats in [&found.high_repeat, &found.high_newness] {
            let author = resolve_author(&session.store, &stats.name)?;
            reports.push(compare(session, &author, shape)?);
        }
    }
    info!("Showcase produced {} comparison reports", reports.len());

    print!(
        "{}",
        reporters::render_showcase(showcase.as_ref(), &reports, format)?
    );
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn compare(session: &Session, author: &Author, shape: GraphShape) -> Result<ComparisonReport> {
    let map = papers_of(&session.store, author);
    let graph = graph::build(&map, shape, None);
    Ok(DIndexCalculator::new(&session.config.scoring).compare(author, &map, &graph)?)
}
