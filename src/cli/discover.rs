//! Discover command - rank authors by collaborator repeat rate

use super::Session;
use anyhow::Result;
use dindex::discovery::find_showcase_authors;
use dindex::reporters::{self, OutputFormat};

pub fn run(session: &Session, format: OutputFormat) -> Result<()> {
    let showcase = find_showcase_authors(&session.store, session.workers)?;
    print!("{}", reporters::render_discovery(showcase.as_ref(), format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
