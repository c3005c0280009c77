//! D-Index - co-authorship diversity scoring
//!
//! Computes a per-author diversity index from authorship records: every
//! publication is scored by the gender, nationality and specialization spread
//! of its co-authors, optionally rewarding collaborators who are new to the
//! author's collaboration graph.
//!
//! ```no_run
//! use dindex::config::ScoringConfig;
//! use dindex::graph::build_graph;
//! use dindex::models::AuthorKey;
//! use dindex::records::{papers_of, resolve_author, RecordStore};
//! use dindex::scoring::DIndexCalculator;
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = RecordStore::from_path("authors.csv".as_ref())?;
//! let author = resolve_author(&store, &AuthorKey::new("Ada", "Lovelace"))?;
//! let papers = papers_of(&store, &author);
//! let graph = build_graph(&papers, None);
//!
//! let config = ScoringConfig::default().with_bonus(true);
//! let result = DIndexCalculator::new(&config).calculate(&author, &papers, &graph)?;
//! println!("{}: {}", author.name(), result.index);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod graph;
pub mod models;
pub mod records;
pub mod reporters;
pub mod scoring;
