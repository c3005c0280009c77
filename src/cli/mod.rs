//! CLI command definitions and handlers

mod discover;
mod init;
mod score;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dindex::config::{load_config_file, load_project_config, ProjectConfig};
use dindex::graph::GraphShape;
use dindex::records::RecordStore;
use dindex::reporters::OutputFormat;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Data file used when neither the flag nor the config names one
pub const DEFAULT_DATA_FILE: &str = "authors.csv";

const DEFAULT_WORKERS: usize = 8;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// D-Index - co-authorship diversity scoring
#[derive(Parser, Debug)]
#[command(name = "dindex")]
#[command(
    version,
    about = "Score how diverse an author's co-authorship is across gender, nationality and specialization",
    long_about = "D-Index reads authorship records (one row per publication and author) and \
scores each publication of an author by the gender, nationality and specialization \
diversity of its co-authors. The D-Index is the rounded mean over all publications.\n\n\
An optional bonus rewards collaborators who appear nowhere else in the author's \
collaboration graph.\n\n\
Run without a subcommand to pick two showcase authors and compare them:\n  \
dindex --data authors.csv",
    after_help = "\
Examples:
  dindex                                       Showcase on ./authors.csv
  dindex score Ada Lovelace                    Index for one author
  dindex score Ada Lovelace --bonus            Index with the new-collaborator bonus
  dindex compare Ada Lovelace --format json    Bonus off vs. on, as JSON
  dindex discover --data papers.csv            Find high-repeat / high-newness authors
  dindex init                                  Write an example dindex.toml"
)]
pub struct Cli {
    /// Authorship CSV (default: records.data from config, then authors.csv)
    #[arg(long, global = true, env = "DINDEX_DATA")]
    pub data: Option<PathBuf>,

    /// Config file (default: dindex.toml or .dindexrc.json in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Number of parallel workers for discovery (1-64)
    #[arg(long, global = true, value_parser = parse_workers)]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a dindex.toml config file with example settings
    Init,

    /// Compute the D-Index of one author
    #[command(after_help = "\
Examples:
  dindex score Ada Lovelace
  dindex score Ada Lovelace --bonus --format json
  dindex score Ada Lovelace --shape publication --bonus")]
    Score {
        /// First name
        first: String,

        /// Last name (may contain spaces)
        last: String,

        /// Apply the new-collaborator bonus
        #[arg(long)]
        bonus: bool,

        /// Graph used for the new-collaborator check: coauthor, publication
        #[arg(long, value_parser = ["coauthor", "publication"])]
        shape: Option<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,
    },

    /// Compare an author's D-Index with and without the new-collaborator bonus
    #[command(after_help = "\
Examples:
  dindex compare Ada Lovelace
  dindex compare Ada Lovelace --format json")]
    Compare {
        /// First name
        first: String,

        /// Last name (may contain spaces)
        last: String,

        /// Graph used for the new-collaborator check: coauthor, publication
        #[arg(long, value_parser = ["coauthor", "publication"])]
        shape: Option<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,
    },

    /// Find the highest-repeat and highest-newness authors
    Discover {
        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,
    },

    /// Discover showcase authors and print a comparison report for each
    Showcase {
        /// Graph used for the new-collaborator check: coauthor, publication
        #[arg(long, value_parser = ["coauthor", "publication"])]
        shape: Option<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,
    },
}

/// Resolved configuration and data shared by the commands
pub(crate) struct Session {
    pub config: ProjectConfig,
    pub store: RecordStore,
    pub workers: usize,
}

impl Session {
    /// Load config and records, with CLI flags taking precedence over config values
    fn open(cli: &Cli) -> Result<Self> {
        let config = resolve_config(cli.config.as_deref())?;

        let data = cli
            .data
            .clone()
            .or_else(|| config.records.data.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let store = RecordStore::from_path(&data)?
            .with_publication_prefix(config.records.publication_prefix.clone());

        let workers = cli
            .workers
            .or(config.defaults.workers)
            .unwrap_or(DEFAULT_WORKERS)
            .max(1);

        debug!(
            "Session: {} rows from {}, {} workers",
            store.len(),
            data.display(),
            workers
        );

        Ok(Self {
            config,
            store,
            workers,
        })
    }

    pub fn format(&self, flag: Option<&str>) -> Result<OutputFormat> {
        match flag.or(self.config.defaults.format.as_deref()) {
            Some(f) => OutputFormat::from_str(f),
            None => Ok(OutputFormat::default()),
        }
    }

    pub fn shape(&self, flag: Option<&str>) -> Result<GraphShape> {
        match flag {
            Some(s) => GraphShape::from_str(s),
            None => Ok(self.config.graph.shape),
        }
    }
}

/// An explicit `--config` must load; otherwise search the working directory
fn resolve_config(explicit: Option<&Path>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Ok(load_project_config(&cwd))
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(mut cli: Cli) -> Result<()> {
    let command = cli.command.take();
    let open = || Session::open(&cli);

    match command {
        Some(Commands::Init) => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            init::run(&cwd)
        }

        Some(Commands::Score {
            first,
            last,
            bonus,
            shape,
            format,
        }) => {
            let session = open()?;
            score::run_score(
                &session,
                &first,
                &last,
                bonus,
                session.shape(shape.as_deref())?,
                session.format(format.as_deref())?,
            )
        }

        Some(Commands::Compare {
            first,
            last,
            shape,
            format,
        }) => {
            let session = open()?;
            score::run_compare(
                &session,
                &first,
                &last,
                session.shape(shape.as_deref())?,
                session.format(format.as_deref())?,
            )
        }

        Some(Commands::Discover { format }) => {
            let session = open()?;
            discover::run(&session, session.format(format.as_deref())?)
        }

        Some(Commands::Showcase { shape, format }) => {
            let session = open()?;
            score::run_showcase(
                &session,
                session.shape(shape.as_deref())?,
                session.format(format.as_deref())?,
            )
        }

        None => {
            let session = open()?;
            score::run_showcase(&session, session.shape(None)?, session.format(None)?)
        }
    }
}
