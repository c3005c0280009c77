//! Authorship record store
//!
//! Holds one row per (publication, author) pair, loaded from CSV.
//! Expected columns (extra columns are ignored):
//!
//! ```text
//! pub_id,first_name,last_name,aff_country,aff_country_code,aff_city,gender,specialization
//! pub.1001,Ada,Lovelace,United Kingdom,GB,London,F,Mathematics
//! ```
//!
//! Only `pub_id`, `first_name` and `last_name` are required. Any other
//! field may be empty and is then treated as the unknown category.

mod extract;

pub use extract::{
    collect_authors_of_paper, papers_of, resolve_author, CollaborationMap, PublicationId,
};

use crate::models::{Author, AuthorKey, Category};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Prefix stripped from publication ids for display
pub const DEFAULT_PUBLICATION_PREFIX: &str = "pub.";

/// One row of the input table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorshipRecord {
    pub pub_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub aff_country: Option<String>,
    #[serde(default)]
    pub aff_country_code: Option<String>,
    #[serde(default)]
    pub aff_city: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
}

impl AuthorshipRecord {
    /// Build a fresh Author value from this row
    pub fn author(&self) -> Author {
        Author {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            country: Category::from_field(self.aff_country.as_deref()),
            country_code: Category::from_field(self.aff_country_code.as_deref()),
            city: Category::from_field(self.aff_city.as_deref()),
            gender: Category::from_field(self.gender.as_deref()),
            specialization: Category::from_field(self.specialization.as_deref()),
        }
    }

    pub fn has_key(&self, key: &AuthorKey) -> bool {
        self.first_name.trim() == key.first_name && self.last_name.trim() == key.last_name
    }
}

/// In-memory snapshot of the authorship table
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<AuthorshipRecord>,
    /// Row indices grouped by publication, in first-appearance order
    by_publication: IndexMap<String, Vec<usize>>,
    publication_prefix: String,
}

impl RecordStore {
    /// Build a store from already-parsed rows
    pub fn from_records(records: Vec<AuthorshipRecord>) -> Self {
        let mut by_publication: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_publication
                .entry(record.pub_id.clone())
                .or_default()
                .push(idx);
        }

        Self {
            records,
            by_publication,
            publication_prefix: DEFAULT_PUBLICATION_PREFIX.to_string(),
        }
    }

    /// Parse CSV rows from any reader (header row required)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for (line, row) in csv_reader.deserialize::<AuthorshipRecord>().enumerate() {
            // +2: one for the header, one for 1-based line numbers
            let record = row.with_context(|| format!("Invalid authorship row at line {}", line + 2))?;
            records.push(record);
        }

        debug!("Parsed {} authorship rows", records.len());
        Ok(Self::from_records(records))
    }

    /// Load a CSV file from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open record file {}", path.display()))?;
        let store = Self::from_reader(file)
            .with_context(|| format!("Failed to read records from {}", path.display()))?;

        info!(
            "Loaded {} rows across {} publications from {}",
            store.len(),
            store.publication_count(),
            path.display()
        );
        Ok(store)
    }

    /// Override the publication id prefix stripped for display
    pub fn with_publication_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.publication_prefix = prefix.into();
        self
    }

    pub fn publication_prefix(&self) -> &str {
        &self.publication_prefix
    }

    pub fn records(&self) -> &[AuthorshipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn publication_count(&self) -> usize {
        self.by_publication.len()
    }

    /// Rows on one publication, in table order
    pub fn rows_for_publication<'a>(
        &'a self,
        pub_id: &str,
    ) -> impl Iterator<Item = &'a AuthorshipRecord> + 'a {
        self.by_publication
            .get(pub_id)
            .map(|rows| rows.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| &self.records[idx])
    }

    /// Rows whose name matches, in table order
    pub fn rows_for_author<'a>(
        &'a self,
        key: &'a AuthorKey,
    ) -> impl Iterator<Item = &'a AuthorshipRecord> + 'a {
        self.records.iter().filter(move |r| r.has_key(key))
    }

    /// Distinct author names, in first-appearance order
    pub fn unique_authors(&self) -> Vec<AuthorKey> {
        let mut seen = indexmap::IndexSet::new();
        for record in &self.records {
            seen.insert(AuthorKey::new(
                record.first_name.trim(),
                record.last_name.trim(),
            ));
        }
        seen.into_iter().collect()
    }
}
