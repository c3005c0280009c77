//! Collaboration extraction
//!
//! Turns the flat record table into a per-author collaboration map:
//! publication id -> co-authors on that publication, subject excluded.

use super::RecordStore;
use crate::error::{DIndexError, IndexResult};
use crate::models::{Author, AuthorKey};
use indexmap::IndexMap;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// A publication id in both raw and display form.
///
/// Lookups always use the raw id. The short form has the store prefix
/// stripped, and `label` re-attaches the prefix for reporting.
#[derive(Debug, Clone, Eq)]
pub struct PublicationId {
    raw: String,
    short: String,
    label: String,
}

impl PublicationId {
    pub fn new(raw: impl Into<String>, prefix: &str) -> Self {
        let raw = raw.into();
        let short = raw.strip_prefix(prefix).unwrap_or(&raw).to_string();
        let label = format!("{prefix}{short}");
        Self { raw, short, label }
    }

    /// Id as stored in the record table
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Id with the prefix stripped
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Id with the prefix re-attached
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for PublicationId {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Hash for PublicationId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl std::fmt::Display for PublicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short)
    }
}

/// Publication -> co-authors of the subject, in first-appearance order
pub type CollaborationMap = IndexMap<PublicationId, Vec<Author>>;

/// Every author on one publication, minus `exclude` (full-attribute equality)
pub fn collect_authors_of_paper(
    store: &RecordStore,
    pub_id: &str,
    exclude: Option<&Author>,
) -> Vec<Author> {
    store
        .rows_for_publication(pub_id)
        .map(|row| row.author())
        .filter(|author| exclude != Some(author))
        .collect()
}

/// Build the collaboration map for `subject`.
///
/// Rows are selected by name only, so namesakes are merged (no
/// disambiguation). The subject is removed from each co-author list by full
/// equality, which means a namesake with different attributes stays in.
pub fn papers_of(store: &RecordStore, subject: &Author) -> CollaborationMap {
    let key = subject.key();
    let prefix = store.publication_prefix();
    let mut map = CollaborationMap::new();

    for row in store.rows_for_author(&key) {
        let id = PublicationId::new(row.pub_id.as_str(), prefix);
        if map.contains_key(&id) {
            continue;
        }
        let collaborators = collect_authors_of_paper(store, &row.pub_id, Some(subject));
        map.insert(id, collaborators);
    }

    debug!(
        "{}: {} publications, {} collaborator slots",
        key,
        map.len(),
        map.values().map(Vec::len).sum::<usize>()
    );
    map
}

/// Full author record for a name, taken from the first matching row
pub fn resolve_author(store: &RecordStore, key: &AuthorKey) -> IndexResult<Author> {
    store
        .rows_for_author(key)
        .next()
        .map(|row| row.author())
        .ok_or_else(|| DIndexError::AuthorNotFound {
            name: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::tests::sample_store;
    use crate::records::AuthorshipRecord;

    fn row(pub_id: &str, first: &str, last: &str, spec: &str) -> AuthorshipRecord {
        AuthorshipRecord {
            pub_id: pub_id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            aff_country: Some("France".to_string()),
            aff_country_code: Some("FR".to_string()),
            aff_city: Some("Paris".to_string()),
            gender: Some("F".to_string()),
            specialization: Some(spec.to_string()),
        }
    }

    #[test]
    fn test_publication_id_prefix() {
        let id = PublicationId::new("pub.123", "pub.");
        assert_eq!(id.raw(), "pub.123");
        assert_eq!(id.short(), "123");
        assert_eq!(id.label(), "pub.123");

        let bare = PublicationId::new("123", "pub.");
        assert_eq!(bare.short(), "123");
        assert_eq!(bare.label(), "pub.123");
    }

    #[test]
    fn test_papers_of_excludes_subject() {
        let store = sample_store();
        let ada = resolve_author(&store, &AuthorKey::new("Ada", "Lovelace")).expect("ada");
        let map = papers_of(&store, &ada);

        let ids: Vec<&str> = map.keys().map(|id| id.short()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let names: Vec<String> = map.values().flatten().map(Author::name).collect();
        assert!(!names.contains(&"Ada Lovelace".to_string()));
        assert_eq!(map[0].len(), 1);
        assert_eq!(map[1].len(), 2);
    }

    #[test]
    fn test_namesake_with_other_attributes_is_kept() {
        let store = RecordStore::from_records(vec![
            row("pub.1", "Jean", "Martin", "Biology"),
            row("pub.1", "Jean", "Martin", "Chemistry"),
            row("pub.1", "Luc", "Petit", "Biology"),
        ]);
        let subject = store.records()[0].author();
        let map = papers_of(&store, &subject);

        let collaborators = &map[0];
        assert_eq!(collaborators.len(), 2);
        assert_eq!(collaborators[0].name(), "Jean Martin");
        assert_eq!(collaborators[0].specialization.as_str(), "Chemistry");
    }

    #[test]
    fn test_namesakes_merge_publications() {
        let store = RecordStore::from_records(vec![
            row("pub.1", "Jean", "Martin", "Biology"),
            row("pub.1", "Luc", "Petit", "Biology"),
            row("pub.2", "Jean", "Martin", "Chemistry"),
            row("pub.2", "Luc", "Petit", "Biology"),
        ]);
        let subject = store.records()[0].author();
        let map = papers_of(&store, &subject);

        // pub.2 is attributed to the subject by name, and the Chemistry
        // namesake is not equal to the subject so it counts as a co-author
        assert_eq!(map.len(), 2);
        assert_eq!(map[1].len(), 2);
    }

    #[test]
    fn test_custom_prefix() {
        let store = RecordStore::from_records(vec![
            row("doi:10/1", "Jean", "Martin", "Biology"),
            row("doi:10/1", "Luc", "Petit", "Biology"),
        ])
        .with_publication_prefix("doi:");
        let subject = store.records()[0].author();
        let map = papers_of(&store, &subject);
        let id = map.keys().next().expect("one publication");
        assert_eq!(id.short(), "10/1");
        assert_eq!(id.raw(), "doi:10/1");
    }

    #[test]
    fn test_resolve_missing_author() {
        let err = resolve_author(&sample_store(), &AuthorKey::new("Alan", "Turing"))
            .expect_err("no such author");
        assert_eq!(
            err,
            DIndexError::AuthorNotFound {
                name: "Alan Turing".to_string()
            }
        );
    }
}
