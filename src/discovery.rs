//! Showcase author discovery
//!
//! Picks two authors worth demonstrating the new-collaborator bonus on:
//! the one who works with the same people most often (highest repeat rate)
//! and the one who keeps meeting new people (lowest repeat rate).
//!
//! ```text
//! repeat_rate = collaborator slots / distinct collaborator names
//! ```
//!
//! Collaborators are counted by name, and the subject's own name is never
//! counted, even on a row whose other attributes differ from the subject's.
//! This keeps an author from inflating their own repeat rate, so rates and
//! the picked pair can differ from a count that lets the subject slip in.
//!
//! Only authors with at least two publications and one collaborator are
//! ranked. Authors are evaluated in parallel; each worker builds its own
//! collaboration map from the shared read-only store.

use crate::models::{Author, AuthorKey};
use crate::records::{papers_of, RecordStore};
use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Minimum publications for an author to be ranked
pub const MIN_PUBLICATIONS: usize = 2;

/// Collaboration statistics for one author name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorStats {
    pub name: AuthorKey,
    pub publications: usize,
    /// Collaborator appearances summed over all publications
    pub collaborator_slots: usize,
    pub unique_collaborators: usize,
    pub repeat_rate: f64,
}

/// The two authors picked for a showcase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Showcase {
    /// Highest repeat rate; the bonus should matter least here
    pub high_repeat: AuthorStats,
    /// Lowest repeat rate; the bonus should matter most here
    pub high_newness: AuthorStats,
    /// Number of authors that qualified for ranking
    pub candidates: usize,
}

/// Repeat-rate statistics, or `None` if the author does not qualify
pub fn author_stats(store: &RecordStore, key: &AuthorKey) -> Option<AuthorStats> {
    let probe = Author::named(&key.first_name, &key.last_name);
    let papers = papers_of(store, &probe);
    if papers.len() < MIN_PUBLICATIONS {
        return None;
    }

    // Counted by name; the subject's own rows never count as a collaborator
    let names: Vec<String> = papers
        .values()
        .flatten()
        .filter(|c| !c.has_key(key))
        .map(Author::name)
        .collect();
    if names.is_empty() {
        return None;
    }

    let unique = names.iter().collect::<HashSet<_>>().len();
    Some(AuthorStats {
        name: key.clone(),
        publications: papers.len(),
        collaborator_slots: names.len(),
        unique_collaborators: unique,
        repeat_rate: names.len() as f64 / unique as f64,
    })
}

/// Rank every author in the store by repeat rate, lowest first.
///
/// The sort is stable, so ties keep their order of first appearance.
pub fn rank_authors(store: &RecordStore, workers: usize) -> Result<Vec<AuthorStats>> {
    let authors = store.unique_authors();
    debug!("Ranking {} authors on {} workers", authors.len(), workers);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .build()?;

    let mut stats: Vec<AuthorStats> = pool.install(|| {
        authors
            .par_iter()
            .filter_map(|key| author_stats(store, key))
            .collect()
    });

    stats.sort_by(|a, b| a.repeat_rate.total_cmp(&b.repeat_rate));
    Ok(stats)
}

/// Pick the showcase pair, or `None` if no author qualifies
pub fn find_showcase_authors(store: &RecordStore, workers: usize) -> Result<Option<Showcase>> {
    let ranked = rank_authors(store, workers)?;

    let (Some(first), Some(last)) = (ranked.first(), ranked.last()) else {
        info!("No author has {} or more publications with collaborators", MIN_PUBLICATIONS);
        return Ok(None);
    };

    info!(
        "Showcase: high-repeat {} ({:.2}), high-newness {} ({:.2}) among {} candidates",
        last.name,
        last.repeat_rate,
        first.name,
        first.repeat_rate,
        ranked.len()
    );

    Ok(Some(Showcase {
        high_repeat: last.clone(),
        high_newness: first.clone(),
        candidates: ranked.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::tests::sample_store;

    #[test]
    fn test_author_stats() {
        let store = sample_store();
        // Ada: pub.1 [Charles], pub.2 [Marie, Charles]
        let stats = author_stats(&store, &AuthorKey::new("Ada", "Lovelace")).expect("stats");
        assert_eq!(stats.publications, 2);
        assert_eq!(stats.collaborator_slots, 3);
        assert_eq!(stats.unique_collaborators, 2);
        assert!((stats.repeat_rate - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_paper_authors_are_skipped() {
        let store = sample_store();
        assert!(author_stats(&store, &AuthorKey::new("Pierre", "Curie")).is_none());
    }

    #[test]
    fn test_showcase_picks_extremes() {
        let store = sample_store();
        let showcase = find_showcase_authors(&store, 2)
            .expect("discovery")
            .expect("showcase");

        // Ada and Charles repeat (1.5); Marie has three distinct collaborators (1.0)
        assert_eq!(showcase.candidates, 3);
        assert_eq!(showcase.high_newness.name.to_string(), "Marie Curie");
        assert_eq!(showcase.high_repeat.name.to_string(), "Charles Babbage");
    }

    #[test]
    fn test_subject_namesake_is_not_a_collaborator() {
        let csv = "\
pub_id,first_name,last_name,gender
pub.1,Ada,Lovelace,F
pub.1,Ada,Lovelace,M
pub.1,Bob,Stone,M
pub.2,Ada,Lovelace,F
pub.2,Bob,Stone,M
";
        let store = RecordStore::from_reader(csv.as_bytes()).expect("parse");
        let stats = author_stats(&store, &AuthorKey::new("Ada", "Lovelace")).expect("stats");
        assert_eq!(stats.collaborator_slots, 2);
        assert_eq!(stats.unique_collaborators, 1);
        assert_eq!(stats.repeat_rate, 2.0);
    }

    #[test]
    fn test_rank_is_sorted() {
        let ranked = rank_authors(&sample_store(), 1).expect("rank");
        assert!(ranked
            .windows(2)
            .all(|w| w[0].repeat_rate <= w[1].repeat_rate));
    }

    #[test]
    fn test_no_candidates() {
        let store = RecordStore::from_reader(
            "pub_id,first_name,last_name\npub.1,Solo,Author\n".as_bytes(),
        )
        .expect("parse");
        assert!(find_showcase_authors(&store, 1).expect("discovery").is_none());
    }
}
