//! Numeric helpers for the per-publication factors

use crate::models::Category;
use indexmap::IndexMap;

/// `d / n`, or 0 when `n` is zero.
///
/// Only a zero first argument is special-cased: the result is the inverse of
/// the usual ratio, so a larger `n` yields a smaller factor. Total for every
/// finite input.
pub fn reciprocal(n: f64, d: f64) -> f64 {
    if n != 0.0 {
        d / n
    } else {
        0.0
    }
}

/// Round to the nearest integer, ties to even (2.5 -> 2, 3.5 -> 4)
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Weighted count of collaborators per category value for one publication.
///
/// Seeded with the subject's own value so the subject always has an entry.
/// Insertion order is kept so the total is summed in a fixed order.
#[derive(Debug, Clone)]
pub struct CategoryTally {
    counts: IndexMap<Category, f64>,
    own: Category,
    seed: f64,
}

impl CategoryTally {
    pub fn seeded(own: &Category, seed: f64) -> Self {
        let mut counts = IndexMap::new();
        counts.insert(own.clone(), seed);
        Self {
            counts,
            own: own.clone(),
            seed,
        }
    }

    pub fn add(&mut self, category: &Category, weight: f64) {
        *self.counts.entry(category.clone()).or_insert(0.0) += weight;
    }

    /// Sum of every entry, seed included
    pub fn total(&self) -> f64 {
        self.counts.values().sum()
    }

    /// Number of distinct category values, the subject's own included
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Accumulated weight on the subject's own value
    pub fn own_share(&self) -> f64 {
        self.counts.get(&self.own).copied().unwrap_or(0.0)
    }

    /// `distinct * reciprocal(own_share, total - seed)`
    pub fn factor(&self) -> f64 {
        let denominator = self.total() - self.seed;
        let weight = reciprocal(self.own_share(), denominator);
        self.distinct() as f64 * weight
    }
}
