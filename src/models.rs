//! Core data models for D-Index
//!
//! These models are shared by the record store, the collaboration graph,
//! the calculator and the reporters.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Label used for categorical fields that are absent from the input
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// A categorical attribute value (gender, country code, specialization...)
///
/// Categories are only ever compared, never interpreted numerically.
/// Missing or blank input collapses to [`Category::Unknown`], so every author
/// with a missing gender shares the same gender category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    Known(String),
    #[default]
    Unknown,
}

impl Category {
    /// Build a category from an optional raw field, trimming whitespace
    pub fn from_field(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => Category::Known(s.to_string()),
            _ => Category::Unknown,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Known(s) => s.as_str(),
            Category::Unknown => UNKNOWN_CATEGORY,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Category::Unknown)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from_field(Some(s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Category::from_field(raw.as_deref()))
    }
}

/// Name-only identity of an author.
///
/// Used to select rows from the record store and as the hashing identity of
/// [`Author`]. Two different people sharing a name have the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AuthorKey {
    pub first_name: String,
    pub last_name: String,
}

impl AuthorKey {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl std::fmt::Display for AuthorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// An author as seen on one authorship row.
///
/// Equality compares first name, last name, gender, country code and
/// specialization. `city` and the `country` display string do not take part.
/// The hash only covers the name, so equal authors always hash equally while
/// namesakes with different attributes collide but stay distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub country: Category,
    #[serde(default)]
    pub country_code: Category,
    #[serde(default)]
    pub city: Category,
    #[serde(default)]
    pub gender: Category,
    #[serde(default)]
    pub specialization: Category,
}

impl Author {
    /// Author with only a name; every category is unknown
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            country: Category::Unknown,
            country_code: Category::Unknown,
            city: Category::Unknown,
            gender: Category::Unknown,
            specialization: Category::Unknown,
        }
    }

    pub fn with_gender(mut self, gender: impl Into<Category>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_country_code(mut self, code: impl Into<Category>) -> Self {
        self.country_code = code.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<Category>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<Category>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_specialization(mut self, specialization: impl Into<Category>) -> Self {
        self.specialization = specialization.into();
        self
    }

    /// The name-only identity used for lookups and hashing
    pub fn key(&self) -> AuthorKey {
        AuthorKey::new(&self.first_name, &self.last_name)
    }

    pub fn has_key(&self, key: &AuthorKey) -> bool {
        self.first_name == key.first_name && self.last_name == key.last_name
    }

    /// "First Last"
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.gender == other.gender
            && self.country_code == other.country_code
            && self.specialization == other.specialization
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Same field order as AuthorKey's derived Hash
        self.first_name.hash(state);
        self.last_name.hash(state);
    }
}

/// Per-publication breakdown produced by the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperDetail {
    /// Publication id with the store prefix re-attached
    pub pub_id: String,
    pub gender_factor: f64,
    pub nationality_factor: f64,
    pub specialization_factor: f64,
    /// Sum of the three factors
    pub paper_index: f64,
}

/// Result of one index calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DIndexResult {
    /// Rounded mean of all paper indices
    pub index: i64,
    /// One entry per publication, in collaboration-map order
    pub papers: Vec<PaperDetail>,
}

impl DIndexResult {
    /// Unrounded mean of the paper indices
    pub fn mean_paper_index(&self) -> f64 {
        if self.papers.is_empty() {
            return 0.0;
        }
        self.papers.iter().map(|p| p.paper_index).sum::<f64>() / self.papers.len() as f64
    }
}

/// Minimum paper-index change that counts as the bonus having an effect
pub const BONUS_EPSILON: f64 = 0.01;

/// One publication in a bonus-off vs. bonus-on comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Factors computed with the new-collaborator bonus applied
    pub with_bonus: PaperDetail,
    /// Paper index without the bonus
    pub paper_index_without_bonus: f64,
    pub bonus_applied: bool,
}

/// Side-by-side D-Index for one author, with and without the bonus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub author: String,
    pub specialization: Category,
    pub index_without_bonus: i64,
    pub index_with_bonus: i64,
    pub papers: Vec<ComparisonRow>,
}

impl ComparisonReport {
    /// Pair the two runs by position.
    ///
    /// Both runs must come from the same collaboration map, so their papers
    /// are in the same order. Labels are not unique (`pub.1` and `1` share
    /// one), so they are never used for pairing.
    pub fn from_runs(author: &Author, without: &DIndexResult, with: &DIndexResult) -> Self {
        let papers = without
            .papers
            .iter()
            .zip(&with.papers)
            .map(|(before, detail)| ComparisonRow {
                with_bonus: detail.clone(),
                paper_index_without_bonus: before.paper_index,
                bonus_applied: (detail.paper_index - before.paper_index).abs() > BONUS_EPSILON,
            })
            .collect();

        Self {
            author: author.name(),
            specialization: author.specialization.clone(),
            index_without_bonus: without.index,
            index_with_bonus: with.index,
            papers,
        }
    }

    pub fn bonus_paper_count(&self) -> usize {
        self.papers.iter().filter(|r| r.bonus_applied).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn ada() -> Author {
        Author::named("Ada", "Lovelace")
            .with_gender("F")
            .with_country("United Kingdom")
            .with_country_code("GB")
            .with_city("London")
            .with_specialization("Mathematics")
    }

    #[test]
    fn test_equality_ignores_city_and_country_name() {
        let other = ada().with_city("Paris").with_country("Britain");
        assert_eq!(ada(), other);
    }

    #[test]
    fn test_equality_uses_categorical_attributes() {
        assert_ne!(ada(), ada().with_gender("M"));
        assert_ne!(ada(), ada().with_country_code("FR"));
        assert_ne!(ada(), ada().with_specialization("Physics"));
    }

    #[test]
    fn test_namesakes_share_hash_but_not_equality() {
        let namesake = ada().with_specialization("Poetry");
        assert_ne!(ada(), namesake);
        assert_eq!(hash_of(&ada()), hash_of(&namesake));
        assert_eq!(ada().key(), namesake.key());
    }

    #[test]
    fn test_author_and_key_hash_identically() {
        assert_eq!(hash_of(&ada()), hash_of(&ada().key()));
    }

    #[test]
    fn test_category_from_field() {
        assert_eq!(Category::from_field(None), Category::Unknown);
        assert_eq!(Category::from_field(Some("   ")), Category::Unknown);
        assert_eq!(
            Category::from_field(Some(" GB ")),
            Category::Known("GB".to_string())
        );
        assert_eq!(Category::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_comparison_flags_changed_papers() {
        let detail = |id: &str, idx: f64| PaperDetail {
            pub_id: id.to_string(),
            gender_factor: 0.0,
            nationality_factor: 0.0,
            specialization_factor: idx,
            paper_index: idx,
        };
        let without = DIndexResult {
            index: 2,
            papers: vec![detail("pub.1", 2.0), detail("pub.2", 3.0)],
        };
        let with = DIndexResult {
            index: 3,
            papers: vec![detail("pub.1", 2.005), detail("pub.2", 3.5)],
        };

        let report = ComparisonReport::from_runs(&ada(), &without, &with);
        assert_eq!(report.author, "Ada Lovelace");
        assert!(!report.papers[0].bonus_applied);
        assert!(report.papers[1].bonus_applied);
        assert_eq!(report.bonus_paper_count(), 1);
    }

    #[test]
    fn test_comparison_pairs_papers_sharing_a_label() {
        let detail = |idx: f64| PaperDetail {
            pub_id: "pub.1".to_string(),
            gender_factor: 0.0,
            nationality_factor: 0.0,
            specialization_factor: idx,
            paper_index: idx,
        };
        // Raw ids `pub.1` and `1` both render as `pub.1`
        let without = DIndexResult {
            index: 3,
            papers: vec![detail(5.0), detail(1.5)],
        };
        let with = DIndexResult {
            index: 3,
            papers: vec![detail(5.0), detail(1.5)],
        };

        let report = ComparisonReport::from_runs(&ada(), &without, &with);
        assert_eq!(report.papers[0].paper_index_without_bonus, 5.0);
        assert_eq!(report.papers[1].paper_index_without_bonus, 1.5);
        assert_eq!(report.bonus_paper_count(), 0);
    }
}
