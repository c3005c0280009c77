//! D-Index calculator
//!
//! Scores each publication of the subject independently, then averages.

use super::tally::{reciprocal, round_half_even, CategoryTally};
use crate::config::ScoringConfig;
use crate::error::{DIndexError, IndexResult};
use crate::graph::CollaborationGraph;
use crate::models::{Author, ComparisonReport, DIndexResult, PaperDetail};
use crate::records::{CollaborationMap, PublicationId};
use tracing::{debug, info};

/// Computes the diversity index of one author
pub struct DIndexCalculator<'a> {
    config: &'a ScoringConfig,
}

impl<'a> DIndexCalculator<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Calculate the rounded index and the per-publication breakdown.
    ///
    /// `graph` must contain every collaborator of `map`; it is normally built
    /// from the same map without the subject.
    pub fn calculate(
        &self,
        author: &Author,
        map: &CollaborationMap,
        graph: &CollaborationGraph,
    ) -> IndexResult<DIndexResult> {
        if map.is_empty() {
            return Err(DIndexError::NoPublications {
                author: author.name(),
            });
        }

        let papers = map
            .iter()
            .map(|(publication, collaborators)| {
                self.score_paper(author, publication, collaborators, graph)
            })
            .collect::<IndexResult<Vec<_>>>()?;

        let mean = papers.iter().map(|p| p.paper_index).sum::<f64>() / papers.len() as f64;
        let index = round_half_even(mean);

        info!(
            "D-Index for {}: {} (mean {:.3} over {} publications, bonus {})",
            author.name(),
            index,
            mean,
            papers.len(),
            if self.config.bonus_enabled { "on" } else { "off" }
        );

        Ok(DIndexResult { index, papers })
    }

    /// Gender, nationality and specialization factors for one publication
    pub fn score_paper(
        &self,
        author: &Author,
        publication: &PublicationId,
        collaborators: &[Author],
        graph: &CollaborationGraph,
    ) -> IndexResult<PaperDetail> {
        let cfg = self.config;

        let mut same_gender = cfg.base_gender_factor;
        let mut nationality =
            CategoryTally::seeded(&author.country_code, cfg.base_nationality_factor);
        let mut specialization =
            CategoryTally::seeded(&author.specialization, cfg.base_specialization_factor);

        for collab in collaborators {
            let bonus = self.collaborator_bonus(collab, publication, graph)?;

            if collab.gender == author.gender {
                same_gender += cfg.base_gender_factor * bonus;
            }
            nationality.add(&collab.country_code, cfg.base_nationality_factor * bonus);
            specialization.add(
                &collab.specialization,
                cfg.base_specialization_factor * bonus,
            );
        }

        let gender_factor = reciprocal(same_gender, collaborators.len() as f64);
        let mut nationality_factor = nationality.factor();
        let mut specialization_factor = specialization.factor();

        if let Some(weights) = &cfg.categorical_weights {
            if let Some(m) = weights.nationality_multiplier(author.country_code.as_str()) {
                nationality_factor *= m;
            }
            if let Some(m) = weights.specialization_multiplier(author.specialization.as_str()) {
                specialization_factor *= m;
            }
        }

        let paper_index = gender_factor + nationality_factor + specialization_factor;

        debug!(
            "{}: {} collaborators, gender={:.3} nationality={:.3} specialization={:.3} index={:.3}",
            publication.label(),
            collaborators.len(),
            gender_factor,
            nationality_factor,
            specialization_factor,
            paper_index
        );

        Ok(PaperDetail {
            pub_id: publication.label().to_string(),
            gender_factor,
            nationality_factor,
            specialization_factor,
            paper_index,
        })
    }

    /// 1, plus the new-collaborator bonus when enabled and the degree matches.
    ///
    /// The degree is looked up even with the bonus off, so an inconsistent
    /// graph is reported either way.
    fn collaborator_bonus(
        &self,
        collab: &Author,
        publication: &PublicationId,
        graph: &CollaborationGraph,
    ) -> IndexResult<f64> {
        let degree = graph
            .degree(collab)
            .ok_or_else(|| DIndexError::GraphInconsistency {
                collaborator: collab.name(),
                publication: publication.label().to_string(),
            })?;

        let mut bonus = 1.0;
        if self.config.bonus_enabled && degree == self.config.new_degree_threshold {
            bonus += self.config.new_bonus;
        }
        Ok(bonus)
    }

    /// Run the calculation with the bonus off and on, paired per publication
    pub fn compare(
        &self,
        author: &Author,
        map: &CollaborationMap,
        graph: &CollaborationGraph,
    ) -> IndexResult<ComparisonReport> {
        let off = self.config.with_bonus(false);
        let on = self.config.with_bonus(true);

        let without = DIndexCalculator::new(&off).calculate(author, map, graph)?;
        let with = DIndexCalculator::new(&on).calculate(author, map, graph)?;

        Ok(ComparisonReport::from_runs(author, &without, &with))
    }
}
