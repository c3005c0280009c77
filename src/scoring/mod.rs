//! D-Index scoring
//!
//! Each publication of the subject gets a paper index from three factors;
//! the D-Index is the mean paper index rounded half-to-even.
//!
//! # Scoring Formula
//!
//! ```text
//! bonus(c)     = 1 + new_bonus   if bonus_enabled and degree(c) == new_degree_threshold
//!              = 1               otherwise
//!
//! Gender       = reciprocal(G, collaborators)
//!   G          = base_gender + Σ base_gender × bonus(c)   over same-gender c
//!
//! Nationality  = keys(T) × reciprocal(T[own], ΣT − base_nationality)
//!   T          = {own country: base_nationality} + base_nationality × bonus(c) per c
//!
//! Specialization: same shape as Nationality over specializations
//!
//! Paper index  = Gender + Nationality × w_nat + Specialization × w_spec
//! D-Index      = round_half_even(mean(paper index))
//!
//! reciprocal(n, d) = d / n  if n ≠ 0, else 0
//! ```
//!
//! `w_nat` / `w_spec` are optional categorical weights looked up by the
//! subject's own country code / specialization (1 when absent).
//!
//! The reciprocal is inverted on purpose: the more collaborators look like
//! the subject, the smaller the factor.

mod calculator;
mod tally;

pub use calculator::DIndexCalculator;
pub use tally::{reciprocal, round_half_even, CategoryTally};
