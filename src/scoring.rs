//! Weighted skill scoring.
//!
//! Given one posting, a caller-chosen subset of its skills, and optional
//! per-skill weights, score every profile in the pool. Membership tests go
//! through the hashed [`crate::skill_set::SkillSet`], so the inner loop is
//! O(|profiles| * |subset|) rather than a scan over each profile's skills.

use ahash::AHashSet;

use crate::config::EngineConfig;
use crate::error::{Result, ShortlistError};
use crate::record::{Posting, Profile, ScoredProfile};
use crate::store::RecordStore;

/// A caller's choice of skills from a posting, with optional weights.
///
/// Indices are zero-based positions into the posting's skill list. When
/// weights are omitted the engine scores unweighted: every selected skill
/// counts 1 and the percentage basis is the selection size.
#[derive(Debug, Clone)]
pub struct SkillSelection {
    indices: Vec<usize>,
    weights: Option<Vec<u32>>,
}

impl SkillSelection {
    /// Select skills without weights.
    pub fn unweighted(indices: Vec<usize>) -> Self {
        SkillSelection {
            indices,
            weights: None,
        }
    }

    /// Select skills with one weight per selected skill.
    pub fn weighted(indices: Vec<usize>, weights: Vec<u32>) -> Self {
        SkillSelection {
            indices,
            weights: Some(weights),
        }
    }

    /// Select every skill of `posting`, unweighted.
    pub fn all_of(posting: &Posting) -> Self {
        SkillSelection::unweighted((0..posting.required_skills().len()).collect())
    }

    /// The selected indices.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The weights, if this is a weighted selection.
    pub fn weights(&self) -> Option<&[u32]> {
        self.weights.as_deref()
    }
}

/// Scores profile pools against a chosen posting.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    weight_range: (u32, u32),
    include_zero_matches: bool,
}

impl ScoringEngine {
    /// Create a scoring engine from the engine configuration.
    pub fn new(config: &EngineConfig) -> Self {
        ScoringEngine {
            weight_range: config.weight_range,
            include_zero_matches: config.include_zero_matches,
        }
    }

    /// Validate a selection against a posting.
    ///
    /// Rejects empty and out-of-range selections (`InvalidSelection`),
    /// repeated indices (`DuplicateSelection`), and weights that are
    /// missing a slot or fall outside the configured range
    /// (`InvalidWeight`).
    pub fn validate(&self, posting: &Posting, selection: &SkillSelection) -> Result<()> {
        let skill_count = posting.required_skills().len();
        if selection.indices().is_empty() {
            return Err(ShortlistError::invalid_selection("selection is empty"));
        }
        let mut seen = AHashSet::with_capacity(selection.indices().len());
        for &index in selection.indices() {
            if index >= skill_count {
                return Err(ShortlistError::invalid_selection(format!(
                    "skill index {index} out of range for {skill_count} skills"
                )));
            }
            if !seen.insert(index) {
                return Err(ShortlistError::duplicate_selection(format!(
                    "skill index {index} selected more than once"
                )));
            }
        }
        if let Some(weights) = selection.weights() {
            if weights.len() != selection.indices().len() {
                return Err(ShortlistError::invalid_weight(format!(
                    "{} weights supplied for {} selected skills",
                    weights.len(),
                    selection.indices().len()
                )));
            }
            let (min, max) = self.weight_range;
            for &weight in weights {
                if weight < min || weight > max {
                    return Err(ShortlistError::invalid_weight(format!(
                        "weight {weight} outside [{min}, {max}]"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Score every profile in `pool` against the selected skills of
    /// `posting`.
    ///
    /// Deterministic: the same inputs produce bit-identical results. The
    /// output preserves pool order; ranking happens downstream. Zero-match
    /// profiles are dropped here when the configuration says so.
    pub fn score(
        &self,
        posting: &Posting,
        selection: &SkillSelection,
        pool: &RecordStore<Profile>,
    ) -> Result<Vec<ScoredProfile>> {
        self.validate(posting, selection)?;

        let skills = posting.required_skills().names();
        let selected: Vec<&str> = selection
            .indices()
            .iter()
            .map(|&i| skills[i].as_str())
            .collect();
        let weights: Vec<u32> = match selection.weights() {
            Some(weights) => weights.to_vec(),
            None => vec![1; selected.len()],
        };
        let basis: u32 = weights.iter().sum();

        let mut scored = Vec::with_capacity(pool.len());
        for (profile_index, profile) in pool.iter().enumerate() {
            let mut matched_count = 0u32;
            let mut weighted_score = 0u32;
            for (skill, &weight) in selected.iter().zip(&weights) {
                if profile.skills().contains(skill) {
                    matched_count += 1;
                    weighted_score += weight;
                }
            }
            if matched_count == 0 && !self.include_zero_matches {
                continue;
            }
            // Basis 0 cannot happen with validated weights, but the
            // percentage is defined there rather than a division fault.
            let percentage = if basis == 0 {
                0.0
            } else {
                f64::from(weighted_score) / f64::from(basis) * 100.0
            };
            scored.push(ScoredProfile {
                profile_index,
                name: profile.name().to_string(),
                matched_count,
                weighted_score,
                percentage,
            });
        }
        Ok(scored)
    }
}
