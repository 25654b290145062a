//! Engine configuration and strategy selection.
//!
//! Strategies are closed sets of tagged variants chosen once at
//! configuration time; the engine never switches algorithms mid-session.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShortlistError};

/// Title lookup strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Front-to-back scan. Tolerates unsorted stores. O(n).
    Linear,
    /// Halving search over a key-sorted store. O(log n).
    Binary,
    /// Block-jump search over a key-sorted store, step ceil(sqrt(n)). O(sqrt n).
    Jump,
}

impl SearchStrategy {
    /// Whether this strategy requires the store to be key-sorted.
    pub fn requires_sorted(&self) -> bool {
        !matches!(self, SearchStrategy::Linear)
    }
}

/// Ranking sort strategy. Both variants are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// In-place insertion sort. O(n^2) worst case, O(n) when near-sorted.
    Insertion,
    /// Merge sort over a forward-linked chain. O(n log n).
    Merge,
}

/// Storage backing for record stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StorageBacking {
    /// Contiguous, capacity-bounded buffer.
    Array,
    /// Forward-linked node chain, bounded only by memory.
    Linked,
}

/// What to do when two catalog records normalize to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the load with `DuplicateTitle`.
    Reject,
    /// Keep the first record, log a warning, and continue.
    Skip,
}

/// Matching direction. Controls the default short-list length and
/// whether zero-match entries are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// A recruiter ranking candidates against one posting. Top 5,
    /// zero-match candidates included.
    Recruiter,
    /// A job seeker ranking postings against their own skills. Top 3,
    /// zero-match entries dropped.
    Seeker,
}

impl MatchMode {
    /// Default short-list length for this mode (caller-overridable).
    pub fn default_top_k(&self) -> usize {
        match self {
            MatchMode::Recruiter => 5,
            MatchMode::Seeker => 3,
        }
    }

    /// Default zero-match display policy for this mode.
    pub fn default_include_zero_matches(&self) -> bool {
        matches!(self, MatchMode::Recruiter)
    }
}

/// Configuration for the matching engine.
///
/// Capacity bounds are the only resource control: working sets are small
/// enough that wall-clock budgets are meaningless here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum postings accepted by an array-backed catalog.
    pub max_postings: usize,

    /// Maximum profiles accepted by an array-backed pool.
    pub max_profiles: usize,

    /// Maximum skills retained per record; excess skills are dropped at load.
    pub max_skills_per_record: usize,

    /// Inclusive (min, max) bounds for per-skill weights.
    pub weight_range: (u32, u32),

    /// Keep candidates with zero matched skills in the ranked output.
    pub include_zero_matches: bool,

    /// Policy for records whose keys collide at load time.
    pub duplicate_policy: DuplicatePolicy,

    /// Title lookup strategy.
    pub search_strategy: SearchStrategy,

    /// Ranking sort strategy.
    pub sort_strategy: SortStrategy,

    /// Storage backing for both stores.
    pub storage: StorageBacking,

    /// Matching direction.
    pub mode: MatchMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_postings: 50,
            max_profiles: 500,
            max_skills_per_record: 20,
            weight_range: (1, 10),
            include_zero_matches: true,
            duplicate_policy: DuplicatePolicy::Reject,
            search_strategy: SearchStrategy::Binary,
            sort_strategy: SortStrategy::Insertion,
            storage: StorageBacking::Array,
            mode: MatchMode::Recruiter,
        }
    }
}

impl EngineConfig {
    /// Default configuration for the given matching direction.
    pub fn for_mode(mode: MatchMode) -> Self {
        EngineConfig {
            mode,
            include_zero_matches: mode.default_include_zero_matches(),
            ..EngineConfig::default()
        }
    }

    /// Validate configuration invariants.
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.weight_range;
        if min < 1 {
            return Err(ShortlistError::config("weight range minimum must be >= 1"));
        }
        if min > max {
            return Err(ShortlistError::config(format!(
                "weight range minimum {min} exceeds maximum {max}"
            )));
        }
        if self.max_postings == 0 || self.max_profiles == 0 {
            return Err(ShortlistError::config("capacity bounds must be non-zero"));
        }
        if self.max_skills_per_record == 0 {
            return Err(ShortlistError::config(
                "max_skills_per_record must be non-zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_postings, 50);
        assert_eq!(config.max_profiles, 500);
        assert_eq!(config.weight_range, (1, 10));
    }

    #[test]
    fn test_mode_defaults() {
        assert_eq!(MatchMode::Recruiter.default_top_k(), 5);
        assert_eq!(MatchMode::Seeker.default_top_k(), 3);

        let seeker = EngineConfig::for_mode(MatchMode::Seeker);
        assert!(!seeker.include_zero_matches);
        let recruiter = EngineConfig::for_mode(MatchMode::Recruiter);
        assert!(recruiter.include_zero_matches);
    }

    #[test]
    fn test_invalid_weight_range() {
        let mut config = EngineConfig::default();
        config.weight_range = (0, 10);
        assert!(config.validate().is_err());

        config.weight_range = (5, 2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut config = EngineConfig::default();
        config.max_postings = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = EngineConfig::for_mode(MatchMode::Seeker);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mode, MatchMode::Seeker);
        assert_eq!(back.weight_range, config.weight_range);
    }
}
