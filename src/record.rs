//! Catalog record types: postings, profiles, and scored results.

use serde::{Deserialize, Serialize};

use crate::skill_set::SkillSet;

/// A record that can live in a [`crate::store::RecordStore`]: it carries a
/// primary key the store sorts and searches by.
pub trait Record {
    /// The record's primary key (posting title, profile name).
    fn key(&self) -> &str;

    /// Lower-cased key used for ordering and case-insensitive comparison.
    fn sort_key(&self) -> String {
        self.key().to_lowercase()
    }
}

/// A job posting: a title plus its required skills.
///
/// Created once at load time and never mutated thereafter. A posting is
/// only matchable when its skill set is non-empty; the engine rejects
/// empty ones at load.
#[derive(Debug, Clone)]
pub struct Posting {
    title: String,
    required_skills: SkillSet,
}

impl Posting {
    /// Create a posting. The title is stored as given (trimmed by the
    /// loader); key comparisons are case-insensitive.
    pub fn new(title: impl Into<String>, required_skills: SkillSet) -> Self {
        Posting {
            title: title.into(),
            required_skills,
        }
    }

    /// The posting's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The posting's required skills, in load order.
    pub fn required_skills(&self) -> &SkillSet {
        &self.required_skills
    }
}

impl Record for Posting {
    fn key(&self) -> &str {
        &self.title
    }
}

/// A candidate (or seeker) profile: a name plus a skill set.
#[derive(Debug, Clone)]
pub struct Profile {
    name: String,
    skills: SkillSet,
}

impl Profile {
    /// Create a profile.
    pub fn new(name: impl Into<String>, skills: SkillSet) -> Self {
        Profile {
            name: name.into(),
            skills,
        }
    }

    /// The profile's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The profile's skills.
    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }
}

impl Record for Profile {
    fn key(&self) -> &str {
        &self.name
    }
}

/// One profile's score against a chosen posting. Ephemeral: rebuilt on
/// every match request and discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProfile {
    /// Index of the profile in the pool at scoring time.
    pub profile_index: usize,

    /// Profile name, copied out so results outlive a store borrow.
    pub name: String,

    /// Number of selected skills the profile matched.
    pub matched_count: u32,

    /// Sum of the weights of the matched skills. Equals `matched_count`
    /// in unweighted mode.
    pub weighted_score: u32,

    /// `weighted_score` normalized against the weight basis, 0..=100.
    /// Defined as 0 when the basis is 0.
    pub percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_is_lowercased() {
        let posting = Posting::new("Data Analyst", SkillSet::from_line("sql"));
        assert_eq!(posting.key(), "Data Analyst");
        assert_eq!(posting.sort_key(), "data analyst");
    }

    #[test]
    fn test_profile_accessors() {
        let profile = Profile::new("Avery", SkillSet::from_line("sql,python"));
        assert_eq!(profile.name(), "Avery");
        assert!(profile.skills().contains("SQL"));
    }
}
