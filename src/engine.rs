//! The matching engine facade: load, locate, score, rank.
//!
//! Single-threaded and synchronous by design. The stores are mutated only
//! during the load-and-sort step and are read-only afterwards, so a
//! session is: load both catalogs once, then any number of
//! locate/match/top-k rounds.

use log::warn;

use crate::config::{DuplicatePolicy, EngineConfig};
use crate::error::{Result, ShortlistError};
use crate::locate::TitleLocator;
use crate::rank::{self, Ranker};
use crate::record::{Posting, Profile, Record, ScoredProfile};
use crate::scoring::{ScoringEngine, SkillSelection};
use crate::skill_set::SkillSet;
use crate::store::RecordStore;

/// The matching-and-ranking engine.
///
/// # Examples
///
/// ```
/// use shortlist::config::EngineConfig;
/// use shortlist::engine::MatchEngine;
/// use shortlist::scoring::SkillSelection;
///
/// # fn main() -> shortlist::error::Result<()> {
/// let mut engine = MatchEngine::new(EngineConfig::default())?;
/// engine.load_postings([("Data Analyst".into(), "sql,excel,python".into())])?;
/// engine.load_profiles([
///     ("A".into(), "sql,python".into()),
///     ("B".into(), "sql".into()),
/// ])?;
///
/// let index = engine.locate("data analyst")?.expect("posting exists");
/// let posting = engine.posting(index).expect("index is valid");
/// let selection = SkillSelection::weighted(vec![0, 1, 2], vec![3, 2, 5]);
/// let ranked = engine.match_candidates(index, &selection)?;
/// assert_eq!(ranked[0].name, "A");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MatchEngine {
    config: EngineConfig,
    postings: RecordStore<Posting>,
    profiles: RecordStore<Profile>,
    locator: TitleLocator,
    scorer: ScoringEngine,
    ranker: Ranker,
}

impl MatchEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let postings = RecordStore::with_backing(config.storage, config.max_postings);
        let profiles = RecordStore::with_backing(config.storage, config.max_profiles);
        let locator = TitleLocator::new(config.search_strategy);
        let scorer = ScoringEngine::new(&config);
        let ranker = Ranker::new(config.sort_strategy);
        Ok(MatchEngine {
            config,
            postings,
            profiles,
            locator,
            scorer,
            ranker,
        })
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The posting catalog.
    pub fn postings(&self) -> &RecordStore<Posting> {
        &self.postings
    }

    /// The profile pool.
    pub fn profiles(&self) -> &RecordStore<Profile> {
        &self.profiles
    }

    /// Load the posting catalog from `(title, comma-separated skills)`
    /// pairs, then normalize it into key order.
    ///
    /// Rejects postings with an empty title or an empty skill set
    /// (`InvalidRecord` - an unmatchable posting is a load error, not a
    /// latent surprise). Key collisions follow the configured
    /// [`DuplicatePolicy`]. On `CapacityExceeded` the already-loaded
    /// subset is kept and remains usable.
    pub fn load_postings<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (title, skill_line) in records {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(ShortlistError::invalid_record("posting with empty title"));
            }
            let skills = self.clean_skills(&title, skill_line.as_str());
            if skills.is_empty() {
                return Err(ShortlistError::invalid_record(format!(
                    "posting {title:?} has no skills and can never match"
                )));
            }
            if self.reject_or_skip_duplicate(&self.postings, &title)? {
                continue;
            }
            self.postings.insert(Posting::new(title, skills))?;
        }
        // One-time normalization; binary and jump lookups rely on it.
        self.postings.sort_by_key();
        Ok(())
    }

    /// Load the profile pool from `(name, comma-separated skills)` pairs.
    ///
    /// Profiles keep their load order; it is the final ranking tie-break.
    /// A profile with no skills is legal (it scores zero everywhere), and
    /// unlike titles, names are not required to be unique.
    pub fn load_profiles<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, skill_line) in records {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(ShortlistError::invalid_record("profile with empty name"));
            }
            let skills = self.clean_skills(&name, skill_line.as_str());
            self.profiles.insert(Profile::new(name, skills))?;
        }
        Ok(())
    }

    /// Resolve a posting by title. A miss is `Ok(None)`.
    pub fn locate(&self, query: &str) -> Result<Option<usize>> {
        self.locator.locate(&self.postings, query)
    }

    /// The posting at `index` in the sorted catalog.
    pub fn posting(&self, index: usize) -> Option<&Posting> {
        self.postings.get(index)
    }

    /// Score every profile against the selected skills of the posting at
    /// `posting_index`, then rank the result.
    pub fn match_candidates(
        &self,
        posting_index: usize,
        selection: &SkillSelection,
    ) -> Result<Vec<ScoredProfile>> {
        let posting = self.posting(posting_index).ok_or_else(|| {
            ShortlistError::invalid_selection(format!(
                "posting index {posting_index} out of range"
            ))
        })?;
        let scored = self.scorer.score(posting, selection, &self.profiles)?;
        Ok(self.ranker.rank(scored))
    }

    /// The best `k` entries of a ranked list.
    pub fn top_k<'a>(&self, ranked: &'a [ScoredProfile], k: usize) -> &'a [ScoredProfile] {
        rank::top_k(ranked, k)
    }

    /// The short-list length for this engine's mode.
    pub fn default_top_k(&self) -> usize {
        self.config.mode.default_top_k()
    }

    fn clean_skills(&self, key: &str, skill_line: &str) -> SkillSet {
        let mut skills = SkillSet::from_line(skill_line);
        let dropped = skills.truncate(self.config.max_skills_per_record);
        if dropped > 0 {
            warn!(
                "{key:?}: dropped {dropped} skills past the {} cap",
                self.config.max_skills_per_record
            );
        }
        skills
    }

    fn reject_or_skip_duplicate<T: Record>(
        &self,
        store: &RecordStore<T>,
        key: &str,
    ) -> Result<bool> {
        if store.find_by_key(key).is_none() {
            return Ok(false);
        }
        match self.config.duplicate_policy {
            DuplicatePolicy::Reject => Err(ShortlistError::duplicate_title(format!(
                "{key:?} already loaded"
            ))),
            DuplicatePolicy::Skip => {
                warn!("skipping duplicate record {key:?}, keeping the first");
                Ok(true)
            }
        }
    }
}
