//! # shortlist
//!
//! A weighted skill-matching and candidate ranking library.
//!
//! shortlist matches a fixed catalog of job postings against a pool of
//! candidate skill profiles and produces a ranked short-list by weighted
//! skill overlap.
//!
//! ## Features
//!
//! - Case-normalized, deduplicated skill sets with hashed membership
//! - Record stores over array or linked backings
//! - Linear, binary, and jump title lookup
//! - Weighted and unweighted scoring with typed input validation
//! - Stable insertion-sort and merge-sort ranking with top-k selection
//!
//! The engine is an in-process library surface; CSV ingestion and the CLI
//! are thin outer layers.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod locate;
pub mod rank;
pub mod record;
pub mod scoring;
pub mod skill_set;
pub mod store;

pub mod prelude {
    //! Commonly used types, re-exported.

    pub use crate::config::{
        DuplicatePolicy, EngineConfig, MatchMode, SearchStrategy, SortStrategy, StorageBacking,
    };
    pub use crate::engine::MatchEngine;
    pub use crate::error::{Result, ShortlistError};
    pub use crate::locate::TitleLocator;
    pub use crate::rank::{Ranker, top_k};
    pub use crate::record::{Posting, Profile, Record, ScoredProfile};
    pub use crate::scoring::{ScoringEngine, SkillSelection};
    pub use crate::skill_set::SkillSet;
    pub use crate::store::RecordStore;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
