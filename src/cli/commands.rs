//! Command implementations for the shortlist CLI.

use std::fs;

use log::info;

use crate::cli::args::{Command, ListPostingsArgs, MatchArgs, ShortlistArgs};
use crate::cli::output::{self, MatchResults};
use crate::config::EngineConfig;
use crate::engine::MatchEngine;
use crate::error::{Result, ShortlistError};
use crate::loader;
use crate::scoring::SkillSelection;

/// Execute a CLI command.
pub fn execute_command(args: ShortlistArgs) -> Result<()> {
    match &args.command {
        Command::Match(match_args) => run_match(match_args.clone(), &args),
        Command::ListPostings(list_args) => list_postings(list_args.clone(), &args),
    }
}

fn build_config(args: &MatchArgs) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => EngineConfig::for_mode(args.mode),
    };
    config.mode = args.mode;
    if let Some(search) = args.search {
        config.search_strategy = search;
    }
    if let Some(sort) = args.sort {
        config.sort_strategy = sort;
    }
    if let Some(storage) = args.storage {
        config.storage = storage;
    }
    Ok(config)
}

/// Load both catalogs, resolve the posting, score and rank the pool.
fn run_match(args: MatchArgs, cli_args: &ShortlistArgs) -> Result<()> {
    let config = build_config(&args)?;
    let mut engine = MatchEngine::new(config)?;
    engine.load_postings(loader::read_records_file(&args.postings)?)?;
    engine.load_profiles(loader::read_records_file(&args.profiles)?)?;
    info!(
        "loaded {} postings, {} profiles",
        engine.postings().len(),
        engine.profiles().len()
    );

    let Some(index) = engine.locate(&args.title)? else {
        // A miss is an empty-result state, not a failure.
        println!("No posting found for {:?}.", args.title);
        return Ok(());
    };
    let posting = engine
        .posting(index)
        .ok_or_else(|| ShortlistError::invalid_operation("located index out of range"))?;

    let selection = match (&args.skills, &args.weights) {
        (None, None) => SkillSelection::all_of(posting),
        (skills, weights) => {
            let indices = match skills {
                // CLI skill numbers are 1-based, engine indices 0-based.
                Some(numbers) => numbers
                    .iter()
                    .map(|&n| {
                        n.checked_sub(1).ok_or_else(|| {
                            ShortlistError::invalid_selection("skill numbers start at 1")
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
                None => (0..posting.required_skills().len()).collect(),
            };
            match weights {
                Some(weights) => SkillSelection::weighted(indices, weights.clone()),
                None => SkillSelection::unweighted(indices),
            }
        }
    };

    let ranked = engine.match_candidates(index, &selection)?;
    let k = args.top.unwrap_or_else(|| engine.default_top_k());
    let skills = posting.required_skills().names();
    let results = MatchResults {
        posting: posting.title(),
        selected_skills: selection
            .indices()
            .iter()
            .map(|&i| skills[i].as_str())
            .collect(),
        shortlist: engine.top_k(&ranked, k),
        pool_size: engine.profiles().len(),
    };
    output::print_match_results(&results, cli_args.output_format)
}

fn list_postings(args: ListPostingsArgs, _cli_args: &ShortlistArgs) -> Result<()> {
    let mut engine = MatchEngine::new(EngineConfig::default())?;
    engine.load_postings(loader::read_records_file(&args.postings)?)?;
    output::print_posting_list(engine.postings().iter());
    Ok(())
}
