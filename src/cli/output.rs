//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::record::{Posting, ScoredProfile};

/// Result structure for a match run.
#[derive(Debug, Serialize)]
pub struct MatchResults<'a> {
    pub posting: &'a str,
    pub selected_skills: Vec<&'a str>,
    pub shortlist: &'a [ScoredProfile],
    pub pool_size: usize,
}

/// Print the catalog with 1-based numbering, the way selection indices
/// are entered.
pub fn print_posting_list<'a>(postings: impl Iterator<Item = &'a Posting>) {
    println!("Available postings:");
    for (i, posting) in postings.enumerate() {
        println!(
            " {}. {} ({})",
            i + 1,
            posting.title(),
            posting.required_skills().names().join(", ")
        );
    }
}

/// Render a match result in the requested format.
pub fn print_match_results(results: &MatchResults<'_>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(results)?);
        }
        OutputFormat::Human => print_match_table(results),
    }
    Ok(())
}

fn print_match_table(results: &MatchResults<'_>) {
    println!("\nPosting: {}", results.posting);
    println!("Selected skills: {}", results.selected_skills.join(", "));

    if results.shortlist.is_empty() {
        println!("\nNo matching candidates found.");
        return;
    }

    println!(
        "\n{:<22}{:<16}{:<16}{:<10}",
        "Candidate", "Matched Skills", "Weighted Score", "Score (%)"
    );
    println!("{}", "-".repeat(64));
    for scored in results.shortlist {
        println!(
            "{:<22}{:<16}{:<16}{:.1}%",
            scored.name, scored.matched_count, scored.weighted_score, scored.percentage
        );
    }
}
