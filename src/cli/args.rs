//! Command line argument parsing for the shortlist CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{MatchMode, SearchStrategy, SortStrategy, StorageBacking};

/// shortlist - weighted skill matching and candidate ranking
#[derive(Parser, Debug, Clone)]
#[command(name = "shortlist")]
#[command(about = "Match a job catalog against candidate skill profiles")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ShortlistArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ShortlistArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output rendering for CLI results.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank profiles against one posting
    Match(MatchArgs),

    /// List the postings in a catalog file
    #[command(name = "list-postings")]
    ListPostings(ListPostingsArgs),
}

/// Arguments for the match command
#[derive(clap::Args, Debug, Clone)]
pub struct MatchArgs {
    /// Path to the postings CSV (title, skills)
    #[arg(long)]
    pub postings: PathBuf,

    /// Path to the profiles CSV (name, skills)
    #[arg(long)]
    pub profiles: PathBuf,

    /// Title of the posting to match against
    #[arg(long)]
    pub title: String,

    /// 1-based skill numbers to match on (default: all of the posting's skills)
    #[arg(long, value_delimiter = ',')]
    pub skills: Option<Vec<usize>>,

    /// Weight per selected skill; omit for unweighted matching
    #[arg(long, value_delimiter = ',')]
    pub weights: Option<Vec<u32>>,

    /// Short-list length (default: 5 for recruiter mode, 3 for seeker mode)
    #[arg(long)]
    pub top: Option<usize>,

    /// Matching direction
    #[arg(long, value_enum, default_value_t = MatchMode::Recruiter)]
    pub mode: MatchMode,

    /// Title lookup strategy
    #[arg(long, value_enum)]
    pub search: Option<SearchStrategy>,

    /// Ranking sort strategy
    #[arg(long, value_enum)]
    pub sort: Option<SortStrategy>,

    /// Storage backing
    #[arg(long, value_enum)]
    pub storage: Option<StorageBacking>,

    /// JSON engine configuration file (flags above override it)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the list-postings command
#[derive(clap::Args, Debug, Clone)]
pub struct ListPostingsArgs {
    /// Path to the postings CSV (title, skills)
    #[arg(long)]
    pub postings: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_args_parse() {
        let args = ShortlistArgs::parse_from([
            "shortlist",
            "match",
            "--postings",
            "jobs.csv",
            "--profiles",
            "candidates.csv",
            "--title",
            "data analyst",
            "--skills",
            "1,2,3",
            "--weights",
            "3,2,5",
        ]);
        match args.command {
            Command::Match(match_args) => {
                assert_eq!(match_args.title, "data analyst");
                assert_eq!(match_args.skills, Some(vec![1, 2, 3]));
                assert_eq!(match_args.weights, Some(vec![3, 2, 5]));
                assert_eq!(match_args.mode, MatchMode::Recruiter);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args =
            ShortlistArgs::parse_from(["shortlist", "list-postings", "--postings", "jobs.csv"]);
        assert_eq!(args.verbosity(), 1);

        let args = ShortlistArgs::parse_from([
            "shortlist",
            "-q",
            "list-postings",
            "--postings",
            "jobs.csv",
        ]);
        assert_eq!(args.verbosity(), 0);
    }
}
