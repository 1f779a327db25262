//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bookwarden_core::{DEFAULT_PER_SOURCE_LIMIT, DEFAULT_THRESHOLD};

/// Scan book descriptions from public catalogs for content warnings.
///
/// Bookwarden searches Google Books and Open Library for a title, merges the
/// candidate lists, and classifies the selected book's description against a
/// fixed set of content-warning categories.
#[derive(Parser, Debug)]
#[command(name = "bookwarden")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Load warning categories from a JSON file instead of the built-in set
    #[arg(long, global = true, value_name = "FILE")]
    pub taxonomy: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a block of text against the warning categories
    Analyze {
        /// Text to analyze
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the text to analyze from a file
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Fuzzy-match threshold (0-100)
        #[arg(long, default_value_t = DEFAULT_THRESHOLD, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: u8,
    },

    /// Search both catalogs and list the merged candidates
    Search {
        /// Book title to search for
        title: String,

        /// Author name to narrow the search
        #[arg(short, long, default_value = "")]
        author: String,

        /// Maximum unique entries kept per catalog (1-10)
        #[arg(short, long, default_value_t = DEFAULT_PER_SOURCE_LIMIT, value_parser = limit_in_range)]
        limit: usize,
    },

    /// Search, pick a candidate, and print its content-warning summary
    Rate {
        /// Book title to search for
        title: String,

        /// Author name to narrow the search
        #[arg(short, long, default_value = "")]
        author: String,

        /// 1-based position of the candidate to rate
        #[arg(short, long, default_value_t = 1)]
        pick: usize,

        /// Maximum unique entries kept per catalog (1-10)
        #[arg(short, long, default_value_t = DEFAULT_PER_SOURCE_LIMIT, value_parser = limit_in_range)]
        limit: usize,
    },
}

fn limit_in_range(value: &str) -> Result<usize, String> {
    let parsed: usize = value.parse().map_err(|_| format!("'{value}' is not a number"))?;
    if (1..=10).contains(&parsed) {
        Ok(parsed)
    } else {
        Err(format!("limit must be between 1 and 10, got {parsed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_analyze_with_text_parses() {
        let args = Args::try_parse_from(["bookwarden", "analyze", "--text", "a murder"]).unwrap();
        match args.command {
            Command::Analyze {
                text, threshold, ..
            } => {
                assert_eq!(text.as_deref(), Some("a murder"));
                assert_eq!(threshold, DEFAULT_THRESHOLD);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_analyze_text_and_file_conflict() {
        let result = Args::try_parse_from([
            "bookwarden",
            "analyze",
            "--text",
            "x",
            "--file",
            "/tmp/desc.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_analyze_threshold_out_of_range_rejected() {
        let result =
            Args::try_parse_from(["bookwarden", "analyze", "--text", "x", "--threshold", "101"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_search_defaults() {
        let args = Args::try_parse_from(["bookwarden", "search", "Dune"]).unwrap();
        match args.command {
            Command::Search {
                title,
                author,
                limit,
            } => {
                assert_eq!(title, "Dune");
                assert_eq!(author, "");
                assert_eq!(limit, DEFAULT_PER_SOURCE_LIMIT);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rate_with_author_and_pick() {
        let args = Args::try_parse_from([
            "bookwarden",
            "rate",
            "Dune",
            "--author",
            "Frank Herbert",
            "--pick",
            "2",
        ])
        .unwrap();
        match args.command {
            Command::Rate {
                title,
                author,
                pick,
                ..
            } => {
                assert_eq!(title, "Dune");
                assert_eq!(author, "Frank Herbert");
                assert_eq!(pick, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_limit_out_of_range_rejected() {
        let result = Args::try_parse_from(["bookwarden", "search", "Dune", "--limit", "11"]);
        assert!(result.is_err());
        let result = Args::try_parse_from(["bookwarden", "search", "Dune", "--limit", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_verbose_flag_is_global() {
        let args = Args::try_parse_from(["bookwarden", "search", "Dune", "-v"]).unwrap();
        assert_eq!(args.verbose, 1);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let result = Args::try_parse_from(["bookwarden", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
