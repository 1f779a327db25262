//! CLI entry point for the bookwarden tool.

use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};

use bookwarden_core::{
    Analyzer, CandidateRecord, Catalog, RatingComposer, ResultAggregator, Taxonomy, WarningSummary,
};

mod cli;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let taxonomy = match &args.taxonomy {
        Some(path) => Arc::new(
            Taxonomy::from_json_file(path)
                .with_context(|| format!("cannot load taxonomy from '{}'", path.display()))?,
        ),
        None => Arc::new(Taxonomy::builtin()),
    };
    let analyzer = Analyzer::new(taxonomy);

    match args.command {
        Command::Analyze {
            text,
            file,
            threshold,
        } => {
            let text = read_analyze_input(text, file.as_deref())?;
            let result = analyzer.analyze(&text, threshold)?;
            if result.is_empty() {
                println!("Content warnings: None");
            } else {
                println!("Content warnings: {result}");
            }
        }

        Command::Search {
            title,
            author,
            limit,
        } => {
            let aggregator = build_aggregator(limit)?;
            let candidates = aggregator.aggregate(&title, &author).await;
            print_candidates(&candidates);
        }

        Command::Rate {
            title,
            author,
            pick,
            limit,
        } => {
            let aggregator = build_aggregator(limit)?;
            let candidates = aggregator.aggregate(&title, &author).await;
            if candidates.is_empty() {
                println!("No books found with that title.");
                return Ok(());
            }
            if pick == 0 || pick > candidates.len() {
                print_candidates(&candidates);
                bail!(
                    "--pick {pick} is out of range: {} candidate(s) found",
                    candidates.len()
                );
            }

            let record = &candidates[pick - 1];
            info!(title = %record.title, provider = %record.provider(), "Rating selected record");

            let composer = RatingComposer::new(Arc::clone(aggregator.catalog()), analyzer);
            let summary = composer.rate(record).await?;
            print_summary(&summary);
        }
    }

    Ok(())
}

/// Resolves the analyze input from `--text`, `--file`, or piped stdin.
fn read_analyze_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("cannot read description file '{}'", path.display()));
    }
    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    bail!("no input provided. Pass --text, --file, or pipe text via stdin")
}

fn build_aggregator(limit: usize) -> Result<ResultAggregator> {
    let catalog = Catalog::with_default_providers().context("cannot initialize catalog clients")?;
    Ok(ResultAggregator::with_limit(Arc::new(catalog), limit))
}

fn print_candidates(candidates: &[CandidateRecord]) {
    if candidates.is_empty() {
        println!("No books found with that title.");
        return;
    }
    for (position, record) in candidates.iter().enumerate() {
        let year = record
            .first_publish_year
            .map(|y| format!(", {y}"))
            .unwrap_or_default();
        println!(
            "{}. {} by {} [{}{year}]",
            position + 1,
            record.title,
            record.author,
            record.provider(),
        );
    }
}

fn print_summary(summary: &WarningSummary) {
    println!("Title: {}", summary.record.title);
    println!("Author: {}", summary.record.author);
    println!("Rating: {}", summary.rating);
    println!("Reason: {}", summary.reason);
    if let Some(link) = &summary.record.info_link {
        println!("Purchase link: {link}");
    }
    if let Some(cover) = &summary.cover_url {
        println!("Cover: {cover}");
    }
}
