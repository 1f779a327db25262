//! Bookwarden Core Library
//!
//! This library classifies free-text book descriptions into a fixed set of
//! content-warning categories using keyword and approximate string matching,
//! and reconciles book metadata from independent catalog providers into a
//! single de-duplicated candidate list.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`taxonomy`] - Immutable registry of warning categories and trigger phrases
//! - [`analyzer`] - Scores description text against the taxonomy
//! - [`catalog`] - Per-provider catalog clients (Google Books, Open Library)
//! - [`aggregate`] - Merges and bounds candidate lists from both providers
//! - [`compose`] - Produces the final displayable warning summary

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod analyzer;
pub mod catalog;
pub mod compose;
pub mod taxonomy;

// Re-export commonly used types
pub use aggregate::{DEFAULT_PER_SOURCE_LIMIT, ResultAggregator};
pub use analyzer::{AnalysisResult, AnalyzeError, Analyzer, DEFAULT_THRESHOLD};
pub use catalog::{
    CandidateRecord, Catalog, CatalogClient, CatalogError, DescriptionLocator, FetchedDescription,
    GoogleBooksClient, OpenLibraryClient, ProviderKind,
};
pub use compose::{RatingComposer, WarningReason, WarningSummary};
pub use taxonomy::{Category, Taxonomy, TaxonomyError};
