//! Composing the final displayable warning summary for a selected record.
//!
//! The [`RatingComposer`] routes the description fetch back to the record's
//! originating provider, runs the analyzer over the fetched text, and renders
//! the result. A record without a fetchable description yields a
//! "no description" summary, distinct from a description that was analyzed
//! and triggered nothing.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::analyzer::{AnalysisResult, AnalyzeError, Analyzer, DEFAULT_THRESHOLD};
use crate::catalog::{CandidateRecord, Catalog};

/// Rendered reason attached to a [`WarningSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningReason {
    /// No description could be fetched for the record
    NoDescription,
    /// A description was analyzed and triggered no categories
    NoWarnings,
    /// Comma-joined triggered category names in taxonomy iteration order
    Warnings(String),
}

impl fmt::Display for WarningReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDescription => write!(f, "No description found for this book."),
            Self::NoWarnings => write!(f, "None"),
            Self::Warnings(joined) => write!(f, "{joined}"),
        }
    }
}

/// Final output for one selected record: the record, the analysis, a numeric
/// rating (count of triggered categories), and the rendered reason.
///
/// Produced once per selection and not cached.
#[derive(Debug, Clone)]
pub struct WarningSummary {
    /// The record the caller selected
    pub record: CandidateRecord,
    /// The description text the analysis ran over (empty when none was found)
    pub description: String,
    /// Cover image URL discovered during the description fetch, when any
    pub cover_url: Option<String>,
    /// The triggered categories
    pub result: AnalysisResult,
    /// Number of triggered categories
    pub rating: usize,
    /// Rendered reason for display
    pub reason: WarningReason,
}

impl WarningSummary {
    /// True when no description was available for the record.
    #[must_use]
    pub fn has_description(&self) -> bool {
        !matches!(self.reason, WarningReason::NoDescription)
    }
}

/// Produces [`WarningSummary`] values for selected candidate records.
#[derive(Debug, Clone)]
pub struct RatingComposer {
    catalog: Arc<Catalog>,
    analyzer: Analyzer,
    threshold: u8,
}

impl RatingComposer {
    /// Creates a composer using the default fuzzy threshold of
    /// [`DEFAULT_THRESHOLD`].
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, analyzer: Analyzer) -> Self {
        Self {
            catalog,
            analyzer,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Creates a composer with a custom fuzzy threshold.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::InvalidThreshold`] when `threshold > 100`.
    pub fn with_threshold(
        catalog: Arc<Catalog>,
        analyzer: Analyzer,
        threshold: u8,
    ) -> Result<Self, AnalyzeError> {
        if threshold > 100 {
            return Err(AnalyzeError::InvalidThreshold {
                value: u16::from(threshold),
            });
        }
        Ok(Self {
            catalog,
            analyzer,
            threshold,
        })
    }

    /// Fetches the record's description, analyzes it, and composes the
    /// displayable summary.
    ///
    /// Upstream unavailability never fails this call: a failed or empty
    /// fetch produces a [`WarningReason::NoDescription`] summary.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError`] only for caller programming errors from the
    /// analyzer; the construction-time threshold check makes this
    /// unreachable in practice.
    #[instrument(skip(self, record), fields(title = %record.title, provider = %record.provider()))]
    pub async fn rate(&self, record: &CandidateRecord) -> Result<WarningSummary, AnalyzeError> {
        let fetched = self.catalog.fetch_description(record).await;

        if fetched.is_empty() {
            debug!("No description available; composing empty summary");
            return Ok(WarningSummary {
                record: record.clone(),
                description: String::new(),
                cover_url: record.cover_url.clone(),
                result: AnalysisResult::default(),
                rating: 0,
                reason: WarningReason::NoDescription,
            });
        }

        let result = self.analyzer.analyze(&fetched.text, self.threshold)?;
        let rating = result.len();
        let reason = if result.is_empty() {
            WarningReason::NoWarnings
        } else {
            WarningReason::Warnings(result.to_string())
        };

        debug!(rating, "Composed warning summary");
        Ok(WarningSummary {
            cover_url: fetched.cover_url.or_else(|| record.cover_url.clone()),
            record: record.clone(),
            description: fetched.text,
            result,
            rating,
            reason,
        })
    }
}
