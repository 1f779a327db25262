//! Description analysis: scoring free text against the warning taxonomy.
//!
//! The [`Analyzer`] walks every taxonomy category and reports the ones whose
//! trigger phrases appear in the text, either verbatim (case-insensitive
//! substring) or as a close fuzzy match. Matching is deterministic and free
//! of side effects: repeated calls with identical input return identical
//! category sets.

mod fuzzy;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::taxonomy::Taxonomy;

pub use fuzzy::partial_ratio;

/// Default fuzzy-match threshold on the 0-100 partial-ratio scale.
pub const DEFAULT_THRESHOLD: u8 = 80;

/// Errors raised by [`Analyzer::analyze`].
///
/// These signal caller programming errors, not recoverable runtime
/// conditions, and are propagated rather than swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// Threshold outside the 0-100 partial-ratio scale
    #[error("fuzzy threshold {value} is out of range\n  Suggestion: pass a threshold between 0 and 100")]
    InvalidThreshold {
        /// The rejected threshold value
        value: u16,
    },
}

/// The set of category identifiers that matched a given text.
///
/// Entries are unique and carried in taxonomy iteration order, which is
/// stable for display; correctness never depends on the ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    matched: Vec<String>,
}

impl AnalysisResult {
    /// True when no category was triggered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    /// Number of triggered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    /// True when the named category was triggered.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.matched.iter().any(|name| name == category)
    }

    /// Triggered category names in taxonomy iteration order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.matched
    }
}

impl fmt::Display for AnalysisResult {
    /// Comma-joined category names, e.g. `"Self-Harm/Suicide, Violence & Graphic Content"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matched.join(", "))
    }
}

/// Scores description text against a shared read-only [`Taxonomy`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    taxonomy: Arc<Taxonomy>,
}

impl Analyzer {
    /// Creates an analyzer over the given taxonomy.
    #[must_use]
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    /// The taxonomy this analyzer scores against.
    #[must_use]
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Analyzes `text` and returns the triggered categories.
    ///
    /// The text is lowercased once; each category is scanned phrase by
    /// phrase, and a phrase matches when it occurs as a literal substring or
    /// its partial fuzzy ratio against the text exceeds `threshold`. The
    /// first matching phrase short-circuits the rest of its category.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::InvalidThreshold`] when `threshold > 100`.
    #[instrument(skip(self, text), fields(text_len = text.len(), threshold))]
    pub fn analyze(&self, text: &str, threshold: u8) -> Result<AnalysisResult, AnalyzeError> {
        if threshold > 100 {
            return Err(AnalyzeError::InvalidThreshold {
                value: u16::from(threshold),
            });
        }

        let normalized = text.to_lowercase();
        let mut matched = Vec::new();

        for category in self.taxonomy.categories() {
            for phrase in category.phrases() {
                if normalized.contains(phrase.as_str())
                    || partial_ratio(phrase, &normalized) > threshold
                {
                    matched.push(category.name().to_string());
                    break;
                }
            }
        }

        debug!(triggered = matched.len(), "Description analyzed");
        Ok(AnalysisResult { matched })
    }

    /// Analyzes `text` with the default threshold of [`DEFAULT_THRESHOLD`].
    ///
    /// # Errors
    ///
    /// Infallible in practice (the default threshold is in range); kept as a
    /// `Result` so the signature matches [`Analyzer::analyze`].
    pub fn analyze_default(&self, text: &str) -> Result<AnalysisResult, AnalyzeError> {
        self.analyze(text, DEFAULT_THRESHOLD)
    }
}
