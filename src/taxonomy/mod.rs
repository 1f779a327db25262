//! Content-warning taxonomy: categories and their trigger phrases.
//!
//! A [`Taxonomy`] is an immutable, ordered registry of [`Category`] values,
//! constructed once at startup and shared read-only (typically behind an
//! `Arc`) by every analyzer invocation. There are no mutation operations.
//!
//! Two construction paths exist:
//! - [`Taxonomy::builtin`] - the compiled-in category tables
//! - [`Taxonomy::from_json_file`] - a user-supplied JSON file holding an
//!   ordered array of `{"name": "...", "phrases": ["...", ...]}` objects
//!
//! Load-time validation failure is fatal: there is no degraded mode for a
//! malformed taxonomy.

mod data;

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised while constructing a [`Taxonomy`].
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// The taxonomy file could not be read
    #[error("cannot read taxonomy file '{path}': {source}\n  Suggestion: check the path and file permissions")]
    Io {
        /// Path that failed to open
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The taxonomy file is not valid JSON in the expected shape
    #[error("malformed taxonomy file '{path}': {source}\n  Suggestion: expected a JSON array of {{\"name\", \"phrases\"}} objects")]
    Parse {
        /// Path that failed to parse
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The taxonomy contains no categories at all
    #[error("taxonomy contains no categories")]
    NoCategories,

    /// A category has an empty or missing name
    #[error("taxonomy category at position {index} has an empty name")]
    UnnamedCategory {
        /// Zero-based position in the category list
        index: usize,
    },

    /// A category has no non-empty trigger phrases
    #[error("category '{name}' has no non-empty trigger phrases")]
    EmptyCategory {
        /// The offending category name
        name: String,
    },
}

/// One content-warning category: an identifier plus its trigger phrases.
///
/// Phrases are normalized to lowercase at construction so matching never
/// re-normalizes them. Order within the phrase list is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    phrases: Vec<String>,
}

impl Category {
    /// The category identifier, e.g. `"Violence & Graphic Content"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lowercased trigger phrases, in declaration order.
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

/// JSON shape for one category in a taxonomy file.
#[derive(Debug, Deserialize)]
struct CategorySpec {
    name: String,
    phrases: Vec<String>,
}

/// Immutable registry of content-warning categories.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    /// Builds the compiled-in taxonomy.
    ///
    /// The built-in tables are validated by unit test, so this constructor
    /// is infallible.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = data::BUILTIN_CATEGORIES
            .iter()
            .map(|(name, phrases)| Category {
                name: (*name).to_string(),
                phrases: phrases.iter().map(|p| p.to_lowercase()).collect(),
            })
            .collect();
        Self { categories }
    }

    /// Loads a taxonomy from a JSON file.
    ///
    /// The file must contain an ordered JSON array of
    /// `{"name": "...", "phrases": ["...", ...]}` objects. Category order in
    /// the file becomes the taxonomy iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError`] when the file cannot be read, is not valid
    /// JSON in the expected shape, or fails validation (no categories, an
    /// unnamed category, or a category without a non-empty phrase).
    pub fn from_json_file(path: &Path) -> Result<Self, TaxonomyError> {
        let content = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let specs: Vec<CategorySpec> =
            serde_json::from_str(&content).map_err(|source| TaxonomyError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let taxonomy = Self::from_specs(specs)?;
        debug!(
            path = %path.display(),
            categories = taxonomy.categories.len(),
            "Loaded taxonomy file"
        );
        Ok(taxonomy)
    }

    fn from_specs(specs: Vec<CategorySpec>) -> Result<Self, TaxonomyError> {
        if specs.is_empty() {
            return Err(TaxonomyError::NoCategories);
        }

        let mut categories = Vec::with_capacity(specs.len());
        for (index, spec) in specs.into_iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(TaxonomyError::UnnamedCategory { index });
            }

            let phrases: Vec<String> = spec
                .phrases
                .iter()
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect();

            if phrases.is_empty() {
                return Err(TaxonomyError::EmptyCategory { name: spec.name });
            }

            categories.push(Category {
                name: spec.name,
                phrases,
            });
        }

        Ok(Self { categories })
    }

    /// The categories in iteration order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when the registry holds no categories.
    ///
    /// Cannot happen for validated taxonomies; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
