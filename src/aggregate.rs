//! Merging candidate lists from both catalog providers.
//!
//! The [`ResultAggregator`] queries every catalog client, de-duplicates each
//! provider's results on the exact `(title, author)` pair, bounds each
//! provider's contribution, and concatenates the groups in provider order.
//! There is no cross-provider de-duplication and no global re-sort: two
//! providers describing the "same" book with differently formatted metadata
//! both appear.

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, instrument, warn};

use crate::catalog::{CandidateRecord, Catalog};

/// Maximum unique entries kept per provider before concatenation.
pub const DEFAULT_PER_SOURCE_LIMIT: usize = 3;

/// Merges both providers' search results into one bounded candidate list.
#[derive(Debug, Clone)]
pub struct ResultAggregator {
    catalog: Arc<Catalog>,
    per_source_limit: usize,
}

impl ResultAggregator {
    /// Creates an aggregator with the default per-provider bound of
    /// [`DEFAULT_PER_SOURCE_LIMIT`].
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_limit(catalog, DEFAULT_PER_SOURCE_LIMIT)
    }

    /// Creates an aggregator keeping at most `per_source_limit` unique
    /// entries per provider.
    #[must_use]
    pub fn with_limit(catalog: Arc<Catalog>, per_source_limit: usize) -> Self {
        Self {
            catalog,
            per_source_limit,
        }
    }

    /// The shared catalog used for provider queries.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Searches both providers and returns the de-duplicated, bounded merge.
    ///
    /// Provider queries run concurrently, but the output is assembled
    /// positionally so the first registered provider's entries always come
    /// first regardless of completion order. A provider failure is surfaced
    /// as a warning and contributes an empty group; total provider
    /// unavailability yields an empty list, never an error.
    #[instrument(skip(self), fields(title = %title, author = %author))]
    pub async fn aggregate(&self, title: &str, author: &str) -> Vec<CandidateRecord> {
        let searches = self
            .catalog
            .clients()
            .iter()
            .map(|client| client.search(title, author));

        let mut merged = Vec::new();
        for (client, outcome) in self.catalog.clients().iter().zip(join_all(searches).await) {
            let records = match outcome {
                Ok(records) => records,
                Err(error) => {
                    warn!(provider = %client.provider(), error = %error, "Provider search failed; continuing with remaining providers");
                    Vec::new()
                }
            };
            let kept = dedup_and_bound(records, self.per_source_limit);
            debug!(provider = %client.provider(), kept = kept.len(), "Provider contribution");
            merged.extend(kept);
        }

        merged
    }
}

/// Keeps the first occurrence of each `(title, author)` key, stopping once
/// `limit` unique entries have been kept.
fn dedup_and_bound(records: Vec<CandidateRecord>, limit: usize) -> Vec<CandidateRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut unique = Vec::new();

    for record in records {
        if unique.len() >= limit {
            break;
        }
        let (title, author) = record.dedup_key();
        if seen.insert((title.to_string(), author.to_string())) {
            unique.push(record);
        }
    }

    unique
}
