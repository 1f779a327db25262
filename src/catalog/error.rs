//! Error types for catalog provider operations.
//!
//! Catalog failures are recoverable locally: callers surface them via
//! `tracing` and degrade to empty collections rather than aborting the
//! aggregation or rating flow.

use thiserror::Error;

use super::ProviderKind;

/// Errors that can occur while talking to a catalog provider.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure or non-success HTTP status from the provider
    #[error("{provider} is unavailable: {reason}\n  Suggestion: check your network connection and try again later")]
    UpstreamUnavailable {
        /// The provider that could not be reached
        provider: ProviderKind,
        /// Why the call failed
        reason: String,
    },

    /// The provider answered with a body that could not be interpreted
    #[error("unexpected response from {provider}: {reason}")]
    UnexpectedResponse {
        /// The provider that sent the response
        provider: ProviderKind,
        /// Why the body could not be interpreted
        reason: String,
    },

    /// A description locator was routed to a provider that did not mint it
    #[error("locator minted by {minted_by} was routed to {routed_to}\n  Suggestion: fetch descriptions through the catalog that produced the record")]
    LocatorMismatch {
        /// Provider that produced the locator
        minted_by: ProviderKind,
        /// Provider that received it
        routed_to: ProviderKind,
    },

    /// HTTP client construction failed
    #[error("cannot build HTTP client for {provider}: {reason}")]
    ClientConstruction {
        /// The provider whose client failed to build
        provider: ProviderKind,
        /// Builder error detail
        reason: String,
    },
}

impl CatalogError {
    /// Creates an `UpstreamUnavailable` error.
    #[must_use]
    pub fn unavailable(provider: ProviderKind, reason: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            provider,
            reason: reason.into(),
        }
    }

    /// Creates an `UnexpectedResponse` error.
    #[must_use]
    pub fn unexpected(provider: ProviderKind, reason: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            provider,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message_names_provider_and_reason() {
        let err = CatalogError::unavailable(ProviderKind::GoogleBooks, "HTTP 503");
        let msg = err.to_string();
        assert!(msg.contains("Google Books"));
        assert!(msg.contains("HTTP 503"));
        assert!(msg.contains("Suggestion"));
    }

    #[test]
    fn test_locator_mismatch_names_both_providers() {
        let err = CatalogError::LocatorMismatch {
            minted_by: ProviderKind::OpenLibrary,
            routed_to: ProviderKind::GoogleBooks,
        };
        let msg = err.to_string();
        assert!(msg.contains("Open Library"));
        assert!(msg.contains("Google Books"));
    }
}
