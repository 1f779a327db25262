//! Shared HTTP client construction policy for catalog clients.
//!
//! Centralizes networking defaults so both providers stay consistent on
//! timeout, user-agent, and compression. Cancellation and retry live at this
//! boundary, outside the catalog contract.

use std::time::Duration;

use reqwest::Client;

use super::{CatalogError, ProviderKind};

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// User agent shared by both provider clients.
pub(super) const USER_AGENT: &str = concat!("bookwarden/", env!("CARGO_PKG_VERSION"));

/// Builds a catalog HTTP client using shared project policy.
///
/// `provider` is used only for error attribution, not in the request headers.
///
/// # Errors
///
/// Returns [`CatalogError::ClientConstruction`] when the builder fails.
pub(super) fn build_catalog_http_client(provider: ProviderKind) -> Result<Client, CatalogError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .build()
        .map_err(|error| CatalogError::ClientConstruction {
            provider,
            reason: error.to_string(),
        })
}
