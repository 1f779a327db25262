//! Catalog provider clients for candidate book records and descriptions.
//!
//! Two external providers are supported, each behind the same narrow
//! [`CatalogClient`] capability:
//!
//! - [`GoogleBooksClient`] - volume search plus ISBN-based description fetch;
//!   exposes purchase links and cover thumbnails inline with search results
//! - [`OpenLibraryClient`] - work search plus a second fetch against the work
//!   page, scraped for the description block; never exposes an image
//!
//! A record's description locator is a tagged union so a fetch can only be
//! routed back to the provider that minted it; handing a locator to the wrong
//! provider fails safely with [`CatalogError::LocatorMismatch`] instead of
//! silently fetching an unrelated description.
//!
//! Failure contract: transport or non-success-status errors surface as
//! [`CatalogError::UpstreamUnavailable`]; unexpected response shapes degrade
//! to "no results". The [`Catalog`] router absorbs fetch failures into an
//! empty description so rating degrades gracefully.

mod error;
mod google;
mod http_client;
mod open_library;

pub use error::CatalogError;
pub use google::GoogleBooksClient;
pub use open_library::OpenLibraryClient;

use std::fmt;

use async_trait::async_trait;
use tracing::warn;

/// Author placeholder used when a provider omits author names.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Which external provider produced a record or minted a locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Google Books volumes API
    GoogleBooks,
    /// Open Library search API and work pages
    OpenLibrary,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoogleBooks => write!(f, "Google Books"),
            Self::OpenLibrary => write!(f, "Open Library"),
        }
    }
}

/// Provider-specific reference used to fetch a record's full description.
///
/// Locators are opaque to everything except the provider that minted them
/// and are not portable across providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionLocator {
    /// Google Books industry identifier (ISBN); `None` when the volume
    /// carried no identifier, in which case the fetch yields no description.
    GoogleVolume {
        /// First industry identifier from the volume, when present
        isbn: Option<String>,
    },
    /// Open Library work key, e.g. `/works/OL45804W`
    OpenLibraryWork {
        /// The work key path component
        key: String,
    },
}

impl DescriptionLocator {
    /// The provider that minted this locator.
    #[must_use]
    pub fn provider(&self) -> ProviderKind {
        match self {
            Self::GoogleVolume { .. } => ProviderKind::GoogleBooks,
            Self::OpenLibraryWork { .. } => ProviderKind::OpenLibrary,
        }
    }
}

/// One book as seen from one provider, prior to description fetch.
///
/// Constructed immediately from one provider response item and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Title as returned by the provider (records with empty titles are dropped)
    pub title: String,
    /// Comma-joined author names, or [`UNKNOWN_AUTHOR`] when absent
    pub author: String,
    /// Provider-specific description locator
    pub locator: DescriptionLocator,
    /// Purchase/info link, when the provider exposes one
    pub info_link: Option<String>,
    /// Cover image reference, when the provider exposes one
    pub cover_url: Option<String>,
    /// First publication year, when the provider exposes one
    pub first_publish_year: Option<i64>,
}

impl CandidateRecord {
    /// The provider that produced this record.
    #[must_use]
    pub fn provider(&self) -> ProviderKind {
        self.locator.provider()
    }

    /// De-duplication key: the exact `(title, author)` pair as produced by
    /// the provider adapter. No cross-provider fuzzy matching.
    #[must_use]
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.title, &self.author)
    }
}

/// A fetched long-form description with an optional cover reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedDescription {
    /// The description text; empty when the provider has none
    pub text: String,
    /// Cover image URL discovered during the fetch, when available
    pub cover_url: Option<String>,
}

impl FetchedDescription {
    /// True when no usable description text was fetched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Capability implemented once per catalog provider.
///
/// # Object Safety
///
/// This trait uses `async_trait` to support dynamic dispatch via
/// `Box<dyn CatalogClient>`. Rust 2024 native async traits are not
/// object-safe, so `async_trait` is required for the catalog routing pattern.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// The provider this client talks to.
    fn provider(&self) -> ProviderKind;

    /// Searches the provider for candidate records matching a title and an
    /// optional author (`""` means no author constraint).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UpstreamUnavailable`] on transport failure or
    /// a non-success status. Unexpected response shapes are not errors: they
    /// degrade to an empty result list.
    async fn search(&self, title: &str, author: &str) -> Result<Vec<CandidateRecord>, CatalogError>;

    /// Fetches the long-form description behind a locator this provider minted.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::LocatorMismatch`] for a foreign locator and
    /// [`CatalogError::UpstreamUnavailable`] on transport failure. A provider
    /// that genuinely has no description returns an empty
    /// [`FetchedDescription`], not an error.
    async fn fetch_description(
        &self,
        locator: &DescriptionLocator,
    ) -> Result<FetchedDescription, CatalogError>;
}

/// Ordered set of catalog clients with description-fetch routing.
///
/// Client order is the provider precedence used by aggregation: all of the
/// first client's results appear before the second's.
pub struct Catalog {
    clients: Vec<Box<dyn CatalogClient>>,
}

impl Catalog {
    /// Builds the default catalog: Google Books first, then Open Library.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ClientConstruction`] when an HTTP client
    /// cannot be built.
    pub fn with_default_providers() -> Result<Self, CatalogError> {
        Ok(Self::from_clients(vec![
            Box::new(GoogleBooksClient::new()?),
            Box::new(OpenLibraryClient::new()?),
        ]))
    }

    /// Builds a catalog from pre-constructed clients, preserving their order.
    #[must_use]
    pub fn from_clients(clients: Vec<Box<dyn CatalogClient>>) -> Self {
        Self { clients }
    }

    /// The clients in provider-precedence order.
    #[must_use]
    pub fn clients(&self) -> &[Box<dyn CatalogClient>] {
        &self.clients
    }

    /// Fetches a record's description from the provider that produced it.
    ///
    /// Routing follows the record's locator tag. Any failure is surfaced as
    /// a warning and absorbed into an empty description so downstream rating
    /// degrades to "no description" instead of crashing.
    pub async fn fetch_description(&self, record: &CandidateRecord) -> FetchedDescription {
        let provider = record.provider();
        let Some(client) = self.clients.iter().find(|c| c.provider() == provider) else {
            warn!(%provider, title = %record.title, "No client registered for provider; returning empty description");
            return FetchedDescription::default();
        };

        match client.fetch_description(&record.locator).await {
            Ok(fetched) => fetched,
            Err(error) => {
                warn!(%provider, title = %record.title, error = %error, "Description fetch failed; degrading to empty description");
                FetchedDescription::default()
            }
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let providers: Vec<ProviderKind> = self.clients.iter().map(|c| c.provider()).collect();
        f.debug_struct("Catalog")
            .field("providers", &providers)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_provider_tags() {
        let google = DescriptionLocator::GoogleVolume {
            isbn: Some("9780441172719".to_string()),
        };
        let open_library = DescriptionLocator::OpenLibraryWork {
            key: "/works/OL45804W".to_string(),
        };
        assert_eq!(google.provider(), ProviderKind::GoogleBooks);
        assert_eq!(open_library.provider(), ProviderKind::OpenLibrary);
    }

    #[test]
    fn test_record_provider_follows_locator() {
        let record = CandidateRecord {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            locator: DescriptionLocator::OpenLibraryWork {
                key: "/works/OL45804W".to_string(),
            },
            info_link: None,
            cover_url: None,
            first_publish_year: Some(1965),
        };
        assert_eq!(record.provider(), ProviderKind::OpenLibrary);
        assert_eq!(record.dedup_key(), ("Dune", "Frank Herbert"));
    }

    #[test]
    fn test_fetched_description_emptiness() {
        assert!(FetchedDescription::default().is_empty());
        assert!(
            FetchedDescription {
                text: "   ".to_string(),
                cover_url: None,
            }
            .is_empty()
        );
        assert!(
            !FetchedDescription {
                text: "A desert planet.".to_string(),
                cover_url: None,
            }
            .is_empty()
        );
    }

    #[test]
    fn test_provider_kind_display() {
        assert_eq!(ProviderKind::GoogleBooks.to_string(), "Google Books");
        assert_eq!(ProviderKind::OpenLibrary.to_string(), "Open Library");
    }
}
