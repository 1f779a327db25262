//! Google Books catalog client.
//!
//! Search goes through the volumes API (`q=intitle:..+inauthor:..`); the
//! description fetch resolves a volume's first industry identifier (ISBN)
//! with a second `q=isbn:..` query, which also yields the cover thumbnail.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::http_client::build_catalog_http_client;
use super::{
    CandidateRecord, CatalogClient, CatalogError, DescriptionLocator, FetchedDescription,
    ProviderKind, UNKNOWN_AUTHOR,
};

/// Default Google Books API base URL.
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";

/// Result-limit parameter sent with every search.
const MAX_RESULTS: u8 = 10;

// ==================== Google Books API Response Types ====================

/// Top-level volumes response.
#[derive(Debug, Deserialize)]
struct VolumesResponse {
    items: Option<Vec<VolumeItem>>,
}

/// One item from a volumes response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeItem {
    volume_info: Option<VolumeInfo>,
}

/// The nested `volumeInfo` object.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    description: Option<String>,
    info_link: Option<String>,
    image_links: Option<ImageLinks>,
    industry_identifiers: Option<Vec<IndustryIdentifier>>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IndustryIdentifier {
    identifier: Option<String>,
}

// ==================== GoogleBooksClient ====================

/// Catalog client for the Google Books volumes API.
pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
}

impl GoogleBooksClient {
    /// Creates a client against the production Google Books endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ClientConstruction`] if the HTTP client
    /// cannot be built.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ClientConstruction`] if the HTTP client
    /// cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        Ok(Self {
            client: build_catalog_http_client(ProviderKind::GoogleBooks)?,
            base_url: base_url.into(),
        })
    }

    fn search_url(&self, title: &str, author: &str) -> String {
        let mut query = format!("intitle:{}", urlencoding::encode(title));
        if !author.is_empty() {
            query.push_str(&format!("+inauthor:{}", urlencoding::encode(author)));
        }
        format!(
            "{}/volumes?q={query}&printType=books&maxResults={MAX_RESULTS}",
            self.base_url
        )
    }

    fn isbn_url(&self, isbn: &str) -> String {
        format!("{}/volumes?q=isbn:{}", self.base_url, urlencoding::encode(isbn))
    }

    async fn get_volumes(&self, url: &str) -> Result<Option<VolumesResponse>, CatalogError> {
        let response = self.client.get(url).send().await.map_err(|error| {
            warn!(error = %error, "Google Books request failed");
            CatalogError::unavailable(
                ProviderKind::GoogleBooks,
                "cannot reach the Google Books API",
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Google Books returned an error status");
            return Err(CatalogError::unavailable(
                ProviderKind::GoogleBooks,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        match response.json::<VolumesResponse>().await {
            Ok(parsed) => Ok(Some(parsed)),
            Err(error) => {
                // Unexpected body shape degrades to "no results", not an error.
                warn!(error = %error, "Unexpected Google Books response shape");
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for GoogleBooksClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleBooksClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogClient for GoogleBooksClient {
    fn provider(&self) -> ProviderKind {
        ProviderKind::GoogleBooks
    }

    #[tracing::instrument(skip(self), fields(provider = "google-books", title = %title))]
    async fn search(&self, title: &str, author: &str) -> Result<Vec<CandidateRecord>, CatalogError> {
        let url = self.search_url(title, author);
        debug!(api_url = %url, "Searching Google Books");

        let Some(response) = self.get_volumes(&url).await? else {
            return Ok(Vec::new());
        };

        Ok(map_volumes(response))
    }

    #[tracing::instrument(skip(self, locator), fields(provider = "google-books"))]
    async fn fetch_description(
        &self,
        locator: &DescriptionLocator,
    ) -> Result<FetchedDescription, CatalogError> {
        let isbn = match locator {
            DescriptionLocator::GoogleVolume { isbn } => isbn,
            foreign => {
                return Err(CatalogError::LocatorMismatch {
                    minted_by: foreign.provider(),
                    routed_to: ProviderKind::GoogleBooks,
                });
            }
        };

        let Some(isbn) = isbn else {
            debug!("Volume has no industry identifier; no description to fetch");
            return Ok(FetchedDescription::default());
        };

        let url = self.isbn_url(isbn);
        debug!(api_url = %url, "Fetching Google Books description");

        let Some(response) = self.get_volumes(&url).await? else {
            return Ok(FetchedDescription::default());
        };

        Ok(first_description(response))
    }
}

// ==================== Extraction Helpers ====================

/// Maps a volumes response into candidate records.
///
/// Records without a title are dropped; missing authors become
/// [`UNKNOWN_AUTHOR`]. The first industry identifier, when present, becomes
/// the description locator.
fn map_volumes(response: VolumesResponse) -> Vec<CandidateRecord> {
    let items = response.items.unwrap_or_default();
    let mut records = Vec::with_capacity(items.len());

    for item in items {
        let Some(info) = item.volume_info else {
            continue;
        };
        let Some(title) = info.title.filter(|t| !t.is_empty()) else {
            debug!("Dropping Google Books item without a title");
            continue;
        };

        let author = join_authors(info.authors.as_deref());
        let isbn = info
            .industry_identifiers
            .and_then(|ids| ids.into_iter().find_map(|id| id.identifier))
            .filter(|id| !id.is_empty());

        records.push(CandidateRecord {
            title,
            author,
            locator: DescriptionLocator::GoogleVolume { isbn },
            info_link: info.info_link.filter(|l| !l.is_empty()),
            cover_url: info
                .image_links
                .and_then(|links| links.thumbnail)
                .filter(|t| !t.is_empty()),
            first_publish_year: None,
        });
    }

    records
}

/// Pulls the first volume's description and thumbnail out of an ISBN lookup.
fn first_description(response: VolumesResponse) -> FetchedDescription {
    let Some(info) = response
        .items
        .unwrap_or_default()
        .into_iter()
        .find_map(|item| item.volume_info)
    else {
        return FetchedDescription::default();
    };

    FetchedDescription {
        text: info.description.unwrap_or_default(),
        cover_url: info
            .image_links
            .and_then(|links| links.thumbnail)
            .filter(|t| !t.is_empty()),
    }
}

fn join_authors(authors: Option<&[String]>) -> String {
    match authors {
        Some(names) if !names.is_empty() => names.join(", "),
        _ => UNKNOWN_AUTHOR.to_string(),
    }
}
