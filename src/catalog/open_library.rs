//! Open Library catalog client.
//!
//! Search goes through `search.json` with field selection and a result
//! limit. Descriptions require a second fetch against the work page, whose
//! HTML is scraped for the description block; this path never exposes a
//! cover image.

use std::sync::LazyLock;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::{debug, warn};

use super::http_client::build_catalog_http_client;
use super::{
    CandidateRecord, CatalogClient, CatalogError, DescriptionLocator, FetchedDescription,
    ProviderKind, UNKNOWN_AUTHOR,
};

/// Default Open Library base URL (search API and work pages share a host).
const DEFAULT_BASE_URL: &str = "https://openlibrary.org";

/// Result-limit parameter sent with every search.
const SEARCH_LIMIT: u8 = 10;

/// Fields requested from the search API.
const SEARCH_FIELDS: &str = "key,title,author_name,first_publish_year";

/// Compiles a CSS selector at static init; panics on an invalid pattern.
fn compile_static_selector(selector: &str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("invalid static selector '{selector}': {e:?}"))
}

/// Primary description container on a work page.
static DESCRIPTION_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector("div.work-description-content.restricted-view"));

/// Fallback container used by some work page layouts.
static DESCRIPTION_FALLBACK: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector("div.read-more__content"));

static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("p"));

// ==================== Open Library API Response Types ====================

/// Top-level search response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    docs: Option<Vec<SearchDoc>>,
}

/// One `doc` entry from a search response.
#[derive(Debug, Deserialize)]
struct SearchDoc {
    key: Option<String>,
    title: Option<String>,
    author_name: Option<Vec<String>>,
    first_publish_year: Option<i64>,
}

// ==================== OpenLibraryClient ====================

/// Catalog client for the Open Library search API and work pages.
pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
}

impl OpenLibraryClient {
    /// Creates a client against the production Open Library endpoint.
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
            client: build_catalog_http_client(ProviderKind::OpenLibrary)?,
            base_url: base_url.into(),
        })
    }
}

impl std::fmt::Debug for OpenLibraryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenLibraryClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogClient for OpenLibraryClient {
    fn provider(&self) -> ProviderKind {
        ProviderKind::OpenLibrary
    }

    #[tracing::instrument(skip(self), fields(provider = "open-library", title = %title))]
    async fn search(&self, title: &str, author: &str) -> Result<Vec<CandidateRecord>, CatalogError> {
        let url = format!("{}/search.json", self.base_url);
        let mut params = vec![
            ("title", title.to_string()),
            ("fields", SEARCH_FIELDS.to_string()),
            ("limit", SEARCH_LIMIT.to_string()),
        ];
        if !author.is_empty() {
            params.push(("author", author.to_string()));
        }

        debug!(api_url = %url, "Searching Open Library");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|error| {
                warn!(error = %error, "Open Library request failed");
                CatalogError::unavailable(
                    ProviderKind::OpenLibrary,
                    "cannot reach the Open Library API",
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Open Library returned an error status");
            return Err(CatalogError::unavailable(
                ProviderKind::OpenLibrary,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        match response.json::<SearchResponse>().await {
            Ok(parsed) => Ok(map_docs(parsed)),
            Err(error) => {
                // Unexpected body shape degrades to "no results", not an error.
                warn!(error = %error, "Unexpected Open Library response shape");
                Ok(Vec::new())
            }
        }
    }

    #[tracing::instrument(skip(self, locator), fields(provider = "open-library"))]
    async fn fetch_description(
        &self,
        locator: &DescriptionLocator,
    ) -> Result<FetchedDescription, CatalogError> {
        let key = match locator {
            DescriptionLocator::OpenLibraryWork { key } => key,
            foreign => {
                return Err(CatalogError::LocatorMismatch {
                    minted_by: foreign.provider(),
                    routed_to: ProviderKind::OpenLibrary,
                });
            }
        };

        let url = format!("{}{key}", self.base_url);
        debug!(page_url = %url, "Fetching Open Library work page");

        let response = self.client.get(&url).send().await.map_err(|error| {
            warn!(error = %error, "Open Library work page request failed");
            CatalogError::unavailable(
                ProviderKind::OpenLibrary,
                "cannot reach the Open Library work page",
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::unavailable(
                ProviderKind::OpenLibrary,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        let body = response.text().await.map_err(|error| {
            CatalogError::unexpected(ProviderKind::OpenLibrary, error.to_string())
        })?;

        // Absence of the description block means "no description", not a failure.
        Ok(FetchedDescription {
            text: extract_work_description(&body),
            cover_url: None,
        })
    }
}

// ==================== Extraction Helpers ====================

/// Maps a search response into candidate records.
///
/// Docs without a title or work key are dropped; missing authors become
/// [`UNKNOWN_AUTHOR`].
fn map_docs(response: SearchResponse) -> Vec<CandidateRecord> {
    let docs = response.docs.unwrap_or_default();
    let mut records = Vec::with_capacity(docs.len());

    for doc in docs {
        let Some(title) = doc.title.filter(|t| !t.is_empty()) else {
            debug!("Dropping Open Library doc without a title");
            continue;
        };
        let Some(key) = doc.key.filter(|k| !k.is_empty()) else {
            debug!(%title, "Dropping Open Library doc without a work key");
            continue;
        };

        let author = match doc.author_name {
            Some(names) if !names.is_empty() => names.join(", "),
            _ => UNKNOWN_AUTHOR.to_string(),
        };

        records.push(CandidateRecord {
            title,
            author,
            locator: DescriptionLocator::OpenLibraryWork { key },
            info_link: None,
            cover_url: None,
            first_publish_year: doc.first_publish_year,
        });
    }

    records
}

/// Scrapes the description block out of a work page.
///
/// Looks for the primary description container, falling back to the
/// `read-more` layout, and concatenates its paragraph text in document
/// order. Returns an empty string when neither block is present.
fn extract_work_description(html: &str) -> String {
    let document = Html::parse_document(html);

    let block = document
        .select(&DESCRIPTION_BLOCK)
        .next()
        .or_else(|| document.select(&DESCRIPTION_FALLBACK).next());

    let Some(block) = block else {
        return String::new();
    };

    let paragraphs: Vec<String> = block
        .select(&PARAGRAPH)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    paragraphs.join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_map_docs_builds_records_with_work_locators() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "docs": [{
                "key": "/works/OL45804W",
                "title": "Dune",
                "author_name": ["Frank Herbert"],
                "first_publish_year": 1965
            }]
        }))
        .unwrap();

        let records = map_docs(response);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Dune");
        assert_eq!(records[0].author, "Frank Herbert");
        assert_eq!(records[0].first_publish_year, Some(1965));
        assert_eq!(
            records[0].locator,
            DescriptionLocator::OpenLibraryWork {
                key: "/works/OL45804W".to_string()
            }
        );
        assert!(records[0].cover_url.is_none(), "work search has no images");
    }

    #[test]
    fn test_map_docs_drops_untitled_and_keyless_docs() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "docs": [
                {"key": "/works/OL1W"},
                {"title": "Keyless Wonder"},
                {"key": "/works/OL2W", "title": "Kept"}
            ]
        }))
        .unwrap();

        let records = map_docs(response);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Kept");
        assert_eq!(records[0].author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_extract_work_description_concatenates_paragraphs() {
        let html = r#"
            <html><body>
            <div class="work-description-content restricted-view">
                <p>First paragraph.</p>
                <p>  Second paragraph.  </p>
            </div>
            </body></html>
        "#;
        assert_eq!(
            extract_work_description(html),
            "First paragraph. Second paragraph."
        );
    }

    #[test]
    fn test_extract_work_description_uses_read_more_fallback() {
        let html = r#"
            <html><body>
            <div class="read-more__content"><p>Fallback text.</p></div>
            </body></html>
        "#;
        assert_eq!(extract_work_description(html), "Fallback text.");
    }

    #[test]
    fn test_extract_work_description_prefers_primary_block() {
        let html = r#"
            <html><body>
            <div class="work-description-content restricted-view"><p>Primary.</p></div>
            <div class="read-more__content"><p>Fallback.</p></div>
            </body></html>
        "#;
        assert_eq!(extract_work_description(html), "Primary.");
    }

    #[test]
    fn test_extract_work_description_missing_block_is_empty() {
        let html = "<html><body><p>Unrelated.</p></body></html>";
        assert_eq!(extract_work_description(html), "");
    }

    #[tokio::test]
    async fn test_fetch_description_rejects_foreign_locator() {
        let client = OpenLibraryClient::with_base_url("http://localhost:1").unwrap();
        let locator = DescriptionLocator::GoogleVolume {
            isbn: Some("9780441172719".to_string()),
        };
        let err = client.fetch_description(&locator).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::LocatorMismatch {
                minted_by: ProviderKind::GoogleBooks,
                routed_to: ProviderKind::OpenLibrary,
            }
        ));
    }
}
