/// Blocking HTTP access to the legacy `xml.search` endpoint.
use reqwest::StatusCode;
use tracing::debug;

use super::config::CatalogConfig;
use super::errors::CatalogError;
use super::records::SearchResults;
use super::translate::translate;

/// Client for one catalog installation.
///
/// Commands issue a single request per invocation, so the client is built
/// fresh from a [`CatalogConfig`] each run and holds no state beyond the
/// configured HTTP transport.
pub struct CatalogClient {
    http: reqwest::blocking::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Build a client from the given configuration.
    ///
    /// The transport applies the configured timeout to the whole request
    /// and, when the config says so, skips TLS certificate validation for
    /// the service's self-signed certificate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] when the TLS backend cannot be
    /// initialized.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Execute one search and translate the response.
    ///
    /// An empty `query` matches all records. `from` is the zero-based
    /// offset of the first result; the legacy service counts from one, so
    /// the wire window is `from + 1 ..= from + size`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Transport`] when the request cannot be executed.
    /// - [`CatalogError::HttpStatus`] when the service answers non-200.
    /// - [`CatalogError::Parse`] when the body is not a catalog document.
    pub fn search(
        &self,
        query: &str,
        from: usize,
        size: usize,
    ) -> Result<SearchResults, CatalogError> {
        let url = format!(
            "{}/srv/{}/xml.search",
            self.config.base_url.trim_end_matches('/'),
            self.config.language
        );
        let params = search_params(query, from, size);

        debug!(%url, from, size, "requesting catalog search");
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/xml")
            .query(&params)
            .send()?;
        let status = response.status();
        let body = response.bytes()?;
        debug!(status = status.as_u16(), bytes = body.len(), "catalog answered");

        if status != StatusCode::OK {
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        translate(&body)
    }
}

/// Query parameters for one search window.
///
/// The legacy service counts results from one, so the zero-based `from`
/// offset maps to the wire window `from + 1 ..= from + size`. Windows at
/// the type limit saturate instead of wrapping. The `any` term is only
/// sent for non-empty queries; omitting it means match-all.
fn search_params(query: &str, from: usize, size: usize) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("fast", "index".to_owned()),
        ("from", from.saturating_add(1).to_string()),
        ("to", from.saturating_add(size).to_string()),
        ("buildSummary", "true".to_owned()),
    ];
    if !query.is_empty() {
        params.push(("any", query.to_owned()));
    }
    params
}
