/// Connection settings for the catalog service.
use std::time::Duration;

/// Production catalog endpoint. The installation serves a self-signed
/// certificate on a non-standard port.
pub const DEFAULT_BASE_URL: &str = "https://geonetwork.guarulhos.sp.gov.br:8443/geonetwork";

/// Language segment of the legacy search path (`/srv/{lang}/xml.search`).
pub const DEFAULT_LANGUAGE: &str = "por";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings the client is built from.
///
/// [`CatalogConfig::default`] carries the production values; the only
/// runtime override is the base URL, via the global `--endpoint` flag.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog installation, without the service path.
    pub base_url: String,
    /// Language path segment.
    pub language: String,
    /// Timeout applied to the whole request.
    pub timeout: Duration,
    /// Skip TLS certificate validation. Required for the production
    /// endpoint's self-signed certificate.
    pub accept_invalid_certs: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            language: DEFAULT_LANGUAGE.to_owned(),
            timeout: REQUEST_TIMEOUT,
            accept_invalid_certs: true,
        }
    }
}
