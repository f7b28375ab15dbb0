//! Catalog fetch client
//!
//! Generic request/decode and request/raw-bytes operations against the
//! catalog API, surfacing the uniform [`Error`](crate::Error) outcome. The
//! client is an explicitly constructed value meant to be injected into the
//! aggregation pipeline; tests construct one against a mock server's origin.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::publishers::DEFAULT_API_ORIGIN;

/// Default origin cover path fragments are resolved against
///
/// The catalog serves API responses from `api.fantlab.ru` but hosts cover
/// images on the site origin, so the two are configured separately.
pub const DEFAULT_IMAGE_ORIGIN: &str = "https://fantlab.ru";

/// Request timeout applied to every fetch
const FETCH_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the catalog API
///
/// Wraps a [`reqwest::Client`] with the two origins requests are issued
/// against. Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    api_origin: Url,
    image_origin: Url,
}

impl CatalogClient {
    /// Create a client against the real catalog origins
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let api_origin = Url::parse(DEFAULT_API_ORIGIN).map_err(|source| Error::InvalidOrigin {
            origin: DEFAULT_API_ORIGIN.to_string(),
            source,
        })?;
        let image_origin =
            Url::parse(DEFAULT_IMAGE_ORIGIN).map_err(|source| Error::InvalidOrigin {
                origin: DEFAULT_IMAGE_ORIGIN.to_string(),
                source,
            })?;
        Self::with_origins(api_origin, image_origin)
    }

    /// Create a client against explicit API and image origins
    ///
    /// Used by tests to point the client at a mock server.
    ///
    /// # Errors
    /// Returns [`Error::Transport`] if the underlying HTTP client cannot
    /// be built.
    pub fn with_origins(api_origin: Url, image_origin: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(concat!("pubplans/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            api_origin,
            image_origin,
        })
    }

    /// The API origin this client issues catalog requests against
    pub fn api_origin(&self) -> &Url {
        &self.api_origin
    }

    /// Compose the work detail URL for a work identifier (`GET /work/{workId}`)
    ///
    /// # Errors
    /// Returns [`Error::InvalidOrigin`] if the configured API origin cannot
    /// serve as a base URL.
    pub fn work_url(&self, work_id: i64) -> Result<Url> {
        self.api_origin
            .join(&format!("/work/{work_id}"))
            .map_err(|source| Error::InvalidOrigin {
                origin: self.api_origin.to_string(),
                source,
            })
    }

    /// Join the image origin with a cover path fragment
    ///
    /// Returns `None` for empty or unparseable fragments; the caller treats
    /// that as "no cover available", not as an error.
    pub fn resolve_cover_url(&self, fragment: &str) -> Option<Url> {
        if fragment.is_empty() {
            return None;
        }
        self.image_origin.join(fragment).ok()
    }

    /// Fetch a URL and decode its JSON body into `T`
    ///
    /// Validates a success status before reading the body. Absent or null
    /// optional fields in the response are decoded as unset, never as a
    /// decode failure.
    ///
    /// # Errors
    /// [`Error::Transport`] on network failure, [`Error::BadStatus`] on a
    /// non-2xx response, [`Error::Decode`] on schema mismatch. No retries are
    /// performed; a single failed attempt is reported immediately.
    pub async fn fetch_decoded<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "fetching and decoding");
        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::BadStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch a URL and return its raw body bytes
    ///
    /// Same status validation as [`fetch_decoded`](Self::fetch_decoded);
    /// used for cover images, with no content-type negotiation.
    ///
    /// # Errors
    /// [`Error::Transport`] on network failure, [`Error::BadStatus`] on a
    /// non-2xx response.
    pub async fn fetch_bytes(&self, url: Url) -> Result<Vec<u8>> {
        debug!(%url, "fetching bytes");
        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::BadStatus {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
