use catalog_core::{
    ident, ModelLookup, SearchParams, SearchResult, StatsSnapshot, TransportError,
    TransportErrorKind, TrendingResult,
};
use catalog_logging::{catalog_debug, catalog_warn};
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use url::Url;

use crate::settings::{ApiSettings, ConfigError};
use crate::wire::{WireModel, WireSearch, WireStats, WireTrending};

/// Trending entries requested when the caller has no preference.
pub const DEFAULT_TRENDING_LIMIT: u32 = 20;

/// The four backend operations the client views depend on.
///
/// Every failure is normalized to [`TransportError`]; nothing transport-specific
/// escapes an implementation.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    async fn search(&self, params: &SearchParams) -> Result<SearchResult, TransportError>;

    async fn get_model(&self, id: &str) -> Result<ModelLookup, TransportError>;

    async fn get_trending(&self, limit: u32) -> Result<TrendingResult, TransportError>;

    async fn get_stats(&self) -> Result<StatsSnapshot, TransportError>;
}

/// HTTP implementation of [`CatalogApi`]. Build once at startup and share.
#[derive(Debug, Clone)]
pub struct ReqwestCatalogClient {
    client: reqwest::Client,
    root: Url,
    max_bytes: u64,
}

impl ReqwestCatalogClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ConfigError> {
        let root = settings.api_root()?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ConfigError::HttpClient(err.to_string()))?;
        Ok(Self {
            client,
            root,
            max_bytes: settings.max_bytes,
        })
    }

    pub fn api_root(&self) -> &Url {
        &self.root
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.root
            .join(path)
            .map_err(|err| TransportError::new(TransportErrorKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, TransportError> {
        catalog_debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(
                TransportErrorKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(too_large(self.max_bytes, content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(too_large(self.max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }
        catalog_debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        serde_json::from_slice(&body).map_err(|err| {
            catalog_warn!("undecodable body from {}: {}", url, err);
            TransportError::new(TransportErrorKind::Decode, err.to_string())
        })
    }
}

#[async_trait::async_trait]
impl CatalogApi for ReqwestCatalogClient {
    async fn search(&self, params: &SearchParams) -> Result<SearchResult, TransportError> {
        let mut url = self.endpoint("search")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("q", &params.query);
            query.append_pair("per_page", &params.page_size.to_string());
            if let Some(tag) = params.pipeline_tag.as_deref() {
                query.append_pair("pipeline_tag", tag);
            }
        }
        let wire: WireSearch = self.get_json(url).await?;
        Ok(wire.into())
    }

    async fn get_model(&self, id: &str) -> Result<ModelLookup, TransportError> {
        ident::validate(id)
            .map_err(|err| TransportError::new(TransportErrorKind::InvalidUrl, err.to_string()))?;
        let url = self.endpoint(&format!("models/{}", ident::encode(id)))?;
        let wire: WireModel = self.get_json(url).await?;
        Ok(wire.into_lookup())
    }

    async fn get_trending(&self, limit: u32) -> Result<TrendingResult, TransportError> {
        let mut url = self.endpoint("trending")?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        let wire: WireTrending = self.get_json(url).await?;
        Ok(wire.into())
    }

    async fn get_stats(&self) -> Result<StatsSnapshot, TransportError> {
        let url = self.endpoint("stats")?;
        let wire: WireStats = self.get_json(url).await?;
        Ok(wire.into())
    }
}

fn too_large(max_bytes: u64, actual: u64) -> TransportError {
    TransportError::new(
        TransportErrorKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(TransportErrorKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return TransportError::new(TransportErrorKind::InvalidUrl, err.to_string());
    }
    TransportError::new(TransportErrorKind::Network, err.to_string())
}
