use super::request::{HttpMethod, RequestOptions};
use super::response::{ApiResponse, classify};
use crate::config::BackendConfig;
use crate::error::GatewayError;
use arc_swap::ArcSwapOption;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const ORG_HEADER: HeaderName = HeaderName::from_static("x-org-id");

/// Single point of contact with the Pressroom backend.
///
/// Builds the standard headers, issues one request per call and folds the
/// answer into an [`ApiResponse`]. The underlying connection pool is created
/// on first use and shared by every concurrent caller.
pub struct GatewayClient {
    base_url: Url,
    api_key: Option<String>,
    default_org_id: Option<i64>,
    timeout: Duration,
    transport: ArcSwapOption<Client>,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .field("default_org_id", &self.default_org_id)
            .field("timeout", &self.timeout)
            .field("connected", &self.has_transport())
            .finish()
    }
}

impl GatewayClient {
    pub fn new(config: &BackendConfig) -> Result<Self, GatewayError> {
        let base_url = Url::parse(&config.url).map_err(|error| GatewayError::InvalidBaseUrl {
            url: config.url.clone(),
            message: error.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(GatewayError::InvalidBaseUrl {
                url: config.url.clone(),
                message: format!("unsupported scheme '{}'", base_url.scheme()),
            });
        }

        Ok(Self {
            base_url,
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            default_org_id: config.org_id,
            timeout: Duration::from_secs(config.timeout_secs),
            transport: ArcSwapOption::const_empty(),
        })
    }

    /// Client against `url` with no credentials and default timeout.
    pub fn with_base_url(url: &str) -> Result<Self, GatewayError> {
        Self::new(&BackendConfig {
            url: url.to_string(),
            ..BackendConfig::default()
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn default_org_id(&self) -> Option<i64> {
        self.default_org_id
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn has_transport(&self) -> bool {
        self.transport.load().is_some()
    }

    /// Drop the pooled transport; the next call builds a fresh one.
    pub fn reset(&self) {
        self.transport.store(None);
    }

    fn transport(&self) -> Arc<Client> {
        if let Some(existing) = self.transport.load_full() {
            return existing;
        }

        let fresh = Arc::new(build_pooled_client(self.timeout));
        self.transport.rcu(|current| match current {
            Some(existing) => Some(Arc::clone(existing)),
            None => Some(Arc::clone(&fresh)),
        });
        self.transport.load_full().unwrap_or(fresh)
    }

    /// Standard headers for one call. The per-call org wins over the
    /// configured default.
    pub fn headers(&self, org_id: Option<i64>) -> HeaderMap {
        self.headers_for(org_id.or(self.default_org_id))
    }

    /// Tenant sent with a call; global routes only carry an explicit org.
    fn resolve_org(&self, org_id: Option<i64>, unscoped: bool) -> Option<i64> {
        if unscoped {
            org_id
        } else {
            org_id.or(self.default_org_id)
        }
    }

    fn headers_for(&self, org_id: Option<i64>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = &self.api_key
            && let Ok(value) = HeaderValue::from_str(&format!("Bearer {key}"))
        {
            headers.insert(AUTHORIZATION, value);
        }

        if let Some(org) = org_id {
            headers.insert(ORG_HEADER, HeaderValue::from(org));
        }
        headers
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    /// Issue one request and classify the answer.
    ///
    /// `Ok` carries both success and backend-reported failure; `Err` is a
    /// transport fault or a success body that is not JSON.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, GatewayError> {
        let RequestOptions {
            org_id,
            unscoped,
            body,
            query,
        } = options;
        let org_id = self.resolve_org(org_id, unscoped);

        let mut builder = self
            .transport()
            .request(method.as_reqwest(), self.endpoint(path))
            .headers(self.headers_for(org_id));
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if method.carries_body() {
            builder = builder.json(&body.unwrap_or_else(|| json!({})));
        }

        debug!(%method, path, org_id = ?org_id, "pressroom request");

        let response = builder.send().await.map_err(|source| {
            warn!(%method, path, error = %source, "pressroom backend unreachable");
            GatewayError::Transport {
                path: path.to_string(),
                source,
            }
        })?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| GatewayError::Transport {
                path: path.to_string(),
                source,
            })?;

        let classified = classify(status, &bytes).map_err(|source| GatewayError::Decode {
            path: path.to_string(),
            status,
            source,
        })?;

        if let ApiResponse::Failure(failure) = &classified {
            warn!(%method, path, status, error = %failure.message, "pressroom call failed");
        }
        Ok(classified)
    }

    pub async fn get(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, GatewayError> {
        self.request(HttpMethod::Get, path, options).await
    }

    pub async fn post(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, GatewayError> {
        self.request(HttpMethod::Post, path, options).await
    }

    pub async fn put(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, GatewayError> {
        self.request(HttpMethod::Put, path, options).await
    }

    pub async fn patch(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, GatewayError> {
        self.request(HttpMethod::Patch, path, options).await
    }

    pub async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, GatewayError> {
        self.request(HttpMethod::Delete, path, options).await
    }

    /// `GET` on a global route: no body, no query, no tenant header.
    pub async fn get_json(&self, path: &str) -> Result<ApiResponse, GatewayError> {
        self.get(path, RequestOptions::new().unscoped()).await
    }
}

fn build_pooled_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}
