//! The HTTP seam.
//!
//! [`Transport`] decouples the request pipeline from any specific HTTP
//! implementation: the client composes requests and interprets responses,
//! and a transport performs exactly one round trip per call. The production
//! implementation is [`HttpTransport`] (reqwest); tests substitute a
//! scripted transport to drive the pipeline without a network.
//!
//! Retries, connection pooling and TLS policy all live behind this seam and
//! are owned by the underlying HTTP client.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{self, HeaderMap};
use reqwest::{Client, Method};
use tracing::debug;
use url::Url;

use crate::error::Error;

/// Base URL all request paths are joined against.
pub const BASE_URL: &str = "https://api.flightplandatabase.com";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for this library.
const USER_AGENT: &str = concat!("flightplandb-rs/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Request / response shapes
// ============================================================================

/// A single API request, fully composed before it reaches the transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method. One of GET, POST, PATCH or DELETE.
    pub method: Method,
    /// Endpoint path, joined against the base URL.
    pub path: String,
    /// Query parameters. Boolean-ish values are already stringified.
    pub query: Vec<(String, String)>,
    /// `Accept` media type selecting the response format.
    pub accept: &'static str,
    /// `Authorization` header value, absent for anonymous calls.
    pub authorization: Option<String>,
    /// JSON body for POST/PATCH.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Creates a GET request for a path with no parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a request with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        ApiRequest {
            method,
            path: path.into(),
            query: Vec::new(),
            accept: crate::format::ExportFormat::Native.media_type(),
            authorization: None,
            body: None,
        }
    }
}

/// A raw API response: status, headers and undecoded body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: Bytes,
}

impl ApiResponse {
    /// Decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the body is not valid JSON for `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(Error::from)
    }

    /// Decodes the body as text, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// A response header as a string, if present and well-formed.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

// ============================================================================
// Transport trait
// ============================================================================

/// Performs one HTTP round trip per call.
///
/// Implementations must not retry and must not reorder calls; the pipeline
/// depends on one request producing exactly one response.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Executes a request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the round trip itself fails. HTTP
    /// error statuses are not errors at this layer; the pipeline maps them
    /// after inspecting the response.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, Error>;
}

// ============================================================================
// reqwest transport
// ============================================================================

/// The production [`Transport`], backed by a reqwest [`Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport against the public API with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the underlying HTTP client cannot
    /// be built, which usually indicates a broken TLS configuration.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a transport against a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] for an unparseable base URL and
    /// [`Error::Transport`] when the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url).map_err(|e| Error::InvalidUrl(e.to_string()))?;
        let inner = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(HttpTransport { inner, base_url })
    }

    fn join(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let url = self.join(&request.path)?;
        debug!(method = %request.method, url = %url, "Issuing request");

        let mut builder = self
            .inner
            .request(request.method, url)
            .header(header::ACCEPT, request.accept)
            .query(&request.query);
        if let Some(authorization) = &request.authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        debug!(status, bytes = body.len(), "Response received");

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
