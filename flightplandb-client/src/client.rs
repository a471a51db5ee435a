//! Client configuration and the request pipeline.
//!
//! [`FlightPlanDb`] owns the transport handle, the optional API key and the
//! header cache. Every call funnels through [`FlightPlanDb::request`]:
//! credentials are attached, the transport performs one round trip, the
//! header cache absorbs the response headers, and the status mapper runs
//! before anything looks at the body.
//!
//! The header cache is instance-scoped, never global, and is overwritten
//! wholesale on every response. Concurrent calls racing to populate it may
//! overwrite each other but can never produce a partially merged value.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use reqwest::Method;
use serde_json::Value;

use crate::api::{
    info::InfoApi, nav::NavApi, plan::PlanApi, tags::TagsApi, user::UserApi, weather::WeatherApi,
};
use crate::auth::basic_auth_header;
use crate::error::{check_status, Error};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

// ============================================================================
// Server headers
// ============================================================================

/// The units system used for numeric values in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Units {
    /// Feet, knots, nautical miles.
    Aviation,
    /// Meters, kilometers per hour.
    Metric,
    /// SI base units.
    Si,
}

impl Units {
    /// The wire form of this units system.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Aviation => "AVIATION",
            Units::Metric => "METRIC",
            Units::Si => "SI",
        }
    }

    fn parse(raw: &str) -> Option<Units> {
        match raw {
            "AVIATION" => Some(Units::Aviation),
            "METRIC" => Some(Units::Metric),
            "SI" => Some(Units::Si),
            _ => None,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Units::parse(s).ok_or(Error::MissingHeader("X-Units"))
    }
}

/// Quota and version headers reported by the service on every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerHeaders {
    /// `X-API-Version`: the API version that produced the response.
    pub version: Option<u32>,
    /// `X-Units`: the units system for numeric values.
    pub units: Option<Units>,
    /// `X-Limit-Cap`: allowed requests per day.
    pub limit_cap: Option<u32>,
    /// `X-Limit-Used`: requests used in the current period.
    pub limit_used: Option<u32>,
}

impl ServerHeaders {
    /// Reads the quota headers out of a response.
    pub fn from_response(response: &ApiResponse) -> Self {
        let int = |name: &str| response.header(name).and_then(|value| value.parse().ok());
        ServerHeaders {
            version: int("X-API-Version"),
            units: response.header("X-Units").and_then(Units::parse),
            limit_cap: int("X-Limit-Cap"),
            limit_used: int("X-Limit-Used"),
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// A configured Flight Plan Database client.
///
/// Cloning is cheap and clones share the transport and the header cache;
/// independent caches call for independently constructed clients.
#[derive(Debug, Clone)]
pub struct FlightPlanDb {
    transport: Arc<dyn Transport>,
    api_key: Option<String>,
    headers: Arc<RwLock<Option<ServerHeaders>>>,
}

impl FlightPlanDb {
    /// Creates an unauthenticated client against the public API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the HTTP client cannot be built.
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new()?), None))
    }

    /// Creates an authenticated client against the public API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the HTTP client cannot be built.
    pub fn with_key(api_key: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::with_transport(
            Arc::new(HttpTransport::new()?),
            Some(api_key.into()),
        ))
    }

    /// Creates a client over an arbitrary [`Transport`].
    ///
    /// This is the seam tests use to substitute a scripted transport.
    pub fn with_transport(transport: Arc<dyn Transport>, api_key: Option<String>) -> Self {
        FlightPlanDb {
            transport,
            api_key,
            headers: Arc::new(RwLock::new(None)),
        }
    }

    /// The API key this client authenticates with, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The most recently observed server headers, if any call has been made.
    pub fn cached_headers(&self) -> Option<ServerHeaders> {
        *self
            .headers
            .read()
            .expect("header cache lock poisoned")
    }

    // ------------------------------------------------------------------
    // Endpoint groups
    // ------------------------------------------------------------------

    /// Flight plan operations.
    pub fn plan(&self) -> PlanApi<'_> {
        PlanApi { client: self }
    }

    /// User profile and listing operations.
    pub fn user(&self) -> UserApi<'_> {
        UserApi { client: self }
    }

    /// Navigation data lookups.
    pub fn nav(&self) -> NavApi<'_> {
        NavApi { client: self }
    }

    /// Tag listing.
    pub fn tags(&self) -> TagsApi<'_> {
        TagsApi { client: self }
    }

    /// Weather lookups.
    pub fn weather(&self) -> WeatherApi<'_> {
        WeatherApi { client: self }
    }

    /// API status, version and quota information.
    pub fn api(&self) -> InfoApi<'_> {
        InfoApi { client: self }
    }

    // ------------------------------------------------------------------
    // Request pipeline
    // ------------------------------------------------------------------

    /// Executes a composed request: attaches credentials, absorbs the quota
    /// headers, and maps the status before the body is touched.
    pub(crate) async fn request(
        &self,
        mut request: ApiRequest,
        ignored: &[u16],
    ) -> Result<ApiResponse, Error> {
        request.authorization = self.api_key.as_deref().map(basic_auth_header);
        let response = self.transport.execute(request).await?;
        self.absorb_headers(&response);
        check_status(response.status, ignored)?;
        Ok(response)
    }

    pub(crate) async fn get(&self, path: &str) -> Result<ApiResponse, Error> {
        self.request(ApiRequest::get(path), &[]).await
    }

    pub(crate) async fn get_with(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        ignored: &[u16],
    ) -> Result<ApiResponse, Error> {
        let mut request = ApiRequest::get(path);
        request.query = query;
        self.request(request, ignored).await
    }

    pub(crate) async fn post(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, Error> {
        let mut request = ApiRequest::new(Method::POST, path);
        request.body = body;
        self.request(request, &[]).await
    }

    pub(crate) async fn patch(&self, path: &str, body: Value) -> Result<ApiResponse, Error> {
        let mut request = ApiRequest::new(Method::PATCH, path);
        request.body = Some(body);
        self.request(request, &[]).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<ApiResponse, Error> {
        self.request(ApiRequest::new(Method::DELETE, path), &[]).await
    }

    /// Replaces the header cache with the headers of the latest response.
    /// Always a complete replacement, never a partial merge.
    fn absorb_headers(&self, response: &ApiResponse) {
        let parsed = ServerHeaders::from_response(response);
        *self
            .headers
            .write()
            .expect("header cache lock poisoned") = Some(parsed);
    }
}

/// Stringifies a boolean query parameter; the service rejects native JSON
/// booleans in query strings.
pub(crate) fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use reqwest::header::{HeaderMap, HeaderValue};

    fn response_with_quota_headers() -> ApiResponse {
        let mut headers = HeaderMap::new();
        headers.insert("X-API-Version", HeaderValue::from_static("1"));
        headers.insert("X-Units", HeaderValue::from_static("AVIATION"));
        headers.insert("X-Limit-Cap", HeaderValue::from_static("2000"));
        headers.insert("X-Limit-Used", HeaderValue::from_static("150"));
        ApiResponse {
            status: 200,
            headers,
            body: Bytes::from_static(b"{}"),
        }
    }

    #[test]
    fn server_headers_parse_from_response() {
        let parsed = ServerHeaders::from_response(&response_with_quota_headers());
        assert_eq!(parsed.version, Some(1));
        assert_eq!(parsed.units, Some(Units::Aviation));
        assert_eq!(parsed.limit_cap, Some(2000));
        assert_eq!(parsed.limit_used, Some(150));
    }

    #[test]
    fn absent_headers_parse_to_none() {
        let response = ApiResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        };
        assert_eq!(ServerHeaders::from_response(&response), ServerHeaders::default());
    }

    #[test]
    fn units_parse_the_three_wire_values() {
        assert_eq!("AVIATION".parse::<Units>().unwrap(), Units::Aviation);
        assert_eq!("METRIC".parse::<Units>().unwrap(), Units::Metric);
        assert_eq!("SI".parse::<Units>().unwrap(), Units::Si);
        assert!("IMPERIAL".parse::<Units>().is_err());
    }

    #[test]
    fn bool_params_are_strings() {
        assert_eq!(bool_param(true), "true");
        assert_eq!(bool_param(false), "false");
    }
}
