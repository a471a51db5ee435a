//! API status, version and quota information.
//!
//! # Endpoints
//!
//! ```text
//! GET /             ping
//! GET /auth/revoke  revoke
//! ```
//!
//! The version, units and quota accessors read the client's header cache,
//! warming it with a [`InfoApi::ping`] when no call has been made yet.

use flightplandb_core::StatusResponse;

use crate::client::{FlightPlanDb, ServerHeaders, Units};
use crate::error::Error;

/// API status, version and quota information.
#[derive(Debug, Clone, Copy)]
pub struct InfoApi<'a> {
    pub(crate) client: &'a FlightPlanDb,
}

impl InfoApi<'_> {
    /// Checks that the API is reachable and responding.
    pub async fn ping(&self) -> Result<StatusResponse, Error> {
        self.client.get("").await?.json()
    }

    /// Permanently revokes the client's API key. Requires authentication.
    ///
    /// On success the key's status page shows it as revoked; all further
    /// calls with it fail with [`Error::Unauthorized`].
    ///
    /// # Errors
    ///
    /// [`Error::MissingApiKey`] when the client holds no key to revoke.
    pub async fn revoke(&self) -> Result<StatusResponse, Error> {
        if self.client.api_key().is_none() {
            return Err(Error::MissingApiKey);
        }
        self.client.get("/auth/revoke").await?.json()
    }

    /// The server headers from the most recent response, pinging once when
    /// no call has been made yet.
    pub async fn headers(&self) -> Result<ServerHeaders, Error> {
        if let Some(headers) = self.client.cached_headers() {
            return Ok(headers);
        }
        self.ping().await?;
        self.client
            .cached_headers()
            .ok_or(Error::MissingHeader("X-API-Version"))
    }

    /// The API version that answered the most recent request.
    ///
    /// # Errors
    ///
    /// [`Error::MissingHeader`] when the service did not report a version.
    pub async fn version(&self) -> Result<u32, Error> {
        self.headers()
            .await?
            .version
            .ok_or(Error::MissingHeader("X-API-Version"))
    }

    /// The units system used for numeric values in responses.
    ///
    /// # Errors
    ///
    /// [`Error::MissingHeader`] when the service did not report one.
    pub async fn units(&self) -> Result<Units, Error> {
        self.headers()
            .await?
            .units
            .ok_or(Error::MissingHeader("X-Units"))
    }

    /// The number of requests allowed per day.
    ///
    /// # Errors
    ///
    /// [`Error::MissingHeader`] when the service did not report a cap.
    pub async fn limit_cap(&self) -> Result<u32, Error> {
        self.headers()
            .await?
            .limit_cap
            .ok_or(Error::MissingHeader("X-Limit-Cap"))
    }

    /// The number of requests used in the current period.
    ///
    /// # Errors
    ///
    /// [`Error::MissingHeader`] when the service did not report usage.
    pub async fn limit_used(&self) -> Result<u32, Error> {
        self.headers()
            .await?
            .limit_used
            .ok_or(Error::MissingHeader("X-Limit-Used"))
    }
}
