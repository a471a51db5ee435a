//! Navigation data lookups.
//!
//! # Endpoints
//!
//! ```text
//! GET /nav/airport/{icao}  airport
//! GET /nav/NATS            nats
//! GET /nav/PACOTS          pacots
//! GET /search/nav          search (paginated)
//! ```

use futures::stream::{Stream, StreamExt};

use flightplandb_core::{Airport, NodeKind, SearchNavaid, Track};

use crate::api::plan::into_record;
use crate::client::FlightPlanDb;
use crate::error::Error;
use crate::pagination::{page_stream, SortOrder};

/// Navigation data lookups.
#[derive(Debug, Clone, Copy)]
pub struct NavApi<'a> {
    pub(crate) client: &'a FlightPlanDb,
}

impl NavApi<'_> {
    /// Fetches everything the service knows about an airport.
    ///
    /// # Errors
    ///
    /// [`Error::BadRequest`] when no airport has this ICAO code.
    pub async fn airport(&self, icao: &str) -> Result<Airport, Error> {
        self.client
            .get(&format!("/nav/airport/{icao}"))
            .await?
            .json()
    }

    /// Fetches the current North Atlantic Tracks.
    pub async fn nats(&self) -> Result<Vec<Track>, Error> {
        self.client.get("/nav/NATS").await?.json()
    }

    /// Fetches the current Pacific Organized Track System tracks.
    pub async fn pacots(&self) -> Result<Vec<Track>, Error> {
        self.client.get("/nav/PACOTS").await?.json()
    }

    /// Searches navaids by identifier or name.
    ///
    /// `kind` optionally restricts the results to one navaid type. Callers
    /// holding a type as a string should parse it with
    /// [`NodeKind::from_str`](std::str::FromStr) first, which rejects
    /// out-of-list values before any request is sent.
    pub fn search(
        &self,
        query: &str,
        kind: Option<NodeKind>,
        limit: usize,
    ) -> impl Stream<Item = Result<SearchNavaid, Error>> + Send {
        let mut params = vec![("q".to_string(), query.to_string())];
        if let Some(kind) = kind {
            params.push(("types".to_string(), kind.as_str().to_string()));
        }

        page_stream(
            self.client.clone(),
            "/search/nav".to_string(),
            params,
            SortOrder::default(),
            limit,
        )
        .map(into_record::<SearchNavaid>)
    }
}
