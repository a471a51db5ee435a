//! Weather lookups.

use flightplandb_core::Weather;

use crate::client::FlightPlanDb;
use crate::error::Error;

/// Weather lookups.
#[derive(Debug, Clone, Copy)]
pub struct WeatherApi<'a> {
    pub(crate) client: &'a FlightPlanDb,
}

impl WeatherApi<'_> {
    /// Fetches the current METAR and TAF for an airport.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no airport has this ICAO code.
    pub async fn fetch(&self, icao: &str) -> Result<Weather, Error> {
        self.client.get(&format!("/weather/{icao}")).await?.json()
    }
}
