//! Tag listing.

use flightplandb_core::Tag;

use crate::client::FlightPlanDb;
use crate::error::Error;

/// Tag listing.
#[derive(Debug, Clone, Copy)]
pub struct TagsApi<'a> {
    pub(crate) client: &'a FlightPlanDb,
}

impl TagsApi<'_> {
    /// Fetches the current popular tags across all flight plans.
    ///
    /// Only tags with sufficient popularity are included; the listing is a
    /// single page.
    pub async fn fetch(&self) -> Result<Vec<Tag>, Error> {
        self.client.get("/tags").await?.json()
    }
}
