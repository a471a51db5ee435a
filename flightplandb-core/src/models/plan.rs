//! Flight plans and their embedded entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::route::Route;
use super::timestamps;
use super::user::User;

/// Third-party application attribution on a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Unique application identifier.
    pub id: i64,
    /// Application name.
    #[serde(default)]
    pub name: Option<String>,
    /// Application URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// A navigation data cycle revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Cycle id.
    pub id: i64,
    /// AIP-style cycle identifier.
    pub ident: String,
    /// Last two digits of the cycle year.
    pub year: i32,
    /// Cycle release number.
    pub release: i32,
}

/// A flight plan; the thing this whole API revolves around.
///
/// Every field except the ICAO/name pairs is absent or null at some point in
/// a plan's life: a plan built locally for [`create`] has no `id` yet, and a
/// search result without `includeRoute` has no `route`.
///
/// [`create`]: https://flightplandatabase.com/dev/api#plans
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique plan identifier. `None` until assigned by the server.
    #[serde(default)]
    pub id: Option<i64>,
    /// ICAO code of the departure airport.
    #[serde(default, rename = "fromICAO")]
    pub from_icao: Option<String>,
    /// ICAO code of the destination airport.
    #[serde(default, rename = "toICAO")]
    pub to_icao: Option<String>,
    /// Name of the departure airport.
    #[serde(default)]
    pub from_name: Option<String>,
    /// Name of the destination airport.
    #[serde(default)]
    pub to_name: Option<String>,
    /// Flight number.
    #[serde(default)]
    pub flight_number: Option<String>,
    /// Total route distance; units determined by the `X-Units` header.
    #[serde(default)]
    pub distance: Option<f64>,
    /// Maximum altitude of the route.
    #[serde(default)]
    pub max_altitude: Option<f64>,
    /// Number of nodes in the route.
    #[serde(default)]
    pub waypoints: Option<i64>,
    /// Number of likes.
    #[serde(default)]
    pub likes: Option<i64>,
    /// Number of downloads.
    #[serde(default)]
    pub downloads: Option<i64>,
    /// Relative popularity based on downloads and likes.
    #[serde(default)]
    pub popularity: Option<i64>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Encoded polyline of the route, for quickly drawing maps. Opaque.
    #[serde(default)]
    pub encoded_polyline: Option<String>,
    /// When the plan was created.
    #[serde(default, with = "timestamps::option")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the plan was last edited.
    #[serde(default, with = "timestamps::option")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Tags on the plan.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// The user the plan belongs to.
    #[serde(default)]
    pub user: Option<User>,
    /// The application the plan was created with.
    #[serde(default)]
    pub application: Option<Application>,
    /// The route itself.
    #[serde(default)]
    pub route: Option<Route>,
    /// The navdata cycle the plan was built against.
    #[serde(default)]
    pub cycle: Option<Cycle>,
}
