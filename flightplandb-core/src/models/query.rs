//! Search and generation parameter bags.
//!
//! These are constructed per call and discarded; they never come back from
//! the server. [`PlanQuery`] travels as GET query parameters, while
//! [`GenerateQuery`] is posted as a JSON body.

use serde::Serialize;

/// Parameters for a plan search.
///
/// All fields are optional; only the set ones are sent. Distances are
/// strings with units determined by the `X-Units` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanQuery {
    /// Free-text query over username, tags and flight number.
    pub q: Option<String>,
    /// Departure search over ICAO and name.
    pub from: Option<String>,
    /// Destination search over ICAO and name.
    pub to: Option<String>,
    /// Matches the departure airport ICAO exactly.
    pub from_icao: Option<String>,
    /// Matches the destination airport ICAO exactly.
    pub to_icao: Option<String>,
    /// Matches the departure airport name.
    pub from_name: Option<String>,
    /// Matches the destination airport name.
    pub to_name: Option<String>,
    /// Matches the flight number.
    pub flight_number: Option<String>,
    /// Minimum route distance.
    pub distance_min: Option<String>,
    /// Maximum route distance.
    pub distance_max: Option<String>,
    /// Tag names to search, comma separated.
    pub tags: Option<String>,
}

impl PlanQuery {
    /// The set fields as wire-named query pairs, in a stable order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let fields: [(&'static str, &Option<String>); 11] = [
            ("q", &self.q),
            ("from", &self.from),
            ("to", &self.to),
            ("fromICAO", &self.from_icao),
            ("toICAO", &self.to_icao),
            ("fromName", &self.from_name),
            ("toName", &self.to_name),
            ("flightNumber", &self.flight_number),
            ("distanceMin", &self.distance_min),
            ("distanceMax", &self.distance_max),
            ("tags", &self.tags),
        ];
        fields
            .into_iter()
            .filter_map(|(name, value)| value.clone().map(|v| (name, v)))
            .collect()
    }
}

/// Parameters for the automatic route generator.
///
/// [`GenerateQuery::new`] fills in the service defaults: all track and
/// airway systems enabled, a 35000 ft / 420 kt cruise, 2500 fpm / 250 kt
/// ascent and 1500 fpm / 250 kt descent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuery {
    /// Departure airport ICAO code.
    #[serde(rename = "fromICAO")]
    pub from_icao: String,
    /// Destination airport ICAO code.
    #[serde(rename = "toICAO")]
    pub to_icao: String,
    /// Use North Atlantic Tracks in the route generation.
    #[serde(rename = "useNAT")]
    pub use_nat: bool,
    /// Use Pacific Organized Track System tracks in the route generation.
    #[serde(rename = "usePACOT")]
    pub use_pacot: bool,
    /// Use low-level airways in the route generation.
    #[serde(rename = "useAWYLO")]
    pub use_awy_lo: bool,
    /// Use high-level airways in the route generation.
    #[serde(rename = "useAWYHI")]
    pub use_awy_hi: bool,
    /// Cruise altitude.
    pub cruise_alt: f64,
    /// Cruise speed.
    pub cruise_speed: f64,
    /// Ascent rate.
    pub ascent_rate: f64,
    /// Ascent speed.
    pub ascent_speed: f64,
    /// Descent rate.
    pub descent_rate: f64,
    /// Descent speed.
    pub descent_speed: f64,
}

impl GenerateQuery {
    /// Creates a generation query between two airports with the service's
    /// default flight profile.
    pub fn new(from_icao: impl Into<String>, to_icao: impl Into<String>) -> Self {
        Self {
            from_icao: from_icao.into(),
            to_icao: to_icao.into(),
            use_nat: true,
            use_pacot: true,
            use_awy_lo: true,
            use_awy_hi: true,
            cruise_alt: 35000.0,
            cruise_speed: 420.0,
            ascent_rate: 2500.0,
            ascent_speed: 250.0,
            descent_rate: 1500.0,
            descent_speed: 250.0,
        }
    }
}
