//! The airport aggregate.
//!
//! An airport response embeds everything the service knows about the field:
//! timezone, sun times, every runway (each physical runway appears twice,
//! once from each end), the associated navaids, the published frequencies
//! and the current weather.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nav::Navaid;
use super::timestamps;
use super::weather::Weather;

/// Timezone information for an airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timezone {
    /// IANA timezone name.
    #[serde(default)]
    pub name: Option<String>,
    /// Current offset from UTC in seconds, positive ahead of UTC.
    #[serde(default)]
    pub offset: Option<f64>,
}

/// Sun times at an airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Times {
    /// Time of sunrise.
    #[serde(with = "timestamps")]
    pub sunrise: DateTime<Utc>,
    /// Time of sunset.
    #[serde(with = "timestamps")]
    pub sunset: DateTime<Utc>,
    /// Time of dawn.
    #[serde(with = "timestamps")]
    pub dawn: DateTime<Utc>,
    /// Time of dusk.
    #[serde(with = "timestamps")]
    pub dusk: DateTime<Utc>,
}

/// One end of a [`Runway`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwayEnds {
    /// Runway end identifier.
    pub ident: String,
    /// Latitude of the runway end.
    pub lat: f64,
    /// Longitude of the runway end.
    pub lon: f64,
}

/// A runway at an [`Airport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runway {
    /// Runway identifier.
    pub ident: String,
    /// Runway width; units determined by the `X-Units` header.
    pub width: f64,
    /// Runway length; units determined by the `X-Units` header.
    pub length: f64,
    /// Runway bearing in true degrees.
    pub bearing: f64,
    /// Surface material.
    pub surface: String,
    /// Runway markings.
    pub markings: Vec<String>,
    /// Runway lighting types.
    pub lighting: Vec<String>,
    /// Distance of the displaced threshold from the runway end.
    pub threshold_offset: f64,
    /// Overrun length.
    pub overrun_length: f64,
    /// The two ends of the runway.
    pub ends: Vec<RunwayEnds>,
    /// Navaids associated with the runway.
    pub navaids: Vec<Navaid>,
}

/// A published radio frequency at an airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frequency {
    /// Frequency type, e.g. `TWR` or `ATIS`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Frequency name.
    #[serde(default)]
    pub name: Option<String>,
}

/// An airport and everything the service knows about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    /// Airport ICAO code.
    #[serde(rename = "ICAO")]
    pub icao: String,
    /// Airport IATA code.
    #[serde(default, rename = "IATA")]
    pub iata: Option<String>,
    /// Airport name.
    pub name: String,
    /// Geographical region the airport is located in.
    #[serde(default)]
    pub region_name: Option<String>,
    /// Elevation above mean sea level.
    pub elevation: f64,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Current magnetic variation at the airport, from the World Magnetic
    /// Model.
    pub magnetic_variation: f64,
    /// Timezone information.
    pub timezone: Timezone,
    /// Sun times at the airport.
    pub times: Times,
    /// Number of runways.
    pub runway_count: i64,
    /// Runways; each physical runway appears once from each end.
    pub runways: Vec<Runway>,
    /// Published frequencies.
    pub frequencies: Vec<Frequency>,
    /// Current weather.
    pub weather: Weather,
}
