//! Navaids and oceanic tracks.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

use super::route::{NodeKind, Route};
use super::timestamps;

// ============================================================================
// Navaids
// ============================================================================

/// The kind of a runway-associated [`Navaid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NavaidKind {
    /// Localizer, part of an ILS.
    #[serde(rename = "LOC-ILS")]
    LocIls,
    /// Standalone localizer.
    #[serde(rename = "LOC-LOC")]
    LocLoc,
    /// Glideslope.
    Gs,
    /// Distance measuring equipment.
    Dme,
    /// Outer marker.
    Om,
    /// Middle marker.
    Mm,
    /// Inner marker.
    Im,
}

impl NavaidKind {
    /// All valid navaid kinds, in wire order.
    pub fn all() -> &'static [NavaidKind] {
        &[
            NavaidKind::LocIls,
            NavaidKind::LocLoc,
            NavaidKind::Gs,
            NavaidKind::Dme,
            NavaidKind::Om,
            NavaidKind::Mm,
            NavaidKind::Im,
        ]
    }

    /// The wire form of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NavaidKind::LocIls => "LOC-ILS",
            NavaidKind::LocLoc => "LOC-LOC",
            NavaidKind::Gs => "GS",
            NavaidKind::Dme => "DME",
            NavaidKind::Om => "OM",
            NavaidKind::Mm => "MM",
            NavaidKind::Im => "IM",
        }
    }
}

impl fmt::Display for NavaidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavaidKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavaidKind::all()
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| ModelError::invalid_enum("Navaid type", s))
    }
}

/// A navigational aid associated with a runway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navaid {
    /// Navaid identifier.
    pub ident: String,
    /// Navaid type.
    #[serde(rename = "type")]
    pub kind: NavaidKind,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// The airport associated with the navaid.
    pub airport: String,
    /// The runway associated with the navaid.
    pub runway: String,
    /// Frequency in Hz.
    #[serde(default)]
    pub frequency: Option<f64>,
    /// Slope in degrees from horizontal, used for type GS.
    #[serde(default)]
    pub slope: Option<f64>,
    /// Bearing in true degrees.
    #[serde(default)]
    pub bearing: Option<f64>,
    /// Navaid name.
    #[serde(default)]
    pub name: Option<String>,
    /// Elevation above mean sea level.
    pub elevation: f64,
    /// Navaid range; units determined by the `X-Units` header.
    pub range: f64,
}

/// A navigational aid as returned by full-text navaid search.
///
/// The search surface uses the route-node type vocabulary ([`NodeKind`]),
/// not the runway-navaid one, and returns a reduced shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNavaid {
    /// Navaid identifier.
    pub ident: String,
    /// Navaid type.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Elevation above mean sea level.
    pub elevation: f64,
    /// The runway associated with the navaid.
    #[serde(default)]
    pub runway_ident: Option<String>,
    /// ICAO of the airport associated with the navaid.
    #[serde(default, rename = "airportICAO")]
    pub airport_icao: Option<String>,
    /// Navaid name.
    #[serde(default)]
    pub name: Option<String>,
}

// ============================================================================
// Oceanic tracks
// ============================================================================

/// A track identifier: a letter for NATS, a number for PACOTS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackIdent {
    /// NATS track letter.
    Nats(String),
    /// PACOTS track number.
    Pacots(i64),
}

impl fmt::Display for TrackIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackIdent::Nats(ident) => f.write_str(ident),
            TrackIdent::Pacots(number) => write!(f, "{number}"),
        }
    }
}

/// A NATS or PACOTS organized track with its validity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Track identifier.
    pub ident: TrackIdent,
    /// Route of the track.
    pub route: Route,
    /// UTC time the track is valid from.
    #[serde(with = "timestamps")]
    pub valid_from: DateTime<Utc>,
    /// UTC time the track is valid to.
    #[serde(with = "timestamps")]
    pub valid_to: DateTime<Utc>,
}
