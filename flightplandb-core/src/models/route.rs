//! Routes, route nodes and vias.
//!
//! A [`Route`] is an ordered list of [`RouteNode`]s; a node may be reached
//! `via` an airway or procedure. The service enforces that a plan route has
//! at least two nodes; the client does not re-validate that minimum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ============================================================================
// Via
// ============================================================================

/// How a route node is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViaKind {
    /// Standard instrument departure.
    Sid,
    /// Standard terminal arrival route.
    Star,
    /// High-level airway.
    #[serde(rename = "AWY-HI")]
    AwyHi,
    /// Low-level airway.
    #[serde(rename = "AWY-LO")]
    AwyLo,
    /// North Atlantic track.
    Nat,
    /// Pacific organized track.
    Pacot,
}

impl ViaKind {
    /// All valid via kinds, in wire order.
    pub fn all() -> &'static [ViaKind] {
        &[
            ViaKind::Sid,
            ViaKind::Star,
            ViaKind::AwyHi,
            ViaKind::AwyLo,
            ViaKind::Nat,
            ViaKind::Pacot,
        ]
    }

    /// The wire form of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViaKind::Sid => "SID",
            ViaKind::Star => "STAR",
            ViaKind::AwyHi => "AWY-HI",
            ViaKind::AwyLo => "AWY-LO",
            ViaKind::Nat => "NAT",
            ViaKind::Pacot => "PACOT",
        }
    }
}

impl fmt::Display for ViaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViaKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViaKind::all()
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| ModelError::invalid_enum("Via type", s))
    }
}

/// The airway or procedure a [`RouteNode`] is reached by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Via {
    /// Airway or procedure identifier.
    pub ident: String,
    /// Via type.
    #[serde(rename = "type")]
    pub kind: ViaKind,
}

// ============================================================================
// Route nodes
// ============================================================================

/// The kind of fix a [`RouteNode`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeKind {
    /// Unknown.
    Ukn,
    /// Airport.
    Apt,
    /// Non-directional beacon.
    Ndb,
    /// VHF omnidirectional range station.
    Vor,
    /// Named fix.
    Fix,
    /// Distance measuring equipment.
    Dme,
    /// Raw latitude/longitude point.
    #[serde(rename = "LATLON")]
    LatLon,
}

impl NodeKind {
    /// All valid node kinds, in wire order.
    pub fn all() -> &'static [NodeKind] {
        &[
            NodeKind::Ukn,
            NodeKind::Apt,
            NodeKind::Ndb,
            NodeKind::Vor,
            NodeKind::Fix,
            NodeKind::Dme,
            NodeKind::LatLon,
        ]
    }

    /// The wire form of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Ukn => "UKN",
            NodeKind::Apt => "APT",
            NodeKind::Ndb => "NDB",
            NodeKind::Vor => "VOR",
            NodeKind::Fix => "FIX",
            NodeKind::Dme => "DME",
            NodeKind::LatLon => "LATLON",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::all()
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| ModelError::invalid_enum("RouteNode type", s))
    }
}

/// A single node in a [`Route`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Navaid or fix identifier.
    pub ident: String,
    /// Node type.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Node id. Only present on nodes inside a track route.
    #[serde(default)]
    pub id: Option<i64>,
    /// Suggested altitude at the node.
    #[serde(default)]
    pub alt: Option<f64>,
    /// Node name.
    #[serde(default)]
    pub name: Option<String>,
    /// Route to the node.
    #[serde(default)]
    pub via: Option<Via>,
}

// ============================================================================
// Route
// ============================================================================

/// The route of a [`Plan`](crate::Plan) or [`Track`](crate::Track).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Ordered route nodes. A plan route has at least two.
    pub nodes: Vec<RouteNode>,
    /// Valid eastbound flight levels. Only present inside a NATS track.
    #[serde(default)]
    pub east_levels: Option<Vec<String>>,
    /// Valid westbound flight levels. Only present inside a NATS track.
    #[serde(default)]
    pub west_levels: Option<Vec<String>>,
}
