//! METAR and TAF reports, stored as opaque strings.

use serde::{Deserialize, Serialize};

/// Current weather report and forecast for an airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    /// Current METAR report.
    #[serde(default, rename = "METAR")]
    pub metar: Option<String>,
    /// Current TAF forecast.
    #[serde(default, rename = "TAF")]
    pub taf: Option<String>,
}
