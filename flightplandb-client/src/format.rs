//! Export format negotiation.
//!
//! The service selects its response representation from the `Accept` header.
//! Every format token maps onto a vendor media type; the token also decides
//! how the raw body is handled afterwards: parsed as structured data, passed
//! through as text, or passed through as raw bytes.
//!
//! Unknown tokens fail in [`ExportFormat::from_str`], before any network
//! call is made.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How a response body for a format is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Decode as JSON and convert into typed entities.
    Structured,
    /// Return the decoded body text.
    Text,
    /// Return the raw body bytes.
    Binary,
}

/// A response format the service can produce.
///
/// `Native` means "parse into the client's typed entities"; it shares a
/// media type with `Json`, which instead returns the body as text. The
/// remainder are flight-simulator and document export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// Typed entities (the default).
    #[default]
    Native,
    /// Raw JSON text.
    Json,
    /// XML.
    Xml,
    /// CSV.
    Csv,
    /// PDF document (binary).
    Pdf,
    /// KML for Google Earth.
    Kml,
    /// X-Plane FMS (8, 9 and 10).
    Xplane,
    /// X-Plane 11 FMS.
    Xplane11,
    /// FS2004/FS9 plan.
    Fs9,
    /// FSX XML plan.
    Fsx,
    /// Squawkbox plan.
    Squawkbox,
    /// X-FMC plan.
    Xfmc,
    /// PMDG rte file.
    Pmdg,
    /// Airbus X plan.
    AirbusX,
    /// QualityWings plan.
    QualityWings,
    /// iFly 747 route.
    Ifly747,
    /// FlightGear plan.
    FlightGear,
    /// TFDi Design 717 plan.
    Tfdi717,
    /// Infinite Flight plan.
    InfiniteFlight,
}

impl ExportFormat {
    /// All supported formats, in wire order.
    pub fn all() -> &'static [ExportFormat] {
        &[
            ExportFormat::Native,
            ExportFormat::Json,
            ExportFormat::Xml,
            ExportFormat::Csv,
            ExportFormat::Pdf,
            ExportFormat::Kml,
            ExportFormat::Xplane,
            ExportFormat::Xplane11,
            ExportFormat::Fs9,
            ExportFormat::Fsx,
            ExportFormat::Squawkbox,
            ExportFormat::Xfmc,
            ExportFormat::Pmdg,
            ExportFormat::AirbusX,
            ExportFormat::QualityWings,
            ExportFormat::Ifly747,
            ExportFormat::FlightGear,
            ExportFormat::Tfdi717,
            ExportFormat::InfiniteFlight,
        ]
    }

    /// The format token, as accepted by [`ExportFormat::from_str`].
    pub fn token(&self) -> &'static str {
        match self {
            ExportFormat::Native => "native",
            ExportFormat::Json => "json",
            ExportFormat::Xml => "xml",
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Kml => "kml",
            ExportFormat::Xplane => "xplane",
            ExportFormat::Xplane11 => "xplane11",
            ExportFormat::Fs9 => "fs9",
            ExportFormat::Fsx => "fsx",
            ExportFormat::Squawkbox => "squawkbox",
            ExportFormat::Xfmc => "xfmc",
            ExportFormat::Pmdg => "pmdg",
            ExportFormat::AirbusX => "airbusx",
            ExportFormat::QualityWings => "qualitywings",
            ExportFormat::Ifly747 => "ifly747",
            ExportFormat::FlightGear => "flightgear",
            ExportFormat::Tfdi717 => "tfdi717",
            ExportFormat::InfiniteFlight => "infiniteflight",
        }
    }

    /// The `Accept` media type sent for this format.
    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Native | ExportFormat::Json => "application/vnd.fpd.v1+json",
            ExportFormat::Xml => "application/vnd.fpd.v1+xml",
            ExportFormat::Csv => "text/vnd.fpd.export.v1.csv+csv",
            ExportFormat::Pdf => "application/vnd.fpd.export.v1.pdf",
            ExportFormat::Kml => "application/vnd.fpd.export.v1.kml+xml",
            ExportFormat::Xplane => "application/vnd.fpd.export.v1.xplane",
            ExportFormat::Xplane11 => "application/vnd.fpd.export.v1.xplane11",
            ExportFormat::Fs9 => "application/vnd.fpd.export.v1.fs9",
            ExportFormat::Fsx => "application/vnd.fpd.export.v1.fsx",
            ExportFormat::Squawkbox => "application/vnd.fpd.export.v1.squawkbox",
            ExportFormat::Xfmc => "application/vnd.fpd.export.v1.xfmc",
            ExportFormat::Pmdg => "application/vnd.fpd.export.v1.pmdg",
            ExportFormat::AirbusX => "application/vnd.fpd.export.v1.airbusx",
            ExportFormat::QualityWings => "application/vnd.fpd.export.v1.qualitywings",
            ExportFormat::Ifly747 => "application/vnd.fpd.export.v1.ifly747",
            ExportFormat::FlightGear => "application/vnd.fpd.export.v1.flightgear",
            ExportFormat::Tfdi717 => "application/vnd.fpd.export.v1.tfdi717",
            ExportFormat::InfiniteFlight => "application/vnd.fpd.export.v1.infiniteflight",
        }
    }

    /// The parse strategy for a response in this format.
    pub fn body_kind(&self) -> BodyKind {
        match self {
            ExportFormat::Native => BodyKind::Structured,
            ExportFormat::Pdf => BodyKind::Binary,
            _ => BodyKind::Text,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::all()
            .iter()
            .find(|format| format.token() == s)
            .copied()
            .ok_or_else(|| Error::InvalidFormat(s.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_format_has_a_media_type_and_token_roundtrip() {
        for format in ExportFormat::all() {
            assert!(!format.media_type().is_empty());
            assert_eq!(ExportFormat::from_str(format.token()).unwrap(), *format);
        }
    }

    #[test]
    fn unknown_token_fails_before_any_io() {
        let err = ExportFormat::from_str("docx").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(ref token) if token == "docx"));
    }

    #[test]
    fn native_and_json_share_a_media_type_but_not_a_body_kind() {
        assert_eq!(
            ExportFormat::Native.media_type(),
            ExportFormat::Json.media_type()
        );
        assert_eq!(ExportFormat::Native.body_kind(), BodyKind::Structured);
        assert_eq!(ExportFormat::Json.body_kind(), BodyKind::Text);
    }

    #[test]
    fn pdf_is_the_only_binary_format() {
        for format in ExportFormat::all() {
            let expect_binary = *format == ExportFormat::Pdf;
            assert_eq!(format.body_kind() == BodyKind::Binary, expect_binary);
        }
    }
}
