// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Flight Plan Database Client
//!
//! Async HTTP client for the [Flight Plan Database](https://flightplandatabase.com)
//! REST API.
//!
//! The client translates method calls into authenticated HTTP requests,
//! negotiates the response format via `Accept` headers, walks paginated
//! result sets lazily, and converts the JSON wire format into the typed
//! entities from [`flightplandb_core`].
//!
//! ## Example
//!
//! ```ignore
//! use flightplandb_client::FlightPlanDb;
//!
//! let client = FlightPlanDb::with_key("my-api-key")?;
//!
//! let plan = client.plan().fetch(62373).await?;
//! println!("{} -> {}", plan.from_icao.unwrap(), plan.to_icao.unwrap());
//!
//! let weather = client.weather().fetch("EHAM").await?;
//! ```
//!
//! ## Structure
//!
//! - [`transport`] - The HTTP seam: the [`Transport`] trait and the
//!   reqwest-backed [`HttpTransport`]
//! - [`client`] - Client configuration and the header cache
//! - [`format`] - Export format negotiation (`Accept` media types)
//! - [`pagination`] - The lazy page stream and sort orders
//! - [`api`] - One endpoint group per resource (plans, users, nav, tags,
//!   weather, API status)
//! - [`error`] - The error taxonomy and HTTP status mapping
//!
//! Validation failures (unknown export format, unknown sort order, enum
//! values outside their allow-list) surface before any network call; HTTP
//! status errors surface after each response and before body parsing.

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod format;
pub mod pagination;
pub mod transport;

// Re-export key types at crate root

// Client
pub use client::{FlightPlanDb, ServerHeaders, Units};

// Errors
pub use error::Error;

// Format negotiation
pub use format::{BodyKind, ExportFormat};

// Pagination
pub use pagination::SortOrder;

// Transport seam
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

// Endpoint groups
pub use api::{
    info::InfoApi,
    nav::NavApi,
    plan::{PlanApi, PlanExport},
    tags::TagsApi,
    user::UserApi,
    weather::WeatherApi,
};

// Re-export of the domain models
pub use flightplandb_core as models;
