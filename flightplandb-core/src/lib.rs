// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Flight Plan Database Core
//!
//! Domain models for the Flight Plan Database API.
//!
//! Every type in this crate maps one-to-one onto a JSON object returned (or
//! accepted) by the service. Deserialization is recursive: nested objects
//! become nested typed entities, ISO-8601 timestamp strings become
//! [`chrono::DateTime<Utc>`](chrono::DateTime) values, and enumerated string
//! fields become real enums that reject out-of-list values.
//!
//! Serialization is the structural inverse and is wire-exact: timestamps are
//! written back in millisecond-precision ISO-8601 with a literal `Z` suffix,
//! and optional fields that are `None` are written as explicit `null`,
//! because the service treats a `null` in a PATCH body as "clear this
//! field".
//!
//! ## Key Types
//!
//! - [`Plan`] - A flight plan, the thing the whole API revolves around
//! - [`Route`] / [`RouteNode`] / [`Via`] - The route of a plan
//! - [`User`] / [`UserSmall`] - Registered accounts
//! - [`Airport`] - Airport aggregate with runways, frequencies and weather
//! - [`Navaid`] / [`SearchNavaid`] - Navigational aids
//! - [`Track`] - NATS/PACOTS oceanic tracks
//! - [`PlanQuery`] / [`GenerateQuery`] - Search and generation parameters
//! - [`StatusResponse`] - Generic `{message, errors}` envelope

pub mod error;
pub mod models;

// Re-export error types
pub use error::ModelError;

// Re-export all model types
pub use models::{
    // Plans and routes
    Application,
    Cycle,
    NodeKind,
    Plan,
    Route,
    RouteNode,
    Via,
    ViaKind,
    // Users
    User,
    UserSmall,
    // Airports and navigation
    Airport,
    Frequency,
    Navaid,
    NavaidKind,
    Runway,
    RunwayEnds,
    SearchNavaid,
    Times,
    Timezone,
    Track,
    TrackIdent,
    // Weather and tags
    Tag,
    Weather,
    // Queries and status
    GenerateQuery,
    PlanQuery,
    StatusResponse,
};
