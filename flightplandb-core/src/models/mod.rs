//! Domain models for the Flight Plan Database API.
//!
//! One submodule per resource family, re-exported flat at the models level:
//!
//! - [`plan`] - Flight plans and their embedded entities
//! - [`route`] - Routes, route nodes and vias
//! - [`user`] - Account identities
//! - [`airport`] - The airport aggregate (runways, frequencies, times)
//! - [`nav`] - Navaids and oceanic tracks
//! - [`weather`] - METAR/TAF reports
//! - [`tag`] - Flight plan tags
//! - [`query`] - Search and generation parameter bags
//! - [`status`] - The generic status envelope

pub mod airport;
pub mod nav;
pub mod plan;
pub mod query;
pub mod route;
pub mod status;
pub mod tag;
pub mod timestamps;
pub mod user;
pub mod weather;

// Re-export everything at the models level
pub use airport::{Airport, Frequency, Runway, RunwayEnds, Times, Timezone};
pub use nav::{Navaid, NavaidKind, SearchNavaid, Track, TrackIdent};
pub use plan::{Application, Cycle, Plan};
pub use query::{GenerateQuery, PlanQuery};
pub use route::{NodeKind, Route, RouteNode, Via, ViaKind};
pub use status::StatusResponse;
pub use tag::Tag;
pub use user::{User, UserSmall};
pub use weather::Weather;
