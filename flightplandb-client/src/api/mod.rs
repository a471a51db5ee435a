//! Resource endpoint groups.
//!
//! One module per resource; each group is a thin accessor borrowing the
//! client and composing the transport, format negotiation, pagination and
//! domain models into a method per API operation.
//!
//! - [`plan`] - Fetch, create, edit, delete, search, like and generate
//!   flight plans
//! - [`user`] - Profiles and per-user plan listings
//! - [`nav`] - Airports, oceanic tracks and navaid search
//! - [`tags`] - Popular tags
//! - [`weather`] - METAR/TAF lookup
//! - [`info`] - API status, version and quota headers

pub mod info;
pub mod nav;
pub mod plan;
pub mod tags;
pub mod user;
pub mod weather;
