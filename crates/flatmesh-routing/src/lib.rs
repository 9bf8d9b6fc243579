//! Destination routing table for a flat wireless mesh.
//!
//! This crate maintains one authoritative best-path record per destination
//! and answers next-hop queries in bounded time, ageing out stale records.
//! It is a pure data structure: time is a caller-supplied monotonically
//! non-decreasing value, never read from a clock, and both operations are
//! synchronous. The surrounding routing-protocol engine feeds it from
//! discovery and reply control messages and queries it when forwarding.

pub mod config;
pub mod decision;
pub mod error;
pub mod route;

pub use config::RoutingConfig;
pub use decision::{decide_route_update, RouteUpdateDecision, UpdatePolicy};
pub use error::RoutingError;
pub use route::{InterfaceId, LookupResult, RouteEntry, RouteTable};
