//! Route table management for destination forwarding.
//!
//! Tracks the best known path to each destination, its cost, freshness
//! sequence number, and expiration.

pub mod constants;
pub mod table;
pub mod types;

pub use constants::*;
pub use table::RouteTable;
pub use types::{InterfaceId, LookupResult, RouteEntry};
