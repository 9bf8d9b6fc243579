//! Route table constants.

/// Maximum path cost, meaning unreachable or unknown.
pub const MAX_COST: u8 = 0xff;

/// Default route lifetime (in seconds).
pub const DEFAULT_ROUTE_LIFETIME: u64 = 120;
