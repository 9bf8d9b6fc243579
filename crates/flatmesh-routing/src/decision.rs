//! Pure functions for route table update decisions.
//!
//! Extracts the replace-or-refresh logic from `RouteTable::add_path()`
//! into testable, stateless functions.

use serde::Deserialize;

use crate::error::RoutingError;
use crate::route::types::RouteEntry;

/// The outcome of evaluating a candidate path against the stored entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteUpdateDecision {
    /// No existing entry — insert a fresh route entry.
    InsertNew,
    /// Existing entry should be replaced (better candidate or expired).
    Replace,
    /// Existing entry kept, but its expiration is extended.
    Refresh,
    /// Stale candidate — no replacement and no expiration refresh.
    Ignore,
}

/// Ordering used to rank a candidate path against the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdatePolicy {
    /// Sequence-primary: fresher topology information supersedes older,
    /// even at a worse cost. Cost breaks sequence ties.
    #[default]
    FreshnessFirst,
    /// Cost-primary: a cheaper path supersedes a costlier one. Sequence
    /// numbers break cost ties.
    CostFirst,
}

/// Config string constants for the update policies.
pub mod policy_str {
    pub const FRESHNESS_FIRST: &str = "freshness-first";
    pub const COST_FIRST: &str = "cost-first";
}

impl UpdatePolicy {
    /// Parse from the config string representation.
    pub fn from_config_str(s: &str) -> Result<Self, RoutingError> {
        match s {
            policy_str::FRESHNESS_FIRST => Ok(UpdatePolicy::FreshnessFirst),
            policy_str::COST_FIRST => Ok(UpdatePolicy::CostFirst),
            other => Err(RoutingError::InvalidPolicy(other.to_string())),
        }
    }
}

/// Decide whether a candidate path should update the route table.
///
/// An expired stored entry is logically absent, so any candidate replaces
/// it regardless of policy. Against a live entry, `FreshnessFirst`
/// evaluates:
/// 1. Strictly higher seqnum → `Replace` (regardless of cost)
/// 2. Strictly lower seqnum → `Ignore`
/// 3. Equal seqnum, strictly lower cost → `Replace`
/// 4. Equal seqnum, equal-or-worse cost → `Refresh`
///
/// Keeping the stored path on an exact tie prevents flapping between
/// equally good alternatives while the refresh keeps the entry alive.
#[must_use]
pub fn decide_route_update(
    existing: Option<&RouteEntry>,
    cost: u8,
    seqnum: u16,
    now: u64,
    policy: UpdatePolicy,
) -> RouteUpdateDecision {
    let Some(entry) = existing else {
        return RouteUpdateDecision::InsertNew;
    };
    if entry.is_expired(now) {
        return RouteUpdateDecision::Replace;
    }
    match policy {
        UpdatePolicy::FreshnessFirst => {
            if seqnum > entry.seqnum {
                RouteUpdateDecision::Replace
            } else if seqnum < entry.seqnum {
                RouteUpdateDecision::Ignore
            } else if cost < entry.cost {
                RouteUpdateDecision::Replace
            } else {
                RouteUpdateDecision::Refresh
            }
        }
        UpdatePolicy::CostFirst => {
            if cost < entry.cost {
                RouteUpdateDecision::Replace
            } else if cost > entry.cost {
                RouteUpdateDecision::Ignore
            } else if seqnum > entry.seqnum {
                RouteUpdateDecision::Replace
            } else if seqnum < entry.seqnum {
                RouteUpdateDecision::Ignore
            } else {
                RouteUpdateDecision::Refresh
            }
        }
    }
}
