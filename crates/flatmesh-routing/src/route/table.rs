//! Route table for destination forwarding.

use std::collections::HashMap;

use tracing::{debug, trace};

use flatmesh_core::MacAddress;

use super::types::{InterfaceId, LookupResult, RouteEntry};
use crate::config::RoutingConfig;
use crate::decision::{decide_route_update, RouteUpdateDecision, UpdatePolicy};
use crate::route::constants::DEFAULT_ROUTE_LIFETIME;

/// Route table mapping destinations to their best known path.
///
/// Time never comes from a clock: every operation takes a caller-supplied
/// monotonically non-decreasing `now` (in seconds). The table performs no
/// internal locking; hosts driving it from multiple threads must wrap it
/// in an exclusive guard, since `add_path` is a read-then-write.
#[must_use]
pub struct RouteTable {
    lifetime: u64,
    policy: UpdatePolicy,
    routes: HashMap<MacAddress, RouteEntry>,
}

impl RouteTable {
    /// Create a table whose entries live `lifetime` seconds per update,
    /// ranked with the default freshness-first policy.
    pub fn new(lifetime: u64) -> Self {
        Self::with_policy(lifetime, UpdatePolicy::default())
    }

    /// Create a table with an explicit update policy.
    pub fn with_policy(lifetime: u64, policy: UpdatePolicy) -> Self {
        Self {
            lifetime,
            policy,
            routes: HashMap::new(),
        }
    }

    /// Create a table from a validated configuration value.
    pub fn with_config(config: &RoutingConfig) -> Self {
        Self::with_policy(config.route_lifetime_secs, config.update_policy)
    }

    /// The configured entry lifetime in seconds.
    #[must_use]
    pub fn lifetime(&self) -> u64 {
        self.lifetime
    }

    /// The configured update policy.
    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    /// Record a path to `destination` revealed by a discovery or reply
    /// control message.
    ///
    /// The stored entry is replaced only when the candidate ranks
    /// strictly better under the configured policy; an exact tie keeps
    /// the stored path but extends its expiration, and a stale candidate
    /// is ignored entirely. An expired entry is logically absent and is
    /// replaced unconditionally. Never fails for well-formed input.
    pub fn add_path(
        &mut self,
        destination: MacAddress,
        retransmitter: MacAddress,
        interface: InterfaceId,
        cost: u8,
        seqnum: u16,
        now: u64,
    ) {
        debug_assert!(
            !destination.is_broadcast() && !destination.is_zero(),
            "destination must be a unicast address"
        );
        debug_assert!(
            !retransmitter.is_broadcast() && !retransmitter.is_zero(),
            "retransmitter must be a unicast address"
        );

        let decision = decide_route_update(
            self.routes.get(&destination),
            cost,
            seqnum,
            now,
            self.policy,
        );
        match decision {
            RouteUpdateDecision::InsertNew => {
                trace!(%destination, %retransmitter, %interface, cost, seqnum, "inserting route");
                self.routes.insert(
                    destination,
                    RouteEntry::new(retransmitter, interface, cost, seqnum, now, self.lifetime),
                );
            }
            RouteUpdateDecision::Replace => {
                debug!(%destination, %retransmitter, %interface, cost, seqnum, "replacing route");
                self.routes.insert(
                    destination,
                    RouteEntry::new(retransmitter, interface, cost, seqnum, now, self.lifetime),
                );
            }
            RouteUpdateDecision::Refresh => {
                trace!(%destination, "refreshing route expiration");
                if let Some(entry) = self.routes.get_mut(&destination) {
                    entry.refresh(now, self.lifetime);
                }
            }
            RouteUpdateDecision::Ignore => {
                trace!(%destination, seqnum, "ignoring stale route update");
            }
        }
    }

    /// Look up the path to `destination`.
    ///
    /// Returns the invalid sentinel if no entry exists or the stored
    /// entry's expiration has passed; otherwise a copy of the stored
    /// fields. Never fails.
    pub fn lookup(&self, destination: &MacAddress, now: u64) -> LookupResult {
        self.routes
            .get(destination)
            .filter(|entry| !entry.is_expired(now))
            .map(LookupResult::from)
            .unwrap_or_else(LookupResult::invalid)
    }

    /// Check if a destination physically exists in the table, regardless
    /// of expiry.
    #[must_use]
    pub fn contains(&self, destination: &MacAddress) -> bool {
        self.routes.contains_key(destination)
    }

    /// Remove every expired entry, returning the number removed.
    ///
    /// Optional for correctness (lookups already skip expired entries)
    /// but bounds memory under destination churn; intended to be driven
    /// by the owning engine's periodic maintenance tick.
    pub fn cull(&mut self, now: u64) -> usize {
        let before = self.routes.len();
        self.routes.retain(|_, entry| !entry.is_expired(now));
        let removed = before - self.routes.len();
        if removed > 0 {
            debug!(removed, remaining = self.routes.len(), "culled expired routes");
        }
        removed
    }

    /// Number of entries in the table, including expired ones not yet
    /// culled.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&MacAddress, &RouteEntry)> {
        self.routes.iter()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTE_LIFETIME)
    }
}
