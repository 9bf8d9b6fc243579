//! Route table types.

use core::fmt;

use flatmesh_core::MacAddress;

use super::constants::MAX_COST;

/// Lightweight local interface identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceId(pub u32);

impl InterfaceId {
    /// Sentinel meaning any/all interfaces.
    pub const ANY: InterfaceId = InterfaceId(0xffff_ffff);

    #[must_use]
    pub fn is_any(&self) -> bool {
        *self == Self::ANY
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            write!(f, "any")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A single entry in the route table.
///
/// Exclusively owned by the table; at most one entry exists per
/// destination at any time.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Next hop a frame should be forwarded to.
    pub retransmitter: MacAddress,
    /// Interface the path was learned on.
    pub interface: InterfaceId,
    /// Path cost (0 = best, `MAX_COST` = unreachable/unknown).
    pub cost: u8,
    /// Absolute timestamp when this route expires.
    pub expires: u64,
    /// Freshness counter supplied by the originator of the path.
    pub seqnum: u16,
}

impl RouteEntry {
    /// Create a new route entry expiring `lifetime` seconds after `now`.
    pub fn new(
        retransmitter: MacAddress,
        interface: InterfaceId,
        cost: u8,
        seqnum: u16,
        now: u64,
        lifetime: u64,
    ) -> Self {
        Self {
            retransmitter,
            interface,
            cost,
            expires: now + lifetime,
            seqnum,
        }
    }

    /// Check if this route is expired at the given time.
    ///
    /// Uses strict `>` comparison: `now > expires` means expired.
    #[must_use]
    pub fn is_expired(&self, now: u64) -> bool {
        now > self.expires
    }

    /// Extend the expiration to `now + lifetime`, keeping the path.
    pub fn refresh(&mut self, now: u64, lifetime: u64) {
        self.expires = now + lifetime;
    }
}

/// The value-typed answer to a route query.
///
/// The distinguished invalid value (broadcast retransmitter, ANY
/// interface, `MAX_COST`, sequence 0) signals that no usable route is
/// known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LookupResult {
    pub retransmitter: MacAddress,
    pub interface: InterfaceId,
    pub cost: u8,
    pub seqnum: u16,
}

impl LookupResult {
    /// The "no usable route" sentinel.
    pub fn invalid() -> Self {
        Self {
            retransmitter: MacAddress::broadcast(),
            interface: InterfaceId::ANY,
            cost: MAX_COST,
            seqnum: 0,
        }
    }

    /// True for any result other than the invalid sentinel.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        *self != Self::invalid()
    }
}

impl From<&RouteEntry> for LookupResult {
    fn from(entry: &RouteEntry) -> Self {
        Self {
            retransmitter: entry.retransmitter,
            interface: entry.interface,
            cost: entry.cost,
            seqnum: entry.seqnum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_addr(seed: u8) -> MacAddress {
        MacAddress::new([seed, 0, 0, 0, 0, seed])
    }

    #[test]
    fn test_entry_expiry_strict_greater() {
        let entry = RouteEntry::new(make_addr(1), InterfaceId(0), 5, 7, 1000, 120);
        assert_eq!(entry.expires, 1120);
        // now == expires → NOT expired (strict >)
        assert!(!entry.is_expired(1120));
        assert!(entry.is_expired(1121));
    }

    #[test]
    fn test_entry_refresh_extends_expiry() {
        let mut entry = RouteEntry::new(make_addr(1), InterfaceId(0), 5, 7, 1000, 120);
        entry.refresh(1100, 120);
        assert_eq!(entry.expires, 1220);
        assert_eq!(entry.cost, 5);
        assert_eq!(entry.seqnum, 7);
    }

    #[test]
    fn test_invalid_sentinel_fields() {
        let invalid = LookupResult::invalid();
        assert!(invalid.retransmitter.is_broadcast());
        assert!(invalid.interface.is_any());
        assert_eq!(invalid.cost, MAX_COST);
        assert_eq!(invalid.seqnum, 0);
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_lookup_result_validity() {
        let result = LookupResult {
            retransmitter: make_addr(2),
            interface: InterfaceId(1),
            cost: 10,
            seqnum: 3,
        };
        assert!(result.is_valid());

        // A max-cost route to a real retransmitter is still a route.
        let unreachable = LookupResult {
            retransmitter: make_addr(2),
            interface: InterfaceId(1),
            cost: MAX_COST,
            seqnum: 0,
        };
        assert!(unreachable.is_valid());
    }

    #[test]
    fn test_lookup_result_from_entry() {
        let entry = RouteEntry::new(make_addr(3), InterfaceId(2), 12, 9, 500, 60);
        let result = LookupResult::from(&entry);
        assert_eq!(result.retransmitter, make_addr(3));
        assert_eq!(result.interface, InterfaceId(2));
        assert_eq!(result.cost, 12);
        assert_eq!(result.seqnum, 9);
    }

    #[test]
    fn test_interface_id_display() {
        assert_eq!(format!("{}", InterfaceId(3)), "3");
        assert_eq!(format!("{}", InterfaceId::ANY), "any");
    }
}
