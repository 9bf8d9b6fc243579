//! TOML-based configuration for the routing table.
//!
//! The table takes its lifetime and update policy as an explicit value at
//! construction; there is no runtime reflection or global registry.

use serde::Deserialize;

use crate::decision::UpdatePolicy;
use crate::error::RoutingError;
use crate::route::constants::DEFAULT_ROUTE_LIFETIME;

/// Routing table configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingConfig {
    /// Seconds after which an unrefreshed route becomes stale.
    #[serde(default = "default_route_lifetime_secs")]
    pub route_lifetime_secs: u64,
    /// Ordering used to rank candidate paths on update.
    #[serde(default)]
    pub update_policy: UpdatePolicy,
}

fn default_route_lifetime_secs() -> u64 {
    DEFAULT_ROUTE_LIFETIME
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            route_lifetime_secs: default_route_lifetime_secs(),
            update_policy: UpdatePolicy::default(),
        }
    }
}

impl RoutingConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, RoutingError> {
        let config: Self = toml::from_str(s)
            .map_err(|e| RoutingError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration values are usable.
    pub fn validate(&self) -> Result<(), RoutingError> {
        if self.route_lifetime_secs == 0 {
            return Err(RoutingError::InvalidLifetime(self.route_lifetime_secs));
        }
        Ok(())
    }
}
