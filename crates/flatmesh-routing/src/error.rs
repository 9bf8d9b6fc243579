//! Routing layer error types.
//!
//! The table itself has no recoverable error paths: malformed arguments
//! are caller contract violations and a missing route is an ordinary
//! lookup outcome. Errors exist only at the configuration boundary.

#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("invalid route lifetime: {0} seconds")]
    InvalidLifetime(u64),

    #[error("invalid update policy: {0}")]
    InvalidPolicy(String),

    #[error("config error: {0}")]
    Config(String),
}
