//! Test vector loading infrastructure for the flatmesh routing stack.
//!
//! Each module corresponds to a single JSON test vector file under
//! `.test-vectors/` at the workspace root and provides:
//! - Typed structs matching the JSON schema
//! - A `load()` function that deserializes the embedded JSON via `include_str!`

pub mod route_expiration;
pub mod route_updates;
