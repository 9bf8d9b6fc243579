//! Test vector types for route_expiration.json
//!
//! Expiry comparison, expiration refresh, and cull sweep test vectors.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExpiryCheckVector {
    pub description: String,
    pub expires: u64,
    pub check_time: u64,
    pub expected_expired: bool,
    pub comparison: String,
}

/// One `add_path` call in a scripted sequence.
#[derive(Debug, Deserialize)]
pub struct UpdateCall {
    pub retransmitter: String,
    pub interface: u32,
    pub cost: u8,
    pub seqnum: u16,
    pub now: u64,
}

#[derive(Debug, Deserialize)]
pub struct RefreshVector {
    pub description: String,
    pub lifetime: u64,
    pub destination: String,
    pub first: UpdateCall,
    pub second: UpdateCall,
    pub check_time: u64,
    pub expected_valid: bool,
    #[serde(default)]
    pub expected_retransmitter: Option<String>,
    #[serde(default)]
    pub expected_cost: Option<u8>,
    #[serde(default)]
    pub expected_seqnum: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct CullEntry {
    pub destination: String,
    pub added_at: u64,
}

#[derive(Debug, Deserialize)]
pub struct CullVector {
    pub description: String,
    pub lifetime: u64,
    pub entries: Vec<CullEntry>,
    pub cull_time: u64,
    pub expected_removed: usize,
    pub expected_remaining: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RouteExpirationVectors {
    pub description: String,
    pub source: String,
    pub expiry_check_vectors: Vec<ExpiryCheckVector>,
    pub refresh_vectors: Vec<RefreshVector>,
    pub cull_vectors: Vec<CullVector>,
}

pub fn load() -> RouteExpirationVectors {
    let json = include_str!("../../../.test-vectors/route_expiration.json");
    serde_json::from_str(json).expect("Failed to deserialize route_expiration.json")
}
