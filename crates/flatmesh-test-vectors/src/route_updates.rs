//! Test vector types for route_updates.json
//!
//! Update-decision ordering and lookup-after-update test vectors.

use serde::Deserialize;

/// A stored route entry with an explicit absolute expiration.
#[derive(Debug, Deserialize)]
pub struct StoredRoute {
    pub retransmitter: String,
    pub interface: u32,
    pub cost: u8,
    pub seqnum: u16,
    pub expires: u64,
}

/// A candidate path offered to the table.
#[derive(Debug, Deserialize)]
pub struct CandidateRoute {
    pub retransmitter: String,
    pub interface: u32,
    pub cost: u8,
    pub seqnum: u16,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDecisionVector {
    pub description: String,
    pub policy: String,
    pub existing: Option<StoredRoute>,
    pub candidate: CandidateRoute,
    pub now: u64,
    pub expected_decision: String,
}

/// One `add_path` call in a scripted sequence.
#[derive(Debug, Deserialize)]
pub struct AddPathStep {
    pub retransmitter: String,
    pub interface: u32,
    pub cost: u8,
    pub seqnum: u16,
    pub now: u64,
}

#[derive(Debug, Deserialize)]
pub struct LookupAfterUpdateVector {
    pub description: String,
    pub lifetime: u64,
    pub destination: String,
    pub steps: Vec<AddPathStep>,
    pub lookup_now: u64,
    pub expected_valid: bool,
    #[serde(default)]
    pub expected_retransmitter: Option<String>,
    #[serde(default)]
    pub expected_interface: Option<u32>,
    #[serde(default)]
    pub expected_cost: Option<u8>,
    #[serde(default)]
    pub expected_seqnum: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct RouteUpdateVectors {
    pub description: String,
    pub source: String,
    pub update_decision_vectors: Vec<UpdateDecisionVector>,
    pub lookup_after_update_vectors: Vec<LookupAfterUpdateVector>,
}

pub fn load() -> RouteUpdateVectors {
    let json = include_str!("../../../.test-vectors/route_updates.json");
    serde_json::from_str(json).expect("Failed to deserialize route_updates.json")
}
