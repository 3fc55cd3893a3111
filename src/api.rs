use serde::{Deserialize, Serialize};

use edgerank::scoring::ScoredCandidate;
use edgerank::{CandidateItem, RankedItem, ViewerContext};

#[derive(Debug, Deserialize)]
pub struct ApiRankRequest {
    #[serde(default)]
    pub candidates: Vec<CandidateItem>,
    #[serde(default)]
    pub viewer: ViewerContext,
    /// Unix timestamp to rank at; defaults to the current time.
    pub now: Option<i64>,
    /// Flat per-tenant override blob merged over the server config.
    pub tenant_overrides: Option<serde_json::Value>,
    pub include_factors: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ApiRankResponse {
    pub ranked: Vec<RankedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed: Option<Vec<ScoredCandidate>>,
}

impl ApiRankResponse {
    pub fn new(ranked: Vec<RankedItem>, detailed: Option<Vec<ScoredCandidate>>) -> Self {
        Self { ranked, detailed }
    }
}
