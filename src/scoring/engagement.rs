use serde::{Deserialize, Serialize};

use crate::EngagementCounts;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementWeights {
    pub like_weight: f64,
    pub comment_weight: f64,
    pub share_weight: f64,
}

impl Default for EngagementWeights {
    fn default() -> Self {
        Self {
            like_weight: 1.0,
            comment_weight: 5.0,
            share_weight: 8.0,
        }
    }
}

/// Weighted sum of engagement counts. Unbounded above, floored at zero.
#[derive(Debug, Clone)]
pub struct EngagementScorer {
    weights: EngagementWeights,
}

impl EngagementScorer {
    pub fn new(weights: EngagementWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, counts: &EngagementCounts) -> f64 {
        let score = counts.likes as f64 * self.weights.like_weight
            + counts.comments as f64 * self.weights.comment_weight
            + counts.shares as f64 * self.weights.share_weight;
        score.max(0.0)
    }
}
