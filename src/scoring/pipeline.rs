use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::config::AlgorithmConfig;
use crate::scoring::{
    DiversityReducer, EngagementScorer, FreshnessScorer, GeoScorer, NegativeSignalScorer,
    QualityScorer, SocialGraphScorer, VitalityScorer,
};
use crate::{CandidateItem, ItemType, ViewerContext};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub engagement: f64,
    pub vitality: f64,
    pub geo: f64,
    pub freshness: f64,
    pub social_graph: f64,
    pub negative_signals: f64,
    pub quality: f64,
}

/// One ranked entry with its composite score. `factors` is `None` in the
/// reverse-chronological terminal mode, where factor functions are never
/// consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub item_id: String,
    pub author_id: String,
    pub item_type: ItemType,
    pub created_at: i64,
    pub factors: Option<FactorBreakdown>,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct RankingPipeline {
    enabled: bool,
    engagement: EngagementScorer,
    vitality: VitalityScorer,
    geo: GeoScorer,
    freshness: FreshnessScorer,
    social_graph: SocialGraphScorer,
    negative_signals: NegativeSignalScorer,
    quality: QualityScorer,
    diversity: DiversityReducer,
}

impl RankingPipeline {
    pub fn new(config: &AlgorithmConfig) -> Self {
        Self {
            enabled: config.enabled,
            engagement: EngagementScorer::new(config.engagement.clone()),
            vitality: VitalityScorer::new(config.vitality.clone()),
            geo: GeoScorer::new(config.geo.clone()),
            freshness: FreshnessScorer::from_config(&config.freshness),
            social_graph: SocialGraphScorer::from_config(&config.social_graph),
            negative_signals: NegativeSignalScorer::from_config(&config.negative_signals),
            quality: QualityScorer::from_config(&config.quality),
            diversity: DiversityReducer::new(config.diversity.clone()),
        }
    }

    pub fn rank(
        &self,
        candidates: &[CandidateItem],
        viewer: &ViewerContext,
        now: i64,
    ) -> Vec<ScoredCandidate> {
        if candidates.is_empty() {
            return Vec::new();
        }
        if !self.enabled {
            return reverse_chronological(candidates);
        }

        let mut scored: Vec<ScoredCandidate> = candidates
            .par_iter()
            .map(|item| self.score_item(item, viewer, now))
            .collect();

        scored.sort_by(compare_by_score);
        tracing::debug!(candidates = scored.len(), "ranked candidate batch");

        self.diversity.apply(scored)
    }

    fn score_item(
        &self,
        item: &CandidateItem,
        viewer: &ViewerContext,
        now: i64,
    ) -> ScoredCandidate {
        let engagement = self.engagement.score(&item.engagement);
        let vitality = self.vitality.factor(item.author_last_active_at, now);
        let geo = self
            .geo
            .factor(viewer.viewer_location.as_ref(), item.location.as_ref());
        let freshness = self.freshness.factor(item.created_at, now);
        let social_graph = self.social_graph.factor(&item.author_id, viewer);
        let negative_signals = self.negative_signals.factor(item, viewer);
        let quality = self.quality.factor(item);

        let score =
            engagement * vitality * geo * freshness * social_graph * negative_signals * quality;

        ScoredCandidate {
            item_id: item.id.clone(),
            author_id: item.author_id.clone(),
            item_type: item.item_type.clone(),
            created_at: item.created_at,
            factors: Some(FactorBreakdown {
                engagement,
                vitality,
                geo,
                freshness,
                social_graph,
                negative_signals,
                quality,
            }),
            score,
        }
    }
}

/// Terminal mode for a disabled engine: the comparison key becomes the
/// creation time, newest first.
fn reverse_chronological(candidates: &[CandidateItem]) -> Vec<ScoredCandidate> {
    let mut out: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|item| ScoredCandidate {
            item_id: item.id.clone(),
            author_id: item.author_id.clone(),
            item_type: item.item_type.clone(),
            created_at: item.created_at,
            factors: None,
            score: 0.0,
        })
        .collect();
    out.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.item_id.cmp(&b.item_id))
    });
    out
}

fn compare_by_score(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.item_id.cmp(&b.item_id))
}
