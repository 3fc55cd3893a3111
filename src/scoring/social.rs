use serde::{Deserialize, Serialize};

use crate::ViewerContext;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialGraphConfig {
    pub enabled: bool,
    pub max_boost: f64,
    pub lookback_days: u32,
    pub follower_boost: f64,
}

impl Default for SocialGraphConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_boost: 2.0,
            lookback_days: 90,
            follower_boost: 1.5,
        }
    }
}

/// Boost for authors the viewer interacts with. The interaction counts
/// arrive already windowed to `lookback_days` by the caller; the curve
/// saturates toward `max_boost` with diminishing returns per interaction.
#[derive(Debug, Clone)]
pub enum SocialGraphScorer {
    Disabled,
    Enabled(SocialGraphConfig),
}

impl SocialGraphScorer {
    pub fn from_config(config: &SocialGraphConfig) -> Self {
        if config.enabled {
            SocialGraphScorer::Enabled(config.clone())
        } else {
            SocialGraphScorer::Disabled
        }
    }

    pub fn factor(&self, author_id: &str, viewer: &ViewerContext) -> f64 {
        let config = match self {
            SocialGraphScorer::Disabled => return 1.0,
            SocialGraphScorer::Enabled(config) => config,
        };

        let interactions = viewer
            .interaction_counts_by_author
            .get(author_id)
            .copied()
            .unwrap_or(0) as f64;
        let base = 1.0 + (config.max_boost - 1.0) * (1.0 - 1.0 / (1.0 + interactions));

        let factor = if viewer.followed_author_ids.contains(author_id) {
            base * config.follower_boost
        } else {
            base
        };

        factor.min(config.max_boost * config.follower_boost)
    }
}
