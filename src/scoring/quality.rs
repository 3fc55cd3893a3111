use serde::{Deserialize, Serialize};

use crate::CandidateItem;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    pub enabled: bool,
    pub image_boost: f64,
    pub video_boost: f64,
    pub link_boost: f64,
    pub length_min: usize,
    pub length_bonus: f64,
    pub hashtag_boost: f64,
    pub mention_boost: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            image_boost: 1.3,
            video_boost: 1.4,
            link_boost: 1.1,
            length_min: 50,
            length_bonus: 1.2,
            hashtag_boost: 1.1,
            mention_boost: 1.15,
        }
    }
}

/// Commutative multiplicative boosts for content attributes.
#[derive(Debug, Clone)]
pub enum QualityScorer {
    Disabled,
    Enabled(QualityConfig),
}

impl QualityScorer {
    pub fn from_config(config: &QualityConfig) -> Self {
        if config.enabled {
            QualityScorer::Enabled(config.clone())
        } else {
            QualityScorer::Disabled
        }
    }

    pub fn factor(&self, item: &CandidateItem) -> f64 {
        let config = match self {
            QualityScorer::Disabled => return 1.0,
            QualityScorer::Enabled(config) => config,
        };

        let mut factor = 1.0;
        if item.media.has_image {
            factor *= config.image_boost;
        }
        if item.media.has_video {
            factor *= config.video_boost;
        }
        if item.media.has_link {
            factor *= config.link_boost;
        }
        if item.hashtag_count > 0 {
            factor *= config.hashtag_boost;
        }
        if item.mention_count > 0 {
            factor *= config.mention_boost;
        }
        if item.text_length >= config.length_min {
            factor *= config.length_bonus;
        }
        factor
    }
}
