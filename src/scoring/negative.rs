use serde::{Deserialize, Serialize};

use crate::{CandidateItem, ViewerContext};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NegativeSignalsConfig {
    pub enabled: bool,
    pub hide_penalty: f64,
    pub mute_penalty: f64,
    pub block_penalty: f64,
    pub report_penalty_per: f64,
}

impl Default for NegativeSignalsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hide_penalty: 0.0,
            mute_penalty: 0.1,
            block_penalty: 0.0,
            report_penalty_per: 0.15,
        }
    }
}

/// Downranking from viewer signals. Exactly one category applies per item:
/// blocked, then hidden, then muted, then the report count; penalties are
/// never stacked.
#[derive(Debug, Clone)]
pub enum NegativeSignalScorer {
    Disabled,
    Enabled(NegativeSignalsConfig),
}

impl NegativeSignalScorer {
    pub fn from_config(config: &NegativeSignalsConfig) -> Self {
        if config.enabled {
            NegativeSignalScorer::Enabled(config.clone())
        } else {
            NegativeSignalScorer::Disabled
        }
    }

    pub fn factor(&self, item: &CandidateItem, viewer: &ViewerContext) -> f64 {
        let config = match self {
            NegativeSignalScorer::Disabled => return 1.0,
            NegativeSignalScorer::Enabled(config) => config,
        };

        if viewer.blocked_author_ids.contains(&item.author_id) {
            return config.block_penalty;
        }
        if viewer.hidden_item_ids.contains(&item.id) {
            return config.hide_penalty;
        }
        if viewer.muted_author_ids.contains(&item.author_id) {
            return config.mute_penalty;
        }
        (1.0 - item.report_count as f64 * config.report_penalty_per).max(0.0)
    }
}
