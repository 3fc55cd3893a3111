use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessConfig {
    pub enabled: bool,
    pub full_hours: f64,
    pub half_life: f64,
    pub minimum: f64,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            full_hours: 24.0,
            half_life: 72.0,
            minimum: 0.3,
        }
    }
}

/// Exponential age decay: full score within `full_hours`, then the factor
/// halves every `half_life` hours, floored at `minimum`.
#[derive(Debug, Clone)]
pub enum FreshnessScorer {
    Disabled,
    Enabled(FreshnessConfig),
}

impl FreshnessScorer {
    pub fn from_config(config: &FreshnessConfig) -> Self {
        if config.enabled {
            FreshnessScorer::Enabled(config.clone())
        } else {
            FreshnessScorer::Disabled
        }
    }

    pub fn factor(&self, created_at: i64, now: i64) -> f64 {
        let config = match self {
            FreshnessScorer::Disabled => return 1.0,
            FreshnessScorer::Enabled(config) => config,
        };

        let hours = ((now - created_at) as f64 / SECONDS_PER_HOUR).max(0.0);
        if hours <= config.full_hours {
            return 1.0;
        }
        if config.half_life <= 0.0 {
            return config.minimum;
        }
        let decay = 0.5_f64.powf((hours - config.full_hours) / config.half_life);
        decay.max(config.minimum)
    }
}
