use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalityConfig {
    pub full_days: f64,
    pub decay_days: f64,
    pub minimum: f64,
}

impl Default for VitalityConfig {
    fn default() -> Self {
        Self {
            full_days: 7.0,
            decay_days: 30.0,
            minimum: 0.5,
        }
    }
}

/// Multiplier for how recently the author was active: 1.0 within
/// `full_days`, linear decay down to `minimum` at `decay_days`.
#[derive(Debug, Clone)]
pub struct VitalityScorer {
    config: VitalityConfig,
}

impl VitalityScorer {
    pub fn new(config: VitalityConfig) -> Self {
        Self { config }
    }

    pub fn factor(&self, last_active_at: Option<i64>, now: i64) -> f64 {
        let Some(last_active) = last_active_at else {
            return self.config.minimum;
        };
        let days = ((now - last_active) as f64 / SECONDS_PER_DAY).max(0.0);
        self.factor_from_days(days)
    }

    pub fn factor_from_days(&self, days: f64) -> f64 {
        if days <= self.config.full_days {
            return 1.0;
        }
        // degenerate thresholds collapse the decay window entirely
        if self.config.decay_days <= self.config.full_days {
            return self.config.minimum;
        }
        if days >= self.config.decay_days {
            return self.config.minimum;
        }
        let decay_range = self.config.decay_days - self.config.full_days;
        let decay_percent = (days - self.config.full_days) / decay_range;
        1.0 - decay_percent * (1.0 - self.config.minimum)
    }
}
