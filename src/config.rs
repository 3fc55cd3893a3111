use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};

use crate::scoring::{
    DiversityConfig, EngagementWeights, FreshnessConfig, GeoConfig, NegativeSignalsConfig,
    QualityConfig, SocialGraphConfig, VitalityConfig,
};

/// Full tunable surface of the ranking engine. Every field has a documented
/// default; a tenant may override any subset. The struct is read-only input
/// to a ranking call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmConfig {
    pub enabled: bool,
    pub engagement: EngagementWeights,
    pub vitality: VitalityConfig,
    pub geo: GeoConfig,
    pub freshness: FreshnessConfig,
    pub social_graph: SocialGraphConfig,
    pub negative_signals: NegativeSignalsConfig,
    pub quality: QualityConfig,
    pub diversity: DiversityConfig,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            engagement: EngagementWeights::default(),
            vitality: VitalityConfig::default(),
            geo: GeoConfig::default(),
            freshness: FreshnessConfig::default(),
            social_graph: SocialGraphConfig::default(),
            negative_signals: NegativeSignalsConfig::default(),
            quality: QualityConfig::default(),
            diversity: DiversityConfig::default(),
        }
    }
}

impl AlgorithmConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                AlgorithmConfig::default()
            }
        } else {
            AlgorithmConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(raw) = env::var("EDGERANK_ENABLED") {
            if !raw.trim().is_empty() {
                if let Some(value) = parse_bool(&raw) {
                    self.enabled = value;
                }
            }
        }
    }

    /// Merge a tenant's flat key/value overrides (the `feed_algorithm` JSON
    /// blob of the admin settings page) over the current values. Unknown
    /// keys are ignored; values that fail to convert leave the current
    /// value in place.
    pub fn apply_tenant_overrides(&mut self, overrides: &Value) {
        let Some(map) = overrides.as_object() else {
            return;
        };

        if let Some(value) = read_bool(map, "enabled") {
            self.enabled = value;
        }

        if let Some(value) = read_f64(map, "like_weight") {
            self.engagement.like_weight = value;
        }
        if let Some(value) = read_f64(map, "comment_weight") {
            self.engagement.comment_weight = value;
        }
        if let Some(value) = read_f64(map, "share_weight") {
            self.engagement.share_weight = value;
        }

        if let Some(value) = read_f64(map, "vitality_full_days") {
            self.vitality.full_days = value;
        }
        if let Some(value) = read_f64(map, "vitality_decay_days") {
            self.vitality.decay_days = value;
        }
        if let Some(value) = read_f64(map, "vitality_minimum") {
            self.vitality.minimum = value;
        }

        if let Some(value) = read_f64(map, "geo_full_radius") {
            self.geo.full_radius = value;
        }
        if let Some(value) = read_f64(map, "geo_decay_interval") {
            self.geo.decay_interval = value;
        }
        if let Some(value) = read_f64(map, "geo_decay_rate") {
            self.geo.decay_rate = value;
        }
        if let Some(value) = read_f64(map, "geo_minimum") {
            self.geo.minimum = value;
        }

        if let Some(value) = read_bool(map, "freshness_enabled") {
            self.freshness.enabled = value;
        }
        if let Some(value) = read_f64(map, "freshness_full_hours") {
            self.freshness.full_hours = value;
        }
        if let Some(value) = read_f64(map, "freshness_half_life") {
            self.freshness.half_life = value;
        }
        if let Some(value) = read_f64(map, "freshness_minimum") {
            self.freshness.minimum = value;
        }

        if let Some(value) = read_bool(map, "social_graph_enabled") {
            self.social_graph.enabled = value;
        }
        if let Some(value) = read_f64(map, "social_graph_max_boost") {
            self.social_graph.max_boost = value;
        }
        if let Some(value) = read_u32(map, "social_graph_lookback_days") {
            self.social_graph.lookback_days = value;
        }
        if let Some(value) = read_f64(map, "social_graph_follower_boost") {
            self.social_graph.follower_boost = value;
        }

        if let Some(value) = read_bool(map, "negative_signals_enabled") {
            self.negative_signals.enabled = value;
        }
        if let Some(value) = read_f64(map, "hide_penalty") {
            self.negative_signals.hide_penalty = value;
        }
        if let Some(value) = read_f64(map, "mute_penalty") {
            self.negative_signals.mute_penalty = value;
        }
        if let Some(value) = read_f64(map, "block_penalty") {
            self.negative_signals.block_penalty = value;
        }
        if let Some(value) = read_f64(map, "report_penalty_per") {
            self.negative_signals.report_penalty_per = value;
        }

        if let Some(value) = read_bool(map, "quality_enabled") {
            self.quality.enabled = value;
        }
        if let Some(value) = read_f64(map, "quality_image_boost") {
            self.quality.image_boost = value;
        }
        if let Some(value) = read_f64(map, "quality_video_boost") {
            self.quality.video_boost = value;
        }
        if let Some(value) = read_f64(map, "quality_link_boost") {
            self.quality.link_boost = value;
        }
        if let Some(value) = read_usize(map, "quality_length_min") {
            self.quality.length_min = value;
        }
        if let Some(value) = read_f64(map, "quality_length_bonus") {
            self.quality.length_bonus = value;
        }
        if let Some(value) = read_f64(map, "quality_hashtag_boost") {
            self.quality.hashtag_boost = value;
        }
        if let Some(value) = read_f64(map, "quality_mention_boost") {
            self.quality.mention_boost = value;
        }

        if let Some(value) = read_bool(map, "diversity_enabled") {
            self.diversity.enabled = value;
        }
        if let Some(value) = read_usize(map, "diversity_max_consecutive") {
            self.diversity.max_consecutive = value;
        }
        if let Some(value) = read_f64(map, "diversity_penalty") {
            self.diversity.penalty = value;
        }
        if let Some(value) = read_bool(map, "diversity_type_enabled") {
            self.diversity.type_enabled = value;
        }
        if let Some(value) = read_usize(map, "diversity_type_max_consecutive") {
            self.diversity.type_max_consecutive = value;
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("EDGERANK_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/edgerank.toml")))
}

fn read_f64(map: &serde_json::Map<String, Value>, key: &str) -> Option<f64> {
    let value = map.get(key)?;
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|raw| raw.trim().parse().ok()))
}

fn read_u32(map: &serde_json::Map<String, Value>, key: &str) -> Option<u32> {
    read_f64(map, key).filter(|value| *value >= 0.0).map(|value| value as u32)
}

fn read_usize(map: &serde_json::Map<String, Value>, key: &str) -> Option<usize> {
    read_f64(map, key).filter(|value| *value >= 0.0).map(|value| value as usize)
}

fn read_bool(map: &serde_json::Map<String, Value>, key: &str) -> Option<bool> {
    let value = map.get(key)?;
    if let Some(flag) = value.as_bool() {
        return Some(flag);
    }
    if let Some(number) = value.as_i64() {
        return Some(number != 0);
    }
    value.as_str().and_then(parse_bool)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" | "" => Some(false),
        _ => None,
    }
}
