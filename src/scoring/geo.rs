use serde::{Deserialize, Serialize};

use crate::GeoPoint;

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub full_radius: f64,
    pub decay_interval: f64,
    pub decay_rate: f64,
    pub minimum: f64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            full_radius: 10.0,
            decay_interval: 10.0,
            decay_rate: 0.10,
            minimum: 0.1,
        }
    }
}

/// Stepped linear decay over great-circle distance. Items or viewers
/// without a location are never penalized.
#[derive(Debug, Clone)]
pub struct GeoScorer {
    config: GeoConfig,
}

impl GeoScorer {
    pub fn new(config: GeoConfig) -> Self {
        Self { config }
    }

    pub fn factor(&self, viewer: Option<&GeoPoint>, item: Option<&GeoPoint>) -> f64 {
        let (Some(viewer), Some(item)) = (viewer, item) else {
            return 1.0;
        };
        self.factor_from_distance(haversine_km(viewer, item))
    }

    pub fn factor_from_distance(&self, distance_km: f64) -> f64 {
        if distance_km <= self.config.full_radius {
            return 1.0;
        }
        if self.config.decay_interval <= 0.0 {
            return self.config.minimum;
        }
        let extra = distance_km - self.config.full_radius;
        let steps = (extra / self.config.decay_interval).floor();
        (1.0 - steps * self.config.decay_rate).max(self.config.minimum)
    }
}

pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat_diff = (b.lat - a.lat).to_radians();
    let lon_diff = (b.lon - a.lon).to_radians();

    let h = (lat_diff / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (lon_diff / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
