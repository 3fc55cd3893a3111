pub mod diversity;
pub mod engagement;
pub mod freshness;
pub mod geo;
pub mod negative;
pub mod pipeline;
pub mod quality;
pub mod social;
pub mod vitality;

pub use diversity::{DiversityConfig, DiversityReducer};
pub use engagement::{EngagementScorer, EngagementWeights};
pub use freshness::{FreshnessConfig, FreshnessScorer};
pub use geo::{haversine_km, GeoConfig, GeoScorer};
pub use negative::{NegativeSignalScorer, NegativeSignalsConfig};
pub use pipeline::{FactorBreakdown, RankingPipeline, ScoredCandidate};
pub use quality::{QualityConfig, QualityScorer};
pub use social::{SocialGraphConfig, SocialGraphScorer};
pub use vitality::{VitalityConfig, VitalityScorer};
