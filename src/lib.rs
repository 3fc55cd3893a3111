pub mod config;
pub mod scoring;
pub mod synthetic;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::AlgorithmConfig;
use crate::scoring::{RankingPipeline, ScoredCandidate};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemType {
    Post,
    Event,
    Listing,
    Group,
    Other(String),
}

impl ItemType {
    pub fn from_tag(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "post" => ItemType::Post,
            "event" => ItemType::Event,
            "listing" => ItemType::Listing,
            "group" => ItemType::Group,
            other => ItemType::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            ItemType::Post => "post",
            ItemType::Event => "event",
            ItemType::Listing => "listing",
            ItemType::Group => "group",
            ItemType::Other(tag) => tag,
        }
    }
}

impl Default for ItemType {
    fn default() -> Self {
        ItemType::Post
    }
}

impl Serialize for ItemType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for ItemType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ItemType::from_tag(&tag))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementCounts {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaFlags {
    pub has_image: bool,
    pub has_video: bool,
    pub has_link: bool,
}

/// Immutable snapshot of one feed candidate for the duration of a ranking
/// call. All timestamps are unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateItem {
    pub id: String,
    pub author_id: String,
    #[serde(default)]
    pub item_type: ItemType,
    pub created_at: i64,
    #[serde(default)]
    pub author_last_active_at: Option<i64>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub engagement: EngagementCounts,
    #[serde(default)]
    pub report_count: u32,
    #[serde(default)]
    pub media: MediaFlags,
    #[serde(default)]
    pub text_length: usize,
    #[serde(default)]
    pub hashtag_count: u32,
    #[serde(default)]
    pub mention_count: u32,
}

/// Everything the engine knows about the viewer. `blocked_author_ids` is the
/// merged both-direction block set: the social-graph collaborator inserts an
/// author whether the viewer blocked them or they blocked the viewer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerContext {
    pub viewer_id: String,
    pub viewer_location: Option<GeoPoint>,
    pub blocked_author_ids: HashSet<String>,
    pub muted_author_ids: HashSet<String>,
    pub hidden_item_ids: HashSet<String>,
    pub followed_author_ids: HashSet<String>,
    pub interaction_counts_by_author: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedItem {
    pub item_id: String,
    pub composite_score: f64,
    pub final_position: usize,
}

/// Rank a candidate batch against the current wall clock.
pub fn rank(
    candidates: &[CandidateItem],
    viewer: &ViewerContext,
    config: &AlgorithmConfig,
) -> Vec<RankedItem> {
    rank_at(candidates, viewer, config, current_timestamp())
}

/// Rank a candidate batch at an explicit point in time. Identical inputs
/// (including `now`) always produce identical output.
pub fn rank_at(
    candidates: &[CandidateItem],
    viewer: &ViewerContext,
    config: &AlgorithmConfig,
    now: i64,
) -> Vec<RankedItem> {
    ranked_items(&rank_detailed_at(candidates, viewer, config, now))
}

/// Like [`rank_at`], but keeps the per-factor breakdown on each entry.
pub fn rank_detailed_at(
    candidates: &[CandidateItem],
    viewer: &ViewerContext,
    config: &AlgorithmConfig,
    now: i64,
) -> Vec<ScoredCandidate> {
    RankingPipeline::new(config).rank(candidates, viewer, now)
}

pub fn ranked_items(scored: &[ScoredCandidate]) -> Vec<RankedItem> {
    scored
        .iter()
        .enumerate()
        .map(|(position, candidate)| RankedItem {
            item_id: candidate.item_id.clone(),
            composite_score: candidate.score,
            final_position: position,
        })
        .collect()
}

pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or(0)
}
