use edgerank::config::AlgorithmConfig;
use serde_json::json;

#[test]
fn defaults_match_documented_values() {
    let config = AlgorithmConfig::default();

    assert!(config.enabled);
    assert!((config.engagement.like_weight - 1.0).abs() < 1e-9);
    assert!((config.engagement.comment_weight - 5.0).abs() < 1e-9);
    assert!((config.engagement.share_weight - 8.0).abs() < 1e-9);
    assert!((config.vitality.full_days - 7.0).abs() < 1e-9);
    assert!((config.vitality.decay_days - 30.0).abs() < 1e-9);
    assert!((config.vitality.minimum - 0.5).abs() < 1e-9);
    assert!((config.geo.full_radius - 10.0).abs() < 1e-9);
    assert!((config.geo.decay_interval - 10.0).abs() < 1e-9);
    assert!((config.geo.decay_rate - 0.10).abs() < 1e-9);
    assert!((config.geo.minimum - 0.1).abs() < 1e-9);
    assert!(config.freshness.enabled);
    assert!((config.freshness.full_hours - 24.0).abs() < 1e-9);
    assert!((config.freshness.half_life - 72.0).abs() < 1e-9);
    assert!((config.freshness.minimum - 0.3).abs() < 1e-9);
    assert!(config.social_graph.enabled);
    assert!((config.social_graph.max_boost - 2.0).abs() < 1e-9);
    assert_eq!(config.social_graph.lookback_days, 90);
    assert!((config.social_graph.follower_boost - 1.5).abs() < 1e-9);
    assert!(config.negative_signals.enabled);
    assert!((config.negative_signals.hide_penalty - 0.0).abs() < 1e-9);
    assert!((config.negative_signals.mute_penalty - 0.1).abs() < 1e-9);
    assert!((config.negative_signals.block_penalty - 0.0).abs() < 1e-9);
    assert!((config.negative_signals.report_penalty_per - 0.15).abs() < 1e-9);
    assert!(config.quality.enabled);
    assert!((config.quality.image_boost - 1.3).abs() < 1e-9);
    assert!((config.quality.video_boost - 1.4).abs() < 1e-9);
    assert!((config.quality.link_boost - 1.1).abs() < 1e-9);
    assert_eq!(config.quality.length_min, 50);
    assert!((config.quality.length_bonus - 1.2).abs() < 1e-9);
    assert!((config.quality.hashtag_boost - 1.1).abs() < 1e-9);
    assert!((config.quality.mention_boost - 1.15).abs() < 1e-9);
    assert!(config.diversity.enabled);
    assert_eq!(config.diversity.max_consecutive, 2);
    assert!((config.diversity.penalty - 0.5).abs() < 1e-9);
    assert!(config.diversity.type_enabled);
    assert_eq!(config.diversity.type_max_consecutive, 3);
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let config: AlgorithmConfig = toml::from_str(
        r#"
        [geo]
        full_radius = 25.0
        "#,
    )
    .expect("partial config parses");

    assert!((config.geo.full_radius - 25.0).abs() < 1e-9);
    assert!((config.geo.decay_rate - 0.10).abs() < 1e-9);
    assert!((config.vitality.full_days - 7.0).abs() < 1e-9);
    assert!(config.enabled);
}

#[test]
fn unknown_toml_keys_are_ignored() {
    let config: AlgorithmConfig = toml::from_str(
        r#"
        enabled = false

        [geo]
        full_radius = 25.0
        future_knob = 3.0

        [experimental]
        anything = "goes"
        "#,
    )
    .expect("unknown keys are tolerated");

    assert!(!config.enabled);
    assert!((config.geo.full_radius - 25.0).abs() < 1e-9);
}

#[test]
fn tenant_overrides_apply_flat_keys() {
    let mut config = AlgorithmConfig::default();
    config.apply_tenant_overrides(&json!({
        "enabled": "1",
        "like_weight": 2,
        "comment_weight": "6.5",
        "vitality_minimum": 0.4,
        "freshness_enabled": 0,
        "social_graph_lookback_days": "30",
        "quality_length_min": 80,
        "diversity_max_consecutive": "3",
        "diversity_type_enabled": false,
    }));

    assert!(config.enabled);
    assert!((config.engagement.like_weight - 2.0).abs() < 1e-9);
    assert!((config.engagement.comment_weight - 6.5).abs() < 1e-9);
    assert!((config.vitality.minimum - 0.4).abs() < 1e-9);
    assert!(!config.freshness.enabled);
    assert_eq!(config.social_graph.lookback_days, 30);
    assert_eq!(config.quality.length_min, 80);
    assert_eq!(config.diversity.max_consecutive, 3);
    assert!(!config.diversity.type_enabled);
    // untouched keys keep their defaults
    assert!((config.engagement.share_weight - 8.0).abs() < 1e-9);
}

#[test]
fn malformed_tenant_values_keep_defaults() {
    let mut config = AlgorithmConfig::default();
    config.apply_tenant_overrides(&json!({
        "like_weight": "not a number",
        "freshness_enabled": "maybe",
        "geo_minimum": null,
        "unknown_future_key": 42,
    }));

    assert!((config.engagement.like_weight - 1.0).abs() < 1e-9);
    assert!(config.freshness.enabled);
    assert!((config.geo.minimum - 0.1).abs() < 1e-9);
}

#[test]
fn non_object_tenant_blob_is_ignored() {
    let mut config = AlgorithmConfig::default();
    config.apply_tenant_overrides(&json!(["like_weight", 3]));
    assert!((config.engagement.like_weight - 1.0).abs() < 1e-9);
}

#[test]
fn config_round_trips_through_file() {
    let mut config = AlgorithmConfig::default();
    config.engagement.share_weight = 12.0;
    config.diversity.max_consecutive = 4;

    let path = std::env::temp_dir().join("edgerank_config_roundtrip.toml");
    config.write(&path).expect("config writes");

    let (loaded, _) = AlgorithmConfig::load(Some(path.clone())).expect("config loads");
    assert!((loaded.engagement.share_weight - 12.0).abs() < 1e-9);
    assert_eq!(loaded.diversity.max_consecutive, 4);
    assert!((loaded.geo.full_radius - 10.0).abs() < 1e-9);

    let _ = std::fs::remove_file(path);
}
