use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{CandidateItem, EngagementCounts, GeoPoint, ItemType, MediaFlags};

const MAX_AGE_HOURS: i64 = 24 * 14;
const MAX_IDLE_DAYS: i64 = 60;

/// Generate a reproducible candidate batch for demos and load checks. The
/// same seed always yields the same batch relative to `now`.
pub fn generate_candidates(count: usize, authors: usize, seed: u64, now: i64) -> Vec<CandidateItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    let author_pool = authors.max(1);

    (0..count)
        .map(|idx| {
            let author = rng.gen_range(0..author_pool);
            let created_at = now - rng.gen_range(0..MAX_AGE_HOURS * 3600);
            let author_last_active_at = now - rng.gen_range(0..MAX_IDLE_DAYS * 86_400);

            let location = if rng.gen::<f64>() < 0.6 {
                Some(GeoPoint {
                    lat: 52.52 + rng.gen_range(-1.5..1.5),
                    lon: 13.40 + rng.gen_range(-1.5..1.5),
                })
            } else {
                None
            };

            CandidateItem {
                id: format!("item_{:04}", idx),
                author_id: format!("author_{}", author),
                item_type: sample_type(&mut rng),
                created_at,
                author_last_active_at: Some(author_last_active_at),
                location,
                engagement: EngagementCounts {
                    likes: rng.gen_range(0..120),
                    comments: rng.gen_range(0..30),
                    shares: rng.gen_range(0..12),
                },
                report_count: if rng.gen::<f64>() < 0.04 {
                    rng.gen_range(1..4)
                } else {
                    0
                },
                media: MediaFlags {
                    has_image: rng.gen::<f64>() < 0.35,
                    has_video: rng.gen::<f64>() < 0.1,
                    has_link: rng.gen::<f64>() < 0.25,
                },
                text_length: rng.gen_range(0..400),
                hashtag_count: if rng.gen::<f64>() < 0.3 {
                    rng.gen_range(1..5)
                } else {
                    0
                },
                mention_count: if rng.gen::<f64>() < 0.2 {
                    rng.gen_range(1..3)
                } else {
                    0
                },
            }
        })
        .collect()
}

fn sample_type(rng: &mut StdRng) -> ItemType {
    match rng.gen_range(0..10) {
        0 | 1 => ItemType::Event,
        2 => ItemType::Listing,
        3 => ItemType::Group,
        _ => ItemType::Post,
    }
}
