use serde::{Deserialize, Serialize};

use crate::scoring::ScoredCandidate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityConfig {
    pub enabled: bool,
    pub max_consecutive: usize,
    /// Informational only: surfaced to the admin preview as the effective
    /// weight retained by overflow items. The reordering itself enforces
    /// the run caps; scores are left untouched.
    pub penalty: f64,
    pub type_enabled: bool,
    pub type_max_consecutive: usize,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_consecutive: 2,
            penalty: 0.5,
            type_enabled: true,
            type_max_consecutive: 3,
        }
    }
}

/// Greedy single-pass reducer bounding consecutive same-author and
/// same-type runs in a score-sorted list. Items are only reordered, never
/// dropped.
#[derive(Debug, Clone)]
pub struct DiversityReducer {
    config: DiversityConfig,
}

impl DiversityReducer {
    pub fn new(config: DiversityConfig) -> Self {
        Self { config }
    }

    pub fn apply(&self, candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
        if (!self.config.enabled && !self.config.type_enabled) || candidates.len() < 2 {
            return candidates;
        }

        let mut remaining = candidates;
        let mut output: Vec<ScoredCandidate> = Vec::with_capacity(remaining.len());
        let mut author_run = 0usize;
        let mut type_run = 0usize;

        while !remaining.is_empty() {
            let fit = remaining
                .iter()
                .position(|candidate| self.fits(candidate, output.last(), author_run, type_run));

            match fit {
                Some(pick) => {
                    let candidate = remaining.remove(pick);
                    author_run = next_run(author_run, output.last(), |last| {
                        last.author_id == candidate.author_id
                    });
                    type_run = next_run(type_run, output.last(), |last| {
                        last.item_type == candidate.item_type
                    });
                    output.push(candidate);
                }
                None => {
                    // Every remaining candidate would overrun; emit the best
                    // one anyway and restart the run bookkeeping.
                    let candidate = remaining.remove(0);
                    author_run = 1;
                    type_run = 1;
                    output.push(candidate);
                }
            }
        }

        output
    }

    fn fits(
        &self,
        candidate: &ScoredCandidate,
        last: Option<&ScoredCandidate>,
        author_run: usize,
        type_run: usize,
    ) -> bool {
        let Some(last) = last else {
            return true;
        };
        if self.config.enabled
            && candidate.author_id == last.author_id
            && author_run + 1 > self.config.max_consecutive
        {
            return false;
        }
        if self.config.type_enabled
            && candidate.item_type == last.item_type
            && type_run + 1 > self.config.type_max_consecutive
        {
            return false;
        }
        true
    }
}

fn next_run(
    run: usize,
    last: Option<&ScoredCandidate>,
    matches: impl Fn(&ScoredCandidate) -> bool,
) -> usize {
    match last {
        Some(last) if matches(last) => run + 1,
        _ => 1,
    }
}
