//! Final ranking of scored candidates.

use prodscout_core::{Candidate, ScoredCandidate};

/// Order candidates by descending average sentiment.
///
/// The sort is stable: candidates with equal scores keep the relative order
/// they held in the input, which is extraction (first-discovered) order.
/// Scores are carried through at full precision.
#[must_use]
pub fn rank_candidates(mut scored: Vec<(Candidate, f32)>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .map(|(candidate, score)| ScoredCandidate { candidate, score })
        .collect()
}
