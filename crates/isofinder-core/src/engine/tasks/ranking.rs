use crate::core::models::result::SearchCandidate;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Orders candidates known-first, then by distance of the score from `target`,
/// and keeps at most `limit`. The sort is stable, so ties keep sweep order.
#[instrument(skip_all, name = "ranking_task", fields(limit = limit))]
pub fn run(mut candidates: Vec<SearchCandidate>, target: f64, limit: usize) -> Vec<SearchCandidate> {
    candidates.sort_by(|a, b| compare(a, b, target));

    let total = candidates.len();
    candidates.truncate(limit);
    debug!(total, kept = candidates.len(), "Ranked candidates.");
    candidates
}

fn compare(a: &SearchCandidate, b: &SearchCandidate, target: f64) -> Ordering {
    b.is_known_medical.cmp(&a.is_known_medical).then_with(|| {
        let da = (a.stability_score() - target).abs();
        let db = (b.stability_score() - target).abs();
        da.total_cmp(&db)
    })
}
