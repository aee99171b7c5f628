//! Charge-rate ranking.
//!
//! Candidates are ordered from highest to lowest charge rate. Ties keep
//! the order the caller supplied them in, so the first candidate with
//! the maximum charge rate is always the top choice.

use tracing::debug;

use crate::error::{PolicyError, PolicyResult};
use crate::types::{CandidateNode, RankedSequence};

/// Rank candidates by charge rate, highest first.
///
/// The caller's slice is never reordered; ranking works on a copy. The
/// sort is stable, so candidates with equal charge rates retain their
/// input relative order.
pub fn rank(candidates: &[CandidateNode]) -> RankedSequence {
    let mut ranked = candidates.to_vec();
    // `sort_by` is stable: only a strictly lower charge rate moves a node back.
    ranked.sort_by(|a, b| b.charge_rate.cmp(&a.charge_rate));

    debug!(
        candidates = ranked.len(),
        top = ranked.first().map(|n| n.identifier.as_str()),
        "ranked candidates by charge rate"
    );

    RankedSequence::from_sorted(ranked)
}

/// The head of [`rank`] without building the full ranking.
///
/// Returns the first candidate (in input order) holding the maximum
/// charge rate.
pub fn top_choice(candidates: &[CandidateNode]) -> PolicyResult<&CandidateNode> {
    candidates
        .iter()
        .reduce(|best, n| if n.charge_rate > best.charge_rate { n } else { best })
        .ok_or(PolicyError::EmptyCandidateSet)
}
