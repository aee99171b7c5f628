//! Top-choice validation.
//!
//! Turns a ranking into an admission decision for a single node: a node
//! is admitted only if it is the top-ranked candidate.

use tracing::debug;

use crate::error::{PolicyError, PolicyResult};
use crate::ranker::rank;
use crate::types::{CandidateNode, Decision, ReasonCode};

/// Decide whether `target` is the top-ranked node among `candidates`.
///
/// An empty candidate set is an error, not a rejection. A target that
/// is missing from the set is rejected with [`ReasonCode::NotACandidate`].
pub fn is_top_choice(target: &str, candidates: &[CandidateNode]) -> PolicyResult<Decision> {
    if candidates.is_empty() {
        return Err(PolicyError::EmptyCandidateSet);
    }

    if !candidates.iter().any(|n| n.identifier == target) {
        debug!(node = target, "target is not a candidate");
        return Ok(Decision::reject(ReasonCode::NotACandidate));
    }

    let ranked = rank(candidates);
    let top = ranked.top().ok_or(PolicyError::EmptyCandidateSet)?;

    let decision = if top.identifier == target {
        Decision::accept()
    } else {
        Decision::reject(ReasonCode::NotTopChoice {
            top: top.identifier.clone(),
        })
    };

    debug!(
        node = target,
        top = %top.identifier,
        top_charge_rate = top.charge_rate,
        accepted = decision.accepted,
        "evaluated top choice"
    );

    Ok(decision)
}

/// Like [`is_top_choice`], for callers whose target may be unresolved.
///
/// `None` fails with [`PolicyError::MissingNodeInfo`] before anything is
/// ranked.
pub fn is_top_choice_for(
    target: Option<&str>,
    candidates: &[CandidateNode],
) -> PolicyResult<Decision> {
    let target = target.ok_or(PolicyError::MissingNodeInfo)?;
    is_top_choice(target, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<CandidateNode> {
        vec![
            CandidateNode::new("node1", 70),
            CandidateNode::new("node2", 30),
            CandidateNode::new("node3", 90),
        ]
    }

    #[test]
    fn accepts_highest_charge_rate() {
        let decision = is_top_choice("node3", &scenario()).unwrap();
        assert!(decision.accepted);
        assert_eq!(decision.reason, ReasonCode::TopChoice);
    }

    #[test]
    fn rejects_lower_charge_rate_naming_the_winner() {
        let decision = is_top_choice("node1", &scenario()).unwrap();
        assert!(!decision.accepted);
        assert_eq!(
            decision.reason,
            ReasonCode::NotTopChoice {
                top: "node3".to_string()
            }
        );
    }

    #[test]
    fn tie_goes_to_earlier_candidate() {
        let candidates = vec![CandidateNode::new("a", 50), CandidateNode::new("b", 50)];

        assert!(is_top_choice("a", &candidates).unwrap().accepted);
        assert!(!is_top_choice("b", &candidates).unwrap().accepted);
    }

    #[test]
    fn empty_set_is_an_error_not_a_rejection() {
        assert_eq!(is_top_choice("x", &[]), Err(PolicyError::EmptyCandidateSet));
    }

    #[test]
    fn absent_target_is_rejected_with_distinct_reason() {
        let decision = is_top_choice("node9", &scenario()).unwrap();
        assert!(!decision.accepted);
        assert_eq!(decision.reason, ReasonCode::NotACandidate);
    }

    #[test]
    fn unresolved_target_fails_fast() {
        assert_eq!(
            is_top_choice_for(None, &scenario()),
            Err(PolicyError::MissingNodeInfo)
        );
        // Even with no candidates, the missing node is reported first.
        assert_eq!(is_top_choice_for(None, &[]), Err(PolicyError::MissingNodeInfo));
    }

    #[test]
    fn resolved_target_delegates() {
        let decision = is_top_choice_for(Some("node3"), &scenario()).unwrap();
        assert!(decision.accepted);
    }

    #[test]
    fn single_candidate_is_always_top() {
        let candidates = vec![CandidateNode::new("only", -100)];
        assert!(is_top_choice("only", &candidates).unwrap().accepted);
    }

    #[test]
    fn duplicate_identifiers_are_one_node() {
        // Any entry for `a` winning the ranking admits `a`.
        let candidates = vec![
            CandidateNode::new("a", 10),
            CandidateNode::new("b", 50),
            CandidateNode::new("a", 90),
        ];

        assert_eq!(is_top_choice("a", &candidates).unwrap(), Decision::accept());
        assert_eq!(
            is_top_choice("b", &candidates).unwrap(),
            Decision::reject(ReasonCode::NotTopChoice {
                top: "a".to_string()
            })
        );
    }
}
