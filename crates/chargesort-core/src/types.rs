//! Candidate, ranking and decision types.
//!
//! Everything here lives for exactly one decision: callers build a fresh
//! candidate list, the ranker reorders a private copy of it, and the
//! validator turns the head of that ranking into a [`Decision`].

use serde::{Deserialize, Serialize};

/// One schedulable node as seen by the charge-rate policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateNode {
    /// Node name. Two candidates with the same identifier are the same node.
    pub identifier: String,
    /// Ranking criterion (higher = better). May be negative.
    pub charge_rate: i64,
}

impl CandidateNode {
    pub fn new(identifier: impl Into<String>, charge_rate: i64) -> Self {
        Self {
            identifier: identifier.into(),
            charge_rate,
        }
    }
}

/// Candidates ordered from highest to lowest charge rate.
///
/// Always a permutation of the set it was ranked from. Candidates with
/// equal charge rates keep the relative order they had in that set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedSequence(Vec<CandidateNode>);

impl RankedSequence {
    pub(crate) fn from_sorted(nodes: Vec<CandidateNode>) -> Self {
        Self(nodes)
    }

    /// The top-ranked candidate, if any.
    pub fn top(&self) -> Option<&CandidateNode> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateNode> {
        self.0.iter()
    }

    /// Identifiers in ranked order.
    pub fn identifiers(&self) -> Vec<&str> {
        self.0.iter().map(|n| n.identifier.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[CandidateNode] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<CandidateNode> {
        self.0
    }
}

impl<'a> IntoIterator for &'a RankedSequence {
    type Item = &'a CandidateNode;
    type IntoIter = std::slice::Iter<'a, CandidateNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Why a [`Decision`] came out the way it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ReasonCode {
    /// The target is the top-ranked candidate.
    TopChoice,
    /// The target is a candidate, but `top` outranks it.
    NotTopChoice { top: String },
    /// The target does not appear in the candidate set.
    NotACandidate,
}

impl ReasonCode {
    /// Human-readable explanation, suitable for scheduler status messages.
    pub fn message(&self) -> String {
        match self {
            ReasonCode::TopChoice => "node has the highest charge rate".to_string(),
            ReasonCode::NotTopChoice { top } => {
                format!("node {top} has a higher charge rate")
            }
            ReasonCode::NotACandidate => "node is not in the candidate set".to_string(),
        }
    }
}

/// Accept/reject outcome for one target node against one candidate set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub accepted: bool,
    pub reason: ReasonCode,
}

impl Decision {
    pub fn accept() -> Self {
        Self {
            accepted: true,
            reason: ReasonCode::TopChoice,
        }
    }

    pub fn reject(reason: ReasonCode) -> Self {
        Self {
            accepted: false,
            reason,
        }
    }
}
