//! Plugin capability traits and the objects they operate on.
//!
//! The host scheduler talks to plugins only through these traits. Shared
//! host state (the candidate node list) reaches a plugin through a
//! [`Handle`] passed at construction, never through globals.

use std::fmt;
use std::sync::Arc;

use chargesort_core::CandidateNode;
use serde::{Deserialize, Serialize};

use crate::events::ClusterEvent;
use crate::status::Status;

/// Pod being scheduled. The charge-rate policy does not look inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    pub namespace: String,
    pub name: String,
}

impl Pod {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parse `namespace/name`; a bare name lands in `default`.
    pub fn parse(key: &str) -> Self {
        match key.split_once('/') {
            Some((ns, name)) => Pod::new(ns, name),
            None => Pod::new("default", key),
        }
    }
}

impl fmt::Display for Pod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// A cluster node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
}

/// Host-side view of a node under evaluation.
///
/// `node` is `None` when the host lost track of the node between listing
/// and filtering (e.g. it was deleted mid-cycle).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeInfo {
    node: Option<Node>,
}

impl NodeInfo {
    pub fn new(node: Node) -> Self {
        Self { node: Some(node) }
    }

    pub fn unresolved() -> Self {
        Self { node: None }
    }

    pub fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.node.as_ref().map(|n| n.name.as_str())
    }
}

/// Scratch state for one scheduling cycle.
///
/// The host may pin the candidate set here once per cycle so that every
/// node of the cycle is judged against the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct CycleState {
    candidates: Option<Arc<[CandidateNode]>>,
}

impl CycleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_candidates(&mut self, candidates: Vec<CandidateNode>) {
        self.candidates = Some(candidates.into());
    }

    pub fn read_candidates(&self) -> Option<Arc<[CandidateNode]>> {
        self.candidates.clone()
    }
}

/// Host capability exposed to plugins.
pub trait Handle: Send + Sync {
    /// Full candidate set for the current decision, in host listing order.
    fn candidate_nodes(&self) -> Vec<CandidateNode>;
}

/// Base trait of every plugin.
pub trait Plugin: Send + Sync {
    /// Name used in the registry, profiles and logs.
    fn name(&self) -> &str;

    /// Returns the plugin's requeue hints, if it has any.
    fn as_enqueue_extensions(&self) -> Option<&dyn EnqueueExtensions> {
        None
    }
}

/// Extension point that decides whether a pod can run on a node.
pub trait FilterPlugin: Plugin {
    fn filter(&self, state: &CycleState, pod: &Pod, node_info: &NodeInfo) -> Status;
}

/// Lets a plugin name the cluster events that may turn its rejections
/// into successes.
pub trait EnqueueExtensions {
    fn events_to_register(&self) -> Vec<ClusterEvent>;
}
