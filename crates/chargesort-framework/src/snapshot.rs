//! Cluster snapshot files.
//!
//! A snapshot lists the nodes of a cluster together with their charge
//! rates, in the order the host would list them:
//!
//! ```toml
//! [[nodes]]
//! name = "node1"
//! charge_rate = 70
//! ```

use std::collections::HashSet;
use std::path::Path;

use chargesort_core::CandidateNode;
use serde::{Deserialize, Serialize};

use crate::error::{FrameworkError, FrameworkResult};
use crate::plugin::{Handle, Node, NodeInfo};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub nodes: Vec<SnapshotNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub name: String,
    pub charge_rate: i64,
}

impl ClusterSnapshot {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let snapshot: ClusterSnapshot = toml::from_str(content)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Node names must be unique; a name identifies a node.
    pub fn validate(&self) -> FrameworkResult<()> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.name.as_str()) {
                return Err(FrameworkError::Snapshot(format!(
                    "duplicate node name: {}",
                    node.name
                )));
            }
        }
        Ok(())
    }

    pub fn candidates(&self) -> Vec<CandidateNode> {
        self.nodes
            .iter()
            .map(|n| CandidateNode::new(n.name.clone(), n.charge_rate))
            .collect()
    }

    pub fn node_infos(&self) -> Vec<NodeInfo> {
        self.nodes
            .iter()
            .map(|n| {
                NodeInfo::new(Node {
                    name: n.name.clone(),
                })
            })
            .collect()
    }
}

impl Handle for ClusterSnapshot {
    fn candidate_nodes(&self) -> Vec<CandidateNode> {
        self.candidates()
    }
}
