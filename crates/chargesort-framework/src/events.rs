//! Cluster events that can make a rejected pod schedulable again.

use std::fmt;
use std::ops::BitOr;

use serde::Serialize;

/// Kind of cluster object an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Resource {
    Node,
    Pod,
}

/// Set of object changes, combinable with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ActionType(u32);

impl ActionType {
    pub const ADD: ActionType = ActionType(1);
    pub const DELETE: ActionType = ActionType(1 << 1);
    pub const UPDATE_NODE_LABEL: ActionType = ActionType(1 << 2);
    pub const UPDATE_NODE_ALLOCATABLE: ActionType = ActionType(1 << 3);
    pub const ALL: ActionType = ActionType(0b1111);

    pub fn contains(self, other: ActionType) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(self, other: ActionType) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for ActionType {
    type Output = ActionType;

    fn bitor(self, rhs: ActionType) -> ActionType {
        ActionType(self.0 | rhs.0)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == ActionType::ALL {
            return f.write_str("All");
        }
        let names: Vec<&str> = [
            (ActionType::ADD, "Add"),
            (ActionType::DELETE, "Delete"),
            (ActionType::UPDATE_NODE_LABEL, "UpdateNodeLabel"),
            (ActionType::UPDATE_NODE_ALLOCATABLE, "UpdateNodeAllocatable"),
        ]
        .into_iter()
        .filter(|(bit, _)| self.contains(*bit))
        .map(|(_, name)| name)
        .collect();
        f.write_str(&names.join("|"))
    }
}

/// A change in the cluster that a plugin wants to be woken up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClusterEvent {
    pub resource: Resource,
    pub action: ActionType,
}

impl ClusterEvent {
    pub const fn new(resource: Resource, action: ActionType) -> Self {
        Self { resource, action }
    }

    /// Whether an observed event is covered by this registration.
    pub fn matches(&self, observed: &ClusterEvent) -> bool {
        self.resource == observed.resource && self.action.intersects(observed.action)
    }
}

impl fmt::Display for ClusterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{}", self.resource, self.action)
    }
}
