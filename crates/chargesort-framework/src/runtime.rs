//! Framework runtime — runs a profile's filter plugins over nodes.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Profile;
use crate::error::FrameworkResult;
use crate::events::ClusterEvent;
use crate::plugin::{CycleState, FilterPlugin, Handle, NodeInfo, Pod};
use crate::registry::Registry;
use crate::status::Status;

/// Outcome of filtering every node for one pod.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterResult {
    /// Names of nodes that passed every filter, in input order.
    pub feasible: Vec<String>,
    /// Failing status per node name.
    pub diagnosis: BTreeMap<String, Status>,
}

/// Instantiated plugins for one profile.
pub struct Framework {
    profile_name: String,
    handle: Arc<dyn Handle>,
    filter_plugins: Vec<Arc<dyn FilterPlugin>>,
}

impl Framework {
    /// Build every filter plugin the profile enables, in order.
    pub fn new(
        profile: &Profile,
        registry: &Registry,
        handle: Arc<dyn Handle>,
    ) -> FrameworkResult<Self> {
        let filter_plugins = profile
            .plugins
            .filter
            .enabled
            .iter()
            .map(|name| registry.build(name, profile.args_for(name), handle.clone()))
            .collect::<FrameworkResult<Vec<_>>>()?;

        info!(
            profile = %profile.scheduler_name,
            filters = filter_plugins.len(),
            "framework initialized"
        );

        Ok(Self {
            profile_name: profile.scheduler_name.clone(),
            handle,
            filter_plugins,
        })
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn filter_plugin_names(&self) -> Vec<&str> {
        self.filter_plugins.iter().map(|p| p.name()).collect()
    }

    /// Run the filter plugins for one node. The first non-success status
    /// wins and is tagged with the plugin that produced it.
    pub fn run_filter_plugins(&self, state: &CycleState, pod: &Pod, node_info: &NodeInfo) -> Status {
        for plugin in &self.filter_plugins {
            let status = plugin.filter(state, pod, node_info);
            if !status.is_success() {
                return status.with_plugin(plugin.name());
            }
        }
        Status::success()
    }

    /// Filter every node for `pod` within a single scheduling cycle.
    ///
    /// The candidate set is read from the handle once and pinned in the
    /// cycle state, so every node is judged against the same snapshot.
    pub fn find_nodes_that_fit(&self, pod: &Pod, nodes: &[NodeInfo]) -> FilterResult {
        let mut state = CycleState::new();
        state.write_candidates(self.handle.candidate_nodes());

        let mut result = FilterResult::default();
        for (i, node_info) in nodes.iter().enumerate() {
            let key = node_info
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("<unresolved-{i}>"));

            let status = self.run_filter_plugins(&state, pod, node_info);
            if status.is_success() {
                result.feasible.push(key);
            } else {
                result.diagnosis.insert(key, status);
            }
        }

        debug!(
            pod = %pod,
            nodes = nodes.len(),
            feasible = result.feasible.len(),
            "filtered nodes"
        );

        result
    }

    /// Union of the cluster events every plugin registers for.
    pub fn events_to_register(&self) -> Vec<ClusterEvent> {
        let mut events: Vec<ClusterEvent> = Vec::new();
        for plugin in &self.filter_plugins {
            let Some(ext) = plugin.as_enqueue_extensions() else {
                continue;
            };
            for event in ext.events_to_register() {
                if !events.contains(&event) {
                    events.push(event);
                }
            }
        }
        events
    }

    /// Whether an observed event could make a pod rejected by this
    /// profile schedulable again.
    pub fn should_requeue(&self, observed: &ClusterEvent) -> bool {
        self.events_to_register().iter().any(|e| e.matches(observed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_PROFILE, SchedulerConfig};
    use crate::events::{ActionType, Resource};
    use crate::registry::in_tree_registry;
    use crate::snapshot::ClusterSnapshot;
    use crate::status::Code;
    use chargesort_core::CandidateNode;

    fn snapshot() -> Arc<ClusterSnapshot> {
        Arc::new(
            ClusterSnapshot::from_toml(
                r#"
[[nodes]]
name = "node1"
charge_rate = 70

[[nodes]]
name = "node2"
charge_rate = 30

[[nodes]]
name = "node3"
charge_rate = 90
"#,
            )
            .unwrap(),
        )
    }

    fn framework(snapshot: Arc<ClusterSnapshot>) -> Framework {
        let config = SchedulerConfig::default();
        let profile = config.profile(DEFAULT_PROFILE).unwrap();
        Framework::new(profile, &in_tree_registry(), snapshot).unwrap()
    }

    #[test]
    fn only_top_node_is_feasible() {
        let snapshot = snapshot();
        let fw = framework(snapshot.clone());

        let result = fw.find_nodes_that_fit(&Pod::new("default", "web"), &snapshot.node_infos());

        assert_eq!(result.feasible, vec!["node3"]);
        assert_eq!(result.diagnosis.len(), 2);
        let status = &result.diagnosis["node1"];
        assert_eq!(status.code, Code::UnschedulableAndUnresolvable);
        assert_eq!(status.plugin.as_deref(), Some("ChargeRateSort"));
    }

    #[test]
    fn unresolved_nodes_are_diagnosed_as_errors() {
        let snapshot = snapshot();
        let fw = framework(snapshot);

        let result = fw.find_nodes_that_fit(&Pod::new("default", "web"), &[NodeInfo::unresolved()]);

        assert!(result.feasible.is_empty());
        assert_eq!(result.diagnosis["<unresolved-0>"].code, Code::Error);
    }

    #[test]
    fn empty_profile_admits_everything() {
        let snapshot = snapshot();
        let profile = Profile::with_filters("empty", &[]);
        let fw = Framework::new(&profile, &in_tree_registry(), snapshot.clone()).unwrap();

        let result = fw.find_nodes_that_fit(&Pod::new("default", "web"), &snapshot.node_infos());

        assert_eq!(result.feasible, vec!["node1", "node2", "node3"]);
        assert!(fw.events_to_register().is_empty());
    }

    #[test]
    fn unknown_plugin_fails_framework_build() {
        let profile = Profile::with_filters("bad", &["NodeAffinity"]);
        assert!(Framework::new(&profile, &in_tree_registry(), snapshot()).is_err());
    }

    #[test]
    fn filter_plugins_follow_profile_order() {
        let fw = framework(snapshot());
        assert_eq!(fw.profile_name(), DEFAULT_PROFILE);
        assert_eq!(fw.filter_plugin_names(), vec!["ChargeRateSort"]);
    }

    #[test]
    fn requeues_on_node_add_only() {
        let fw = framework(snapshot());

        assert_eq!(
            fw.events_to_register(),
            vec![ClusterEvent::new(Resource::Node, ActionType::ADD)]
        );
        assert!(fw.should_requeue(&ClusterEvent::new(Resource::Node, ActionType::ADD)));
        assert!(!fw.should_requeue(&ClusterEvent::new(Resource::Node, ActionType::DELETE)));
    }

    #[test]
    fn cycle_pins_candidates_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct CountingHandle {
            calls: AtomicUsize,
        }

        impl Handle for CountingHandle {
            fn candidate_nodes(&self) -> Vec<CandidateNode> {
                self.calls.fetch_add(1, Ordering::Relaxed);
                vec![CandidateNode::new("a", 1), CandidateNode::new("b", 2)]
            }
        }

        let handle = Arc::new(CountingHandle {
            calls: AtomicUsize::new(0),
        });
        let profile = Profile::with_filters("p", &["ChargeRateSort"]);
        let fw = Framework::new(&profile, &in_tree_registry(), handle.clone()).unwrap();

        let nodes: Vec<NodeInfo> = ["a", "b"]
            .iter()
            .map(|n| NodeInfo::new(crate::plugin::Node { name: n.to_string() }))
            .collect();
        let result = fw.find_nodes_that_fit(&Pod::new("default", "web"), &nodes);

        assert_eq!(result.feasible, vec!["b"]);
        assert_eq!(handle.calls.load(Ordering::Relaxed), 1);
    }
}
