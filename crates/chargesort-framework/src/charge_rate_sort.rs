//! The `ChargeRateSort` filter plugin.
//!
//! Admits a pod only onto the candidate node with the highest charge
//! rate. Ranking and validation live in `chargesort-core`; this module
//! resolves inputs from the host and translates the decision into a
//! [`Status`].

use std::sync::Arc;

use chargesort_core::{PolicyError, is_top_choice_for};
use tracing::debug;

use crate::error::{FrameworkError, FrameworkResult};
use crate::events::{ActionType, ClusterEvent, Resource};
use crate::plugin::{CycleState, EnqueueExtensions, FilterPlugin, Handle, NodeInfo, Plugin, Pod};
use crate::status::{Code, Status};

/// Name of the plugin in the registry and in profiles.
pub const NAME: &str = "ChargeRateSort";

/// Reason reported when the node is not the top choice.
pub const ERR_REASON: &str = "node(s) didn't match the requested node name";

/// Filter plugin backed by the charge-rate ranking.
pub struct ChargeRateSort {
    handle: Arc<dyn Handle>,
}

impl ChargeRateSort {
    /// Build the plugin. It takes no configuration; any non-empty args
    /// table is rejected.
    pub fn new(args: Option<&toml::Value>, handle: Arc<dyn Handle>) -> FrameworkResult<Self> {
        if let Some(args) = args {
            let empty = args.as_table().is_some_and(|t| t.is_empty());
            if !empty {
                return Err(FrameworkError::InvalidArgs {
                    plugin: NAME.to_string(),
                    reason: "plugin takes no arguments".to_string(),
                });
            }
        }
        Ok(Self { handle })
    }

    /// Registry factory.
    pub fn factory(
        args: Option<&toml::Value>,
        handle: Arc<dyn Handle>,
    ) -> FrameworkResult<Arc<dyn FilterPlugin>> {
        Ok(Arc::new(Self::new(args, handle)?))
    }
}

impl Plugin for ChargeRateSort {
    fn name(&self) -> &str {
        NAME
    }

    fn as_enqueue_extensions(&self) -> Option<&dyn EnqueueExtensions> {
        Some(self)
    }
}

impl FilterPlugin for ChargeRateSort {
    fn filter(&self, state: &CycleState, pod: &Pod, node_info: &NodeInfo) -> Status {
        // Resolve the node before touching the candidate set.
        let Some(target) = node_info.name() else {
            return status_for_error(&PolicyError::MissingNodeInfo);
        };

        let result = match state.read_candidates() {
            Some(candidates) => is_top_choice_for(Some(target), &candidates),
            None => is_top_choice_for(Some(target), &self.handle.candidate_nodes()),
        };

        match result {
            Ok(decision) if decision.accepted => {
                debug!(pod = %pod, node = target, "node is top choice");
                Status::success()
            }
            Ok(decision) => {
                debug!(
                    pod = %pod,
                    node = target,
                    reason = %decision.reason.message(),
                    "node rejected"
                );
                Status::new(Code::UnschedulableAndUnresolvable, ERR_REASON)
                    .with_reason(decision.reason.message())
            }
            Err(e) => {
                debug!(pod = %pod, node = target, error = %e, "node could not be evaluated");
                status_for_error(&e)
            }
        }
    }
}

impl EnqueueExtensions for ChargeRateSort {
    fn events_to_register(&self) -> Vec<ClusterEvent> {
        vec![ClusterEvent::new(Resource::Node, ActionType::ADD)]
    }
}

fn status_for_error(e: &PolicyError) -> Status {
    Status::new(Code::Error, e.to_string())
}
