//! chargesort-framework — host adapter for the charge-rate policy.
//!
//! Wraps `chargesort-core` in the plugin model of a cluster scheduler.
//! The host hands candidate nodes to plugins through a [`Handle`], runs
//! them over each node with a [`Framework`], and receives a [`Status`]
//! per node.
//!
//! # Architecture
//!
//! ```text
//! Framework (one per profile)
//!   ├── Handle (candidate nodes + charge rates, injected by the host)
//!   ├── Registry (plugin name → factory)
//!   └── Filter plugins
//!       └── ChargeRateSort → chargesort_core::is_top_choice
//! ```

pub mod charge_rate_sort;
pub mod config;
pub mod error;
pub mod events;
pub mod plugin;
pub mod registry;
pub mod runtime;
pub mod snapshot;
pub mod status;

pub use charge_rate_sort::ChargeRateSort;
pub use config::{DEFAULT_PROFILE, Profile, SchedulerConfig};
pub use error::{FrameworkError, FrameworkResult};
pub use events::{ActionType, ClusterEvent, Resource};
pub use plugin::{CycleState, EnqueueExtensions, FilterPlugin, Handle, Node, NodeInfo, Plugin, Pod};
pub use registry::{PluginFactory, Registry, in_tree_registry};
pub use runtime::{FilterResult, Framework};
pub use snapshot::{ClusterSnapshot, SnapshotNode};
pub use status::{Code, Status};
