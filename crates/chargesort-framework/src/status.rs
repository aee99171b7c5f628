//! Plugin status reporting.
//!
//! A [`Status`] is what a filter plugin hands back to the host for one
//! node. Success carries no reasons; every other code carries at least one
//! human-readable reason.

use std::fmt;

use serde::Serialize;

/// Outcome class of a plugin invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Code {
    Success,
    /// Internal failure; the node could not be evaluated.
    Error,
    /// Rejected, but preemption might make the node feasible.
    Unschedulable,
    /// Rejected, and preemption would not help.
    UnschedulableAndUnresolvable,
    /// The plugin chose not to run for this pod.
    Skip,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Code::Success => "Success",
            Code::Error => "Error",
            Code::Unschedulable => "Unschedulable",
            Code::UnschedulableAndUnresolvable => "UnschedulableAndUnresolvable",
            Code::Skip => "Skip",
        };
        f.write_str(s)
    }
}

/// Result of running one plugin against one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub code: Code,
    pub reasons: Vec<String>,
    /// Name of the plugin that produced a non-success status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
}

impl Status {
    pub fn success() -> Self {
        Self {
            code: Code::Success,
            reasons: Vec::new(),
            plugin: None,
        }
    }

    pub fn new(code: Code, reason: impl Into<String>) -> Self {
        Self {
            code,
            reasons: vec![reason.into()],
            plugin: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reasons.push(reason.into());
        self
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugin = Some(plugin.into());
        self
    }

    /// Success and Skip both let the node through.
    pub fn is_success(&self) -> bool {
        matches!(self.code, Code::Success | Code::Skip)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(
            self.code,
            Code::Unschedulable | Code::UnschedulableAndUnresolvable
        )
    }

    pub fn is_error(&self) -> bool {
        self.code == Code::Error
    }

    /// All reasons joined into one line.
    pub fn message(&self) -> String {
        self.reasons.join(", ")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.plugin {
            Some(plugin) => write!(f, "{} ({plugin}): {}", self.code, self.message()),
            None if self.reasons.is_empty() => write!(f, "{}", self.code),
            None => write!(f, "{}: {}", self.code, self.message()),
        }
    }
}
