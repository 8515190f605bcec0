//! Engine configuration.

/// Policy for a start or plain agent node that has more than one outgoing
/// edge.
///
/// The editor tries to prevent this shape at creation time, but graphs can
/// be constructed by other means. The default is to fail loudly as an
/// invalid graph; [`FirstEdge`](Self::FirstEdge) instead follows the first
/// declared edge and logs a warning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MultiEdgePolicy {
    /// Reject the graph as malformed (`InvalidGraph`).
    #[default]
    Reject,
    /// Deterministically follow the first edge in declaration order.
    FirstEdge,
}

/// Tunables for a [`FlowEngine`](super::FlowEngine).
///
/// The iteration bound is `node_count + extra_iterations`. `max_steps`
/// overrides the computed bound outright, mainly a test seam for
/// exercising the bound without building huge graphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Slack added to the node count when computing the iteration bound.
    pub extra_iterations: usize,
    /// Absolute override of the iteration bound, if set.
    pub max_steps: Option<u64>,
    /// How to treat fan-out from non-conditional nodes.
    pub multi_edge_policy: MultiEdgePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            extra_iterations: 10,
            max_steps: None,
            multi_edge_policy: MultiEdgePolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Effective iteration bound for a graph of `node_count` nodes.
    #[must_use]
    pub fn iteration_bound(&self, node_count: usize) -> u64 {
        self.max_steps
            .unwrap_or((node_count + self.extra_iterations) as u64)
    }
}
