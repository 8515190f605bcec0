//! Edge types and branch keyword matching for flow graphs.
//!
//! Edges carry the static topology of a flow. An edge leaving a
//! conditional agent may be labeled with a keyword; the engine selects the
//! first declared edge whose keyword appears in the agent's output.

use serde::{Deserialize, Serialize};

use crate::types::NodeId;

/// A directed connection between two nodes.
///
/// Plain edges (no keyword) define the single path out of start and agent
/// nodes. Branch edges (with a keyword) hang off conditional agents and are
/// matched against the agent's output text in declaration order.
///
/// # Examples
///
/// ```rust
/// use agentflow::graphs::FlowEdge;
///
/// let edge = FlowEdge::branch("e1", "triage", "escalate", "URGENT");
/// assert!(edge.matches("Verdict: urgent, page the on-call"));
/// assert!(!edge.matches("Verdict: routine"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Unique identifier for this edge within its graph.
    pub id: String,
    /// Node the edge leaves from.
    pub source: NodeId,
    /// Node the edge leads to.
    pub target: NodeId,
    /// Branch keyword for conditional routing; `None` for plain edges.
    pub keyword: Option<String>,
}

impl FlowEdge {
    /// Create a plain (unconditional) edge.
    pub fn new(id: impl Into<String>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            keyword: None,
        }
    }

    /// Create a branch edge labeled with a keyword.
    pub fn branch(
        id: impl Into<String>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        keyword: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            keyword: Some(keyword.into()),
        }
    }

    /// Test whether this edge's keyword matches the given output text.
    ///
    /// The match is a case-insensitive substring test. Edges without a
    /// keyword, or with a blank keyword, never match; a blank label is a
    /// wiring mistake, not a wildcard.
    #[must_use]
    pub fn matches(&self, output: &str) -> bool {
        match self.keyword.as_deref() {
            Some(keyword) if !keyword.trim().is_empty() => output
                .to_lowercase()
                .contains(keyword.trim().to_lowercase().as_str()),
            _ => false,
        }
    }
}
