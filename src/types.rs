//! Core types for the agentflow engine.
//!
//! This module defines the fundamental identifiers used throughout the
//! system: [`NodeId`] names a node within a flow graph, and [`NodeKind`]
//! classifies what the engine does when traversal reaches it.
//!
//! # Examples
//!
//! ```rust
//! use agentflow::types::{NodeId, NodeKind};
//!
//! let id = NodeId::from("summarizer");
//! let kind = NodeKind::Agent;
//!
//! assert!(kind.is_agent());
//! assert_eq!(kind.encode(), "Agent");
//! assert_eq!(id.as_str(), "summarizer");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node within a flow graph.
///
/// Node ids come from the graph editor and are opaque to the engine; the
/// engine only requires uniqueness within a single graph. The newtype keeps
/// ids from being confused with role text or payloads at call sites.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Classifies the role a node plays during traversal.
///
/// A flow graph is expected to contain exactly one [`Start`](Self::Start)
/// node and any number of terminal [`End`](Self::End) nodes. The two agent
/// kinds both call the invocation service; they differ only in how their
/// outgoing edge is chosen afterwards.
///
/// # Examples
///
/// ```rust
/// use agentflow::types::NodeKind;
///
/// let kind = NodeKind::ConditionalAgent;
/// assert!(kind.is_agent());
///
/// // Encoding round-trips for diagnostics and logs
/// assert_eq!(NodeKind::decode(&kind.encode()), Some(kind));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Entry point of the flow. Carries the initial payload and has no
    /// agent role; traversal begins here.
    Start,

    /// Terminal node. Reaching it completes the run with the payload the
    /// node received.
    End,

    /// A single language-model step: transforms the payload via one
    /// invocation and follows its single outgoing edge.
    Agent,

    /// An agent whose outgoing edge is selected by matching branch
    /// keywords against its own output text.
    ConditionalAgent,
}

impl NodeKind {
    /// Encode into the stable string form used in logs and diagnostics.
    #[must_use]
    pub fn encode(&self) -> &'static str {
        match self {
            NodeKind::Start => "Start",
            NodeKind::End => "End",
            NodeKind::Agent => "Agent",
            NodeKind::ConditionalAgent => "ConditionalAgent",
        }
    }

    /// Decode the string form produced by [`encode`](Self::encode).
    #[must_use]
    pub fn decode(s: &str) -> Option<Self> {
        match s {
            "Start" => Some(NodeKind::Start),
            "End" => Some(NodeKind::End),
            "Agent" => Some(NodeKind::Agent),
            "ConditionalAgent" => Some(NodeKind::ConditionalAgent),
            _ => None,
        }
    }

    /// Returns `true` if this is a [`Start`](Self::Start) node.
    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }

    /// Returns `true` if this is an [`End`](Self::End) node.
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }

    /// Returns `true` for either agent kind.
    #[must_use]
    pub fn is_agent(&self) -> bool {
        matches!(self, Self::Agent | Self::ConditionalAgent)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
