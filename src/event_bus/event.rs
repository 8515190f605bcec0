use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::invoker::Citation;
use crate::types::NodeId;

/// One entry in a run's ordered event log.
///
/// Events are the engine's only side channel: presentation layers render
/// them, tests assert on them, and the engine itself appends them to the
/// [`RunReport`](crate::engine::RunReport). The timestamp records emission
/// time; equality of event *content* lives on [`FlowEventKind`], so
/// determinism checks compare kinds and ignore wall-clock noise.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlowEvent {
    pub kind: FlowEventKind,
    pub timestamp: DateTime<Utc>,
}

/// Discriminated content of a [`FlowEvent`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlowEventKind {
    /// Informational progress note, not tied to node output.
    Info {
        node_id: Option<NodeId>,
        message: String,
    },
    /// An agent node is about to be invoked.
    Processing { node_id: NodeId, role: String },
    /// An agent node produced output; the payload advances to `text`.
    NodeOutput {
        node_id: NodeId,
        text: String,
        citations: Vec<Citation>,
    },
    /// The run failed; carries the classified reason's message.
    Error {
        node_id: Option<NodeId>,
        message: String,
    },
    /// The run reached an end node with this final payload.
    Completed { output: String },
}

impl FlowEvent {
    pub fn new(kind: FlowEventKind) -> Self {
        Self {
            kind,
            timestamp: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlowEventKind::Info {
            node_id: None,
            message: message.into(),
        })
    }

    pub fn node_info(node_id: NodeId, message: impl Into<String>) -> Self {
        Self::new(FlowEventKind::Info {
            node_id: Some(node_id),
            message: message.into(),
        })
    }

    pub fn processing(node_id: NodeId, role: impl Into<String>) -> Self {
        Self::new(FlowEventKind::Processing {
            node_id,
            role: role.into(),
        })
    }

    pub fn node_output(node_id: NodeId, text: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self::new(FlowEventKind::NodeOutput {
            node_id,
            text: text.into(),
            citations,
        })
    }

    pub fn error(node_id: Option<NodeId>, message: impl Into<String>) -> Self {
        Self::new(FlowEventKind::Error {
            node_id,
            message: message.into(),
        })
    }

    pub fn completed(output: impl Into<String>) -> Self {
        Self::new(FlowEventKind::Completed {
            output: output.into(),
        })
    }

    /// The node this event is about, if any.
    #[must_use]
    pub fn node_id(&self) -> Option<&NodeId> {
        match &self.kind {
            FlowEventKind::Info { node_id, .. } | FlowEventKind::Error { node_id, .. } => {
                node_id.as_ref()
            }
            FlowEventKind::Processing { node_id, .. }
            | FlowEventKind::NodeOutput { node_id, .. } => Some(node_id),
            FlowEventKind::Completed { .. } => None,
        }
    }

    /// Stable lowercase label for the event discriminant.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match &self.kind {
            FlowEventKind::Info { .. } => "info",
            FlowEventKind::Processing { .. } => "processing",
            FlowEventKind::NodeOutput { .. } => "node_output",
            FlowEventKind::Error { .. } => "error",
            FlowEventKind::Completed { .. } => "completed",
        }
    }

    /// Human-readable message or text carried by the event.
    #[must_use]
    pub fn message(&self) -> &str {
        match &self.kind {
            FlowEventKind::Info { message, .. } | FlowEventKind::Error { message, .. } => message,
            FlowEventKind::Processing { role, .. } => role,
            FlowEventKind::NodeOutput { text, .. } => text,
            FlowEventKind::Completed { output } => output,
        }
    }

    /// Convert to a normalized JSON object.
    ///
    /// ```json
    /// {
    ///   "type": "node_output",
    ///   "node_id": "summarize",
    ///   "message": "…",
    ///   "citations": [{"uri": "…", "title": "…"}],
    ///   "timestamp": "2026-08-29T12:34:56.789Z"
    /// }
    /// ```
    pub fn to_json_value(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert("type".to_string(), json!(self.label()));
        obj.insert(
            "node_id".to_string(),
            self.node_id()
                .map(|id| json!(id.as_str()))
                .unwrap_or(Value::Null),
        );
        obj.insert("message".to_string(), json!(self.message()));
        if let FlowEventKind::NodeOutput { citations, .. } = &self.kind {
            obj.insert("citations".to_string(), json!(citations));
        }
        obj.insert(
            "timestamp".to_string(),
            json!(self.timestamp.to_rfc3339()),
        );
        Value::Object(obj)
    }

    /// Convert to a compact JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_json_value())
    }
}

impl fmt::Display for FlowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node_id() {
            Some(id) => write!(f, "[{}] {}: {}", id, self.label(), self.message()),
            None => write!(f, "{}: {}", self.label(), self.message()),
        }
    }
}
