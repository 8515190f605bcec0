//! Terminal run state: status, event log, and step count.

use uuid::Uuid;

use super::errors::FlowError;
use crate::event_bus::FlowEvent;

/// Outcome of a run: exactly one of these per invocation of
/// [`FlowEngine::run`](super::FlowEngine::run).
#[derive(Debug)]
pub enum RunStatus {
    /// An end node was reached; `output` is the payload it received.
    Completed { output: String },
    /// The run halted on a classified failure.
    Failed(FlowError),
}

impl RunStatus {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, RunStatus::Completed { .. })
    }
}

/// Immutable record of one finished run.
///
/// Produced once traversal halts and never mutated afterwards. The event
/// log is append-ordered: the sequence of [`FlowEvent`]s exactly as they
/// were emitted, ending in a `Completed` or `Error` event that mirrors
/// [`status`](Self::status).
#[derive(Debug)]
pub struct RunReport {
    run_id: Uuid,
    status: RunStatus,
    events: Vec<FlowEvent>,
    steps: u64,
}

impl RunReport {
    pub(crate) fn new(run_id: Uuid, status: RunStatus, events: Vec<FlowEvent>, steps: u64) -> Self {
        Self {
            run_id,
            status,
            events,
            steps,
        }
    }

    #[must_use]
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    #[must_use]
    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    /// The ordered event log of the run.
    #[must_use]
    pub fn events(&self) -> &[FlowEvent] {
        &self.events
    }

    /// Number of traversal loop iterations the run consumed.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Final output if the run completed.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        match &self.status {
            RunStatus::Completed { output } => Some(output),
            RunStatus::Failed(_) => None,
        }
    }

    /// Classified failure if the run did not complete.
    #[must_use]
    pub fn error(&self) -> Option<&FlowError> {
        match &self.status {
            RunStatus::Completed { .. } => None,
            RunStatus::Failed(err) => Some(err),
        }
    }

    /// Consume the report, yielding the output or the failure.
    pub fn into_result(self) -> Result<String, FlowError> {
        match self.status {
            RunStatus::Completed { output } => Ok(output),
            RunStatus::Failed(err) => Err(err),
        }
    }
}
