#![allow(dead_code)]

use std::sync::Mutex;

use agentflow::invoker::{AgentInvoker, AgentReply, Citation, InvokerError};
use async_trait::async_trait;
use rustc_hash::FxHashMap;

/// Returns the input unchanged, whatever the role.
#[derive(Debug, Clone, Default)]
pub struct EchoInvoker;

#[async_trait]
impl AgentInvoker for EchoInvoker {
    async fn invoke(
        &self,
        _role: &str,
        input: &str,
        _use_search: bool,
    ) -> Result<AgentReply, InvokerError> {
        Ok(AgentReply::text(input))
    }
}

/// Returns a fixed output per role, falling back to echoing the input.
///
/// Keyed by role text so a fixture graph can give each agent its own
/// deterministic response.
#[derive(Debug, Default)]
pub struct ScriptedInvoker {
    outputs: FxHashMap<String, String>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, role: impl Into<String>, output: impl Into<String>) -> Self {
        self.outputs.insert(role.into(), output.into());
        self
    }
}

#[async_trait]
impl AgentInvoker for ScriptedInvoker {
    async fn invoke(
        &self,
        role: &str,
        input: &str,
        _use_search: bool,
    ) -> Result<AgentReply, InvokerError> {
        match self.outputs.get(role) {
            Some(output) => Ok(AgentReply::text(output.clone())),
            None => Ok(AgentReply::text(input)),
        }
    }
}

/// Rejects every invocation with a provider error.
#[derive(Debug)]
pub struct FailingInvoker {
    pub message: &'static str,
}

impl FailingInvoker {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[async_trait]
impl AgentInvoker for FailingInvoker {
    async fn invoke(
        &self,
        _role: &str,
        _input: &str,
        _use_search: bool,
    ) -> Result<AgentReply, InvokerError> {
        Err(InvokerError::Provider {
            provider: "stub",
            message: self.message.to_string(),
        })
    }
}

/// Echoes the input and records every invocation for later assertions.
#[derive(Debug, Default)]
pub struct RecordingInvoker {
    calls: Mutex<Vec<(String, String, bool)>>,
}

impl RecordingInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(String, String, bool)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentInvoker for RecordingInvoker {
    async fn invoke(
        &self,
        role: &str,
        input: &str,
        use_search: bool,
    ) -> Result<AgentReply, InvokerError> {
        self.calls
            .lock()
            .unwrap()
            .push((role.to_string(), input.to_string(), use_search));
        Ok(AgentReply::text(input))
    }
}

/// Echoes the input with a fixed citation attached.
#[derive(Debug, Clone)]
pub struct CitingInvoker {
    pub uri: &'static str,
    pub title: &'static str,
}

impl Default for CitingInvoker {
    fn default() -> Self {
        Self {
            uri: "https://example.com/source",
            title: "Example Source",
        }
    }
}

#[async_trait]
impl AgentInvoker for CitingInvoker {
    async fn invoke(
        &self,
        _role: &str,
        input: &str,
        _use_search: bool,
    ) -> Result<AgentReply, InvokerError> {
        Ok(AgentReply::text(input)
            .with_citations(vec![Citation::new(self.uri, self.title)]))
    }
}
