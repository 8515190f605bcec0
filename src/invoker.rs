//! Agent invocation service abstraction.
//!
//! The engine never talks to a language model directly. It is handed an
//! implementation of [`AgentInvoker`] and awaits it once per agent node;
//! that call is the engine's only suspension point. Keeping the service an
//! injected trait object (rather than a process-wide client) lets tests
//! substitute deterministic stubs and lets embedders plug in whatever
//! provider they use.

use async_trait::async_trait;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// A web source reference returned alongside generated text when search
/// augmentation is enabled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub uri: String,
    pub title: String,
}

impl Citation {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }
}

/// Successful result of one agent invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReply {
    /// Generated text; becomes the payload carried to the next node.
    pub text: String,
    /// Grounding metadata, empty unless search augmentation produced any.
    pub citations: Vec<Citation>,
}

impl AgentReply {
    /// Build a reply carrying only text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            citations: Vec::new(),
        }
    }

    /// Attach citations to this reply.
    #[must_use]
    pub fn with_citations(mut self, citations: Vec<Citation>) -> Self {
        self.citations = citations;
        self
    }
}

/// Errors surfaced by an invocation service.
///
/// The engine does not retry; any of these halts the run with an
/// invocation failure attributed to the node being processed. Timeouts are
/// classified here as well rather than as a distinct engine state.
#[derive(Debug, Error, Diagnostic)]
pub enum InvokerError {
    /// The provider rejected the request or returned an error.
    #[error("provider error ({provider}): {message}")]
    #[diagnostic(code(agentflow::invoker::provider))]
    Provider {
        provider: &'static str,
        message: String,
    },

    /// The invocation did not complete in time.
    #[error("invocation timed out after {seconds}s")]
    #[diagnostic(
        code(agentflow::invoker::timeout),
        help("Timeouts are not retried by the engine; re-run the flow or raise the service's limit.")
    )]
    Timeout { seconds: u64 },

    /// Anything else the service wants to report.
    #[error("invocation failed: {0}")]
    #[diagnostic(code(agentflow::invoker::other))]
    Other(String),
}

impl InvokerError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Stateless service that performs one language-model call per agent node.
///
/// Implementations receive the node's role text, the payload produced by
/// the previous node, and the node's search-augmentation flag. They must be
/// safe to call from multiple runs concurrently; the engine itself issues
/// at most one call per run at a time.
///
/// # Examples
///
/// ```rust
/// use agentflow::invoker::{AgentInvoker, AgentReply, InvokerError};
/// use async_trait::async_trait;
///
/// struct EchoInvoker;
///
/// #[async_trait]
/// impl AgentInvoker for EchoInvoker {
///     async fn invoke(
///         &self,
///         _role: &str,
///         input: &str,
///         _use_search: bool,
///     ) -> Result<AgentReply, InvokerError> {
///         Ok(AgentReply::text(input))
///     }
/// }
/// ```
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    /// Perform one invocation and return the generated text plus any
    /// citation metadata.
    async fn invoke(
        &self,
        role: &str,
        input: &str,
        use_search: bool,
    ) -> Result<AgentReply, InvokerError>;
}

/// Adapter turning a plain closure into an [`AgentInvoker`].
///
/// Handy for embedding and for tests that do not need a named stub type:
///
/// ```rust
/// use agentflow::invoker::{AgentReply, FnInvoker};
///
/// let invoker = FnInvoker::new(|_role, input, _search| {
///     let reply = AgentReply::text(format!("processed: {input}"));
///     async move { Ok(reply) }
/// });
/// ```
pub struct FnInvoker<F> {
    f: F,
}

impl<F, Fut> FnInvoker<F>
where
    F: Fn(&str, &str, bool) -> Fut + Send + Sync,
    Fut: Future<Output = Result<AgentReply, InvokerError>> + Send + 'static,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> AgentInvoker for FnInvoker<F>
where
    F: Fn(&str, &str, bool) -> Fut + Send + Sync,
    Fut: Future<Output = Result<AgentReply, InvokerError>> + Send + 'static,
{
    async fn invoke(
        &self,
        role: &str,
        input: &str,
        use_search: bool,
    ) -> Result<AgentReply, InvokerError> {
        (self.f)(role, input, use_search).await
    }
}
