//! Rendering and tracing setup for run observability.
//!
//! Sinks delegate to a [`TelemetryFormatter`] so output style is chosen
//! per sink rather than baked into the events. [`init_tracing`] wires the
//! standard subscriber stack for binaries and examples that want logs.

use std::io::IsTerminal;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::engine::FlowError;
use crate::event_bus::FlowEvent;

pub const CONTEXT_COLOR: &str = "\x1b[32m"; // green
pub const LINE_COLOR: &str = "\x1b[35m"; // magenta
pub const RESET_COLOR: &str = "\x1b[0m";

/// Formatter color mode for telemetry output.
///
/// - [`FormatterMode::Auto`]: detects TTY capability via `stderr.is_terminal()`
/// - [`FormatterMode::Colored`]: always include color codes
/// - [`FormatterMode::Plain`]: never include color codes (for logs/files)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatterMode {
    /// Auto-detect TTY capability (checks `stderr.is_terminal()`)
    #[default]
    Auto,
    /// Always include ANSI color codes
    Colored,
    /// Never include ANSI color codes
    Plain,
}

impl FormatterMode {
    /// Auto-detect formatter mode based on stderr TTY capability.
    pub fn auto_detect() -> Self {
        if std::io::stderr().is_terminal() {
            FormatterMode::Colored
        } else {
            FormatterMode::Plain
        }
    }

    /// Returns true if this mode should use colored output.
    ///
    /// For `Auto` mode, performs TTY detection on each call.
    pub fn is_colored(&self) -> bool {
        match self {
            FormatterMode::Auto => std::io::stderr().is_terminal(),
            FormatterMode::Colored => true,
            FormatterMode::Plain => false,
        }
    }
}

/// Rendered output for a telemetry item that can be consumed by sinks.
#[derive(Clone, Debug, Default)]
pub struct EventRender {
    pub context: Option<String>,
    pub lines: Vec<String>,
}

impl EventRender {
    pub fn join_lines(&self) -> String {
        self.lines.join("")
    }
}

pub trait TelemetryFormatter: Send + Sync {
    fn render_event(&self, event: &FlowEvent) -> EventRender;
    fn render_failure(&self, error: &FlowError) -> EventRender;
}

/// Plain text formatter with optional ANSI color codes.
pub struct PlainFormatter {
    mode: FormatterMode,
}

impl PlainFormatter {
    /// Create a new formatter with auto-detected color mode.
    pub fn new() -> Self {
        Self {
            mode: FormatterMode::Auto,
        }
    }

    /// Create a new formatter with explicit color mode.
    pub fn with_mode(mode: FormatterMode) -> Self {
        Self { mode }
    }

    fn color<'a>(&self, ansi_code: &'a str) -> &'a str {
        if self.mode.is_colored() { ansi_code } else { "" }
    }

    fn reset(&self) -> &str {
        if self.mode.is_colored() {
            RESET_COLOR
        } else {
            ""
        }
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryFormatter for PlainFormatter {
    fn render_event(&self, event: &FlowEvent) -> EventRender {
        let line = format!("{}{event}{}\n", self.color(LINE_COLOR), self.reset());
        EventRender {
            context: Some(event.label().to_string()),
            lines: vec![line],
        }
    }

    fn render_failure(&self, error: &FlowError) -> EventRender {
        let mut lines = Vec::new();
        let at = error
            .node_id()
            .map(|id| format!(" @ {id}"))
            .unwrap_or_default();
        lines.push(format!(
            "{}{}{}{}\n",
            self.color(CONTEXT_COLOR),
            error.label(),
            at,
            self.reset()
        ));
        lines.push(format!(
            "{}  error: {error}{}\n",
            self.color(LINE_COLOR),
            self.reset()
        ));

        // Walk the source chain so invoker failures show their cause.
        let mut source = std::error::Error::source(error);
        let mut indent = 1;
        while let Some(cause) = source {
            let indent_str = "  ".repeat(indent);
            lines.push(format!(
                "{}{indent_str}cause: {cause}{}\n",
                self.color(LINE_COLOR),
                self.reset()
            ));
            source = cause.source();
            indent += 1;
        }

        EventRender {
            context: Some(error.label().to_string()),
            lines,
        }
    }
}

/// Render a failure as human-readable text with explicit color mode.
pub fn pretty_print_failure(error: &FlowError, mode: FormatterMode) -> String {
    PlainFormatter::with_mode(mode)
        .render_failure(error)
        .join_lines()
}

/// Install the standard tracing stack: env-filter, fmt output, and an
/// [`ErrorLayer`] for span traces on errors.
///
/// Filter defaults to `info` and is overridden by `RUST_LOG`. Safe to call
/// once per process; subsequent calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(ErrorLayer::default())
        .try_init();
}
