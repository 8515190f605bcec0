//! Event bus utilities providing fan-out, sinks, and subscriber APIs.
//!
//! The engine reports progress exclusively through [`FlowEvent`]s. This
//! module offers two consumption styles: a sink-based [`EventBus`] (push:
//! stdout, memory snapshots, channels) and a broadcast-based [`EventHub`]
//! (pull: any number of [`EventStream`] subscribers, including an async
//! `Stream` adapter). Presentation layers subscribe here instead of the
//! engine writing UI state directly.

pub mod bus;
pub mod emitter;
pub mod event;
pub mod hub;
pub mod sink;

pub use bus::{BusEmitter, EventBus};
pub use emitter::{EmitterError, EventEmitter};
pub use event::{FlowEvent, FlowEventKind};
pub use hub::{EventHub, EventStream, HubEmitter};
pub use sink::{ChannelSink, EventSink, MemorySink, StdOutSink};
