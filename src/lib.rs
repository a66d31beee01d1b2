//! # delaynet: Deterministic Latency Networks
//!
//! A discrete-event propagation engine. Nodes with named, latency-tagged
//! ports compute outputs from their inputs; every emitted value becomes a
//! time-stamped delivery event, and a single-threaded driver applies the
//! events one at a time in `(clock, insertion)` order. No async, no
//! threads, no wall-clock time.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │         Network           │ ← ports, nodes, last run's History
//! │  ┌────────────────────┐  │
//! │  │  Driver (execute)   │  │ ← step loop, iteration budget
//! │  │  ┌──────────────┐  │  │
//! │  │  │  Translator   │  │  │ ← SourceEvent → Event fan-out
//! │  │  └──────────────┘  │  │
//! │  │  ┌──────────────┐  │  │
//! │  │  │  EventQueue   │  │  │ ← min-heap on (clock, id)
//! │  │  └──────────────┘  │  │
//! │  │  ┌──────────────┐  │  │
//! │  │  │  State        │  │  │ ← driver-owned variable map
//! │  │  └──────────────┘  │  │
//! │  └────────────────────┘  │
//! └──────────────────────────┘
//! ```

pub mod dsl;
pub mod error;
pub mod event;
pub mod history;
pub mod network;
pub mod node;
pub mod port;
pub mod render;
pub mod scheduler;
pub mod simulation;
pub mod state;
pub mod time;
pub mod translator;
pub mod value;

// Re-exports for convenience.
pub use dsl::NetworkBuilder;
pub use error::{NetError, NetResult};
pub use event::{Event, EventId, SourceEvent};
pub use history::History;
pub use network::Network;
pub use node::{from_fn, Constant, FnTransition, Identity, Node, NodeId, Outputs, Transition};
pub use port::{Direction, Port, PortMap, PortScope, DEFAULT_LATENCY};
pub use scheduler::EventQueue;
pub use simulation::{RunConfig, RunReport, RunStatus, DEFAULT_ITERATION_LIMIT};
pub use state::State;
pub use time::VirtualTime;
pub use value::Value;
