//! Structured error types for delaynet.
//!
//! All fallible public APIs return `Result<T, NetError>`. Construction
//! mistakes (duplicate ports) are rejected where they happen, activation
//! contract violations bubble out of `execute` untouched, and running out
//! of iteration budget is not an error at all (see
//! [`RunStatus`](crate::simulation::RunStatus)).

use thiserror::Error;

use crate::node::NodeId;
use crate::port::{Direction, PortScope};

/// The top-level error type for the propagation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError {
    // ── Construction errors ───────────────────────────────

    /// A port name was declared twice in the same scope and direction.
    #[error("duplicate {direction} port `{name}` on {scope}")]
    DuplicatePort {
        scope: PortScope,
        direction: Direction,
        name: String,
    },

    // ── Activation errors ─────────────────────────────────

    /// A node's transition takes a different number of inputs than the
    /// node declares.
    #[error("node `{node}` transition takes {required} inputs but {declared} are declared")]
    ActivationContract {
        node: String,
        required: usize,
        declared: usize,
    },

    /// A queued event addresses a node that is not part of the network.
    #[error("event addresses unknown node {0}")]
    UnknownNode(NodeId),

    // ── Scheduling errors ─────────────────────────────────

    /// Pop attempted on an empty event queue.
    #[error("event queue underflow")]
    QueueUnderflow,

    // ── Export errors ─────────────────────────────────────

    /// History could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl NetError {
    /// Returns `true` for either flavour of duplicate port declaration.
    pub fn is_duplicate_port(&self) -> bool {
        matches!(self, NetError::DuplicatePort { .. })
    }
}

/// Convenience alias for `Result<T, NetError>`.
pub type NetResult<T> = Result<T, NetError>;
