//! Nodes: named computational elements with latency-tagged ports.
//!
//! A node never touches shared state. `activate` reads the current value
//! of each declared input from a borrowed [`State`], runs the node's
//! [`Transition`], and hands back the resulting emissions as
//! [`SourceEvent`]s for the driver to place on the timeline.
//!
//! # Module structure
//!
//! | Sub-module | Contents |
//! |---|---|
//! | [`id`] | [`NodeId`] newtype |
//! | [`transition`] | [`Transition`] trait, [`FnTransition`], [`Outputs`] |
//! | [`builtin`] | [`Constant`], [`Identity`] |

pub mod builtin;
pub mod id;
pub mod transition;

pub use builtin::{Constant, Identity};
pub use id::NodeId;
pub use transition::{from_fn, FnTransition, Outputs, Transition};

use crate::error::{NetError, NetResult};
use crate::event::SourceEvent;
use crate::port::{Direction, PortMap, PortScope, DEFAULT_LATENCY};
use crate::state::State;
use crate::value::Value;

/// A node in a [`Network`](crate::network::Network).
pub struct Node {
    id: NodeId,
    name: String,
    inputs: PortMap,
    outputs: PortMap,
    transition: Box<dyn Transition>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: String, transition: Box<dyn Transition>) -> Self {
        Node {
            id,
            name,
            inputs: PortMap::new(),
            outputs: PortMap::new(),
            transition,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared inputs, in declaration order.
    pub fn inputs(&self) -> &PortMap {
        &self.inputs
    }

    /// Declared outputs, in declaration order.
    pub fn outputs(&self) -> &PortMap {
        &self.outputs
    }

    /// Number of inputs the transition requires.
    pub fn arity(&self) -> usize {
        self.transition.arity()
    }

    /// Declare an input port. Its position binds it to the transition's
    /// argument at the same index.
    pub fn declare_input(&mut self, name: impl Into<String>, latency: u64) -> NetResult<&mut Self> {
        let scope = self.scope();
        self.inputs
            .declare(scope, Direction::Input, name.into(), latency)?;
        Ok(self)
    }

    /// Declare an output port. Its position binds it to the transition's
    /// result at the same index.
    pub fn declare_output(&mut self, name: impl Into<String>, latency: u64) -> NetResult<&mut Self> {
        let scope = self.scope();
        self.outputs
            .declare(scope, Direction::Output, name.into(), latency)?;
        Ok(self)
    }

    /// [`declare_input`](Self::declare_input) with [`DEFAULT_LATENCY`].
    pub fn input(&mut self, name: impl Into<String>) -> NetResult<&mut Self> {
        self.declare_input(name, DEFAULT_LATENCY)
    }

    /// [`declare_output`](Self::declare_output) with [`DEFAULT_LATENCY`].
    pub fn output(&mut self, name: impl Into<String>) -> NetResult<&mut Self> {
        self.declare_output(name, DEFAULT_LATENCY)
    }

    /// Run the transition against `state` and collect its emissions.
    ///
    /// Each result value is paired with the output declared at the same
    /// position and carries that output's latency. Outputs left without a
    /// value are not emitted.
    pub fn activate(&self, state: &State) -> NetResult<Vec<SourceEvent>> {
        let required = self.transition.arity();
        if required != self.inputs.len() {
            return Err(NetError::ActivationContract {
                node: self.name.clone(),
                required,
                declared: self.inputs.len(),
            });
        }

        let args: Vec<Option<Value>> = self
            .inputs
            .names()
            .map(|var| state.get(var).cloned())
            .collect();

        let emitted = self
            .outputs
            .iter()
            .zip(self.transition.fire(&args).into_values())
            .map(|(port, val)| SourceEvent::new(port.name, val, port.latency))
            .collect();
        Ok(emitted)
    }

    fn scope(&self) -> PortScope {
        PortScope::Node(self.name.clone())
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("arity", &self.transition.arity())
            .finish()
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} inputs: {} outputs: {}",
            self.name, self.inputs, self.outputs
        )
    }
}
