//! Network topology and its read-only introspection surface.
//!
//! A [`Network`] owns the boundary ports, the nodes (in insertion order)
//! and the [`History`] of its most recent run. Topology is built with
//! `&mut self` methods before running; renderers and other observers only
//! ever see `&Network`, `&Node`, `&PortMap` and `&History`.

use crate::error::NetResult;
use crate::history::History;
use crate::node::{Node, NodeId, Transition};
use crate::port::{Direction, PortMap, PortScope, DEFAULT_LATENCY};

/// Name given to networks built with [`Network::new`].
pub const ANONYMOUS: &str = "anonymous";

/// A fixed topology of boundary ports and nodes.
#[derive(Debug)]
pub struct Network {
    name: String,
    inputs: PortMap,
    outputs: PortMap,
    nodes: Vec<Node>,
    history: History,
}

impl Network {
    /// An empty network called `"anonymous"`.
    pub fn new() -> Self {
        Self::named(ANONYMOUS)
    }

    /// An empty network with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Network {
            name: name.into(),
            inputs: PortMap::new(),
            outputs: PortMap::new(),
            nodes: Vec::new(),
            history: History::new(),
        }
    }

    // ── Topology construction ─────────────────────────────────

    /// Declare a network input port. Its latency is added to every value
    /// emitted on `name`, wherever it comes from.
    pub fn declare_input(&mut self, name: impl Into<String>, latency: u64) -> NetResult<&mut Self> {
        self.inputs
            .declare(PortScope::Network, Direction::Input, name.into(), latency)?;
        Ok(self)
    }

    /// Declare a network output port. Values emitted on `name` also cross
    /// the boundary, delayed by `latency`.
    pub fn declare_output(&mut self, name: impl Into<String>, latency: u64) -> NetResult<&mut Self> {
        self.outputs
            .declare(PortScope::Network, Direction::Output, name.into(), latency)?;
        Ok(self)
    }

    /// [`declare_input`](Self::declare_input) with [`DEFAULT_LATENCY`].
    pub fn input_port(&mut self, name: impl Into<String>) -> NetResult<&mut Self> {
        self.declare_input(name, DEFAULT_LATENCY)
    }

    /// [`declare_output`](Self::declare_output) with [`DEFAULT_LATENCY`].
    pub fn output_port(&mut self, name: impl Into<String>) -> NetResult<&mut Self> {
        self.declare_output(name, DEFAULT_LATENCY)
    }

    /// Append a node. Its ports are declared on the returned reference.
    ///
    /// Node names need not be unique; the returned node's
    /// [`id`](Node::id) is what events address.
    pub fn add_node<T>(&mut self, name: impl Into<String>, transition: T) -> &mut Node
    where
        T: Transition + 'static,
    {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(id, name.into(), Box::new(transition)));
        &mut self.nodes[id.index()]
    }

    /// Mutable access to an existing node, e.g. to declare more ports.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    // ── Introspection ─────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Network input ports, in declaration order.
    pub fn inputs(&self) -> &PortMap {
        &self.inputs
    }

    /// Network output ports, in declaration order.
    pub fn outputs(&self) -> &PortMap {
        &self.outputs
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// First node called `name`.
    pub fn find_node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name() == name)
    }

    /// State and event history of the most recent run.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn set_history(&mut self, history: History) {
        self.history = history;
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetError;
    use crate::node::Constant;

    #[test]
    fn test_default_name() {
        assert_eq!(Network::new().name(), "anonymous");
        assert_eq!(Network::named("TrafficLight").name(), "TrafficLight");
    }

    #[test]
    fn test_boundary_ports() {
        let mut net = Network::new();
        net.declare_input("clock", 0).unwrap().output_port("light").unwrap();

        assert_eq!(net.inputs().latency("clock"), Some(0));
        assert_eq!(net.outputs().latency("light"), Some(DEFAULT_LATENCY));
    }

    #[test]
    fn test_boundary_port_uniqueness() {
        let mut net = Network::new();
        net.declare_output("light", 1).unwrap();
        let err = net.declare_output("light", 3).unwrap_err();
        assert_eq!(
            err,
            NetError::DuplicatePort {
                scope: PortScope::Network,
                direction: Direction::Output,
                name: "light".into(),
            }
        );
        // Same name in the other direction is a different scope.
        assert!(net.declare_input("light", 0).is_ok());
    }

    #[test]
    fn test_nodes_keep_insertion_order() {
        let mut net = Network::new();
        let a = net.add_node("a", Constant::new(0, 1)).id();
        let b = net.add_node("b", Constant::new(0, 2)).id();
        let a2 = net.add_node("a", Constant::new(0, 3)).id();

        assert_eq!((a.index(), b.index(), a2.index()), (0, 1, 2));
        let names: Vec<&str> = net.nodes().iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
        assert_eq!(net.find_node("a").map(Node::id), Some(a));
        assert!(net.node(NodeId::new(3)).is_none());
    }

    #[test]
    fn test_node_mut_declares_more_ports() {
        let mut net = Network::new();
        let id = net.add_node("n", Constant::new(1, 0)).id();
        net.node_mut(id).unwrap().declare_input("x", 4).unwrap();
        assert_eq!(net.node(id).unwrap().inputs().latency("x"), Some(4));
    }

    #[test]
    fn test_fresh_history_is_empty() {
        let net = Network::new();
        assert!(net.history().states().is_empty());
        assert!(net.history().events().is_empty());
    }
}
