/// Fluent builder DSL for network topology.
///
/// Collects ports and nodes without failing on each call; the first
/// declaration error surfaces from [`NetworkBuilder::build`].

use crate::error::NetResult;
use crate::network::{Network, ANONYMOUS};
use crate::node::{Constant, Identity, Transition};
use crate::value::Value;

// ── NodeSpec ──────────────────────────────────────────────────────────

enum Behaviour {
    Custom(Box<dyn Transition>),
    /// `Constant` whose arity is the number of declared inputs.
    Constant(Vec<Value>),
    /// `Identity` whose arity is the number of declared inputs.
    Identity,
}

/// Port list for one node under construction.
pub struct NodeSpec {
    name: String,
    behaviour: Behaviour,
    inputs: Vec<(String, u64)>,
    outputs: Vec<(String, u64)>,
}

impl NodeSpec {
    fn new(name: String, behaviour: Behaviour) -> Self {
        NodeSpec {
            name,
            behaviour,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Declare an input port.
    pub fn input(mut self, name: impl Into<String>, latency: u64) -> Self {
        self.inputs.push((name.into(), latency));
        self
    }

    /// Declare an output port.
    pub fn output(mut self, name: impl Into<String>, latency: u64) -> Self {
        self.outputs.push((name.into(), latency));
        self
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────

/// Fluent builder for a [`Network`].
///
/// # Example
/// ```rust
/// use delaynet::dsl::NetworkBuilder;
///
/// let net = NetworkBuilder::named("TrafficLight")
///     .input("clock", 0)
///     .output("light", 1)
///     .constant("green", "green", |n| n.input("clock", 5).output("light", 0))
///     .constant("yellow", "yellow", |n| n.input("clock", 2).output("light", 0))
///     .constant("red", "red", |n| n.input("clock", 7).output("light", 0))
///     .build()
///     .unwrap();
/// assert_eq!(net.nodes().len(), 3);
/// ```
pub struct NetworkBuilder {
    name: String,
    inputs: Vec<(String, u64)>,
    outputs: Vec<(String, u64)>,
    nodes: Vec<NodeSpec>,
}

impl NetworkBuilder {
    /// Builder for an anonymous network.
    pub fn new() -> Self {
        Self::named(ANONYMOUS)
    }

    pub fn named(name: impl Into<String>) -> Self {
        NetworkBuilder {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            nodes: Vec::new(),
        }
    }

    // ── Boundary ──────────────────────────────────────────────

    /// Declare a network input port.
    pub fn input(mut self, name: impl Into<String>, latency: u64) -> Self {
        self.inputs.push((name.into(), latency));
        self
    }

    /// Declare a network output port.
    pub fn output(mut self, name: impl Into<String>, latency: u64) -> Self {
        self.outputs.push((name.into(), latency));
        self
    }

    // ── Nodes ─────────────────────────────────────────────────

    /// Add a node with a custom transition; `ports` declares its ports.
    pub fn node<T, F>(self, name: impl Into<String>, transition: T, ports: F) -> Self
    where
        T: Transition + 'static,
        F: FnOnce(NodeSpec) -> NodeSpec,
    {
        self.push(name.into(), Behaviour::Custom(Box::new(transition)), ports)
    }

    /// Add a node that always emits `value`, whatever its inputs.
    pub fn constant<F>(self, name: impl Into<String>, value: impl Into<Value>, ports: F) -> Self
    where
        F: FnOnce(NodeSpec) -> NodeSpec,
    {
        self.push(name.into(), Behaviour::Constant(vec![value.into()]), ports)
    }

    /// Add a node that forwards each input to the output at the same
    /// position.
    pub fn relay<F>(self, name: impl Into<String>, ports: F) -> Self
    where
        F: FnOnce(NodeSpec) -> NodeSpec,
    {
        self.push(name.into(), Behaviour::Identity, ports)
    }

    fn push<F>(mut self, name: String, behaviour: Behaviour, ports: F) -> Self
    where
        F: FnOnce(NodeSpec) -> NodeSpec,
    {
        self.nodes.push(ports(NodeSpec::new(name, behaviour)));
        self
    }

    // ── Build ─────────────────────────────────────────────────

    /// Assemble the network, reporting the first duplicate port.
    pub fn build(self) -> NetResult<Network> {
        let mut net = Network::named(self.name);
        for (name, latency) in self.inputs {
            net.declare_input(name, latency)?;
        }
        for (name, latency) in self.outputs {
            net.declare_output(name, latency)?;
        }

        for spec in self.nodes {
            let arity = spec.inputs.len();
            let node = match spec.behaviour {
                Behaviour::Custom(t) => net.add_node(spec.name, t),
                Behaviour::Constant(values) => {
                    net.add_node(spec.name, Constant::many(arity, values))
                }
                Behaviour::Identity => net.add_node(spec.name, Identity::new(arity)),
            };
            for (name, latency) in spec.inputs {
                node.declare_input(name, latency)?;
            }
            for (name, latency) in spec.outputs {
                node.declare_output(name, latency)?;
            }
        }
        Ok(net)
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetError;
    use crate::event::SourceEvent;
    use crate::node::from_fn;
    use crate::port::{Direction, PortScope};

    fn traffic_light() -> NetworkBuilder {
        NetworkBuilder::named("TrafficLight")
            .input("clock", 0)
            .output("light", 1)
            .constant("green", "green", |n| n.input("clock", 5).output("light", 0))
            .constant("yellow", "yellow", |n| n.input("clock", 2).output("light", 0))
            .constant("red", "red", |n| n.input("clock", 7).output("light", 0))
    }

    #[test]
    fn test_builder_topology() {
        let net = traffic_light().build().unwrap();
        assert_eq!(net.name(), "TrafficLight");
        assert_eq!(net.inputs().latency("clock"), Some(0));
        assert_eq!(net.outputs().latency("light"), Some(1));
        let names: Vec<&str> = net.nodes().iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["green", "yellow", "red"]);
        assert_eq!(net.nodes()[2].inputs().latency("clock"), Some(7));
        assert_eq!(net.nodes()[0].arity(), 1);
    }

    #[test]
    fn test_builder_network_runs() {
        let mut net = traffic_light().build().unwrap();
        let report = net.run([SourceEvent::new("clock", 0, 0)]).unwrap();
        assert!(report.is_drained());
        assert_eq!(net.history().events().len(), 6);
    }

    #[test]
    fn test_builder_reports_duplicate_node_port() {
        let err = NetworkBuilder::new()
            .relay("r", |n| n.input("a", 0).input("a", 1))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            NetError::DuplicatePort {
                scope: PortScope::Node("r".into()),
                direction: Direction::Input,
                name: "a".into(),
            }
        );
    }

    #[test]
    fn test_builder_reports_duplicate_boundary_port() {
        let err = NetworkBuilder::new()
            .output("o", 0)
            .output("o", 0)
            .build()
            .unwrap_err();
        assert!(err.is_duplicate_port());
    }

    #[test]
    fn test_custom_node() {
        let net = NetworkBuilder::new()
            .node(
                "neg",
                from_fn(1, |args: &[Option<Value>]| {
                    Value::Int(-args[0].as_ref().and_then(Value::as_int).unwrap_or(0))
                }),
                |n| n.input("x", 0).output("y", 0),
            )
            .build()
            .unwrap();
        assert_eq!(net.nodes()[0].arity(), 1);
        assert_eq!(net.nodes()[0].outputs().latency("y"), Some(0));
    }
}
