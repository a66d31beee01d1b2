//! Named, latency-bearing ports.
//!
//! A [`PortMap`] keeps declarations in insertion order (positional binding
//! of node inputs and outputs depends on it) and rejects a second
//! declaration of the same name.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::error::{NetError, NetResult};

/// Latency used by the convenience declarations that take no latency.
pub const DEFAULT_LATENCY: u64 = 1;

/// Whether a port receives or emits values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Input,
    Output,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Input => write!(f, "input"),
            Direction::Output => write!(f, "output"),
        }
    }
}

/// Where a port lives: on the network boundary or on a single node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum PortScope {
    Network,
    Node(String),
}

impl std::fmt::Display for PortScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortScope::Network => write!(f, "network boundary"),
            PortScope::Node(name) => write!(f, "node `{}`", name),
        }
    }
}

/// A borrowed view of one declared port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port<'a> {
    pub name: &'a str,
    pub latency: u64,
}

/// Insertion-ordered set of port declarations for one scope and direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortMap {
    ports: IndexMap<String, u64>,
}

impl PortMap {
    pub fn new() -> Self {
        PortMap {
            ports: IndexMap::new(),
        }
    }

    /// Register `name` with `latency`. Fails if the name is already taken.
    pub(crate) fn declare(
        &mut self,
        scope: PortScope,
        direction: Direction,
        name: String,
        latency: u64,
    ) -> NetResult<()> {
        match self.ports.entry(name) {
            Entry::Occupied(slot) => Err(NetError::DuplicatePort {
                scope,
                direction,
                name: slot.key().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(latency);
                Ok(())
            }
        }
    }

    /// Latency of the port called `name`, if declared.
    pub fn latency(&self, name: &str) -> Option<u64> {
        self.ports.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ports.contains_key(name)
    }

    /// Declaration position of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.ports.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Ports in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Port<'_>> + '_ {
        self.ports.iter().map(|(name, &latency)| Port {
            name: name.as_str(),
            latency,
        })
    }

    /// Port names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.ports.keys().map(String::as_str)
    }
}

impl std::fmt::Display for PortMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, port) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", port.name, port.latency)?;
        }
        write!(f, "}}")
    }
}
