//! Node ID: position of a node in its network's declaration order.

/// Identifies a node within one [`Network`](crate::network::Network).
///
/// IDs are handed out by `Network::add_node` in insertion order, so
/// `NodeId::new(2)` is the third node added. An ID is meaningless
/// outside the network that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Index into the network's node list.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "N{}", self.0)
    }
}
