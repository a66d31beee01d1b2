/// Event records for the propagation engine.
///
/// A [`SourceEvent`] is a value a node (or the caller) has emitted but
/// which has no place on the timeline yet. The translator turns it into
/// one [`Event`] per interested destination, each stamped with an
/// absolute delivery time.

use crate::node::NodeId;
use crate::time::VirtualTime;
use crate::value::Value;

// ── Event ID ──────────────────────────────────────────────────────────

/// Strictly increasing sequence number assigned when an event is queued.
///
/// Two events with the same clock are applied in ascending `EventId`
/// order, i.e. in the order they were queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct EventId(u64);

impl EventId {
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E#{}", self.0)
    }
}

/// Deterministic, strictly-increasing event-ID generator.
///
/// Each [`EventQueue`](crate::scheduler::EventQueue) owns one.
#[derive(Debug, Clone, Default)]
pub struct EventIdGen {
    next: u64,
}

impl EventIdGen {
    pub fn new() -> Self {
        EventIdGen { next: 0 }
    }

    /// Mint the next event ID.
    pub fn next_id(&mut self) -> EventId {
        let id = EventId(self.next);
        self.next += 1;
        id
    }
}

// ── Source Event ──────────────────────────────────────────────────────

/// An emission not yet placed on the timeline: `val` will appear on
/// `var` after `latency` extra ticks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceEvent {
    pub var: String,
    pub val: Value,
    pub latency: u64,
}

impl SourceEvent {
    pub fn new(var: impl Into<String>, val: impl Into<Value>, latency: u64) -> Self {
        SourceEvent {
            var: var.into(),
            val: val.into(),
            latency,
        }
    }
}

impl std::fmt::Display for SourceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={} (+{})", self.var, self.val, self.latency)
    }
}

// ── Event ─────────────────────────────────────────────────────────────

/// A timeline entry: `val` arrives on `var` at `clock`.
///
/// `target == None` means the value leaves through the network's output
/// boundary instead of entering a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub clock: VirtualTime,
    pub target: Option<NodeId>,
    pub var: String,
    pub val: Value,
}

impl Event {
    /// An event delivered to `target`.
    pub fn to_node(
        clock: VirtualTime,
        target: NodeId,
        var: impl Into<String>,
        val: impl Into<Value>,
    ) -> Self {
        Event {
            clock,
            target: Some(target),
            var: var.into(),
            val: val.into(),
        }
    }

    /// An event crossing the output boundary.
    pub fn to_boundary(clock: VirtualTime, var: impl Into<String>, val: impl Into<Value>) -> Self {
        Event {
            clock,
            target: None,
            var: var.into(),
            val: val.into(),
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.target.is_none()
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.target {
            Some(node) => write!(f, "[{}] {}={} → {}", self.clock, self.var, self.val, node),
            None => write!(f, "[{}] {}={} → out", self.clock, self.var, self.val),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id_monotonic() {
        let mut gen = EventIdGen::new();
        let a = gen.next_id();
        let b = gen.next_id();
        assert_eq!(a.raw(), 0);
        assert_eq!(b.raw(), 1);
        assert_eq!(gen.next_id().raw(), 2);
        assert!(a < b);
    }

    #[test]
    fn test_constructors() {
        let e = Event::to_boundary(VirtualTime::new(6), "light", "green");
        assert!(e.is_boundary());
        let n = Event::to_node(VirtualTime::new(5), NodeId::new(0), "clock", 0);
        assert_eq!(n.target, Some(NodeId::new(0)));
        assert_eq!(n.val, Value::Int(0));
    }

    #[test]
    fn test_display() {
        let e = Event::to_boundary(VirtualTime::new(6), "light", "green");
        assert_eq!(e.to_string(), "[T=6] light=green → out");
        let n = Event::to_node(VirtualTime::new(2), NodeId::new(1), "clock", 0);
        assert_eq!(n.to_string(), "[T=2] clock=0 → N1");
        assert_eq!(SourceEvent::new("x", 3, 1).to_string(), "x=3 (+1)");
        assert_eq!(EventIdGen::new().next_id().to_string(), "E#0");
    }
}
