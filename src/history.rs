/// Append-only record of a run.
///
/// Holds the State History (one snapshot per applied event, plus the
/// initial one) and the Event History (every applied event, in order).
/// Snapshots are owned copies, so later state changes never rewrite what
/// was recorded. The order-sensitive [`History::fingerprint`] gives a cheap
/// way to check that two runs replayed identically.

use crate::event::Event;
use crate::state::State;
use crate::time::VirtualTime;
use crate::value::Value;

// ── Hash utility ──────────────────────────────────────────────────────

/// Combine two u64 hashes deterministically.
pub fn hash_combine(a: u64, b: u64) -> u64 {
    let mut h = a;
    h = h.wrapping_mul(0x517cc1b727220a95);
    h = h.wrapping_add(b);
    h ^= h >> 32;
    h
}

/// Hash a byte slice deterministically (FNV-1a).
pub fn hash_bytes(data: &[u8]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in data {
        h ^= b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    h
}

fn value_hash(val: Option<&Value>) -> u64 {
    match val {
        None => 0,
        Some(Value::Int(n)) => hash_combine(1, *n as u64),
        Some(Value::Bool(b)) => hash_combine(2, *b as u64),
        Some(Value::Text(s)) => hash_combine(3, hash_bytes(s.as_bytes())),
    }
}

fn state_hash(state: &State) -> u64 {
    state.iter().fold(0, |h, (var, val)| {
        hash_combine(hash_combine(h, hash_bytes(var.as_bytes())), value_hash(val))
    })
}

fn event_hash(event: &Event) -> u64 {
    let mut h = hash_combine(0, event.clock.ticks());
    h = hash_combine(h, event.target.map_or(0, |n| n.index() as u64 + 1));
    h = hash_combine(h, hash_bytes(event.var.as_bytes()));
    hash_combine(h, value_hash(Some(&event.val)))
}

// ── History ───────────────────────────────────────────────────────────

/// State History and Event History of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    states: Vec<(VirtualTime, State)>,
    events: Vec<Event>,
}

impl History {
    pub fn new() -> Self {
        History {
            states: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Start a run's history with its initial snapshot.
    pub(crate) fn starting_at(clock: VirtualTime, initial: &State) -> Self {
        History {
            states: vec![(clock, initial.clone())],
            events: Vec::new(),
        }
    }

    /// Record an applied event and the state it produced.
    pub(crate) fn record(&mut self, clock: VirtualTime, state: &State, event: Event) {
        self.states.push((clock, state.clone()));
        self.events.push(event);
    }

    /// `(clock, snapshot)` pairs, initial snapshot first.
    pub fn states(&self) -> &[(VirtualTime, State)] {
        &self.states
    }

    /// Applied events in application order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Final recorded state, if any run has happened.
    pub fn last_state(&self) -> Option<&State> {
        self.states.last().map(|(_, s)| s)
    }

    /// Deterministic, order-sensitive hash of both logs.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0;
        for (clock, state) in &self.states {
            h = hash_combine(h, clock.ticks());
            h = hash_combine(h, state_hash(state));
        }
        for event in &self.events {
            h = hash_combine(h, event_hash(event));
        }
        h
    }

    /// Whether two histories recorded the same run, entry for entry.
    pub fn matches(&self, other: &History) -> bool {
        self.states == other.states && self.events == other.events
    }

    /// Export both logs as pretty-printed JSON.
    #[cfg(feature = "serialize")]
    pub fn to_json(&self) -> crate::error::NetResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::error::NetError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;

    fn sample() -> History {
        let mut state = State::with_unset(["clock"]);
        let mut history = History::starting_at(VirtualTime::ZERO, &state);
        state.set("clock", Value::from(0));
        history.record(
            VirtualTime::new(2),
            &state,
            Event::to_node(VirtualTime::new(2), NodeId::new(1), "clock", 0),
        );
        state.set("light", Value::from("yellow"));
        history.record(
            VirtualTime::new(3),
            &state,
            Event::to_boundary(VirtualTime::new(3), "light", "yellow"),
        );
        history
    }

    #[test]
    fn test_lengths() {
        let h = sample();
        assert_eq!(h.states().len(), h.events().len() + 1);
        assert_eq!(h.states()[0].1.get("clock"), None);
        assert_eq!(
            h.last_state().and_then(|s| s.get("light")),
            Some(&Value::from("yellow"))
        );
    }

    #[test]
    fn test_hash_combine_deterministic() {
        assert_eq!(hash_combine(42, 99), hash_combine(42, 99));
        assert_ne!(hash_combine(1, 2), hash_combine(2, 1));
    }

    #[test]
    fn test_hash_bytes_deterministic() {
        assert_eq!(hash_bytes(b"light"), hash_bytes(b"light"));
        assert_ne!(hash_bytes(b"light"), hash_bytes(b"clock"));
    }

    #[test]
    fn test_fingerprint_identical_histories() {
        let a = sample();
        let b = sample();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert!(a.matches(&b));
    }

    #[test]
    fn test_fingerprint_detects_difference() {
        let a = sample();
        let mut b = sample();
        let state = b.last_state().cloned().unwrap();
        b.record(
            VirtualTime::new(9),
            &state,
            Event::to_boundary(VirtualTime::new(9), "light", "red"),
        );
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert!(!a.matches(&b));
    }

    #[test]
    fn test_empty_history() {
        let h = History::new();
        assert_eq!(h.fingerprint(), 0);
        assert!(h.last_state().is_none());
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_to_json_contains_events() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"light\""));
        assert!(json.contains("yellow"));
    }
}
