/// Globally ordered queue of pending delivery events.
///
/// A `BinaryHeap` with reversed `Ord` acts as a min-heap keyed by
/// `(clock, event_id)`. IDs are minted on push, so events with equal
/// clocks come out in the order they went in.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::event::{Event, EventId, EventIdGen};

/// Heap entry: an event plus the sequence number that breaks clock ties.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Queued {
    id: EventId,
    event: Event,
}

/// Ordering: smallest `(clock, id)` first. Reversed because
/// `BinaryHeap` is a max-heap.
impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .event
            .clock
            .cmp(&self.event.clock)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending delivery events, popped earliest-first with stable ties.
///
/// Can be filled before a run and handed to
/// [`Network::execute`](crate::network::Network::execute) as a pre-seeded
/// queue; seeded events precede anything queued during the run at equal
/// clocks.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Queued>,
    id_gen: EventIdGen,
}

impl EventQueue {
    pub fn new() -> Self {
        EventQueue {
            heap: BinaryHeap::new(),
            id_gen: EventIdGen::new(),
        }
    }

    /// Queue `event`, returning its tie-break sequence number.
    pub fn push(&mut self, event: Event) -> EventId {
        let id = self.id_gen.next_id();
        self.heap.push(Queued { id, event });
        id
    }

    /// Remove the earliest event (lowest clock, then lowest ID).
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|q| q.event)
    }

    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|q| &q.event)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drain all events in pop order.
    pub fn drain_ordered(&mut self) -> Vec<Event> {
        let mut events = Vec::with_capacity(self.heap.len());
        while let Some(e) = self.pop() {
            events.push(e);
        }
        events
    }
}

impl Extend<Event> for EventQueue {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        for event in iter {
            self.push(event);
        }
    }
}

impl FromIterator<Event> for EventQueue {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut queue = EventQueue::new();
        queue.extend(iter);
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::VirtualTime;
    use proptest::prelude::*;

    fn out(clock: u64, tag: &str) -> Event {
        Event::to_boundary(VirtualTime::new(clock), "v", tag)
    }

    #[test]
    fn test_fifo_at_same_clock() {
        let mut queue = EventQueue::new();
        queue.push(out(10, "first"));
        queue.push(out(10, "second"));
        queue.push(out(10, "third"));

        let tags: Vec<String> = queue
            .drain_ordered()
            .into_iter()
            .map(|e| e.val.to_string())
            .collect();
        assert_eq!(tags, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_clock_ordering() {
        let mut queue: EventQueue = [out(30, "late"), out(10, "early"), out(20, "mid")]
            .into_iter()
            .collect();

        assert_eq!(queue.peek().map(|e| e.clock), Some(VirtualTime::new(10)));
        assert_eq!(queue.pop().unwrap().clock, VirtualTime::new(10));
        assert_eq!(queue.pop().unwrap().clock, VirtualTime::new(20));
        assert_eq!(queue.pop().unwrap().clock, VirtualTime::new(30));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_ids_follow_push_order() {
        let mut queue = EventQueue::new();
        let a = queue.push(out(5, "a"));
        let b = queue.push(out(1, "b"));
        assert!(a < b);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
        assert!(queue.peek().is_none());
    }

    proptest! {
        #[test]
        fn prop_pop_order_is_stable_sort_by_clock(clocks in prop::collection::vec(0u64..8, 0..40)) {
            let mut queue = EventQueue::new();
            for (i, c) in clocks.iter().enumerate() {
                queue.push(out(*c, &i.to_string()));
            }

            let mut expected: Vec<(u64, usize)> =
                clocks.iter().copied().enumerate().map(|(i, c)| (c, i)).collect();
            expected.sort_by_key(|&(c, _)| c);

            let popped: Vec<(u64, usize)> = queue
                .drain_ordered()
                .into_iter()
                .map(|e| (e.clock.ticks(), e.val.to_string().parse().unwrap()))
                .collect();
            prop_assert_eq!(popped, expected);
        }
    }
}
