//! Translation of emissions into timeline events.
//!
//! For a source event `se` translated at `clock`:
//!
//! ```text
//! source_time = clock + se.latency + net_input_latency(se.var)   (0 if not a network input)
//! boundary    = source_time + net_output_latency(se.var)         if se.var is a network output
//! node n      = clock + source_time + n.input_latency(se.var)    for every n listening on se.var
//! ```
//!
//! Node deliveries add `clock` a second time on top of `source_time`.
//! That repeated term is part of the delivery arithmetic and must be kept
//! as is: changing it changes every recorded timeline.
//!
//! Every sum saturates at [`VirtualTime::MAX`], so translation never fails.

use crate::event::{Event, SourceEvent};
use crate::network::Network;
use crate::time::VirtualTime;

impl Network {
    /// Fan each pending emission out to the boundary and to every node
    /// that declares it as an input.
    ///
    /// Events come out grouped per source event, boundary first, then
    /// nodes in insertion order. Nothing is deduplicated.
    pub fn translate(&self, pending: &[SourceEvent], clock: VirtualTime) -> Vec<Event> {
        let mut events = Vec::new();
        for se in pending {
            let source_time = clock
                .saturating_plus(se.latency)
                .saturating_plus(self.inputs().latency(&se.var).unwrap_or(0));

            if let Some(latency) = self.outputs().latency(&se.var) {
                events.push(Event::to_boundary(
                    source_time.saturating_plus(latency),
                    se.var.as_str(),
                    se.val.clone(),
                ));
            }

            for node in self.nodes() {
                if let Some(latency) = node.inputs().latency(&se.var) {
                    let at = clock
                        .saturating_plus(source_time.ticks())
                        .saturating_plus(latency);
                    events.push(Event::to_node(at, node.id(), se.var.as_str(), se.val.clone()));
                }
            }
        }
        events
    }
}
