/// Simulation driver: the step loop.
///
/// Each iteration translates pending emissions onto the queue, pops the
/// earliest event, applies it to the state, activates the addressed node
/// and records history. The loop is synchronous and single-threaded; an
/// iteration budget bounds it so feedback cycles cannot spin forever.

use tracing::{debug, info, warn};

use crate::error::{NetError, NetResult};
use crate::event::SourceEvent;
use crate::history::History;
use crate::network::Network;
use crate::scheduler::EventQueue;
use crate::state::State;
use crate::time::VirtualTime;

/// Iteration budget used when none is given.
pub const DEFAULT_ITERATION_LIMIT: u64 = 100;

// ── Configuration ─────────────────────────────────────────────────────

/// Per-run settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Maximum number of driver iterations before the run is cut short.
    pub iteration_limit: u64,
}

impl RunConfig {
    pub fn new() -> Self {
        RunConfig {
            iteration_limit: DEFAULT_ITERATION_LIMIT,
        }
    }

    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = limit;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ── Outcome ───────────────────────────────────────────────────────────

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum RunStatus {
    /// Queue and pending emissions both empty.
    Drained,
    /// Budget ran out with work left; the state is a partial result.
    BudgetExhausted,
}

/// Result of [`Network::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Final state.
    pub state: State,
    pub status: RunStatus,
    /// Iterations consumed from the budget.
    pub iterations: u64,
    /// Clock of the last applied event.
    pub clock: VirtualTime,
    /// Queued events plus untranslated emissions left when the run ended.
    pub backlog: usize,
}

impl RunReport {
    pub fn is_drained(&self) -> bool {
        self.status == RunStatus::Drained
    }
}

// ── Driver ────────────────────────────────────────────────────────────

/// Per-run mutable state. Borrows the topology read-only; owns everything
/// that changes while the run is in progress.
struct Driver<'n> {
    net: &'n Network,
    state: State,
    queue: EventQueue,
    pending: Vec<SourceEvent>,
    clock: VirtualTime,
    history: History,
    iterations: u64,
    saturated: bool,
}

impl<'n> Driver<'n> {
    fn new(net: &'n Network, stimulus: Vec<SourceEvent>, seed: EventQueue) -> Self {
        let state = State::with_unset(net.inputs().names());
        let history = History::starting_at(VirtualTime::ZERO, &state);
        Driver {
            net,
            state,
            queue: seed,
            pending: stimulus,
            clock: VirtualTime::ZERO,
            history,
            iterations: 0,
            saturated: false,
        }
    }

    fn backlog(&self) -> usize {
        self.queue.len() + self.pending.len()
    }

    fn has_work(&self) -> bool {
        self.backlog() > 0
    }

    fn run(&mut self, limit: u64) -> NetResult<RunStatus> {
        let mut budget = limit;
        while self.has_work() && budget > 0 {
            budget -= 1;
            self.iterations += 1;
            if !self.step()? {
                break;
            }
        }

        if self.has_work() {
            warn!(
                network = %self.net.name(),
                limit,
                queued = self.queue.len(),
                pending = self.pending.len(),
                clock = self.clock.ticks(),
                "iteration budget exhausted, returning partial state"
            );
            Ok(RunStatus::BudgetExhausted)
        } else {
            Ok(RunStatus::Drained)
        }
    }

    /// One iteration. Returns `false` once nothing is left to apply.
    fn step(&mut self) -> NetResult<bool> {
        let translated = self.net.translate(&self.pending, self.clock);
        self.pending.clear();
        self.queue.extend(translated);

        if self.queue.is_empty() {
            return Ok(false);
        }
        let event = self.queue.pop().ok_or(NetError::QueueUnderflow)?;

        self.state.set(&event.var, event.val.clone());
        self.clock = event.clock;
        if self.clock.is_saturated() && !self.saturated {
            self.saturated = true;
            warn!(
                network = %self.net.name(),
                iteration = self.iterations,
                "clock saturated, later deliveries collapse onto the ceiling"
            );
        }

        self.pending = match event.target {
            Some(id) => {
                let node = self.net.node(id).ok_or(NetError::UnknownNode(id))?;
                let emitted = node.activate(&self.state)?;
                debug!(node = %node.name(), emitted = emitted.len(), "activated node");
                emitted
            }
            None => Vec::new(),
        };

        debug!(
            clock = self.clock.ticks(),
            var = %event.var,
            val = %event.val,
            target = ?event.target,
            "applied event"
        );
        self.history.record(self.clock, &self.state, event);
        Ok(true)
    }
}

// ── Entry points ──────────────────────────────────────────────────────

impl Network {
    /// Run the network from a fresh state.
    ///
    /// `stimulus` is translated at clock 0 on the first iteration; `seed`
    /// events are already on the timeline and precede anything queued
    /// during the run at equal clocks. Both history logs are replaced.
    ///
    /// Running out of budget is not an error: the report carries
    /// [`RunStatus::BudgetExhausted`] and the partial state. Errors from
    /// node activation are returned as they are, with the history up to
    /// that point kept.
    pub fn execute<I>(
        &mut self,
        stimulus: I,
        iteration_limit: u64,
        seed: Option<EventQueue>,
    ) -> NetResult<RunReport>
    where
        I: IntoIterator<Item = SourceEvent>,
    {
        let config = RunConfig::new().with_iteration_limit(iteration_limit);
        self.execute_with(&config, stimulus, seed)
    }

    /// [`execute`](Self::execute) driven by a [`RunConfig`].
    pub fn execute_with<I>(
        &mut self,
        config: &RunConfig,
        stimulus: I,
        seed: Option<EventQueue>,
    ) -> NetResult<RunReport>
    where
        I: IntoIterator<Item = SourceEvent>,
    {
        let stimulus: Vec<SourceEvent> = stimulus.into_iter().collect();
        info!(
            network = %self.name(),
            stimulus = stimulus.len(),
            limit = config.iteration_limit,
            "starting run"
        );

        let mut driver = Driver::new(self, stimulus, seed.unwrap_or_default());
        let outcome = driver.run(config.iteration_limit);
        let backlog = driver.backlog();
        let Driver {
            state,
            clock,
            history,
            iterations,
            ..
        } = driver;
        self.set_history(history);

        let status = outcome?;
        info!(
            network = %self.name(),
            ?status,
            iterations,
            clock = clock.ticks(),
            "run finished"
        );
        Ok(RunReport {
            state,
            status,
            iterations,
            clock,
            backlog,
        })
    }

    /// [`execute`](Self::execute) with the default budget and no seed.
    pub fn run<I>(&mut self, stimulus: I) -> NetResult<RunReport>
    where
        I: IntoIterator<Item = SourceEvent>,
    {
        self.execute_with(&RunConfig::default(), stimulus, None)
    }
}
