//! `Identity`: forwards inputs to outputs positionally.

use crate::node::transition::{Outputs, Transition};
use crate::value::Value;

/// Forwards input `i` to output `i`.
///
/// Forwarding stops at the first unset input: everything after it stays
/// silent, the same way a short result list leaves trailing outputs
/// unemitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    arity: usize,
}

impl Identity {
    pub fn new(arity: usize) -> Self {
        Identity { arity }
    }
}

impl Transition for Identity {
    fn arity(&self) -> usize {
        self.arity
    }

    fn fire(&self, inputs: &[Option<Value>]) -> Outputs {
        Outputs::Many(inputs.iter().map_while(|v| v.clone()).collect())
    }
}
