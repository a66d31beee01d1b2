//! `Constant`: emits the same values on every activation.

use crate::node::transition::{Outputs, Transition};
use crate::value::Value;

/// Ignores its inputs and emits a fixed list of values.
///
/// A traffic-light phase is a `Constant` with arity 1 (the clock it
/// listens to) emitting its own colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    arity: usize,
    values: Vec<Value>,
}

impl Constant {
    /// Emit `value` whenever any of `arity` inputs changes.
    pub fn new(arity: usize, value: impl Into<Value>) -> Self {
        Constant {
            arity,
            values: vec![value.into()],
        }
    }

    /// Emit several values, paired with outputs in order.
    pub fn many(arity: usize, values: Vec<Value>) -> Self {
        Constant { arity, values }
    }
}

impl Transition for Constant {
    fn arity(&self) -> usize {
        self.arity
    }

    fn fire(&self, _inputs: &[Option<Value>]) -> Outputs {
        Outputs::Many(self.values.clone())
    }
}
