//! `Transition`: the pure behaviour behind a node.

use crate::value::Value;

// ── Outputs ───────────────────────────────────────────────────────────

/// What a transition returns: a single value or an ordered list.
///
/// A single value is treated as a one-element list. Values are paired
/// with the node's declared outputs positionally; surplus outputs are
/// simply not emitted and surplus values are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outputs {
    One(Value),
    Many(Vec<Value>),
}

impl Outputs {
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Outputs::One(v) => vec![v],
            Outputs::Many(vs) => vs,
        }
    }
}

impl From<Value> for Outputs {
    fn from(v: Value) -> Self {
        Outputs::One(v)
    }
}

impl From<Vec<Value>> for Outputs {
    fn from(vs: Vec<Value>) -> Self {
        Outputs::Many(vs)
    }
}

impl From<&str> for Outputs {
    fn from(s: &str) -> Self {
        Outputs::One(s.into())
    }
}

impl From<String> for Outputs {
    fn from(s: String) -> Self {
        Outputs::One(s.into())
    }
}

impl From<i64> for Outputs {
    fn from(n: i64) -> Self {
        Outputs::One(n.into())
    }
}

impl From<bool> for Outputs {
    fn from(b: bool) -> Self {
        Outputs::One(b.into())
    }
}

// ── Transition ────────────────────────────────────────────────────────

/// Trait implemented by every node behaviour.
///
/// # Contract
///
/// Implementations **must**:
/// - Report in `arity` exactly how many inputs `fire` expects.
/// - Be deterministic for equal inputs.
/// - Not touch anything but their arguments (`&self` is read-only).
///
/// `fire` receives one entry per declared input, in declaration order;
/// `None` marks an input that has never been set.
///
/// # Example
///
/// ```rust
/// use delaynet::node::{Outputs, Transition};
/// use delaynet::Value;
///
/// struct Doubler;
///
/// impl Transition for Doubler {
///     fn arity(&self) -> usize { 1 }
///     fn fire(&self, inputs: &[Option<Value>]) -> Outputs {
///         let n = inputs[0].as_ref().and_then(Value::as_int).unwrap_or(0);
///         Outputs::from(n * 2)
///     }
/// }
/// ```
pub trait Transition {
    /// Number of inputs `fire` requires.
    fn arity(&self) -> usize;

    /// Compute outputs from the current input values.
    fn fire(&self, inputs: &[Option<Value>]) -> Outputs;
}

impl<T: Transition + ?Sized> Transition for Box<T> {
    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn fire(&self, inputs: &[Option<Value>]) -> Outputs {
        (**self).fire(inputs)
    }
}

/// A transition backed by a closure, useful for tests and one-off
/// networks. The closure cannot report its own arity, so it is given
/// explicitly.
pub struct FnTransition<F> {
    arity: usize,
    f: F,
}

impl<F> FnTransition<F> {
    pub fn new(arity: usize, f: F) -> Self {
        FnTransition { arity, f }
    }
}

impl<F, O> Transition for FnTransition<F>
where
    F: Fn(&[Option<Value>]) -> O,
    O: Into<Outputs>,
{
    fn arity(&self) -> usize {
        self.arity
    }

    fn fire(&self, inputs: &[Option<Value>]) -> Outputs {
        (self.f)(inputs).into()
    }
}

impl<F> std::fmt::Debug for FnTransition<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTransition")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`FnTransition::new`].
pub fn from_fn<F, O>(arity: usize, f: F) -> FnTransition<F>
where
    F: Fn(&[Option<Value>]) -> O,
    O: Into<Outputs>,
{
    FnTransition::new(arity, f)
}
