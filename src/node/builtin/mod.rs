//! Built-in transitions: `Constant` and `Identity`.
//!
//! Small reference behaviours used by tests, the demo binary and the
//! builder DSL.

pub mod constant;
pub mod identity;

pub use constant::Constant;
pub use identity::Identity;
