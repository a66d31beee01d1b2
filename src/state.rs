//! Driver-owned variable state.

use indexmap::IndexMap;

use crate::value::Value;

/// Last observed value of every tracked variable.
///
/// Variables appear in first-seen order: declared network inputs first
/// (all unset), then anything an applied event writes. Only the driver
/// mutates a `State`; nodes and renderers get `&State`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    vars: IndexMap<String, Option<Value>>,
}

impl State {
    pub fn new() -> Self {
        State {
            vars: IndexMap::new(),
        }
    }

    /// A state in which every name in `vars` is tracked but unset.
    pub(crate) fn with_unset<'a>(vars: impl IntoIterator<Item = &'a str>) -> Self {
        State {
            vars: vars.into_iter().map(|v| (v.to_owned(), None)).collect(),
        }
    }

    pub(crate) fn set(&mut self, var: &str, val: Value) {
        match self.vars.get_mut(var) {
            Some(slot) => *slot = Some(val),
            None => {
                self.vars.insert(var.to_owned(), Some(val));
            }
        }
    }

    /// Current value of `var`; `None` if unset or never tracked.
    pub fn get(&self, var: &str) -> Option<&Value> {
        self.vars.get(var).and_then(Option::as_ref)
    }

    /// Whether `var` is tracked at all (possibly unset).
    pub fn tracks(&self, var: &str) -> bool {
        self.vars.contains_key(var)
    }

    /// Tracked variables in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> + '_ {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (var, val)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match val {
                Some(v) => write!(f, "{}: {}", var, v)?,
                None => write!(f, "{}: none", var)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_inputs_are_tracked() {
        let state = State::with_unset(["clock", "reset"]);
        assert_eq!(state.len(), 2);
        assert!(state.tracks("clock"));
        assert_eq!(state.get("clock"), None);
        assert!(!state.tracks("light"));
    }

    #[test]
    fn test_set_keeps_first_seen_order() {
        let mut state = State::with_unset(["clock"]);
        state.set("light", Value::from("green"));
        state.set("clock", Value::from(4));
        state.set("light", Value::from("red"));

        let vars: Vec<&str> = state.iter().map(|(k, _)| k).collect();
        assert_eq!(vars, vec!["clock", "light"]);
        assert_eq!(state.get("light"), Some(&Value::from("red")));
        assert_eq!(state.to_string(), "clock: 4, light: red");
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut state = State::new();
        state.set("x", Value::from(1));
        let snapshot = state.clone();
        state.set("x", Value::from(2));
        assert_eq!(snapshot.get("x"), Some(&Value::Int(1)));
    }
}
