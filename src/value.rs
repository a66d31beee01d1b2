//! Values carried across ports.

/// A value flowing through the network.
///
/// Ports are untyped; a transition decides what it accepts. `Text` exists
/// mostly for readable scenarios (a traffic light emitting its colour).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(3), Value::Int(3));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("red"), Value::Text("red".into()));
        assert_eq!(Value::from(String::from("x")).as_text(), Some("x"));
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        assert_eq!(Value::Int(4).as_bool(), None);
        assert_eq!(Value::Text("4".into()).as_int(), None);
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-2).to_string(), "-2");
        assert_eq!(Value::Text("green".into()).to_string(), "green");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }
}
