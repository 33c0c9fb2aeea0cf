use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single attribute in the store's tagged wire format.
///
/// Serializes to the table's JSON shape: `{"S": "..."}`, `{"N": "10"}`,
/// `{"BOOL": true}`. Numbers travel in decimal string form, as the wire
/// format requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    /// String value
    S(String),
    /// Numeric value (decimal string)
    N(String),
    /// Boolean value
    #[serde(rename = "BOOL")]
    Bool(bool),
}

/// One stored record: a flat map from attribute name to tagged value.
pub type StoreItem = HashMap<String, Attribute>;

impl Attribute {
    /// The string payload, if this is an `S` value.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Attribute::S(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_n(&self) -> Option<&str> {
        match self {
            Attribute::N(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Attribute::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let s = serde_json::to_value(Attribute::S("hello".to_string())).unwrap();
        assert_eq!(s, json!({"S": "hello"}));

        let n = serde_json::to_value(Attribute::N("42".to_string())).unwrap();
        assert_eq!(n, json!({"N": "42"}));

        let b = serde_json::to_value(Attribute::Bool(true)).unwrap();
        assert_eq!(b, json!({"BOOL": true}));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Attribute::S("a".to_string()).as_s(), Some("a"));
        assert_eq!(Attribute::S("a".to_string()).as_n(), None);
        assert_eq!(Attribute::N("7".to_string()).as_n(), Some("7"));
        assert_eq!(Attribute::Bool(false).as_bool(), Some(false));
        assert_eq!(Attribute::Bool(false).as_s(), None);
    }
}
