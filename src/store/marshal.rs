use serde_json::{Map, Value};
use thiserror::Error;

use super::item::{Attribute, StoreItem};

/// Error raised when a field cannot be represented in the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    #[error("Unsupported type for attribute {field}")]
    UnsupportedType { field: String },
}

/// Convert a flat field map into tagged store attributes.
///
/// Strings become `S`, numbers `N` (decimal string form), booleans
/// `BOOL`. Null, arrays, and nested objects have no wire representation;
/// composite data must be serialized to a string by the caller first.
pub fn marshal(fields: &Map<String, Value>) -> Result<StoreItem, MarshalError> {
    let mut item = StoreItem::with_capacity(fields.len());

    for (name, value) in fields {
        let attribute = match value {
            Value::String(s) => Attribute::S(s.clone()),
            Value::Number(n) => Attribute::N(n.to_string()),
            Value::Bool(b) => Attribute::Bool(*b),
            _ => {
                return Err(MarshalError::UnsupportedType {
                    field: name.clone(),
                })
            }
        };
        item.insert(name.clone(), attribute);
    }

    Ok(item)
}
