// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Value type system for graph properties
//!
//! Property values form a closed tagged variant: scalar kinds, byte
//! sequences, and homogeneous lists thereof. There is no null variant;
//! an absent key reads as `None`. Anything outside the closed set is
//! rejected with `InvalidPropertyValue` when written.

use crate::error::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Value types for vertex and edge properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Bytes(Vec<u8>),
    List(Vec<Value>),
}

impl Value {
    /// Extract as string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extract as integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract as float if possible
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Extract as boolean if possible
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract as byte sequence if possible
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Extract as list if possible
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Boolean(_) => "Boolean",
            Value::Bytes(_) => "Bytes",
            Value::List(_) => "List",
        }
    }

    /// Validate that this value is acceptable as a property value.
    ///
    /// Lists must be homogeneous (all items of one scalar/bytes kind) and
    /// must not nest.
    pub fn validate(&self) -> GraphResult<()> {
        if let Value::List(items) = self {
            let mut kind: Option<&'static str> = None;
            for item in items {
                if matches!(item, Value::List(_)) {
                    return Err(GraphError::InvalidPropertyValue(
                        "nested lists are not supported".to_string(),
                    ));
                }
                match kind {
                    None => kind = Some(item.type_name()),
                    Some(k) if k != item.type_name() => {
                        return Err(GraphError::InvalidPropertyValue(format!(
                            "heterogeneous list: found {} after {}",
                            item.type_name(),
                            k
                        )));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    /// Compare two values of compatible kinds.
    ///
    /// Integers and floats compare numerically across kinds; strings
    /// compare lexicographically. Other combinations have no ordering.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Integer(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

// Convenience conversions
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<Vec<Value>> for Value {
    fn from(list: Vec<Value>) -> Self {
        Value::List(list)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = GraphError;

    fn try_from(json: serde_json::Value) -> GraphResult<Self> {
        let value = match json {
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    return Err(GraphError::InvalidPropertyValue(format!(
                        "unrepresentable number: {}",
                        n
                    )));
                }
            }
            serde_json::Value::Array(items) => {
                let list = items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<GraphResult<Vec<Value>>>()?;
                let value = Value::List(list);
                value.validate()?;
                value
            }
            serde_json::Value::Null => {
                return Err(GraphError::InvalidPropertyValue(
                    "null is not a valid property value".to_string(),
                ));
            }
            serde_json::Value::Object(_) => {
                return Err(GraphError::InvalidPropertyValue(
                    "objects are not valid property values".to_string(),
                ));
            }
        };
        Ok(value)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => serde_json::Value::String(s),
            Value::Integer(i) => serde_json::Value::from(i),
            Value::Float(f) => {
                serde_json::Number::from_f64(f).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::Bytes(bytes) => {
                serde_json::Value::Array(bytes.into_iter().map(serde_json::Value::from).collect())
            }
            Value::List(list) => {
                serde_json::Value::Array(list.into_iter().map(serde_json::Value::from).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from("hello").as_string(), Some("hello"));
        assert_eq!(Value::from(42i64).as_integer(), Some(42));
        assert_eq!(Value::from(3.5).as_float(), Some(3.5));
        assert_eq!(Value::from(true).as_boolean(), Some(true));
        assert_eq!(Value::from(vec![1u8, 2, 3]).as_bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(Value::from("hello").as_integer(), None);
    }

    #[test]
    fn test_homogeneous_list_is_valid() {
        let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
        assert!(list.validate().is_ok());
    }

    #[test]
    fn test_heterogeneous_list_is_rejected() {
        let list = Value::List(vec![Value::Integer(1), Value::from("two")]);
        assert!(matches!(
            list.validate(),
            Err(GraphError::InvalidPropertyValue(_))
        ));
    }

    #[test]
    fn test_nested_list_is_rejected() {
        let list = Value::List(vec![Value::List(vec![Value::Integer(1)])]);
        assert!(matches!(
            list.validate(),
            Err(GraphError::InvalidPropertyValue(_))
        ));
    }

    #[test]
    fn test_compare_numeric_across_kinds() {
        assert_eq!(
            Value::Integer(2).compare(&Value::Float(2.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::from("b").compare(&Value::from("a")),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::from(true).compare(&Value::Integer(1)), None);
    }

    #[test]
    fn test_json_round_trip() {
        let json = serde_json::json!(["a", "b"]);
        let value = Value::try_from(json).unwrap();
        assert_eq!(
            value,
            Value::List(vec![Value::from("a"), Value::from("b")])
        );

        assert!(Value::try_from(serde_json::Value::Null).is_err());
        assert!(Value::try_from(serde_json::json!({"k": 1})).is_err());
        assert!(Value::try_from(serde_json::json!([1, "mixed"])).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("x").to_string(), "\"x\"");
        assert_eq!(
            Value::List(vec![Value::Integer(1), Value::Integer(2)]).to_string(),
            "[1, 2]"
        );
    }
}
