// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered `"key": value` pairs. Inserting an existing key replaces its value
/// but keeps the key where it first appeared.
pub type Params = IndexMap<String, Value>;

/// A literal as written in a statement.
///
/// Integers and floats stay distinct all the way through: `1` serializes as
/// `1` and `1.0` as `1.0`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
	Null,
	Boolean(bool),
	Int(i64),
	Float(f64),
	Text(String),
	Array(Vec<Value>),
	Object(Params),
}

impl Value {
	pub fn is_array(&self) -> bool {
		matches!(self, Value::Array(_))
	}
}

/// Canonical encoding used inside compiled filter expressions.
impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int(value) => write!(f, "{}", value),
			Value::Float(value) => f.write_str(&format_float(*value)),
			Value::Text(text) => f.write_str(&quote(text)?),
			Value::Array(items) => {
				f.write_str("[")?;
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", item)?;
				}
				f.write_str("]")
			}
			Value::Object(entries) => {
				f.write_str("{")?;
				for (idx, (key, value)) in entries.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", quote(key)?, value)?;
				}
				f.write_str("}")
			}
		}
	}
}

fn quote(text: &str) -> Result<String, std::fmt::Error> {
	serde_json::to_string(text).map_err(|_| std::fmt::Error)
}

pub fn format_float(f: f64) -> String {
	let s = f.to_string();
	if s.contains('.') || s.contains("inf") || s.contains("NaN") {
		s
	} else {
		format!("{s}.0")
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Boolean(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Text(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scalar_encoding() {
		assert_eq!(Value::Int(-2).to_string(), "-2");
		assert_eq!(Value::Float(5.0).to_string(), "5.0");
		assert_eq!(Value::Float(2.5).to_string(), "2.5");
		assert_eq!(Value::Boolean(true).to_string(), "true");
		assert_eq!(Value::Null.to_string(), "null");
	}

	#[test]
	fn test_text_is_double_quoted() {
		assert_eq!(Value::from("abc").to_string(), "\"abc\"");
		assert_eq!(Value::from("'").to_string(), "\"'\"");
		assert_eq!(Value::from("a\"b").to_string(), "\"a\\\"b\"");
		assert_eq!(Value::from("").to_string(), "\"\"");
	}

	#[test]
	fn test_array_encoding() {
		let value = Value::Array(vec![Value::Int(1), Value::Float(2.0), Value::Int(3)]);
		assert_eq!(value.to_string(), "[1, 2.0, 3]");
		assert_eq!(Value::Array(vec![]).to_string(), "[]");
	}

	#[test]
	fn test_object_encoding() {
		let mut entries = Params::new();
		entries.insert("k".to_string(), Value::Int(1));
		entries.insert("tags".to_string(), Value::Array(vec![Value::from("x")]));
		assert_eq!(Value::Object(entries).to_string(), "{\"k\": 1, \"tags\": [\"x\"]}");
	}

	#[test]
	fn test_serialize_keeps_number_kind() {
		let value = Value::Array(vec![Value::Int(1), Value::Float(1.0), Value::Null]);
		assert_eq!(serde_json::to_string(&value).unwrap(), "[1,1.0,null]");
	}

	#[test]
	fn test_params_later_key_wins_in_place() {
		let mut params = Params::new();
		params.insert("a".to_string(), Value::Int(1));
		params.insert("b".to_string(), Value::Int(2));
		params.insert("a".to_string(), Value::Int(3));
		let keys: Vec<_> = params.keys().cloned().collect();
		assert_eq!(keys, vec!["a", "b"]);
		assert_eq!(params["a"], Value::Int(3));
	}
}
