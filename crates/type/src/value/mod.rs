// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A host value, shaped like the foreign block it converts to.
///
/// Records are positional: the n-th entry of a [`Value::Record`] belongs to the
/// n-th field of the descriptor it is converted against. Field names never
/// take part in the correlation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Absent value: an unset optional, a null pointer, an empty slot
	None,
	/// A boolean: true or false.
	Bool(bool),
	/// Any integer, narrowed to the declared width on conversion
	Int(i64),
	/// Any floating point number, narrowed to the declared width on conversion
	Float(f64),
	/// UTF-8 text
	Text(String),
	/// Raw bytes
	Bytes(Vec<u8>),
	/// An ordered sequence of values
	List(Vec<Value>),
	/// An ordered tuple of field values
	Record(Vec<Value>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
	None,
	Bool,
	Int,
	Float,
	Text,
	Bytes,
	List,
	Record,
}

impl Display for ValueKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ValueKind::None => f.write_str("none"),
			ValueKind::Bool => f.write_str("bool"),
			ValueKind::Int => f.write_str("int"),
			ValueKind::Float => f.write_str("float"),
			ValueKind::Text => f.write_str("text"),
			ValueKind::Bytes => f.write_str("bytes"),
			ValueKind::List => f.write_str("list"),
			ValueKind::Record => f.write_str("record"),
		}
	}
}

impl Value {
	pub fn none() -> Self {
		Value::None
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Bool(v.into())
	}

	pub fn int(v: impl Into<i64>) -> Self {
		Value::Int(v.into())
	}

	pub fn float(v: impl Into<f64>) -> Self {
		Value::Float(v.into())
	}

	pub fn text(v: impl Into<String>) -> Self {
		Value::Text(v.into())
	}

	pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
		Value::Bytes(v.into())
	}

	pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
		Value::List(values.into_iter().collect())
	}

	pub fn record(fields: impl IntoIterator<Item = Value>) -> Self {
		Value::Record(fields.into_iter().collect())
	}

	pub fn kind(&self) -> ValueKind {
		match self {
			Value::None => ValueKind::None,
			Value::Bool(_) => ValueKind::Bool,
			Value::Int(_) => ValueKind::Int,
			Value::Float(_) => ValueKind::Float,
			Value::Text(_) => ValueKind::Text,
			Value::Bytes(_) => ValueKind::Bytes,
			Value::List(_) => ValueKind::List,
			Value::Record(_) => ValueKind::Record,
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Value::None)
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_float(&self) -> Option<f64> {
		match self {
			Value::Float(v) => Some(*v),
			Value::Int(v) => Some(*v as f64),
			_ => None,
		}
	}

	pub fn as_text(&self) -> Option<&str> {
		match self {
			Value::Text(v) => Some(v.as_str()),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::None => f.write_str("none"),
			Value::Bool(v) => Display::fmt(v, f),
			Value::Int(v) => Display::fmt(v, f),
			Value::Float(v) => Display::fmt(v, f),
			Value::Text(v) => write!(f, "{v:?}"),
			Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
			Value::List(values) => {
				f.write_str("[")?;
				for (i, value) in values.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str("]")
			}
			Value::Record(fields) => {
				f.write_str("(")?;
				for (i, value) in fields.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str(")")
			}
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int(v as i64)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Text(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Text(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		match v {
			Some(v) => v.into(),
			None => Value::None,
		}
	}
}
