// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Typed host records
//!
//! Domain structs describe their foreign layout once through [`HostRecord`]
//! and convert to and from the positional [`Value`] model. The engine itself
//! never sees the struct; it walks the value against the descriptor.

use std::ptr::NonNull;

use excelize_abi::Descriptor;
use excelize_type::{Error, FieldPath, Result, Value};

use crate::{Arena, decode, encode};

pub trait ToValue {
	fn to_value(&self) -> Value;
}

pub trait FromValue: Sized {
	/// Rebuild `Self` from a decoded value. `path` names the location of
	/// `value` for error reporting.
	fn from_value(value: Value, path: &mut FieldPath) -> Result<Self>;
}

/// A host struct with a fixed foreign layout
///
/// `Default` is the all-absent record, which is what an inline block of
/// zeros or a null pointer converts to.
pub trait HostRecord: ToValue + FromValue + Default {
	fn descriptor() -> &'static Descriptor;
}

/// Encode a typed record into `arena`
pub fn encode_record<R: HostRecord>(arena: &mut Arena, record: &R) -> Result<NonNull<u8>> {
	encode(arena, &record.to_value(), R::descriptor())
}

/// Decode a typed record; null yields `Ok(None)`
///
/// # Safety
///
/// See [`decode`](crate::decode::decode).
pub unsafe fn decode_record<R: HostRecord>(ptr: *const u8) -> Result<Option<R>> {
	let descriptor = R::descriptor();
	match unsafe { decode(ptr, descriptor) }? {
		Some(value) => R::from_value(value, &mut FieldPath::root(descriptor.name)).map(Some),
		None => Ok(None),
	}
}

/// Unwrap the positional fields of a record value of `name`
pub fn expect_record(value: Value, path: &FieldPath, name: &str, count: usize) -> Result<Vec<Value>> {
	match value {
		Value::Record(values) if values.len() == count => Ok(values),
		Value::Record(values) => Err(Error::conversion(
			path,
			format!("record {name} has {count} fields, got {} values", values.len()),
		)),
		other => Err(Error::conversion(path, format!("expected record {name}, got {}", other.kind()))),
	}
}

/// Field name as written in diagnostics, without a raw identifier prefix
pub fn field_name(name: &'static str) -> &'static str {
	name.strip_prefix("r#").unwrap_or(name)
}

/// Raw binary payload, distinct from a list of small integers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bytes(pub Vec<u8>);

impl From<Vec<u8>> for Bytes {
	fn from(value: Vec<u8>) -> Self {
		Bytes(value)
	}
}

impl From<&[u8]> for Bytes {
	fn from(value: &[u8]) -> Self {
		Bytes(value.to_vec())
	}
}

impl ToValue for Bytes {
	fn to_value(&self) -> Value {
		Value::Bytes(self.0.clone())
	}
}

impl FromValue for Bytes {
	fn from_value(value: Value, path: &mut FieldPath) -> Result<Self> {
		match value {
			Value::Bytes(bytes) => Ok(Bytes(bytes)),
			Value::None => Ok(Bytes::default()),
			other => Err(Error::conversion(path, format!("expected bytes, got {}", other.kind()))),
		}
	}
}

impl ToValue for Value {
	fn to_value(&self) -> Value {
		self.clone()
	}
}

impl FromValue for Value {
	fn from_value(value: Value, _path: &mut FieldPath) -> Result<Self> {
		Ok(value)
	}
}

impl ToValue for bool {
	fn to_value(&self) -> Value {
		Value::Bool(*self)
	}
}

impl FromValue for bool {
	fn from_value(value: Value, path: &mut FieldPath) -> Result<Self> {
		match value {
			Value::Bool(v) => Ok(v),
			Value::Int(v) => Ok(v != 0),
			Value::None => Ok(false),
			other => Err(Error::conversion(path, format!("expected bool, got {}", other.kind()))),
		}
	}
}

macro_rules! impl_int {
	($($t:ty),*) => {
		$(
			impl ToValue for $t {
				fn to_value(&self) -> Value {
					Value::Int(*self as i64)
				}
			}

			impl FromValue for $t {
				fn from_value(value: Value, path: &mut FieldPath) -> Result<Self> {
					match value {
						Value::Int(v) => <$t>::try_from(v).map_err(|_| {
							Error::conversion(path, format!("{v} is out of range for {}", stringify!($t)))
						}),
						Value::Bool(v) => Ok(v as $t),
						Value::None => Ok(0),
						other => Err(Error::conversion(
							path,
							format!("expected {}, got {}", stringify!($t), other.kind()),
						)),
					}
				}
			}
		)*
	};
}

impl_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_float {
	($($t:ty),*) => {
		$(
			impl ToValue for $t {
				fn to_value(&self) -> Value {
					Value::Float(*self as f64)
				}
			}

			impl FromValue for $t {
				fn from_value(value: Value, path: &mut FieldPath) -> Result<Self> {
					match value {
						Value::Float(v) => Ok(v as $t),
						Value::Int(v) => Ok(v as $t),
						Value::None => Ok(0.0),
						other => Err(Error::conversion(
							path,
							format!("expected {}, got {}", stringify!($t), other.kind()),
						)),
					}
				}
			}
		)*
	};
}

impl_float!(f32, f64);

impl ToValue for String {
	fn to_value(&self) -> Value {
		Value::Text(self.clone())
	}
}

impl FromValue for String {
	fn from_value(value: Value, path: &mut FieldPath) -> Result<Self> {
		match value {
			Value::Text(text) => Ok(text),
			Value::None => Ok(String::new()),
			other => Err(Error::conversion(path, format!("expected text, got {}", other.kind()))),
		}
	}
}

impl<T: ToValue> ToValue for Option<T> {
	fn to_value(&self) -> Value {
		match self {
			Some(value) => value.to_value(),
			None => Value::None,
		}
	}
}

impl<T: FromValue> FromValue for Option<T> {
	fn from_value(value: Value, path: &mut FieldPath) -> Result<Self> {
		match value {
			Value::None => Ok(None),
			value => T::from_value(value, path).map(Some),
		}
	}
}

impl<T: ToValue> ToValue for Vec<T> {
	fn to_value(&self) -> Value {
		Value::List(self.iter().map(ToValue::to_value).collect())
	}
}

impl<T: FromValue> FromValue for Vec<T> {
	fn from_value(value: Value, path: &mut FieldPath) -> Result<Self> {
		match value {
			Value::List(items) => {
				let mut result = Vec::with_capacity(items.len());
				for (index, item) in items.into_iter().enumerate() {
					path.push_index(index);
					result.push(T::from_value(item, path)?);
					path.pop();
				}
				Ok(result)
			}
			Value::None => Ok(Vec::new()),
			other => Err(Error::conversion(path, format!("expected list, got {}", other.kind()))),
		}
	}
}
