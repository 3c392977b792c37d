// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::types::Interface;

const TYPE_UNSET: i32 = 0;
const TYPE_INT: i32 = 1;
const TYPE_STRING: i32 = 2;
const TYPE_FLOAT: i32 = 3;
const TYPE_BOOL: i32 = 4;

/// A value written to a single cell
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
	/// Clears the cell
	#[default]
	None,
	Int(i64),
	Text(String),
	Float(f64),
	Bool(bool),
}

impl CellValue {
	/// The tagged record the native side expects
	pub fn to_interface(&self) -> Interface {
		let mut interface = Interface::default();
		match self {
			CellValue::None => interface.r#type = TYPE_UNSET,
			CellValue::Int(v) => {
				interface.r#type = TYPE_INT;
				// narrowed by the layout; out of range values fail conversion
				interface.integer = *v;
			}
			CellValue::Text(v) => {
				interface.r#type = TYPE_STRING;
				interface.string = v.clone();
			}
			CellValue::Float(v) => {
				interface.r#type = TYPE_FLOAT;
				interface.float64 = *v;
			}
			CellValue::Bool(v) => {
				interface.r#type = TYPE_BOOL;
				interface.boolean = *v;
			}
		}
		interface
	}

	pub fn from_interface(interface: &Interface) -> Self {
		match interface.r#type {
			TYPE_INT => CellValue::Int(interface.integer),
			TYPE_STRING => CellValue::Text(interface.string.clone()),
			TYPE_FLOAT => CellValue::Float(interface.float64),
			TYPE_BOOL => CellValue::Bool(interface.boolean),
			_ => CellValue::None,
		}
	}
}

impl From<i64> for CellValue {
	fn from(value: i64) -> Self {
		CellValue::Int(value)
	}
}

impl From<i32> for CellValue {
	fn from(value: i32) -> Self {
		CellValue::Int(value as i64)
	}
}

impl From<f64> for CellValue {
	fn from(value: f64) -> Self {
		CellValue::Float(value)
	}
}

impl From<bool> for CellValue {
	fn from(value: bool) -> Self {
		CellValue::Bool(value)
	}
}

impl From<&str> for CellValue {
	fn from(value: &str) -> Self {
		CellValue::Text(value.to_string())
	}
}

impl From<String> for CellValue {
	fn from(value: String) -> Self {
		CellValue::Text(value)
	}
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or_default()
	}
}
