// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use excelize_marshal::{Error, FieldPath, FromValue, Result, ToValue, Value};

macro_rules! native_enum {
	(
		$(#[$meta:meta])*
		pub enum $name:ident {
			$(#[default] $default:ident = $default_value:literal,)?
			$($variant:ident = $value:literal),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
		#[repr(u8)]
		pub enum $name {
			$(#[default] $default = $default_value,)?
			$($variant = $value),*
		}

		impl $name {
			pub fn from_code(code: i64) -> Option<Self> {
				match code {
					$($default_value => Some($name::$default),)?
					$($value => Some($name::$variant),)*
					_ => None,
				}
			}

			pub const fn code(&self) -> u8 {
				*self as u8
			}
		}

		impl ToValue for $name {
			fn to_value(&self) -> Value {
				Value::Int(self.code() as i64)
			}
		}

		impl FromValue for $name {
			fn from_value(value: Value, path: &mut FieldPath) -> Result<Self> {
				let code = match value {
					Value::Int(code) => code,
					Value::None => 0,
					other => {
						return Err(Error::conversion(
							path,
							format!("expected {}, got {}", stringify!($name), other.kind()),
						));
					}
				};
				Self::from_code(code).ok_or_else(|| {
					Error::conversion(path, format!("{code} is not a valid {}", stringify!($name)))
				})
			}
		}
	};
}

native_enum! {
	/// Country code applied to number formats
	pub enum CultureName {
		#[default] Unknown = 0,
		EnUS = 1,
		JaJP = 2,
		KoKR = 3,
		ZhCN = 4,
		ZhTW = 5,
	}
}

native_enum! {
	/// Stored type of a cell value
	pub enum CellType {
		#[default] Unset = 0,
		Bool = 1,
		Date = 2,
		Error = 3,
		Formula = 4,
		InlineString = 5,
		Number = 6,
		SharedString = 7,
	}
}
