// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::{
	fmt::{self, Display, Formatter},
	mem::{align_of, size_of},
};

/// Fixed-width scalar kinds a foreign field can hold
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
	/// Boolean stored as a one byte integer (0 or 1)
	Bool = 0,
	I8 = 1,
	I16 = 2,
	I32 = 3,
	I64 = 4,
	/// Fixed byte
	U8 = 5,
	U16 = 6,
	U32 = 7,
	U64 = 8,
	F32 = 9,
	F64 = 10,
}

impl Primitive {
	pub const fn size(&self) -> usize {
		match self {
			Primitive::Bool => size_of::<bool>(),
			Primitive::I8 => size_of::<i8>(),
			Primitive::I16 => size_of::<i16>(),
			Primitive::I32 => size_of::<i32>(),
			Primitive::I64 => size_of::<i64>(),
			Primitive::U8 => size_of::<u8>(),
			Primitive::U16 => size_of::<u16>(),
			Primitive::U32 => size_of::<u32>(),
			Primitive::U64 => size_of::<u64>(),
			Primitive::F32 => size_of::<f32>(),
			Primitive::F64 => size_of::<f64>(),
		}
	}

	pub const fn alignment(&self) -> usize {
		match self {
			Primitive::Bool => align_of::<bool>(),
			Primitive::I8 => align_of::<i8>(),
			Primitive::I16 => align_of::<i16>(),
			Primitive::I32 => align_of::<i32>(),
			Primitive::I64 => align_of::<i64>(),
			Primitive::U8 => align_of::<u8>(),
			Primitive::U16 => align_of::<u16>(),
			Primitive::U32 => align_of::<u32>(),
			Primitive::U64 => align_of::<u64>(),
			Primitive::F32 => align_of::<f32>(),
			Primitive::F64 => align_of::<f64>(),
		}
	}

	pub const fn is_float(&self) -> bool {
		matches!(self, Primitive::F32 | Primitive::F64)
	}

	pub const fn is_signed(&self) -> bool {
		matches!(self, Primitive::I8 | Primitive::I16 | Primitive::I32 | Primitive::I64)
	}

	/// Inclusive range an integer must fall in to be written at this width
	pub const fn int_range(&self) -> (i128, i128) {
		match self {
			Primitive::Bool => (0, 1),
			Primitive::I8 => (i8::MIN as i128, i8::MAX as i128),
			Primitive::I16 => (i16::MIN as i128, i16::MAX as i128),
			Primitive::I32 => (i32::MIN as i128, i32::MAX as i128),
			Primitive::I64 => (i64::MIN as i128, i64::MAX as i128),
			Primitive::U8 => (0, u8::MAX as i128),
			Primitive::U16 => (0, u16::MAX as i128),
			Primitive::U32 => (0, u32::MAX as i128),
			Primitive::U64 => (0, u64::MAX as i128),
			Primitive::F32 | Primitive::F64 => (i128::MIN, i128::MAX),
		}
	}
}

impl Display for Primitive {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Primitive::Bool => f.write_str("bool"),
			Primitive::I8 => f.write_str("i8"),
			Primitive::I16 => f.write_str("i16"),
			Primitive::I32 => f.write_str("i32"),
			Primitive::I64 => f.write_str("i64"),
			Primitive::U8 => f.write_str("u8"),
			Primitive::U16 => f.write_str("u16"),
			Primitive::U32 => f.write_str("u32"),
			Primitive::U64 => f.write_str("u64"),
			Primitive::F32 => f.write_str("f32"),
			Primitive::F64 => f.write_str("f64"),
		}
	}
}
