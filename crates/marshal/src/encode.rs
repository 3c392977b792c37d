// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Host to foreign conversion

use std::{
	ffi::{c_int, c_void},
	ptr::{self, NonNull},
};

use excelize_abi::{Descriptor, Element, Field, FieldKind, Primitive};
use excelize_type::{Error, FieldPath, Result, Value};

use crate::arena::Arena;

/// Convert `value` into a block laid out per `descriptor`
///
/// The returned pointer and every nested block, array and string it refers
/// to are owned by `arena`. The descriptor decides the width of every
/// scalar: an integer supplied for a float field is written as a float.
/// A value whose shape does not match fails with [`Error::Conversion`]
/// naming the field path. An absent root is rejected as well; use
/// [`encode_optional`] where null stands for an absent record.
pub fn encode(arena: &mut Arena, value: &Value, descriptor: &Descriptor) -> Result<NonNull<u8>> {
	let mut encoder = Encoder {
		arena,
		path: FieldPath::root(descriptor.name),
	};
	encoder.block(value, descriptor)
}

/// [`encode`], mapping an absent root to null without allocating
pub fn encode_optional(arena: &mut Arena, value: &Value, descriptor: &Descriptor) -> Result<*mut u8> {
	match value {
		Value::None => Ok(ptr::null_mut()),
		value => encode(arena, value, descriptor).map(NonNull::as_ptr),
	}
}

struct Encoder<'a> {
	arena: &'a mut Arena,
	path: FieldPath,
}

impl Encoder<'_> {
	fn block(&mut self, value: &Value, descriptor: &Descriptor) -> Result<NonNull<u8>> {
		let block = self.arena.alloc(descriptor.size, descriptor.alignment);
		self.fields(block.as_ptr(), value, descriptor)?;
		Ok(block)
	}

	fn fields(&mut self, base: *mut u8, value: &Value, descriptor: &Descriptor) -> Result<()> {
		let values = match value {
			Value::Record(values) => values,
			other => {
				return Err(Error::conversion(
					&self.path,
					format!("expected record {}, got {}", descriptor.name, other.kind()),
				));
			}
		};

		if values.len() != descriptor.fields.len() {
			return Err(Error::conversion(
				&self.path,
				format!(
					"record {} has {} fields, got {} values",
					descriptor.name,
					descriptor.fields.len(),
					values.len()
				),
			));
		}

		for (field, value) in descriptor.fields.iter().zip(values) {
			self.path.push_field(field.name);
			self.field(base, field, value)?;
			self.path.pop();
		}

		Ok(())
	}

	fn field(&mut self, base: *mut u8, field: &Field, value: &Value) -> Result<()> {
		let slot = unsafe { base.add(field.offset) };

		match field.kind {
			FieldKind::Scalar(primitive) => self.scalar(slot, primitive, value),
			FieldKind::Pointer(primitive) => {
				let ptr = self.boxed_scalar(primitive, value)?;
				unsafe { write_ptr(slot, ptr) };
				Ok(())
			}
			FieldKind::CString => {
				let ptr = self.cstring(value)?;
				unsafe { write_ptr(slot, ptr) };
				Ok(())
			}
			FieldKind::Struct(descriptor) => match value {
				// the block is zeroed already
				Value::None => Ok(()),
				value => self.fields(slot, value, descriptor),
			},
			FieldKind::StructPointer(descriptor) => {
				let ptr = match value {
					Value::None => ptr::null_mut(),
					value => self.block(value, descriptor)?.as_ptr(),
				};
				unsafe { write_ptr(slot, ptr) };
				Ok(())
			}
			FieldKind::Sequence(element) => {
				let (len, data) = self.sequence(element, value)?;
				unsafe {
					ptr::write_unaligned(slot as *mut c_int, len);
					write_ptr(base.add(field.data_offset), data);
				}
				Ok(())
			}
		}
	}

	/// Returns the length and data pointer of a bounded sequence. Absent and
	/// empty sequences are `(0, null)`; nothing is allocated for them.
	fn sequence(&mut self, element: Element, value: &Value) -> Result<(c_int, *mut u8)> {
		match (element, value) {
			(_, Value::None) => Ok((0, ptr::null_mut())),
			(Element::Byte, Value::Bytes(bytes)) => self.raw(bytes),
			(Element::Char, Value::Text(text)) => self.raw(text.as_bytes()),
			(Element::Byte | Element::Char, other) => Err(Error::conversion(
				&self.path,
				format!("expected {}, got {}", if matches!(element, Element::Byte) { "bytes" } else { "text" }, other.kind()),
			)),
			(element, Value::List(items)) => {
				if items.is_empty() {
					return Ok((0, ptr::null_mut()));
				}
				let len = self.len(items.len())?;
				let stride = element.stride();
				let data = self.arena.alloc(stride * items.len(), element.alignment()).as_ptr();

				for (index, item) in items.iter().enumerate() {
					self.path.push_index(index);
					let slot = unsafe { data.add(index * stride) };
					self.element(slot, element, item)?;
					self.path.pop();
				}

				Ok((len, data))
			}
			(_, other) => Err(Error::conversion(&self.path, format!("expected list, got {}", other.kind()))),
		}
	}

	fn element(&mut self, slot: *mut u8, element: Element, value: &Value) -> Result<()> {
		let ptr = match element {
			Element::Scalar(primitive) => return self.scalar(slot, primitive, value),
			Element::Pointer(primitive) => self.boxed_scalar(primitive, value)?,
			Element::CString => self.cstring(value)?,
			Element::Record(descriptor) => match value {
				Value::None => ptr::null_mut(),
				value => self.block(value, descriptor)?.as_ptr(),
			},
			Element::Struct(descriptor) => {
				return match value {
					Value::None => Ok(()),
					value => self.fields(slot, value, descriptor),
				};
			}
			Element::Byte | Element::Char => {
				return Err(Error::conversion(&self.path, "raw sequences are copied whole"));
			}
		};
		unsafe { write_ptr(slot, ptr) };
		Ok(())
	}

	fn raw(&mut self, bytes: &[u8]) -> Result<(c_int, *mut u8)> {
		let len = self.len(bytes.len())?;
		Ok((len, self.arena.copy_bytes(bytes)))
	}

	fn len(&self, len: usize) -> Result<c_int> {
		c_int::try_from(len)
			.map_err(|_| Error::conversion(&self.path, format!("sequence of {len} elements exceeds the length slot")))
	}

	fn cstring(&mut self, value: &Value) -> Result<*mut u8> {
		match value {
			Value::None => Ok(ptr::null_mut()),
			Value::Text(text) => match self.arena.copy_cstr(text) {
				Some(ptr) => Ok(ptr as *mut u8),
				None => Err(Error::conversion(&self.path, "text contains an interior NUL byte")),
			},
			other => Err(Error::conversion(&self.path, format!("expected text, got {}", other.kind()))),
		}
	}

	fn boxed_scalar(&mut self, primitive: Primitive, value: &Value) -> Result<*mut u8> {
		if value.is_none() {
			return Ok(ptr::null_mut());
		}
		let slot = self.arena.alloc(primitive.size(), primitive.alignment()).as_ptr();
		self.scalar(slot, primitive, value)?;
		Ok(slot)
	}

	fn scalar(&self, slot: *mut u8, primitive: Primitive, value: &Value) -> Result<()> {
		if primitive.is_float() {
			let v = match value {
				Value::Float(v) => *v,
				Value::Int(v) => *v as f64,
				Value::None => 0.0,
				other => {
					return Err(Error::conversion(
						&self.path,
						format!("expected {primitive}, got {}", other.kind()),
					));
				}
			};
			unsafe {
				match primitive {
					Primitive::F32 => ptr::write_unaligned(slot as *mut f32, v as f32),
					_ => ptr::write_unaligned(slot as *mut f64, v),
				}
			}
			return Ok(());
		}

		let v: i128 = match (primitive, value) {
			(Primitive::Bool, Value::Int(v)) => (*v != 0) as i128,
			(_, Value::Int(v)) => *v as i128,
			(_, Value::Bool(v)) => *v as i128,
			(_, Value::None) => 0,
			(_, other) => {
				return Err(Error::conversion(&self.path, format!("expected {primitive}, got {}", other.kind())));
			}
		};

		let (min, max) = primitive.int_range();
		if v < min || v > max {
			return Err(Error::conversion(&self.path, format!("{v} is out of range for {primitive}")));
		}

		unsafe {
			match primitive {
				Primitive::Bool | Primitive::U8 => ptr::write_unaligned(slot, v as u8),
				Primitive::I8 => ptr::write_unaligned(slot as *mut i8, v as i8),
				Primitive::I16 => ptr::write_unaligned(slot as *mut i16, v as i16),
				Primitive::U16 => ptr::write_unaligned(slot as *mut u16, v as u16),
				Primitive::I32 => ptr::write_unaligned(slot as *mut i32, v as i32),
				Primitive::U32 => ptr::write_unaligned(slot as *mut u32, v as u32),
				Primitive::I64 => ptr::write_unaligned(slot as *mut i64, v as i64),
				Primitive::U64 => ptr::write_unaligned(slot as *mut u64, v as u64),
				Primitive::F32 | Primitive::F64 => {}
			}
		}
		Ok(())
	}
}

unsafe fn write_ptr(slot: *mut u8, ptr: *mut u8) {
	unsafe { ptr::write_unaligned(slot as *mut *mut c_void, ptr as *mut c_void) }
}
