// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Foreign to host conversion

use std::{
	ffi::{CStr, c_char, c_int, c_void},
	ptr, slice,
};

use excelize_abi::{Descriptor, Element, Field, FieldKind, Primitive};
use excelize_type::{Error, FieldPath, Result, Value};

/// Read a foreign block laid out per `descriptor` back into a host value
///
/// A null pointer yields `Ok(None)`. Bounded sequences always come back as a
/// list, text or bytes, empty when the length slot is zero or negative,
/// whatever the data pointer holds.
///
/// # Safety
///
/// `ptr` must be null or point to a readable block of `descriptor.size` bytes
/// whose pointers are null or valid per their declared kind.
pub unsafe fn decode(ptr: *const u8, descriptor: &Descriptor) -> Result<Option<Value>> {
	if ptr.is_null() {
		return Ok(None);
	}
	let mut decoder = Decoder {
		path: FieldPath::root(descriptor.name),
	};
	unsafe { decoder.block(ptr, descriptor) }.map(Some)
}

/// Read the single field at `index` of a non-null block
///
/// # Safety
///
/// Same contract as [`decode`]; `ptr` must not be null.
pub unsafe fn decode_field(ptr: *const u8, descriptor: &Descriptor, index: usize) -> Result<Value> {
	let mut decoder = Decoder {
		path: FieldPath::root(descriptor.name),
	};
	let Some(field) = descriptor.field(index) else {
		return Err(Error::conversion(
			&decoder.path,
			format!("record {} has no field {index}", descriptor.name),
		));
	};
	decoder.path.push_field(field.name);
	unsafe { decoder.field(ptr, field) }
}

struct Decoder {
	path: FieldPath,
}

impl Decoder {
	unsafe fn block(&mut self, base: *const u8, descriptor: &Descriptor) -> Result<Value> {
		let mut values = Vec::with_capacity(descriptor.fields.len());
		for field in &descriptor.fields {
			self.path.push_field(field.name);
			values.push(unsafe { self.field(base, field) }?);
			self.path.pop();
		}
		Ok(Value::Record(values))
	}

	unsafe fn field(&mut self, base: *const u8, field: &Field) -> Result<Value> {
		let slot = unsafe { base.add(field.offset) };

		match field.kind {
			FieldKind::Scalar(primitive) => unsafe { self.scalar(slot, primitive) },
			FieldKind::Pointer(primitive) => {
				let ptr = unsafe { read_ptr(slot) };
				if ptr.is_null() {
					return Ok(Value::None);
				}
				unsafe { self.scalar(ptr, primitive) }
			}
			FieldKind::CString => unsafe { self.cstring(read_ptr(slot)) },
			FieldKind::Struct(descriptor) => unsafe { self.block(slot, descriptor) },
			FieldKind::StructPointer(descriptor) => {
				let ptr = unsafe { read_ptr(slot) };
				if ptr.is_null() {
					return Ok(Value::None);
				}
				unsafe { self.block(ptr, descriptor) }
			}
			FieldKind::Sequence(element) => {
				let len = unsafe { ptr::read_unaligned(slot as *const c_int) };
				let data = unsafe { read_ptr(base.add(field.data_offset)) };
				unsafe { self.sequence(element, len, data) }
			}
		}
	}

	unsafe fn sequence(&mut self, element: Element, len: c_int, data: *const u8) -> Result<Value> {
		let len = if data.is_null() {
			0
		} else {
			usize::try_from(len).unwrap_or(0)
		};

		match element {
			Element::Byte => {
				let bytes = if len == 0 {
					Vec::new()
				} else {
					unsafe { slice::from_raw_parts(data, len) }.to_vec()
				};
				Ok(Value::Bytes(bytes))
			}
			Element::Char => {
				if len == 0 {
					return Ok(Value::Text(String::new()));
				}
				let bytes = unsafe { slice::from_raw_parts(data, len) };
				match std::str::from_utf8(bytes) {
					Ok(text) => Ok(Value::Text(text.to_owned())),
					Err(err) => Err(Error::conversion(&self.path, format!("invalid UTF-8: {err}"))),
				}
			}
			element => {
				let stride = element.stride();
				let mut items = Vec::with_capacity(len);
				for index in 0..len {
					self.path.push_index(index);
					let slot = unsafe { data.add(index * stride) };
					items.push(unsafe { self.element(slot, element) }?);
					self.path.pop();
				}
				Ok(Value::List(items))
			}
		}
	}

	unsafe fn element(&mut self, slot: *const u8, element: Element) -> Result<Value> {
		match element {
			Element::Scalar(primitive) => unsafe { self.scalar(slot, primitive) },
			Element::Pointer(primitive) => {
				let ptr = unsafe { read_ptr(slot) };
				if ptr.is_null() {
					return Ok(Value::None);
				}
				unsafe { self.scalar(ptr, primitive) }
			}
			Element::CString => unsafe { self.cstring(read_ptr(slot)) },
			Element::Record(descriptor) => {
				let ptr = unsafe { read_ptr(slot) };
				if ptr.is_null() {
					return Ok(Value::None);
				}
				unsafe { self.block(ptr, descriptor) }
			}
			Element::Struct(descriptor) => unsafe { self.block(slot, descriptor) },
			Element::Byte | Element::Char => Err(Error::conversion(&self.path, "raw sequences are read whole")),
		}
	}

	unsafe fn cstring(&self, ptr: *const u8) -> Result<Value> {
		if ptr.is_null() {
			return Ok(Value::None);
		}
		let text = unsafe { CStr::from_ptr(ptr as *const c_char) };
		match text.to_str() {
			Ok(text) => Ok(Value::Text(text.to_owned())),
			Err(err) => Err(Error::conversion(&self.path, format!("invalid UTF-8: {err}"))),
		}
	}

	unsafe fn scalar(&self, slot: *const u8, primitive: Primitive) -> Result<Value> {
		let value = unsafe {
			match primitive {
				Primitive::Bool => Value::Bool(ptr::read_unaligned(slot) != 0),
				Primitive::I8 => Value::Int(ptr::read_unaligned(slot as *const i8) as i64),
				Primitive::I16 => Value::Int(ptr::read_unaligned(slot as *const i16) as i64),
				Primitive::I32 => Value::Int(ptr::read_unaligned(slot as *const i32) as i64),
				Primitive::I64 => Value::Int(ptr::read_unaligned(slot as *const i64)),
				Primitive::U8 => Value::Int(ptr::read_unaligned(slot) as i64),
				Primitive::U16 => Value::Int(ptr::read_unaligned(slot as *const u16) as i64),
				Primitive::U32 => Value::Int(ptr::read_unaligned(slot as *const u32) as i64),
				Primitive::U64 => {
					let v = ptr::read_unaligned(slot as *const u64);
					match i64::try_from(v) {
						Ok(v) => Value::Int(v),
						Err(_) => {
							return Err(Error::conversion(&self.path, format!("{v} does not fit a host integer")));
						}
					}
				}
				Primitive::F32 => Value::Float(ptr::read_unaligned(slot as *const f32) as f64),
				Primitive::F64 => Value::Float(ptr::read_unaligned(slot as *const f64)),
			}
		};
		Ok(value)
	}
}

unsafe fn read_ptr(slot: *const u8) -> *const u8 {
	unsafe { ptr::read_unaligned(slot as *const *const c_void) as *const u8 }
}
