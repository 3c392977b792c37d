// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::fmt::{self, Debug, Formatter};

use super::{LEN_ALIGN, LEN_SIZE, PTR_ALIGN, PTR_SIZE, align_up, primitive::Primitive};

/// How one field of a foreign block is laid out
#[derive(Clone, Copy)]
pub enum FieldKind {
	/// Scalar written inline at its declared width
	Scalar(Primitive),
	/// Optional scalar behind a pointer; null means absent
	Pointer(Primitive),
	/// Pointer to NUL-terminated UTF-8; null means absent
	CString,
	/// Nested record inlined into the parent block
	Struct(&'static Descriptor),
	/// Nested record behind a pointer; null means absent
	StructPointer(&'static Descriptor),
	/// Bounded sequence: a `c_int` length slot followed by a data pointer
	Sequence(Element),
}

/// Element layout of a bounded sequence
#[derive(Clone, Copy)]
pub enum Element {
	/// Contiguous array of scalars
	Scalar(Primitive),
	/// Array of pointers to scalars; null elements are absent
	Pointer(Primitive),
	/// Array of `char*`
	CString,
	/// Array of pointers to independently allocated blocks
	Record(&'static Descriptor),
	/// Contiguous array of inline blocks
	Struct(&'static Descriptor),
	/// Raw bytes, host side `Bytes`
	Byte,
	/// UTF-8 bytes without terminator, host side `Text`
	Char,
}

impl FieldKind {
	pub const fn scalar(primitive: Primitive) -> Self {
		FieldKind::Scalar(primitive)
	}

	pub const fn pointer(primitive: Primitive) -> Self {
		FieldKind::Pointer(primitive)
	}

	pub const fn sequence(element: Element) -> Self {
		FieldKind::Sequence(element)
	}

	/// Size and alignment of the slot this kind occupies. Sequences occupy
	/// two slots and are handled by [`Descriptor::new`].
	fn slot(&self) -> (usize, usize) {
		match self {
			FieldKind::Scalar(primitive) => (primitive.size(), primitive.alignment()),
			FieldKind::Pointer(_) | FieldKind::CString | FieldKind::StructPointer(_) => (PTR_SIZE, PTR_ALIGN),
			FieldKind::Struct(descriptor) => (descriptor.size, descriptor.alignment),
			FieldKind::Sequence(_) => (PTR_SIZE, PTR_ALIGN),
		}
	}
}

impl Element {
	/// Width of one array element
	pub fn stride(&self) -> usize {
		match self {
			Element::Scalar(primitive) => primitive.size(),
			Element::Pointer(_) | Element::CString | Element::Record(_) => PTR_SIZE,
			Element::Struct(descriptor) => descriptor.size,
			Element::Byte | Element::Char => 1,
		}
	}

	pub fn alignment(&self) -> usize {
		match self {
			Element::Scalar(primitive) => primitive.alignment(),
			Element::Pointer(_) | Element::CString | Element::Record(_) => PTR_ALIGN,
			Element::Struct(descriptor) => descriptor.alignment,
			Element::Byte | Element::Char => 1,
		}
	}
}

impl Debug for FieldKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			FieldKind::Scalar(primitive) => write!(f, "Scalar({primitive})"),
			FieldKind::Pointer(primitive) => write!(f, "Pointer({primitive})"),
			FieldKind::CString => f.write_str("CString"),
			FieldKind::Struct(descriptor) => write!(f, "Struct({})", descriptor.name),
			FieldKind::StructPointer(descriptor) => write!(f, "StructPointer({})", descriptor.name),
			FieldKind::Sequence(element) => write!(f, "Sequence({element:?})"),
		}
	}
}

impl Debug for Element {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Element::Scalar(primitive) => write!(f, "Scalar({primitive})"),
			Element::Pointer(primitive) => write!(f, "Pointer({primitive})"),
			Element::CString => f.write_str("CString"),
			Element::Record(descriptor) => write!(f, "Record({})", descriptor.name),
			Element::Struct(descriptor) => write!(f, "Struct({})", descriptor.name),
			Element::Byte => f.write_str("Byte"),
			Element::Char => f.write_str("Char"),
		}
	}
}

/// One field of a foreign block
#[derive(Debug, Clone, Copy)]
pub struct Field {
	/// Name used in diagnostics only; position is the wire contract
	pub name: &'static str,
	pub kind: FieldKind,
	/// Byte offset of the field (the length slot for sequences)
	pub offset: usize,
	/// Byte offset of the data pointer of a sequence; equals `offset` otherwise
	pub data_offset: usize,
}

impl Field {
	pub const fn new(name: &'static str, kind: FieldKind) -> Self {
		Self {
			name,
			kind,
			offset: 0,
			data_offset: 0,
		}
	}
}

/// Static description of a C struct layout
///
/// Fields keep their declared order; offsets follow the C rules for a
/// `#[repr(C)]` struct on the current target.
#[derive(Debug)]
pub struct Descriptor {
	pub name: &'static str,
	pub fields: Vec<Field>,
	/// Size of the block in bytes, padded to `alignment`
	pub size: usize,
	pub alignment: usize,
}

impl Descriptor {
	pub fn new(name: &'static str, fields: impl IntoIterator<Item = Field>) -> Self {
		let mut fields: Vec<Field> = fields.into_iter().collect();

		let mut offset = 0;
		let mut max_align = 1;

		for field in &mut fields {
			match field.kind {
				FieldKind::Sequence(_) => {
					offset = align_up(offset, LEN_ALIGN);
					field.offset = offset;
					offset += LEN_SIZE;

					offset = align_up(offset, PTR_ALIGN);
					field.data_offset = offset;
					offset += PTR_SIZE;

					max_align = max_align.max(LEN_ALIGN).max(PTR_ALIGN);
				}
				kind => {
					let (size, align) = kind.slot();
					offset = align_up(offset, align);
					field.offset = offset;
					field.data_offset = offset;
					offset += size;
					max_align = max_align.max(align);
				}
			}
		}

		Self {
			name,
			fields,
			size: align_up(offset, max_align),
			alignment: max_align,
		}
	}

	/// Build a Call Result Envelope: an optional `value` slot followed by the
	/// `err` message pointer.
	pub fn envelope(name: &'static str, value: Option<FieldKind>) -> Self {
		let fields = value
			.map(|kind| Field::new("value", kind))
			.into_iter()
			.chain(core::iter::once(Field::new("err", FieldKind::CString)));
		Self::new(name, fields)
	}

	/// Pin a descriptor for the rest of the process so nested kinds can refer to it
	pub fn leak(self) -> &'static Descriptor {
		Box::leak(Box::new(self))
	}

	pub fn field(&self, index: usize) -> Option<&Field> {
		self.fields.get(index)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Index of the error slot of an envelope
	pub fn error_index(&self) -> usize {
		self.fields.len().saturating_sub(1)
	}

	/// Index of the value slot of an envelope, if it carries one
	pub fn value_index(&self) -> Option<usize> {
		if self.fields.len() >= 2 {
			Some(0)
		} else {
			None
		}
	}
}
