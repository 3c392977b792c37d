// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Calling convention shared by every exported symbol of the native library.
//!
//! Each entry point takes a fixed list of word-sized arguments (integers or
//! pointers to foreign blocks) and returns a pointer to a Call Result
//! Envelope block, or null when there is nothing to report. The block is
//! owned by the native side and handed back through the release symbol.

use core::ffi::c_void;

use crate::data::layout::Descriptor;

/// Untyped entry point as resolved from the shared library
pub type RawEntry = unsafe extern "C" fn();

/// Frees a result block returned by an entry point
pub type ReleaseFn = unsafe extern "C" fn(block: *mut c_void);

/// Upper bound on machine words a single entry point accepts
pub const MAX_WORDS: usize = 8;

/// Declared kind of one entry point parameter
#[derive(Debug, Clone, Copy)]
pub enum Param {
	/// Word-sized integer: document handle, sheet index, style id
	Int,
	/// NUL-terminated UTF-8; a host `None` passes null
	CString,
	/// Pointer to a block laid out per the descriptor; a host `None` passes null
	Record(&'static Descriptor),
	/// Data pointer followed by a length word
	Bytes,
}

impl Param {
	/// Number of machine words the parameter occupies in the call
	pub const fn words(&self) -> usize {
		match self {
			Param::Bytes => 2,
			_ => 1,
		}
	}
}

/// An exported symbol together with its declared signature
#[derive(Debug)]
pub struct EntryPoint {
	pub name: &'static str,
	pub params: Vec<Param>,
	/// Envelope descriptor of the returned block
	pub result: Descriptor,
}

impl EntryPoint {
	pub fn new(name: &'static str, params: impl IntoIterator<Item = Param>, result: Descriptor) -> Self {
		Self {
			name,
			params: params.into_iter().collect(),
			result,
		}
	}

	pub fn words(&self) -> usize {
		self.params.iter().map(Param::words).sum()
	}
}

/// The fixed set of entry points bound at load time
#[derive(Debug)]
pub struct EntryTable {
	pub entries: Vec<EntryPoint>,
	/// Symbol that frees result blocks
	pub release: &'static str,
}

impl EntryTable {
	pub fn new(release: &'static str, entries: impl IntoIterator<Item = EntryPoint>) -> Self {
		Self {
			entries: entries.into_iter().collect(),
			release,
		}
	}

	pub fn get(&self, name: &str) -> Option<&EntryPoint> {
		self.entries.iter().find(|entry| entry.name == name)
	}

	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.entries.iter().map(|entry| entry.name)
	}
}
