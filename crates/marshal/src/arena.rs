// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	alloc::{Layout, alloc_zeroed, dealloc, handle_alloc_error},
	ffi::c_char,
	ptr::{self, NonNull},
};

use tracing::trace;

/// Owner of every foreign allocation made for one top-level call
///
/// Blocks are zeroed on allocation and released together when the arena is
/// cleared or dropped. Nothing is ever freed individually, so a nested block
/// cannot outlive or be freed before the root it hangs off. The arena holds
/// raw pointers and is therefore neither `Send` nor `Sync`: it stays with the
/// call that created it.
pub struct Arena {
	allocations: Vec<(NonNull<u8>, Layout)>,
	bytes: usize,
}

impl Arena {
	pub fn new() -> Self {
		Self {
			allocations: Vec::new(),
			bytes: 0,
		}
	}

	/// Allocate a zeroed region of `size` bytes. Zero-sized requests still
	/// return a unique, valid address.
	pub fn alloc(&mut self, size: usize, align: usize) -> NonNull<u8> {
		// only a size past isize::MAX is left to fail here
		let Ok(layout) = Layout::from_size_align(size.max(1), align.max(1).next_power_of_two()) else {
			handle_alloc_error(Layout::new::<u8>())
		};
		let ptr = unsafe { alloc_zeroed(layout) };
		let Some(ptr) = NonNull::new(ptr) else {
			handle_alloc_error(layout)
		};
		self.allocations.push((ptr, layout));
		self.bytes += layout.size();
		ptr
	}

	/// Copy bytes into the arena; empty input yields null
	pub fn copy_bytes(&mut self, bytes: &[u8]) -> *mut u8 {
		if bytes.is_empty() {
			return ptr::null_mut();
		}
		let dst = self.alloc(bytes.len(), 1);
		unsafe { ptr::copy_nonoverlapping(bytes.as_ptr(), dst.as_ptr(), bytes.len()) };
		dst.as_ptr()
	}

	/// Copy text into the arena as a NUL-terminated string. The empty string
	/// yields a pointer to a lone terminator, not null. Returns `None` when the
	/// text contains an interior NUL.
	pub fn copy_cstr(&mut self, text: &str) -> Option<*mut c_char> {
		if text.as_bytes().contains(&0) {
			return None;
		}
		let dst = self.alloc(text.len() + 1, 1);
		unsafe { ptr::copy_nonoverlapping(text.as_ptr(), dst.as_ptr(), text.len()) };
		Some(dst.as_ptr() as *mut c_char)
	}

	/// Number of live allocations
	pub fn len(&self) -> usize {
		self.allocations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.allocations.is_empty()
	}

	pub fn bytes_allocated(&self) -> usize {
		self.bytes
	}

	/// Release every allocation at once
	pub fn clear(&mut self) {
		if self.allocations.is_empty() {
			return;
		}
		trace!(allocations = self.allocations.len(), bytes = self.bytes, "releasing arena");
		for (ptr, layout) in self.allocations.drain(..) {
			unsafe { dealloc(ptr.as_ptr(), layout) };
		}
		self.bytes = 0;
	}
}

impl Default for Arena {
	fn default() -> Self {
		Self::new()
	}
}

impl Drop for Arena {
	fn drop(&mut self) {
		self.clear();
	}
}
