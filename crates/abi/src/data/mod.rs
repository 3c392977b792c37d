// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod layout;
pub mod primitive;

use core::{
	ffi::{c_int, c_void},
	mem::{align_of, size_of},
};

/// Width of the length slot of a bounded sequence
pub const LEN_SIZE: usize = size_of::<c_int>();
pub const LEN_ALIGN: usize = align_of::<c_int>();

pub const PTR_SIZE: usize = size_of::<*mut c_void>();
pub const PTR_ALIGN: usize = align_of::<*mut c_void>();

pub(crate) const fn align_up(offset: usize, align: usize) -> usize {
	(offset + align).saturating_sub(1) & !(align.saturating_sub(1))
}
