// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ffi::c_void, mem::transmute};

use excelize_abi::RawEntry;

type Fn0 = unsafe extern "C" fn() -> *mut c_void;
type Fn1 = unsafe extern "C" fn(usize) -> *mut c_void;
type Fn2 = unsafe extern "C" fn(usize, usize) -> *mut c_void;
type Fn3 = unsafe extern "C" fn(usize, usize, usize) -> *mut c_void;
type Fn4 = unsafe extern "C" fn(usize, usize, usize, usize) -> *mut c_void;
type Fn5 = unsafe extern "C" fn(usize, usize, usize, usize, usize) -> *mut c_void;
type Fn6 = unsafe extern "C" fn(usize, usize, usize, usize, usize, usize) -> *mut c_void;
type Fn7 = unsafe extern "C" fn(usize, usize, usize, usize, usize, usize, usize) -> *mut c_void;
type Fn8 = unsafe extern "C" fn(usize, usize, usize, usize, usize, usize, usize, usize) -> *mut c_void;

/// Call `function` with machine-word arguments, returning its result block
///
/// Returns `None` when there are more words than any entry point accepts.
///
/// # Safety
///
/// `function` must take exactly `words.len()` word-sized arguments and return
/// a pointer; every word must be valid for the parameter it lands in.
pub(crate) unsafe fn call(function: RawEntry, words: &[usize]) -> Option<*mut c_void> {
	let result = unsafe {
		match *words {
			[] => transmute::<RawEntry, Fn0>(function)(),
			[a] => transmute::<RawEntry, Fn1>(function)(a),
			[a, b] => transmute::<RawEntry, Fn2>(function)(a, b),
			[a, b, c] => transmute::<RawEntry, Fn3>(function)(a, b, c),
			[a, b, c, d] => transmute::<RawEntry, Fn4>(function)(a, b, c, d),
			[a, b, c, d, e] => transmute::<RawEntry, Fn5>(function)(a, b, c, d, e),
			[a, b, c, d, e, f] => transmute::<RawEntry, Fn6>(function)(a, b, c, d, e, f),
			[a, b, c, d, e, f, g] => transmute::<RawEntry, Fn7>(function)(a, b, c, d, e, f, g),
			[a, b, c, d, e, f, g, h] => transmute::<RawEntry, Fn8>(function)(a, b, c, d, e, f, g, h),
			_ => return None,
		}
	};
	Some(result)
}
