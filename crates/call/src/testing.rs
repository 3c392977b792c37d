// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Helpers for writing in-process stand-ins of native entry points
//!
//! A fake entry point builds its result block with [`ok_result`] or
//! [`err_result`]; the block and everything it points to stay alive until
//! [`release`] hands them back, exactly like a native result. Bookkeeping is
//! per thread, and the invoker calls on the caller's thread, so parallel
//! tests do not see each other's blocks.

use std::{
	cell::{Cell, RefCell},
	collections::HashMap,
	ffi::{CStr, c_char, c_void},
};

use excelize_abi::{Descriptor, RawEntry};
use excelize_marshal::{Arena, decode, encode};
use excelize_type::Value;
use tracing_subscriber::{EnvFilter, fmt};

thread_local! {
	static LIVE: RefCell<HashMap<usize, Arena>> = RefCell::new(HashMap::new());
	static RELEASED: Cell<usize> = const { Cell::new(0) };
}

/// Route tracing output to the test harness; `RUST_LOG` selects the level
pub fn init_tracing() {
	let _ = fmt().with_env_filter(EnvFilter::from_default_env()).with_test_writer().try_init();
}

/// A success envelope for `descriptor`, carrying `value` when the envelope
/// has a value slot
pub fn ok_result(descriptor: &Descriptor, value: Value) -> *mut c_void {
	envelope(descriptor, value, Value::None)
}

/// A failure envelope for `descriptor` with `message` in the error slot
pub fn err_result(descriptor: &Descriptor, message: &str) -> *mut c_void {
	envelope(descriptor, Value::None, Value::text(message))
}

fn envelope(descriptor: &Descriptor, value: Value, err: Value) -> *mut c_void {
	let fields = match descriptor.value_index() {
		Some(_) => vec![value, err],
		None => vec![err],
	};

	let mut arena = Arena::new();
	let block = match encode(&mut arena, &Value::Record(fields), descriptor) {
		Ok(block) => block.as_ptr() as *mut c_void,
		Err(err) => panic!("test envelope does not fit {}: {err}", descriptor.name),
	};
	LIVE.with(|live| live.borrow_mut().insert(block as usize, arena));
	block
}

/// Release function to bind next to fake entry points
pub unsafe extern "C" fn release(block: *mut c_void) {
	let removed = LIVE.with(|live| live.borrow_mut().remove(&(block as usize)));
	if removed.is_some() {
		RELEASED.with(|released| released.set(released.get() + 1));
	}
}

/// Result blocks handed out on this thread and not yet released
pub fn live_results() -> usize {
	LIVE.with(|live| live.borrow().len())
}

/// Result blocks released on this thread so far
pub fn released_results() -> usize {
	RELEASED.with(Cell::get)
}

/// Argument allocations held by calls in flight on this thread
///
/// Read from inside a fake entry point it counts the blocks, arrays and
/// strings built for that call; after the call returns it is back to zero.
pub fn live_arguments() -> usize {
	crate::invoker::live_arguments()
}

/// Erase the signature of a fake entry point so it can be bound
///
/// # Safety
///
/// `function` must be an `extern "C"` function pointer.
pub unsafe fn raw_entry<F: Copy>(function: F) -> RawEntry {
	assert_eq!(size_of::<F>(), size_of::<RawEntry>(), "not a function pointer");
	unsafe { std::mem::transmute_copy(&function) }
}

/// Read a text argument inside a fake entry point
///
/// # Safety
///
/// `ptr` must be null or a valid NUL-terminated string.
pub unsafe fn text_arg(ptr: *const c_char) -> Option<String> {
	if ptr.is_null() {
		return None;
	}
	Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Read a record argument inside a fake entry point
///
/// # Safety
///
/// `ptr` must be null or a block laid out per `descriptor`.
pub unsafe fn record_arg(ptr: *const c_void, descriptor: &Descriptor) -> Option<Value> {
	match unsafe { decode(ptr as *const u8, descriptor) } {
		Ok(value) => value,
		Err(err) => panic!("argument does not decode as {}: {err}", descriptor.name),
	}
}
