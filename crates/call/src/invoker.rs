// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cell::Cell,
	ffi::c_void,
	panic::{AssertUnwindSafe, catch_unwind},
	ptr,
	time::Instant,
};

use excelize_abi::{Descriptor, EntryPoint, Param, ReleaseFn};
use excelize_loader::Library;
use excelize_marshal::{Arena, FromValue, decode_field, encode_optional};
use excelize_type::{Error, FieldPath, Result, Value};
use tracing::{Span, debug_span, instrument, trace};

use crate::{dispatch, state::CallState};

thread_local! {
	static LIVE_ARGUMENTS: Cell<usize> = const { Cell::new(0) };
}

/// Drives native calls against one loaded [`Library`]
///
/// The library is held by reference; the invoker never reaches for a
/// process-wide handle itself.
#[derive(Clone, Copy)]
pub struct Invoker<'lib> {
	library: &'lib Library,
}

impl<'lib> Invoker<'lib> {
	pub fn new(library: &'lib Library) -> Self {
		Self {
			library,
		}
	}

	pub fn library(&self) -> &'lib Library {
		self.library
	}

	/// Call entry point `name` with `args` in declared parameter order
	///
	/// A non-empty error message in the returned envelope becomes
	/// [`Error::Native`] with the message unmodified and the value slot is not
	/// read. A null result block is success without a value. The result block
	/// and every argument allocation are released before this returns,
	/// whatever the outcome.
	#[instrument(name = "call::invoke", level = "debug", skip_all, fields(
		entry = name,
		args = args.len(),
		state = tracing::field::Empty,
		outcome = tracing::field::Empty,
		arena_allocations = tracing::field::Empty,
		marshal_time_us = tracing::field::Empty,
		ffi_call_time_us = tracing::field::Empty,
		unmarshal_time_us = tracing::field::Empty,
		total_time_ms = tracing::field::Empty
	))]
	pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Option<Value>> {
		let mut call = Call::new(self.library.release(), Span::current());

		let bound = self.library.entry(name)?;
		let entry = bound.entry;

		if args.len() != entry.params.len() {
			return Err(Error::Arity {
				entry: entry.name.to_string(),
				expected: entry.params.len(),
				actual: args.len(),
			});
		}

		// Phase 1: convert arguments
		let marshal_span = debug_span!("call::marshal");
		let marshal_guard = marshal_span.enter();
		let marshal_start = Instant::now();
		let words = call.convert_args(entry, args);
		call.count_arguments();
		call.timings.marshal_us = Some(marshal_start.elapsed().as_micros() as u64);
		drop(marshal_guard);
		let words = words?;
		call.advance(CallState::ArgsConverted);

		// Phase 2: native call
		let ffi_span = debug_span!("call::native", words = words.len());
		let ffi_guard = ffi_span.enter();
		let ffi_start = Instant::now();
		let result = catch_unwind(AssertUnwindSafe(|| unsafe { dispatch::call(bound.function, &words) }));
		call.timings.ffi_us = Some(ffi_start.elapsed().as_micros() as u64);
		drop(ffi_guard);

		let block = match result {
			Ok(Some(block)) => block,
			Ok(None) => {
				return Err(Error::Arity {
					entry: entry.name.to_string(),
					expected: excelize_abi::entry::MAX_WORDS,
					actual: words.len(),
				});
			}
			Err(_) => return Err(Error::Panicked(entry.name.to_string())),
		};
		call.result = block;
		call.advance(CallState::Invoked);

		// Phase 3: check and convert the envelope
		let unmarshal_span = debug_span!("call::unmarshal");
		let unmarshal_guard = unmarshal_span.enter();
		let unmarshal_start = Instant::now();
		let value = call.read_result(&entry.result);
		call.timings.unmarshal_us = Some(unmarshal_start.elapsed().as_micros() as u64);
		drop(unmarshal_guard);

		value
	}

	/// [`invoke`](Self::invoke) and convert the result to a typed host value.
	/// A call without a value converts from [`Value::None`].
	pub fn invoke_as<T: FromValue>(&self, name: &str, args: &[Value]) -> Result<T> {
		let value = self.invoke(name, args)?.unwrap_or(Value::None);
		T::from_value(value, &mut FieldPath::root("result"))
	}

	/// [`invoke_as`](Self::invoke_as) for entry points that must produce a
	/// value, such as document handles. A null result block is
	/// [`Error::MissingValue`] instead of the type's default.
	pub fn invoke_required<T: FromValue>(&self, name: &str, args: &[Value]) -> Result<T> {
		match self.invoke(name, args)? {
			Some(value) => T::from_value(value, &mut FieldPath::root("result")),
			None => Err(Error::MissingValue(name.to_string())),
		}
	}
}

/// Argument allocations of calls still in flight on this thread
pub(crate) fn live_arguments() -> usize {
	LIVE_ARGUMENTS.with(Cell::get)
}

#[derive(Default)]
struct Timings {
	marshal_us: Option<u64>,
	ffi_us: Option<u64>,
	unmarshal_us: Option<u64>,
}

/// Per-call resources, released on every exit path
///
/// Dropping the call records the final state and the phase timings on the
/// invoke span, so early returns are traced like completed calls.
struct Call {
	arena: Arena,
	counted: usize,
	result: *mut c_void,
	release: ReleaseFn,
	state: CallState,
	span: Span,
	started: Instant,
	timings: Timings,
}

impl Call {
	fn new(release: ReleaseFn, span: Span) -> Self {
		Self {
			arena: Arena::new(),
			counted: 0,
			result: ptr::null_mut(),
			release,
			state: CallState::Idle,
			span,
			started: Instant::now(),
			timings: Timings::default(),
		}
	}

	fn advance(&mut self, next: CallState) {
		debug_assert!(self.state.allows(next), "{} -> {}", self.state, next);
		trace!(from = %self.state, to = %next, "call state");
		self.state = next;
	}

	fn count_arguments(&mut self) {
		let added = self.arena.len() - self.counted;
		LIVE_ARGUMENTS.with(|live| live.set(live.get() + added));
		self.counted = self.arena.len();
	}

	fn convert_args(&mut self, entry: &EntryPoint, args: &[Value]) -> Result<Vec<usize>> {
		let mut path = FieldPath::root(entry.name);
		let mut words = Vec::with_capacity(entry.words());

		for (index, (param, value)) in entry.params.iter().zip(args).enumerate() {
			path.push_index(index);
			match (param, value) {
				(Param::Int, Value::Int(v)) => words.push(*v as isize as usize),
				(Param::Int, Value::Bool(v)) => words.push(*v as usize),
				(Param::Int, Value::None) => words.push(0),
				(Param::CString, Value::None) => words.push(0),
				(Param::CString, Value::Text(text)) => match self.arena.copy_cstr(text) {
					Some(ptr) => words.push(ptr as usize),
					None => return Err(Error::conversion(&path, "text contains an interior NUL byte")),
				},
				(Param::Record(descriptor), value) => {
					words.push(encode_optional(&mut self.arena, value, descriptor)? as usize);
				}
				(Param::Bytes, Value::None) => words.extend([0, 0]),
				(Param::Bytes, Value::Bytes(bytes)) => {
					words.push(self.arena.copy_bytes(bytes) as usize);
					words.push(bytes.len());
				}
				(param, other) => {
					return Err(Error::conversion(
						&path,
						format!("expected {param:?} argument, got {}", other.kind()),
					));
				}
			}
			path.pop();
		}

		Ok(words)
	}

	fn read_result(&mut self, descriptor: &Descriptor) -> Result<Option<Value>> {
		if self.result.is_null() {
			self.advance(CallState::ResultChecked);
			self.advance(CallState::ValueConverted);
			return Ok(None);
		}

		let block = self.result as *const u8;
		let err = unsafe { decode_field(block, descriptor, descriptor.error_index()) }?;
		self.advance(CallState::ResultChecked);

		if let Value::Text(message) = err {
			if !message.is_empty() {
				self.advance(CallState::ErrorReturned);
				return Err(Error::Native(message));
			}
		}

		let value = match descriptor.value_index() {
			Some(index) => Some(unsafe { decode_field(block, descriptor, index) }?),
			None => None,
		};
		self.advance(CallState::ValueConverted);
		Ok(value)
	}
}

impl Drop for Call {
	fn drop(&mut self) {
		let outcome = self.state;
		if !self.result.is_null() {
			unsafe { (self.release)(self.result) };
			self.result = ptr::null_mut();
		}

		let allocations = self.arena.len();
		self.arena.clear();
		let counted = self.counted;
		LIVE_ARGUMENTS.with(|live| live.set(live.get().saturating_sub(counted)));
		self.counted = 0;
		self.advance(CallState::Released);

		let span = &self.span;
		span.record("outcome", outcome.as_str());
		span.record("state", self.state.as_str());
		span.record("arena_allocations", allocations as u64);
		span.record("marshal_time_us", self.timings.marshal_us);
		span.record("ffi_call_time_us", self.timings.ffi_us);
		span.record("unmarshal_time_us", self.timings.unmarshal_us);
		span.record("total_time_ms", self.started.elapsed().as_millis() as u64);
	}
}
