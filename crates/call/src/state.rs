// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// Stage of a single native call
///
/// A call moves strictly forward: `Idle`, `ArgsConverted`, `Invoked`,
/// `ResultChecked`, then `ErrorReturned` or `ValueConverted`, and always ends
/// in `Released`. A failure at any stage jumps straight to `Released`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CallState {
	Idle,
	ArgsConverted,
	Invoked,
	ResultChecked,
	ErrorReturned,
	ValueConverted,
	Released,
}

impl CallState {
	pub const fn as_str(&self) -> &'static str {
		match self {
			CallState::Idle => "idle",
			CallState::ArgsConverted => "args_converted",
			CallState::Invoked => "invoked",
			CallState::ResultChecked => "result_checked",
			CallState::ErrorReturned => "error_returned",
			CallState::ValueConverted => "value_converted",
			CallState::Released => "released",
		}
	}

	/// Whether `next` is a legal successor of `self`
	pub fn allows(&self, next: CallState) -> bool {
		use CallState::*;
		matches!(
			(self, next),
			(Idle, ArgsConverted)
				| (ArgsConverted, Invoked)
				| (Invoked, ResultChecked)
				| (ResultChecked, ErrorReturned)
				| (ResultChecked, ValueConverted)
				| (Idle | ArgsConverted | Invoked | ResultChecked | ErrorReturned | ValueConverted, Released)
		)
	}
}

impl Display for CallState {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
