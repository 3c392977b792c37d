// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::path::FieldPath;

pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable failures surfaced to the caller of a native operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	/// The host value does not fit the declared foreign layout
	#[error("cannot convert `{path}`: {message}")]
	Conversion {
		path: String,
		message: String,
	},

	/// The native library reported a failure; the message is passed through unmodified
	#[error("{0}")]
	Native(String),

	#[error("unknown entry point `{0}`")]
	UnknownEntry(String),

	#[error("entry point `{entry}` expects {expected} arguments, got {actual}")]
	Arity {
		entry: String,
		expected: usize,
		actual: usize,
	},

	#[error("native call `{0}` panicked")]
	Panicked(String),

	/// A value-producing entry point returned no result block
	#[error("entry point `{0}` returned no value")]
	MissingValue(String),
}

impl Error {
	pub fn conversion(path: &FieldPath, message: impl Into<String>) -> Self {
		Error::Conversion {
			path: path.to_string(),
			message: message.into(),
		}
	}

	pub fn native(message: impl Into<String>) -> Self {
		Error::Native(message.into())
	}

	/// The offending field path for conversion failures
	pub fn path(&self) -> Option<&str> {
		match self {
			Error::Conversion {
				path,
				..
			} => Some(path.as_str()),
			_ => None,
		}
	}
}
