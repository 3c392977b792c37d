// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::PathBuf;

/// The host platform has no matching native artifact
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
	#[error("unsupported operating system `{0}`")]
	UnsupportedOs(String),

	#[error("unsupported architecture `{arch}` on {os}")]
	UnsupportedArch {
		os: String,
		arch: String,
	},

	#[error("unsupported pointer width `{0}`")]
	UnsupportedPointerWidth(String),

	#[error("architecture `{arch}` is not a {width} architecture")]
	PointerWidthMismatch {
		arch: String,
		width: String,
	},
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	#[error(transparent)]
	Platform(#[from] PlatformError),

	#[error("failed to load native library `{}`", path.display())]
	Open {
		path: PathBuf,
		#[source]
		source: libloading::Error,
	},

	#[error("symbol `{symbol}` not found in `{library}`")]
	MissingSymbol {
		symbol: String,
		library: String,
	},

	#[error("invalid symbol name `{0}`")]
	InvalidSymbolName(String),
}
