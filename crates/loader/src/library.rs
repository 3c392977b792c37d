// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, ffi::CString};

use excelize_abi::{EntryPoint, EntryTable, RawEntry, ReleaseFn};
use excelize_type::Error;
use tracing::{debug, instrument};

use crate::{
	config::LoaderConfig,
	error::LoadError,
	platform::{HostFacts, resolve},
};

/// An entry point together with the function it resolved to
#[derive(Clone, Copy)]
pub struct BoundEntry {
	pub entry: &'static EntryPoint,
	pub function: RawEntry,
}

/// Handle to the loaded native library with every entry point bound
///
/// Symbols are resolved eagerly at load time, so a library that is missing
/// any declared entry point never becomes usable.
pub struct Library {
	name: String,
	table: &'static EntryTable,
	entries: HashMap<&'static str, BoundEntry>,
	release: ReleaseFn,
	// keeps the shared object mapped for as long as the bound functions live
	_handle: Option<libloading::Library>,
}

impl std::fmt::Debug for Library {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Library").field("name", &self.name).finish_non_exhaustive()
	}
}

impl Library {
	#[instrument(name = "loader::load", level = "debug", skip_all, fields(platform = %facts))]
	pub fn load(config: &LoaderConfig, facts: &HostFacts, table: &'static EntryTable) -> Result<Self, LoadError> {
		let artifact = resolve(facts)?;
		let path = config.path_for(&artifact);
		let name = artifact.file_name(&config.library_name);

		debug!(path = %path.display(), "opening native library");
		let handle = unsafe { libloading::Library::new(&path) }.map_err(|source| LoadError::Open {
			path: path.clone(),
			source,
		})?;

		let mut entries = HashMap::with_capacity(table.entries.len());
		for entry in &table.entries {
			let function = unsafe { symbol::<RawEntry>(&handle, entry.name, &name) }?;
			entries.insert(
				entry.name,
				BoundEntry {
					entry,
					function,
				},
			);
		}
		let release = unsafe { symbol::<ReleaseFn>(&handle, table.release, &name) }?;

		debug!(entries = entries.len(), "bound native entry points");

		Ok(Self {
			name,
			table,
			entries,
			release,
			_handle: Some(handle),
		})
	}

	/// Build a handle over functions that already live in this process
	///
	/// Every entry point of `table` must be present in `symbols`.
	pub fn from_symbols(
		table: &'static EntryTable,
		symbols: impl IntoIterator<Item = (&'static str, RawEntry)>,
		release: ReleaseFn,
	) -> Result<Self, LoadError> {
		let symbols: HashMap<&'static str, RawEntry> = symbols.into_iter().collect();

		let mut entries = HashMap::with_capacity(table.entries.len());
		for entry in &table.entries {
			let Some(function) = symbols.get(entry.name) else {
				return Err(LoadError::MissingSymbol {
					symbol: entry.name.to_string(),
					library: "in-process".to_string(),
				});
			};
			entries.insert(
				entry.name,
				BoundEntry {
					entry,
					function: *function,
				},
			);
		}

		Ok(Self {
			name: "in-process".to_string(),
			table,
			entries,
			release,
			_handle: None,
		})
	}

	pub fn entry(&self, name: &str) -> Result<&BoundEntry, Error> {
		self.entries.get(name).ok_or_else(|| Error::UnknownEntry(name.to_string()))
	}

	/// Function that hands a result block back to the native side
	pub fn release(&self) -> ReleaseFn {
		self.release
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn table(&self) -> &'static EntryTable {
		self.table
	}
}

unsafe fn symbol<T: Copy>(handle: &libloading::Library, name: &str, library: &str) -> Result<T, LoadError> {
	let c_name = CString::new(name).map_err(|_| LoadError::InvalidSymbolName(name.to_string()))?;
	let symbol = unsafe { handle.get::<T>(c_name.as_bytes_with_nul()) }.map_err(|_| LoadError::MissingSymbol {
		symbol: name.to_string(),
		library: library.to_string(),
	})?;
	Ok(*symbol)
}
