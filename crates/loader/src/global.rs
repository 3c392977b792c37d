// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::process;

use excelize_abi::EntryTable;
use once_cell::sync::OnceCell;
use tracing::{error, info};

use crate::{
	config::LoaderConfig,
	error::LoadError,
	library::Library,
	platform::{HostFacts, resolve},
};

static LIBRARY: OnceCell<Library> = OnceCell::new();

/// Initialize `cell` with `load` unless it already holds a library
///
/// Concurrent callers block until the first one finishes, so `load` runs at
/// most once per successful initialization. A failed `load` leaves the cell
/// empty and is returned to its caller only.
pub fn load_once<'a>(
	cell: &'a OnceCell<Library>,
	load: impl FnOnce() -> Result<Library, LoadError>,
) -> Result<&'a Library, LoadError> {
	cell.get_or_try_init(load)
}

/// Load the native library once for the whole process
///
/// The first caller loads while concurrent callers block on the same cell;
/// every later call returns the same handle. A platform without a shipped
/// artifact, or an artifact that cannot be loaded, is fatal: the diagnostic
/// is logged and the process exits with status 1.
pub fn ensure_loaded(config: &LoaderConfig, table: &'static EntryTable) -> &'static Library {
	ensure_loaded_with(config, HostFacts::current(), table)
}

/// [`ensure_loaded`] for explicit host facts
pub fn ensure_loaded_with(config: &LoaderConfig, facts: HostFacts, table: &'static EntryTable) -> &'static Library {
	let loaded = load_once(&LIBRARY, || {
		let library = Library::load(config, &facts, table)?;
		info!(library = library.name(), "native library loaded");
		Ok(library)
	});
	match loaded {
		Ok(library) => library,
		Err(err) => fatal(config, &facts, &err),
	}
}

fn fatal(config: &LoaderConfig, facts: &HostFacts, err: &LoadError) -> ! {
	let artifact = resolve(facts)
		.map(|artifact| config.path_for(&artifact).display().to_string())
		.unwrap_or_else(|_| "<none>".to_string());
	error!(platform = %facts, artifact = %artifact, error = %err, "cannot load the excelize native library");
	eprintln!("excelize: cannot load native library {artifact} for {facts}: {err}");
	process::exit(1)
}

/// The process-wide handle, if [`ensure_loaded`] has completed
pub fn loaded() -> Option<&'static Library> {
	LIBRARY.get()
}
