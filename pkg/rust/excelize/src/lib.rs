// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! # excelize
//!
//! Typed bindings over the excelize native library, which reads and writes
//! XLAM / XLSM / XLSX / XLTM / XLTX spreadsheet documents.
//!
//! The crate is a thin layer over the bridge:
//!
//! - [`excelize_loader`] finds the artifact for this platform and binds its symbols.
//! - [`excelize_call`] runs one native call: arguments in, envelope out.
//! - [`excelize_marshal`] converts records to and from native memory.
//!
//! ```no_run
//! use excelize::Excelize;
//!
//! let excelize = Excelize::global();
//! let file = excelize.new_file().unwrap();
//! file.set_cell_value("Sheet1", "A1", "Hello").unwrap();
//! file.save_as("Book1.xlsx", None).unwrap();
//! file.close().unwrap();
//! ```

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
// #![cfg_attr(not(debug_assertions), deny(warnings))]

mod entries;
mod enums;
mod file;
mod types;
mod value;

pub use entries::{ENTRY_TABLE, RELEASE_SYMBOL};
pub use enums::{CellType, CultureName};
pub use excelize_loader::{Library, LoaderConfig};
pub use excelize_type::{Error, Result};
pub use file::{Excelize, File};
pub use types::{
	Alignment, AppProperties, Border, DefinedName, Fill, Font, FormulaOpts, GetRowsResult, HyperlinkOpts, Interface,
	Options, Protection, Row, Style, WorkbookPropsOptions,
};
pub use value::CellValue;
