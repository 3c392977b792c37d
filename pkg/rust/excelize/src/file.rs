// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use excelize_call::Invoker;
use excelize_loader::{Library, LoaderConfig, ensure_loaded};
use excelize_marshal::{ToValue, Value};
use excelize_type::Result;
use tracing::debug;

use crate::{
	entries::ENTRY_TABLE,
	enums::CellType,
	types::{
		AppProperties, DefinedName, FormulaOpts, GetRowsResult, HyperlinkOpts, Options, Style,
		WorkbookPropsOptions,
	},
	value::CellValue,
};

fn optional<R: ToValue>(record: Option<&R>) -> Value {
	record.map(ToValue::to_value).unwrap_or(Value::None)
}

/// Entry to the native library: opens and creates workbooks
#[derive(Clone, Copy)]
pub struct Excelize<'lib> {
	invoker: Invoker<'lib>,
}

impl<'lib> Excelize<'lib> {
	pub fn new(library: &'lib Library) -> Self {
		Self {
			invoker: Invoker::new(library),
		}
	}

	/// Open an existing workbook
	pub fn open_file(&self, filename: &str, options: Option<&Options>) -> Result<File<'lib>> {
		let index: i64 = self.invoker.invoke_required("OpenFile", &[Value::text(filename), optional(options)])?;
		debug!(filename, index, "opened workbook");
		Ok(File::new(index, self.invoker))
	}

	/// Create an empty workbook with a single `Sheet1`
	pub fn new_file(&self) -> Result<File<'lib>> {
		let index: i64 = self.invoker.invoke_required("NewFile", &[])?;
		Ok(File::new(index, self.invoker))
	}
}

impl Excelize<'static> {
	/// Bindings over the process-wide library, loading it on first use
	///
	/// Exits the process when no native library is available for this
	/// platform; see [`ensure_loaded`].
	pub fn global() -> Self {
		Self::new(ensure_loaded(&LoaderConfig::new().with_env(), &ENTRY_TABLE))
	}
}

/// An open workbook, identified by its native document handle
///
/// The native side does not lock documents. Sharing one `File` between
/// threads requires the caller to serialize the calls.
#[derive(Clone, Copy)]
pub struct File<'lib> {
	index: i64,
	invoker: Invoker<'lib>,
}

impl<'lib> File<'lib> {
	fn new(index: i64, invoker: Invoker<'lib>) -> Self {
		Self {
			index,
			invoker,
		}
	}

	/// Native document handle
	pub fn index(&self) -> i64 {
		self.index
	}

	fn handle(&self) -> Value {
		Value::Int(self.index)
	}

	fn call(&self, name: &str, args: &[Value]) -> Result<()> {
		self.invoker.invoke(name, args).map(|_| ())
	}

	pub fn close(&self) -> Result<()> {
		self.call("Close", &[self.handle()])
	}

	pub fn save(&self, options: Option<&Options>) -> Result<()> {
		self.call("Save", &[self.handle(), optional(options)])
	}

	pub fn save_as(&self, filename: &str, options: Option<&Options>) -> Result<()> {
		self.call("SaveAs", &[self.handle(), Value::text(filename), optional(options)])
	}

	/// Create a worksheet and return its index
	pub fn new_sheet(&self, sheet: &str) -> Result<i32> {
		self.invoker.invoke_required("NewSheet", &[self.handle(), Value::text(sheet)])
	}

	pub fn set_active_sheet(&self, index: i32) -> Result<()> {
		self.call("SetActiveSheet", &[self.handle(), Value::from(index)])
	}

	pub fn get_sheet_name(&self, index: i32) -> Result<String> {
		self.invoker.invoke_as("GetSheetName", &[self.handle(), Value::from(index)])
	}

	pub fn set_cell_value(&self, sheet: &str, cell: &str, value: impl Into<CellValue>) -> Result<()> {
		let value = value.into().to_interface();
		self.call("SetCellValue", &[self.handle(), Value::text(sheet), Value::text(cell), value.to_value()])
	}

	/// Formatted value of a cell
	pub fn get_cell_value(&self, sheet: &str, cell: &str, options: Option<&Options>) -> Result<String> {
		self.invoker.invoke_as(
			"GetCellValue",
			&[self.handle(), Value::text(sheet), Value::text(cell), optional(options)],
		)
	}

	pub fn get_cell_type(&self, sheet: &str, cell: &str) -> Result<CellType> {
		self.invoker.invoke_as("GetCellType", &[self.handle(), Value::text(sheet), Value::text(cell)])
	}

	/// Register a style and return its id
	pub fn new_style(&self, style: &Style) -> Result<i32> {
		self.invoker.invoke_required("NewStyle", &[self.handle(), style.to_value()])
	}

	pub fn get_style(&self, style_id: i32) -> Result<Style> {
		self.invoker.invoke_as("GetStyle", &[self.handle(), Value::from(style_id)])
	}

	pub fn set_cell_style(&self, sheet: &str, top_left: &str, bottom_right: &str, style_id: i32) -> Result<()> {
		self.call(
			"SetCellStyle",
			&[
				self.handle(),
				Value::text(sheet),
				Value::text(top_left),
				Value::text(bottom_right),
				Value::from(style_id),
			],
		)
	}

	/// Every row of a sheet as its cell values
	pub fn get_rows(&self, sheet: &str, options: Option<&Options>) -> Result<Vec<Vec<String>>> {
		let result: GetRowsResult =
			self.invoker.invoke_as("GetRows", &[self.handle(), Value::text(sheet), optional(options)])?;
		Ok(result.row.into_iter().map(|row| row.cell).collect())
	}

	pub fn set_sheet_background_from_bytes(&self, sheet: &str, extension: &str, picture: &[u8]) -> Result<()> {
		self.call(
			"SetSheetBackgroundFromBytes",
			&[self.handle(), Value::text(sheet), Value::text(extension), Value::bytes(picture)],
		)
	}

	pub fn get_app_props(&self) -> Result<AppProperties> {
		self.invoker.invoke_as("GetAppProps", &[self.handle()])
	}

	pub fn set_app_props(&self, props: &AppProperties) -> Result<()> {
		self.call("SetAppProps", &[self.handle(), props.to_value()])
	}

	pub fn set_cell_hyperlink(
		&self,
		sheet: &str,
		cell: &str,
		link: &str,
		link_type: &str,
		options: Option<&HyperlinkOpts>,
	) -> Result<()> {
		self.call(
			"SetCellHyperLink",
			&[
				self.handle(),
				Value::text(sheet),
				Value::text(cell),
				Value::text(link),
				Value::text(link_type),
				optional(options),
			],
		)
	}

	pub fn set_cell_formula(&self, sheet: &str, cell: &str, formula: &str, options: Option<&FormulaOpts>) -> Result<()> {
		self.call(
			"SetCellFormula",
			&[self.handle(), Value::text(sheet), Value::text(cell), Value::text(formula), optional(options)],
		)
	}

	pub fn set_defined_name(&self, name: &DefinedName) -> Result<()> {
		self.call("SetDefinedName", &[self.handle(), name.to_value()])
	}

	pub fn get_defined_name(&self) -> Result<Vec<DefinedName>> {
		self.invoker.invoke_as("GetDefinedName", &[self.handle()])
	}

	pub fn set_workbook_props(&self, props: &WorkbookPropsOptions) -> Result<()> {
		self.call("SetWorkbookProps", &[self.handle(), props.to_value()])
	}

	pub fn get_workbook_props(&self) -> Result<WorkbookPropsOptions> {
		self.invoker.invoke_as("GetWorkbookProps", &[self.handle()])
	}
}
