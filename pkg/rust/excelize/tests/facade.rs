// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Drives the bindings against an in-process stand-in of the native library

use std::{
	cell::RefCell,
	collections::BTreeMap,
	ffi::{c_char, c_void},
};

use excelize::{
	AppProperties, Border, CellType, CellValue, DefinedName, ENTRY_TABLE, Error, Excelize, Fill, Font, Interface,
	Library, Options, Protection, Style, WorkbookPropsOptions,
};
use excelize_abi::{Descriptor, RawEntry};
use excelize_call::testing::{self, err_result, live_results, ok_result, raw_entry, record_arg, text_arg};
use excelize_marshal::{FieldPath, FromValue, HostRecord, Value};

#[derive(Default)]
struct Workbook {
	sheets: Vec<String>,
	cells: BTreeMap<(String, usize, usize), CellValue>,
	styles: Vec<Value>,
	background: Option<(String, Vec<u8>)>,
	app_props: Option<Value>,
	defined_names: Vec<Value>,
	workbook_props: Option<Value>,
}

thread_local! {
	static WORKBOOK: RefCell<Workbook> = RefCell::new(Workbook::default());
}

fn result_of(name: &str) -> &'static Descriptor {
	match ENTRY_TABLE.get(name) {
		Some(entry) => &entry.result,
		None => panic!("no entry {name}"),
	}
}

fn with_sheet(name: &str, sheet: *const c_char, f: impl FnOnce(&mut Workbook, String) -> *mut c_void) -> *mut c_void {
	let sheet = unsafe { text_arg(sheet) }.unwrap_or_default();
	WORKBOOK.with(|book| {
		let mut book = book.borrow_mut();
		if !book.sheets.contains(&sheet) {
			return err_result(result_of(name), &format!("sheet {sheet} does not exist"));
		}
		f(&mut *book, sheet)
	})
}

// "B3" -> (column 1, row 2)
fn coordinates(cell: &str) -> (usize, usize) {
	let split = cell.find(|c: char| c.is_ascii_digit()).unwrap_or(cell.len());
	let (letters, digits) = cell.split_at(split);
	let column = letters.bytes().fold(0, |acc, b| acc * 26 + (b.to_ascii_uppercase() - b'A' + 1) as usize);
	let row: usize = digits.parse().unwrap_or(1);
	(column - 1, row - 1)
}

fn formatted(value: &CellValue) -> String {
	match value {
		CellValue::None => String::new(),
		CellValue::Int(v) => v.to_string(),
		CellValue::Text(v) => v.clone(),
		CellValue::Float(v) => v.to_string(),
		CellValue::Bool(true) => "TRUE".to_string(),
		CellValue::Bool(false) => "FALSE".to_string(),
	}
}

unsafe extern "C" fn open_file(_filename: *const c_char, _options: *const c_void) -> *mut c_void {
	err_result(result_of("OpenFile"), "open Book1.xlsx: no such file or directory")
}

unsafe extern "C" fn new_file() -> *mut c_void {
	WORKBOOK.with(|book| {
		*book.borrow_mut() = Workbook {
			sheets: vec!["Sheet1".to_string()],
			..Workbook::default()
		}
	});
	ok_result(result_of("NewFile"), Value::int(0))
}

unsafe extern "C" fn close(_index: usize) -> *mut c_void {
	ok_result(result_of("Close"), Value::None)
}

unsafe extern "C" fn save(_index: usize, options: *const c_void) -> *mut c_void {
	let options = unsafe { record_arg(options, Options::descriptor()) };
	match options {
		Some(_) => err_result(result_of("Save"), "no path defined for file, consider File.WriteTo or File.Write"),
		None => ok_result(result_of("Save"), Value::None),
	}
}

unsafe extern "C" fn save_as(_index: usize, filename: *const c_char, _options: *const c_void) -> *mut c_void {
	let filename = unsafe { text_arg(filename) }.unwrap_or_default();
	if filename.ends_with(".xlsx") {
		ok_result(result_of("SaveAs"), Value::None)
	} else {
		err_result(result_of("SaveAs"), "unsupported workbook file format")
	}
}

unsafe extern "C" fn new_sheet(_index: usize, sheet: *const c_char) -> *mut c_void {
	let sheet = unsafe { text_arg(sheet) }.unwrap_or_default();
	if sheet.chars().count() > 31 {
		return err_result(result_of("NewSheet"), "the sheet name length exceeds the 31 characters limit");
	}
	WORKBOOK.with(|book| {
		let mut book = book.borrow_mut();
		book.sheets.push(sheet);
		ok_result(result_of("NewSheet"), Value::int(book.sheets.len() as i64 - 1))
	})
}

unsafe extern "C" fn set_active_sheet(_index: usize, _sheet: usize) -> *mut c_void {
	ok_result(result_of("SetActiveSheet"), Value::None)
}

unsafe extern "C" fn get_sheet_name(_index: usize, sheet: usize) -> *mut c_void {
	let name = WORKBOOK.with(|book| book.borrow().sheets.get(sheet).cloned().unwrap_or_default());
	ok_result(result_of("GetSheetName"), Value::text(name))
}

unsafe extern "C" fn set_cell_value(
	_index: usize,
	sheet: *const c_char,
	cell: *const c_char,
	value: *const c_void,
) -> *mut c_void {
	let cell = unsafe { text_arg(cell) }.unwrap_or_default();
	let value = unsafe { record_arg(value, Interface::descriptor()) }.unwrap_or(Value::None);
	let interface = match Interface::from_value(value, &mut FieldPath::root("Interface")) {
		Ok(interface) => interface,
		Err(err) => panic!("{err}"),
	};
	with_sheet("SetCellValue", sheet, |book, sheet| {
		let (column, row) = coordinates(&cell);
		book.cells.insert((sheet, row, column), CellValue::from_interface(&interface));
		ok_result(result_of("SetCellValue"), Value::None)
	})
}

fn cell_at(book: &Workbook, sheet: String, cell: *const c_char) -> CellValue {
	let cell = unsafe { text_arg(cell) }.unwrap_or_default();
	let (column, row) = coordinates(&cell);
	book.cells.get(&(sheet, row, column)).cloned().unwrap_or_default()
}

unsafe extern "C" fn get_cell_value(
	_index: usize,
	sheet: *const c_char,
	cell: *const c_char,
	_options: *const c_void,
) -> *mut c_void {
	with_sheet("GetCellValue", sheet, |book, sheet| {
		let value = cell_at(book, sheet, cell);
		ok_result(result_of("GetCellValue"), Value::text(formatted(&value)))
	})
}

unsafe extern "C" fn get_cell_type(_index: usize, sheet: *const c_char, cell: *const c_char) -> *mut c_void {
	with_sheet("GetCellType", sheet, |book, sheet| {
		let cell_type = match cell_at(book, sheet, cell) {
			CellValue::None => CellType::Unset,
			CellValue::Bool(_) => CellType::Bool,
			CellValue::Int(_) | CellValue::Float(_) => CellType::Number,
			CellValue::Text(_) => CellType::SharedString,
		};
		ok_result(result_of("GetCellType"), Value::int(cell_type.code()))
	})
}

unsafe extern "C" fn new_style(_index: usize, style: *const c_void) -> *mut c_void {
	let style = unsafe { record_arg(style, Style::descriptor()) }.unwrap_or(Value::None);
	WORKBOOK.with(|book| {
		let mut book = book.borrow_mut();
		book.styles.push(style);
		ok_result(result_of("NewStyle"), Value::int(book.styles.len() as i64))
	})
}

unsafe extern "C" fn get_style(_index: usize, style_id: usize) -> *mut c_void {
	let style_id = style_id as i64;
	WORKBOOK.with(|book| {
		let book = book.borrow();
		match usize::try_from(style_id - 1).ok().and_then(|i| book.styles.get(i)) {
			Some(style) => ok_result(result_of("GetStyle"), style.clone()),
			None => err_result(result_of("GetStyle"), &format!("invalid style ID {style_id}")),
		}
	})
}

unsafe extern "C" fn set_cell_style(
	_index: usize,
	sheet: *const c_char,
	_top_left: *const c_char,
	_bottom_right: *const c_char,
	style_id: usize,
) -> *mut c_void {
	with_sheet("SetCellStyle", sheet, |book, _| {
		if style_id == 0 || style_id > book.styles.len() {
			return err_result(result_of("SetCellStyle"), &format!("invalid style ID {style_id}"));
		}
		ok_result(result_of("SetCellStyle"), Value::None)
	})
}

unsafe extern "C" fn get_rows(_index: usize, sheet: *const c_char, _options: *const c_void) -> *mut c_void {
	with_sheet("GetRows", sheet, |book, sheet| {
		let mut rows: Vec<Vec<String>> = Vec::new();
		for ((_, row, column), value) in book.cells.range((sheet.clone(), 0, 0)..=(sheet, usize::MAX, usize::MAX)) {
			if rows.len() <= *row {
				rows.resize(row + 1, Vec::new());
			}
			let cells = &mut rows[*row];
			if cells.len() <= *column {
				cells.resize(column + 1, String::new());
			}
			cells[*column] = formatted(value);
		}
		let rows = rows.into_iter().map(|cells| Value::record([Value::list(cells.into_iter().map(Value::text))]));
		ok_result(result_of("GetRows"), Value::record([Value::list(rows)]))
	})
}

unsafe extern "C" fn set_sheet_background_from_bytes(
	_index: usize,
	sheet: *const c_char,
	extension: *const c_char,
	data: *const u8,
	len: usize,
) -> *mut c_void {
	let extension = unsafe { text_arg(extension) }.unwrap_or_default();
	let picture = if data.is_null() {
		Vec::new()
	} else {
		unsafe { std::slice::from_raw_parts(data, len) }.to_vec()
	};
	with_sheet("SetSheetBackgroundFromBytes", sheet, |book, _| {
		if extension != ".png" {
			return err_result(result_of("SetSheetBackgroundFromBytes"), "unsupported image extension");
		}
		book.background = Some((extension, picture));
		ok_result(result_of("SetSheetBackgroundFromBytes"), Value::None)
	})
}

unsafe extern "C" fn get_app_props(_index: usize) -> *mut c_void {
	let props = WORKBOOK.with(|book| book.borrow().app_props.clone()).unwrap_or(Value::None);
	ok_result(result_of("GetAppProps"), props)
}

unsafe extern "C" fn set_app_props(_index: usize, props: *const c_void) -> *mut c_void {
	let props = unsafe { record_arg(props, AppProperties::descriptor()) };
	WORKBOOK.with(|book| book.borrow_mut().app_props = props);
	ok_result(result_of("SetAppProps"), Value::None)
}

unsafe extern "C" fn set_cell_hyperlink(
	_index: usize,
	sheet: *const c_char,
	_cell: *const c_char,
	_link: *const c_char,
	link_type: *const c_char,
	_options: *const c_void,
) -> *mut c_void {
	let link_type = unsafe { text_arg(link_type) }.unwrap_or_default();
	with_sheet("SetCellHyperLink", sheet, |_, _| match link_type.as_str() {
		"External" | "Location" => ok_result(result_of("SetCellHyperLink"), Value::None),
		_ => err_result(result_of("SetCellHyperLink"), "invalid link type"),
	})
}

unsafe extern "C" fn set_cell_formula(
	_index: usize,
	sheet: *const c_char,
	_cell: *const c_char,
	_formula: *const c_char,
	_options: *const c_void,
) -> *mut c_void {
	with_sheet("SetCellFormula", sheet, |_, _| ok_result(result_of("SetCellFormula"), Value::None))
}

unsafe extern "C" fn set_defined_name(_index: usize, name: *const c_void) -> *mut c_void {
	let name = unsafe { record_arg(name, DefinedName::descriptor()) }.unwrap_or(Value::None);
	WORKBOOK.with(|book| book.borrow_mut().defined_names.push(name));
	ok_result(result_of("SetDefinedName"), Value::None)
}

unsafe extern "C" fn get_defined_name(_index: usize) -> *mut c_void {
	let names = WORKBOOK.with(|book| book.borrow().defined_names.clone());
	ok_result(result_of("GetDefinedName"), Value::list(names))
}

unsafe extern "C" fn set_workbook_props(_index: usize, props: *const c_void) -> *mut c_void {
	let props = unsafe { record_arg(props, WorkbookPropsOptions::descriptor()) };
	WORKBOOK.with(|book| book.borrow_mut().workbook_props = props);
	ok_result(result_of("SetWorkbookProps"), Value::None)
}

unsafe extern "C" fn get_workbook_props(_index: usize) -> *mut c_void {
	let props = WORKBOOK.with(|book| book.borrow().workbook_props.clone()).unwrap_or(Value::None);
	ok_result(result_of("GetWorkbookProps"), props)
}

type Entry0 = unsafe extern "C" fn() -> *mut c_void;
type Entry1 = unsafe extern "C" fn(usize) -> *mut c_void;
type Entry2 = unsafe extern "C" fn(usize, usize) -> *mut c_void;
type EntryText = unsafe extern "C" fn(usize, *const c_char) -> *mut c_void;
type EntryRecord = unsafe extern "C" fn(usize, *const c_void) -> *mut c_void;
type EntryCell = unsafe extern "C" fn(usize, *const c_char, *const c_char) -> *mut c_void;
type EntryCellRecord = unsafe extern "C" fn(usize, *const c_char, *const c_char, *const c_void) -> *mut c_void;
type EntryRange = unsafe extern "C" fn(usize, *const c_char, *const c_char, *const c_char, usize) -> *mut c_void;
type EntryFormula =
	unsafe extern "C" fn(usize, *const c_char, *const c_char, *const c_char, *const c_void) -> *mut c_void;
type EntryHyperlink = unsafe extern "C" fn(
	usize,
	*const c_char,
	*const c_char,
	*const c_char,
	*const c_char,
	*const c_void,
) -> *mut c_void;

fn library() -> Library {
	library_with(Vec::new())
}

/// The fake workbook with some entry points replaced
fn library_with(overrides: Vec<(&'static str, RawEntry)>) -> Library {
	testing::init_tracing();
	let mut symbols: Vec<(&'static str, RawEntry)> = unsafe {
		vec![
			("OpenFile", raw_entry(open_file as unsafe extern "C" fn(*const c_char, *const c_void) -> *mut c_void)),
			("NewFile", raw_entry(new_file as Entry0)),
			("Close", raw_entry(close as Entry1)),
			("Save", raw_entry(save as EntryRecord)),
			(
				"SaveAs",
				raw_entry(save_as as unsafe extern "C" fn(usize, *const c_char, *const c_void) -> *mut c_void),
			),
			("NewSheet", raw_entry(new_sheet as EntryText)),
			("SetActiveSheet", raw_entry(set_active_sheet as Entry2)),
			("GetSheetName", raw_entry(get_sheet_name as Entry2)),
			("SetCellValue", raw_entry(set_cell_value as EntryCellRecord)),
			("GetCellValue", raw_entry(get_cell_value as EntryCellRecord)),
			("GetCellType", raw_entry(get_cell_type as EntryCell)),
			("NewStyle", raw_entry(new_style as EntryRecord)),
			("GetStyle", raw_entry(get_style as Entry2)),
			("SetCellStyle", raw_entry(set_cell_style as EntryRange)),
			(
				"GetRows",
				raw_entry(get_rows as unsafe extern "C" fn(usize, *const c_char, *const c_void) -> *mut c_void),
			),
			(
				"SetSheetBackgroundFromBytes",
				raw_entry(
					set_sheet_background_from_bytes
						as unsafe extern "C" fn(
							usize,
							*const c_char,
							*const c_char,
							*const u8,
							usize,
						) -> *mut c_void,
				),
			),
			("GetAppProps", raw_entry(get_app_props as Entry1)),
			("SetAppProps", raw_entry(set_app_props as EntryRecord)),
			("SetCellHyperLink", raw_entry(set_cell_hyperlink as EntryHyperlink)),
			("SetCellFormula", raw_entry(set_cell_formula as EntryFormula)),
			("SetDefinedName", raw_entry(set_defined_name as EntryRecord)),
			("GetDefinedName", raw_entry(get_defined_name as Entry1)),
			("SetWorkbookProps", raw_entry(set_workbook_props as EntryRecord)),
			("GetWorkbookProps", raw_entry(get_workbook_props as Entry1)),
		]
	};
	symbols.retain(|(name, _)| overrides.iter().all(|(replaced, _)| replaced != name));
	symbols.extend(overrides);
	match Library::from_symbols(&ENTRY_TABLE, symbols, testing::release) {
		Ok(library) => library,
		Err(err) => panic!("{err}"),
	}
}

fn native(message: &str) -> Error {
	Error::Native(message.to_string())
}

#[test]
fn test_style_round_trip() {
	let library = library();
	let f = Excelize::new(&library).new_file().unwrap();

	let style = Style {
		border: vec![
			Border {
				r#type: "left".to_string(),
				color: "0000FF".to_string(),
				style: 3,
			},
			Border {
				r#type: "right".to_string(),
				color: "FF0000".to_string(),
				style: 6,
			},
		],
		fill: Fill {
			r#type: "gradient".to_string(),
			color: vec!["FFFFFF".to_string(), "E0EBF5".to_string()],
			shading: 1,
			..Fill::default()
		},
		font: Some(Font {
			bold: true,
			family: "Times New Roman".to_string(),
			size: 12.0,
			color_theme: Some(2),
			..Font::default()
		}),
		protection: Some(Protection {
			hidden: true,
			locked: true,
		}),
		custom_num_fmt: Some(";;;".to_string()),
		..Style::default()
	};

	let style_id = f.new_style(&style).unwrap();
	assert_eq!(style_id, 1);
	assert_eq!(f.get_style(style_id).unwrap(), style);

	f.set_cell_style("Sheet1", "A1", "B2", style_id).unwrap();
	assert_eq!(f.get_style(2).unwrap_err(), native("invalid style ID 2"));
	assert_eq!(f.set_cell_style("SheetN", "A1", "B2", style_id).unwrap_err(), native("sheet SheetN does not exist"));

	f.close().unwrap();
	assert_eq!(live_results(), 0);
}

#[test]
fn test_sheets() {
	let library = library();
	let f = Excelize::new(&library).new_file().unwrap();

	assert_eq!(f.new_sheet("Sheet2").unwrap(), 1);
	assert_eq!(f.get_sheet_name(1).unwrap(), "Sheet2");
	f.set_active_sheet(1).unwrap();

	let err = f.new_sheet(&":".repeat(32)).unwrap_err();
	assert_eq!(err, native("the sheet name length exceeds the 31 characters limit"));
}

#[test]
fn test_cell_values() {
	let library = library();
	let f = Excelize::new(&library).new_file().unwrap();

	f.set_cell_value("Sheet1", "A1", "Hello").unwrap();
	f.set_cell_value("Sheet1", "B1", 100).unwrap();
	f.set_cell_value("Sheet1", "C1", 123.45).unwrap();
	f.set_cell_value("Sheet1", "D1", true).unwrap();
	f.set_cell_value("Sheet1", "E1", None::<&str>).unwrap();

	assert_eq!(f.get_cell_value("Sheet1", "A1", None).unwrap(), "Hello");
	assert_eq!(f.get_cell_value("Sheet1", "B1", None).unwrap(), "100");
	assert_eq!(f.get_cell_value("Sheet1", "C1", Some(&Options::default())).unwrap(), "123.45");
	assert_eq!(f.get_cell_value("Sheet1", "D1", None).unwrap(), "TRUE");
	assert_eq!(f.get_cell_value("Sheet1", "E1", None).unwrap(), "");

	assert_eq!(f.get_cell_type("Sheet1", "A1").unwrap(), CellType::SharedString);
	assert_eq!(f.get_cell_type("Sheet1", "B1").unwrap(), CellType::Number);
	assert_eq!(f.get_cell_type("Sheet1", "D1").unwrap(), CellType::Bool);
	assert_eq!(f.get_cell_type("Sheet1", "Z9").unwrap(), CellType::Unset);

	let err = f.set_cell_value("SheetN", "A1", "Hello").unwrap_err();
	assert_eq!(err, native("sheet SheetN does not exist"));
	assert_eq!(live_results(), 0);
}

#[test]
fn test_cell_value_out_of_range_never_reaches_native() {
	let library = library();
	let f = Excelize::new(&library).new_file().unwrap();

	let err = f.set_cell_value("Sheet1", "A1", i64::MAX).unwrap_err();
	assert_eq!(err.path(), Some("Interface.integer"));
	assert_eq!(f.get_cell_value("Sheet1", "A1", None).unwrap(), "");
}

#[test]
fn test_rows() {
	let library = library();
	let f = Excelize::new(&library).new_file().unwrap();

	f.set_cell_value("Sheet1", "A1", "Name").unwrap();
	f.set_cell_value("Sheet1", "B1", "Score").unwrap();
	f.set_cell_value("Sheet1", "A2", "Ada").unwrap();
	f.set_cell_value("Sheet1", "B2", 90).unwrap();
	f.set_cell_value("Sheet1", "B4", false).unwrap();

	let rows = f.get_rows("Sheet1", None).unwrap();
	assert_eq!(
		rows,
		vec![
			vec!["Name".to_string(), "Score".to_string()],
			vec!["Ada".to_string(), "90".to_string()],
			Vec::new(),
			vec![String::new(), "FALSE".to_string()],
		]
	);

	f.new_sheet("Empty").unwrap();
	assert!(f.get_rows("Empty", None).unwrap().is_empty());
	assert_eq!(f.get_rows("SheetN", None).unwrap_err(), native("sheet SheetN does not exist"));
}

#[test]
fn test_background_from_bytes() {
	let library = library();
	let f = Excelize::new(&library).new_file().unwrap();

	let picture = vec![0x89, b'P', b'N', b'G', 0, 1, 2];
	f.set_sheet_background_from_bytes("Sheet1", ".png", &picture).unwrap();
	let stored = WORKBOOK.with(|book| book.borrow().background.clone());
	assert_eq!(stored, Some((".png".to_string(), picture)));

	let err = f.set_sheet_background_from_bytes("Sheet1", ".txt", &[]).unwrap_err();
	assert_eq!(err, native("unsupported image extension"));
}

#[test]
fn test_app_props() {
	let library = library();
	let f = Excelize::new(&library).new_file().unwrap();

	assert_eq!(f.get_app_props().unwrap(), AppProperties::default());

	let props = AppProperties {
		application: "Microsoft Excel".to_string(),
		scale_crop: true,
		doc_security: 3,
		company: "Company Name".to_string(),
		links_up_to_date: true,
		hyperlinks_changed: true,
		app_version: "16.0000".to_string(),
	};
	f.set_app_props(&props).unwrap();
	assert_eq!(f.get_app_props().unwrap(), props);
}

#[test]
fn test_defined_names() {
	let library = library();
	let f = Excelize::new(&library).new_file().unwrap();

	assert!(f.get_defined_name().unwrap().is_empty());

	let amount = DefinedName {
		name: "Amount".to_string(),
		refers_to: "Sheet1!$A$2:$D$5".to_string(),
		comment: "defined name comment".to_string(),
		scope: "Sheet1".to_string(),
	};
	let total = DefinedName {
		name: "Total".to_string(),
		refers_to: "Sheet1!$E$2".to_string(),
		..DefinedName::default()
	};
	f.set_defined_name(&amount).unwrap();
	f.set_defined_name(&total).unwrap();
	assert_eq!(f.get_defined_name().unwrap(), vec![amount, total]);
}

#[test]
fn test_workbook_props() {
	let library = library();
	let f = Excelize::new(&library).new_file().unwrap();

	let props = WorkbookPropsOptions {
		date1904: Some(true),
		filter_privacy: None,
		code_name: Some("code".to_string()),
	};
	f.set_workbook_props(&props).unwrap();
	assert_eq!(f.get_workbook_props().unwrap(), props);
}

#[test]
fn test_links_and_formulas() {
	let library = library();
	let f = Excelize::new(&library).new_file().unwrap();

	f.set_cell_hyperlink("Sheet1", "A3", "https://github.com/xuri/excelize", "External", None).unwrap();
	let err = f.set_cell_hyperlink("Sheet1", "A3", "Sheet1!A40", "None", None).unwrap_err();
	assert_eq!(err, native("invalid link type"));

	f.set_cell_formula("Sheet1", "C1", "=SUM(A1,B1)", None).unwrap();
}

#[test]
fn test_open_and_save() {
	let library = library();
	let excelize = Excelize::new(&library);

	let err = excelize.open_file("Book1.xlsx", None).err();
	assert_eq!(err, Some(native("open Book1.xlsx: no such file or directory")));

	let f = excelize.new_file().unwrap();
	assert_eq!(f.index(), 0);
	f.save(None).unwrap();
	assert_eq!(
		f.save(Some(&Options::default())).unwrap_err(),
		native("no path defined for file, consider File.WriteTo or File.Write")
	);
	f.save_as("Book1.xlsx", None).unwrap();
	assert_eq!(f.save_as("Book1.txt", None).unwrap_err(), native("unsupported workbook file format"));
	assert_eq!(live_results(), 0);
}

unsafe extern "C" fn no_document() -> *mut c_void {
	std::ptr::null_mut()
}

unsafe extern "C" fn no_document_opened(_filename: *const c_char, _options: *const c_void) -> *mut c_void {
	std::ptr::null_mut()
}

#[test]
fn test_missing_handle_is_an_error() {
	let library = library_with(unsafe {
		vec![
			("NewFile", raw_entry(no_document as Entry0)),
			(
				"OpenFile",
				raw_entry(no_document_opened as unsafe extern "C" fn(*const c_char, *const c_void) -> *mut c_void),
			),
		]
	});
	let excelize = Excelize::new(&library);

	assert_eq!(excelize.new_file().err(), Some(Error::MissingValue("NewFile".to_string())));
	assert_eq!(excelize.open_file("Book1.xlsx", None).err(), Some(Error::MissingValue("OpenFile".to_string())));
	assert_eq!(live_results(), 0);
}
