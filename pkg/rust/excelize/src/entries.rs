// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use excelize_abi::{Descriptor, Element, EntryPoint, EntryTable, FieldKind, Param, Primitive};
use excelize_marshal::HostRecord;
use once_cell::sync::Lazy;

use crate::types::{
	AppProperties, DefinedName, FormulaOpts, GetRowsResult, HyperlinkOpts, Interface, Options, Style,
	WorkbookPropsOptions,
};

/// Symbol that hands result blocks back to the native allocator
pub const RELEASE_SYMBOL: &str = "FreeResult";

fn error_result() -> Descriptor {
	Descriptor::envelope("ErrorResult", None)
}

fn int_result() -> Descriptor {
	Descriptor::envelope("IntErrorResult", Some(FieldKind::Scalar(Primitive::I32)))
}

fn string_result() -> Descriptor {
	Descriptor::envelope("StringErrorResult", Some(FieldKind::CString))
}

/// Every entry point the bindings call, with its parameters in call order
pub static ENTRY_TABLE: Lazy<EntryTable> = Lazy::new(|| {
	let options = Param::Record(Options::descriptor());

	EntryTable::new(
		RELEASE_SYMBOL,
		[
			EntryPoint::new("OpenFile", [Param::CString, options], int_result()),
			EntryPoint::new("NewFile", Vec::new(), int_result()),
			EntryPoint::new("Close", [Param::Int], error_result()),
			EntryPoint::new("Save", [Param::Int, options], error_result()),
			EntryPoint::new("SaveAs", [Param::Int, Param::CString, options], error_result()),
			EntryPoint::new("NewSheet", [Param::Int, Param::CString], int_result()),
			EntryPoint::new("SetActiveSheet", [Param::Int, Param::Int], error_result()),
			EntryPoint::new("GetSheetName", [Param::Int, Param::Int], string_result()),
			EntryPoint::new(
				"SetCellValue",
				[Param::Int, Param::CString, Param::CString, Param::Record(Interface::descriptor())],
				error_result(),
			),
			EntryPoint::new("GetCellValue", [Param::Int, Param::CString, Param::CString, options], string_result()),
			EntryPoint::new("GetCellType", [Param::Int, Param::CString, Param::CString], int_result()),
			EntryPoint::new("NewStyle", [Param::Int, Param::Record(Style::descriptor())], int_result()),
			EntryPoint::new(
				"GetStyle",
				[Param::Int, Param::Int],
				Descriptor::envelope("StyleErrorResult", Some(FieldKind::StructPointer(Style::descriptor()))),
			),
			EntryPoint::new(
				"SetCellStyle",
				[Param::Int, Param::CString, Param::CString, Param::CString, Param::Int],
				error_result(),
			),
			EntryPoint::new(
				"GetRows",
				[Param::Int, Param::CString, options],
				Descriptor::envelope("GetRowsErrorResult", Some(FieldKind::Struct(GetRowsResult::descriptor()))),
			),
			EntryPoint::new(
				"SetSheetBackgroundFromBytes",
				[Param::Int, Param::CString, Param::CString, Param::Bytes],
				error_result(),
			),
			EntryPoint::new(
				"GetAppProps",
				[Param::Int],
				Descriptor::envelope(
					"AppPropertiesErrorResult",
					Some(FieldKind::StructPointer(AppProperties::descriptor())),
				),
			),
			EntryPoint::new("SetAppProps", [Param::Int, Param::Record(AppProperties::descriptor())], error_result()),
			EntryPoint::new(
				"SetCellHyperLink",
				[
					Param::Int,
					Param::CString,
					Param::CString,
					Param::CString,
					Param::CString,
					Param::Record(HyperlinkOpts::descriptor()),
				],
				error_result(),
			),
			EntryPoint::new(
				"SetCellFormula",
				[Param::Int, Param::CString, Param::CString, Param::CString, Param::Record(FormulaOpts::descriptor())],
				error_result(),
			),
			EntryPoint::new("SetDefinedName", [Param::Int, Param::Record(DefinedName::descriptor())], error_result()),
			EntryPoint::new(
				"GetDefinedName",
				[Param::Int],
				Descriptor::envelope(
					"DefinedNameErrorResult",
					Some(FieldKind::Sequence(Element::Struct(DefinedName::descriptor()))),
				),
			),
			EntryPoint::new(
				"SetWorkbookProps",
				[Param::Int, Param::Record(WorkbookPropsOptions::descriptor())],
				error_result(),
			),
			EntryPoint::new(
				"GetWorkbookProps",
				[Param::Int],
				Descriptor::envelope(
					"WorkbookPropsOptionsErrorResult",
					Some(FieldKind::StructPointer(WorkbookPropsOptions::descriptor())),
				),
			),
		],
	)
});
