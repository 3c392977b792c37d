// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Records exchanged with the native library
//!
//! Field order is the layout order of the matching native struct.

use excelize_marshal::{Element, FieldKind, HostRecord, Primitive, host_record};

use crate::enums::CultureName;

const TEXT: FieldKind = FieldKind::CString;
const BOOL: FieldKind = FieldKind::Scalar(Primitive::Bool);
const INT: FieldKind = FieldKind::Scalar(Primitive::I32);
const FLOAT: FieldKind = FieldKind::Scalar(Primitive::F64);

host_record! {
	/// Options for opening, reading and saving a workbook
	pub struct Options {
		pub max_calc_iterations: u32 => FieldKind::Scalar(Primitive::U32),
		pub password: String => TEXT,
		pub raw_cell_value: bool => BOOL,
		pub unzip_size_limit: i64 => FieldKind::Scalar(Primitive::I64),
		pub unzip_xml_size_limit: i64 => FieldKind::Scalar(Primitive::I64),
		pub short_date_pattern: String => TEXT,
		pub long_date_pattern: String => TEXT,
		pub long_time_pattern: String => TEXT,
		pub culture_info: CultureName => FieldKind::Scalar(Primitive::U8),
	}
}

host_record! {
	/// Tagged cell value; see [`CellValue`](crate::CellValue)
	pub struct Interface {
		pub r#type: i32 => INT,
		pub integer: i64 => INT,
		pub string: String => TEXT,
		pub float64: f64 => FLOAT,
		pub boolean: bool => BOOL,
	}
}

host_record! {
	pub struct AppProperties {
		pub application: String => TEXT,
		pub scale_crop: bool => BOOL,
		pub doc_security: i32 => INT,
		pub company: String => TEXT,
		pub links_up_to_date: bool => BOOL,
		pub hyperlinks_changed: bool => BOOL,
		pub app_version: String => TEXT,
	}
}

host_record! {
	pub struct Border {
		pub r#type: String => TEXT,
		pub color: String => TEXT,
		pub style: i32 => INT,
	}
}

host_record! {
	pub struct Fill {
		pub r#type: String => TEXT,
		pub pattern: i32 => INT,
		pub color: Vec<String> => FieldKind::Sequence(Element::CString),
		pub shading: i32 => INT,
	}
}

host_record! {
	pub struct Font {
		pub bold: bool => BOOL,
		pub italic: bool => BOOL,
		pub underline: String => TEXT,
		pub family: String => TEXT,
		pub size: f64 => FLOAT,
		pub strike: bool => BOOL,
		pub color: String => TEXT,
		pub color_indexed: i32 => INT,
		pub color_theme: Option<i32> => FieldKind::Pointer(Primitive::I32),
		pub color_tint: f64 => FLOAT,
		pub vert_align: String => TEXT,
	}
}

host_record! {
	pub struct Alignment {
		pub horizontal: String => TEXT,
		pub indent: i32 => INT,
		pub justify_last_line: bool => BOOL,
		pub reading_order: i64 => FieldKind::Scalar(Primitive::U64),
		pub relative_indent: i32 => INT,
		pub shrink_to_fit: bool => BOOL,
		pub text_rotation: i32 => INT,
		pub vertical: String => TEXT,
		pub wrap_text: bool => BOOL,
	}
}

host_record! {
	pub struct Protection {
		pub hidden: bool => BOOL,
		pub locked: bool => BOOL,
	}
}

host_record! {
	/// Cell style
	///
	/// `font`, `alignment` and `protection` are pointers on the native side
	/// and stay `None` when unset; `fill` is inline and always present.
	pub struct Style {
		pub border: Vec<Border> => FieldKind::Sequence(Element::Struct(Border::descriptor())),
		pub fill: Fill => FieldKind::Struct(Fill::descriptor()),
		pub font: Option<Font> => FieldKind::StructPointer(Font::descriptor()),
		pub alignment: Option<Alignment> => FieldKind::StructPointer(Alignment::descriptor()),
		pub protection: Option<Protection> => FieldKind::StructPointer(Protection::descriptor()),
		pub num_fmt: i32 => INT,
		pub decimal_places: Option<i32> => FieldKind::Pointer(Primitive::I32),
		pub custom_num_fmt: Option<String> => TEXT,
		pub neg_red: bool => BOOL,
	}
}

host_record! {
	pub struct Row {
		pub cell: Vec<String> => FieldKind::Sequence(Element::CString),
	}
}

host_record! {
	pub struct GetRowsResult {
		pub row: Vec<Row> => FieldKind::Sequence(Element::Struct(Row::descriptor())),
	}
}

host_record! {
	pub struct HyperlinkOpts {
		pub display: Option<String> => TEXT,
		pub tooltip: Option<String> => TEXT,
	}
}

host_record! {
	pub struct FormulaOpts {
		pub r#type: Option<String> => TEXT,
		pub r#ref: Option<String> => TEXT,
	}
}

host_record! {
	pub struct DefinedName {
		pub name: String => TEXT,
		pub comment: String => TEXT,
		pub refers_to: String => TEXT,
		pub scope: String => TEXT,
	}
}

host_record! {
	pub struct WorkbookPropsOptions {
		pub date1904: Option<bool> => FieldKind::Pointer(Primitive::Bool),
		pub filter_privacy: Option<bool> => FieldKind::Pointer(Primitive::Bool),
		pub code_name: Option<String> => TEXT,
	}
}
