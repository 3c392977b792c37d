// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Type conversion engine for the excelize native bridge
//!
//! [`encode`] turns a host [`Value`] into a foreign block laid out per a
//! [`Descriptor`]; [`decode`] reads such a block back. Every allocation made
//! while encoding lives in one [`Arena`] and is released with it.
//!
//! Typed records implement [`HostRecord`], usually through [`host_record!`],
//! and go through the same engine via [`encode_record`] and [`decode_record`].

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod arena;
pub mod decode;
pub mod encode;
mod macros;
pub mod record;

pub use arena::Arena;
pub use decode::{decode, decode_field};
pub use encode::{encode, encode_optional};
pub use excelize_abi::{Descriptor, Element, Field, FieldKind, Primitive};
pub use excelize_type::{Error, FieldPath, Result, Value};
pub use record::{Bytes, FromValue, HostRecord, ToValue, decode_record, encode_record};

#[doc(hidden)]
pub mod __private {
	pub use once_cell::sync::Lazy;

	pub use crate::record::{expect_record, field_name};
}
