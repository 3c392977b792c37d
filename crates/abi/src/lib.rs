// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! C ABI definitions for the excelize native library
//!
//! This crate describes the memory layout of every record that crosses the
//! boundary ([`Descriptor`]) and the calling convention shared by all
//! exported entry points ([`EntryPoint`]). It holds no conversion logic;
//! `excelize-marshal` interprets these descriptors.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod data;
pub mod entry;

pub use data::{
	layout::{Descriptor, Element, Field, FieldKind},
	primitive::Primitive,
};
pub use entry::{EntryPoint, EntryTable, Param, RawEntry, ReleaseFn};
