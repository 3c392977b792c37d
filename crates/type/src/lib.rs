// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Host-side value model shared by every crate of the excelize bridge.
//!
//! A [`Value`] is the dynamically shaped form of anything that crosses the
//! native boundary. Typed domain records convert to and from it, and the
//! marshaller converts it to and from foreign memory.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod path;
pub mod value;

pub use error::{Error, Result};
pub use path::FieldPath;
pub use value::{Value, ValueKind};
