// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Locating and loading the excelize native library
//!
//! [`resolve`] maps the host platform to the artifact shipped for it,
//! [`Library::load`] opens that artifact and binds every declared entry point,
//! and [`ensure_loaded`] does both once per process.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
mod error;
mod global;
mod library;
mod platform;

pub use config::{LIB_DIR_ENV, LoaderConfig};
pub use error::{LoadError, PlatformError};
pub use global::{ensure_loaded, ensure_loaded_with, load_once, loaded};
pub use library::{BoundEntry, Library};
pub use platform::{Arch, Artifact, HostFacts, Os, PointerWidth, resolve};
