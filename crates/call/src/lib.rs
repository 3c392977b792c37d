// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Call adapter for the excelize native library
//!
//! An [`Invoker`] drives one entry point at a time: host arguments are
//! converted into a per-call arena, the bound function is called, the
//! returned envelope is checked for an error message and otherwise decoded,
//! and finally the result block and the arena are released.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

mod dispatch;
mod invoker;
mod state;
pub mod testing;

pub use invoker::Invoker;
pub use state::CallState;
