// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Vocabulary shared by every VQL crate: source [`fragment`]s, [`error`]
//! diagnostics and literal [`value`]s.

pub mod error;
pub mod fragment;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic};
pub use fragment::{Fragment, StatementColumn, StatementLine};
pub use value::{Params, Value};

pub type Result<T> = std::result::Result<T, Error>;
