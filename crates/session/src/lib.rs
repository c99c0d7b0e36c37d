// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Execution-layer interface for parsed VQL commands.
//!
//! A [`Session`] parses a statement, resolves the configured defaults for
//! its kind and hands it to a [`Handler`]. Talking to a store is the
//! handler's business.

pub mod config;
pub mod error;
pub mod handler;
pub mod hits;
pub mod session;

pub use config::{OperationDefaults, Section, SessionConfig};
pub use error::SessionError;
pub use handler::{Handler, WriteRequest, dispatch};
pub use hits::{Hit, flatten_hits};
pub use session::{Session, terminate};
pub use vql_type::{Error, Result};
