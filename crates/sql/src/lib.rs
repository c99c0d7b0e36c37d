// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! VQL statement front end.
//!
//! Turns one `;`-terminated statement into a [`Command`]:
//! - [`token`] splits the text into tokens
//! - the parser matches the token stream against the statement grammar
//! - [`emit`] compiles `WHERE` conditions into the predicate string the
//!   store evaluates
//!
//! ```
//! let command = vql_sql::parse("delete from T where book_id between 3 and 5;").unwrap();
//! assert_eq!(command.kind().as_str(), "delete");
//! ```

pub mod ast;
pub mod command;
pub mod emit;
pub mod error;
mod parse;
pub mod token;

pub use command::{
	BulkInsert, Command, CommandKind, CreateCollection, CreateIndex, Delete, FieldDefinition, FieldType,
	IndexParams, Query, Search, SearchParam, Write,
};
pub use error::SqlError;
use tracing::{instrument, trace};
pub use vql_type::{Error, Params, Result, Value};

use vql_type::return_error;

use crate::{
	parse::{DEFAULT_MAX_DEPTH, StatementParser},
	token::tokenize,
};

/// Limits applied while a statement is parsed.
#[derive(Debug, Clone)]
pub struct ParseOptions {
	/// Longest accepted statement in bytes. `None` = unbounded.
	///
	/// Default: `None`
	pub max_statement_len: Option<usize>,

	/// Deepest accepted nesting of parentheses, lists, objects and `NOT`.
	///
	/// Default: `64`
	pub max_depth: usize,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self {
			max_statement_len: None,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

impl ParseOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn max_statement_len(mut self, max: usize) -> Self {
		self.max_statement_len = Some(max);
		self
	}

	pub fn max_depth(mut self, max: usize) -> Self {
		self.max_depth = max;
		self
	}
}

#[derive(Debug, Clone, Default)]
pub struct Parser {
	options: ParseOptions,
}

impl Parser {
	pub fn new(options: ParseOptions) -> Self {
		Self {
			options,
		}
	}

	/// Parse one statement. Errors carry the statement text so they render
	/// with the offending line.
	#[instrument(name = "sql::parse", level = "trace", skip_all)]
	pub fn parse(&self, text: &str) -> Result<Command> {
		self.parse_statement(text).map_err(|mut err| {
			err.with_statement(text);
			err
		})
	}

	fn parse_statement(&self, text: &str) -> Result<Command> {
		if let Some(max) = self.options.max_statement_len {
			if text.len() > max {
				return_error!(SqlError::StatementTooLong {
					length: text.len(),
					max,
				});
			}
		}

		let tokens = tokenize(text)?;
		let command = StatementParser::with_max_depth(tokens, self.options.max_depth).parse()?;
		trace!(kind = %command.kind(), "parsed");
		Ok(command)
	}
}

/// Parse one statement with default options.
pub fn parse(text: &str) -> Result<Command> {
	Parser::default().parse(text)
}
