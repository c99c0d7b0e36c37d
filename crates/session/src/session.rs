// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vql_sql::Parser;

use crate::{
	config::SessionConfig,
	handler::{Handler, dispatch},
};

/// Parses statements and routes them to a [`Handler`].
#[derive(Debug, Clone, Default)]
pub struct Session {
	parser: Parser,
	config: SessionConfig,
}

impl Session {
	pub fn new(config: SessionConfig) -> Self {
		Self {
			parser: Parser::default(),
			config,
		}
	}

	pub fn with_parser(parser: Parser, config: SessionConfig) -> Self {
		Self {
			parser,
			config,
		}
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	/// Run one statement. A missing trailing `;` is supplied.
	pub fn execute<H: Handler>(&self, text: &str, handler: &mut H) -> crate::Result<H::Output> {
		let command = self.parser.parse(&terminate(text))?;
		dispatch(handler, &self.config, &command)
	}
}

/// Append `;` unless the statement already ends with one.
pub fn terminate(text: &str) -> String {
	let trimmed = text.trim_end();
	if trimmed.ends_with(';') {
		trimmed.to_string()
	} else {
		format!("{trimmed};")
	}
}
