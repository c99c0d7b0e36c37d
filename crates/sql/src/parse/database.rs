// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{Command, parse::StatementParser, token::Keyword};

impl StatementParser {
	pub(crate) fn parse_create_database(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Create)?;
		self.consume_keyword(Keyword::Database)?;
		Ok(Command::CreateDatabase {
			name: self.parse_identifier()?,
		})
	}

	pub(crate) fn parse_drop_database(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Drop)?;
		self.consume_keyword(Keyword::Database)?;
		Ok(Command::DropDatabase {
			name: self.parse_identifier()?,
		})
	}

	pub(crate) fn parse_use_database(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Use)?;
		Ok(Command::UseDatabase {
			name: self.parse_identifier()?,
		})
	}

	pub(crate) fn parse_show_databases(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Show)?;
		self.consume_keyword(Keyword::Databases)?;
		Ok(Command::ShowDatabases)
	}
}

#[cfg(test)]
mod tests {
	use crate::{Command, parse::tests::parse};

	#[test]
	fn test_create_database() {
		assert_eq!(
			parse("CREATE DATABASE library;").unwrap(),
			Command::CreateDatabase {
				name: "library".to_string()
			}
		);
	}

	#[test]
	fn test_use_and_drop_database() {
		assert_eq!(
			parse("use Library;").unwrap(),
			Command::UseDatabase {
				name: "Library".to_string()
			}
		);
		assert_eq!(
			parse("drop database library;").unwrap(),
			Command::DropDatabase {
				name: "library".to_string()
			}
		);
	}

	#[test]
	fn test_show_databases() {
		assert_eq!(parse("show databases;").unwrap(), Command::ShowDatabases);
	}

	#[test]
	fn test_database_name_must_be_identifier() {
		let err = parse("create database 'lib';").unwrap_err();
		assert!(err.is_grammar());
		assert_eq!(err.fragment.text(), "lib");
	}

	#[test]
	fn test_show_database_singular_rejected() {
		assert!(parse("show database;").unwrap_err().is_grammar());
	}
}
