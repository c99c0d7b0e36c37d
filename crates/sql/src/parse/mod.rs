// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod collection;
mod condition;
mod database;
mod delete;
mod field;
mod index;
mod insert;
mod literal;
mod partition;
mod select;

use vql_type::{error, return_error};

use crate::{
	Command,
	error::SqlError,
	token::{Keyword, Literal, Operator, Separator, Token, TokenKind},
};

/// Nesting allowed when no limit is configured.
pub(crate) const DEFAULT_MAX_DEPTH: usize = 64;

/// Recursive-descent parser over one statement's tokens.
pub(crate) struct StatementParser {
	tokens: Vec<Token>,
	position: usize,
	depth: usize,
	max_depth: usize,
}

impl StatementParser {
	pub(crate) fn new(tokens: Vec<Token>) -> Self {
		Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
	}

	pub(crate) fn with_max_depth(tokens: Vec<Token>, max_depth: usize) -> Self {
		Self {
			tokens,
			position: 0,
			depth: 0,
			max_depth,
		}
	}

	/// Parse exactly one `;`-terminated statement. Anything after the
	/// terminator is rejected.
	pub(crate) fn parse(&mut self) -> crate::Result<Command> {
		let command = self.parse_command()?;
		self.consume_separator(Separator::Semicolon)?;
		if let Some(token) = self.tokens.get(self.position) {
			return Err(unexpected(token));
		}
		Ok(command)
	}

	fn parse_command(&mut self) -> crate::Result<Command> {
		let keyword = match self.current()?.kind {
			TokenKind::Keyword(keyword) => keyword,
			_ => return Err(self.unexpected_at(0)),
		};

		match keyword {
			Keyword::Create => match self.peek_keyword(1) {
				Some(Keyword::Database) => self.parse_create_database(),
				Some(Keyword::Collection) => self.parse_create_collection(),
				Some(Keyword::Alias) => self.parse_create_alias(),
				Some(Keyword::Partition) => self.parse_create_partition(),
				Some(Keyword::Index) => self.parse_create_index(),
				_ => Err(self.unexpected_at(1)),
			},
			Keyword::Drop => match self.peek_keyword(1) {
				Some(Keyword::Database) => self.parse_drop_database(),
				Some(Keyword::Collection) => self.parse_drop_collection(),
				Some(Keyword::Alias) => self.parse_drop_alias(),
				Some(Keyword::Partition) => self.parse_drop_partition(),
				Some(Keyword::Index) => self.parse_drop_index(),
				_ => Err(self.unexpected_at(1)),
			},
			Keyword::Show => match self.peek_keyword(1) {
				Some(Keyword::Databases) => self.parse_show_databases(),
				Some(Keyword::Collections) => self.parse_show_collections(),
				Some(Keyword::Aliases) => self.parse_show_aliases(),
				Some(Keyword::Partitions) => self.parse_show_partitions(),
				Some(Keyword::Indexes) => self.parse_show_indexes(),
				_ => Err(self.unexpected_at(1)),
			},
			Keyword::Load => match self.peek_keyword(1) {
				Some(Keyword::Collection) => self.parse_load_collection(),
				Some(Keyword::Partition) => self.parse_load_partitions(),
				_ => Err(self.unexpected_at(1)),
			},
			Keyword::Release => match self.peek_keyword(1) {
				Some(Keyword::Collection) => self.parse_release_collection(),
				Some(Keyword::Partition) => self.parse_release_partitions(),
				_ => Err(self.unexpected_at(1)),
			},
			Keyword::Use => self.parse_use_database(),
			Keyword::Rename => self.parse_rename_collection(),
			Keyword::Compact => self.parse_compact_collection(),
			Keyword::Bulk => self.parse_bulk_insert(),
			Keyword::Insert | Keyword::Upsert => self.parse_insert(),
			Keyword::Delete => self.parse_delete(),
			Keyword::Select => self.parse_select(),
			_ => Err(self.unexpected_at(0)),
		}
	}

	pub(crate) fn advance(&mut self) -> crate::Result<Token> {
		let token = self.current()?.clone();
		self.position += 1;
		Ok(token)
	}

	pub(crate) fn current(&self) -> crate::Result<&Token> {
		self.tokens.get(self.position).ok_or_else(|| SqlError::UnexpectedEndOfInput.into())
	}

	pub(crate) fn peek(&self, offset: usize) -> Option<&Token> {
		self.tokens.get(self.position + offset)
	}

	fn peek_keyword(&self, offset: usize) -> Option<Keyword> {
		match self.peek(offset)?.kind {
			TokenKind::Keyword(keyword) => Some(keyword),
			_ => None,
		}
	}

	pub(crate) fn is_eof(&self) -> bool {
		self.position >= self.tokens.len()
	}

	pub(crate) fn consume(&mut self, expected: TokenKind) -> crate::Result<Token> {
		let current = self.current()?;
		if current.kind != expected {
			return Err(unexpected(current));
		}
		self.advance()
	}

	pub(crate) fn consume_if(&mut self, expected: TokenKind) -> crate::Result<Option<Token>> {
		if self.is_eof() || self.current()?.kind != expected {
			return Ok(None);
		}
		Ok(Some(self.advance()?))
	}

	pub(crate) fn consume_keyword(&mut self, keyword: Keyword) -> crate::Result<Token> {
		self.consume(TokenKind::Keyword(keyword))
	}

	pub(crate) fn consume_operator(&mut self, operator: Operator) -> crate::Result<Token> {
		self.consume(TokenKind::Operator(operator))
	}

	pub(crate) fn consume_separator(&mut self, separator: Separator) -> crate::Result<Token> {
		self.consume(TokenKind::Separator(separator))
	}

	pub(crate) fn consume_literal(&mut self, literal: Literal) -> crate::Result<Token> {
		self.consume(TokenKind::Literal(literal))
	}

	/// Match a bare word regardless of case or whether it lexed as keyword.
	pub(crate) fn consume_word(&mut self, word: &str) -> crate::Result<Token> {
		let current = self.current()?;
		if !current.is_word(word) {
			return Err(unexpected(current));
		}
		self.advance()
	}

	pub(crate) fn current_is_keyword(&self, keyword: Keyword) -> bool {
		self.peek(0).is_some_and(|t| t.is_keyword(keyword))
	}

	pub(crate) fn current_is_operator(&self, operator: Operator) -> bool {
		self.peek(0).is_some_and(|t| t.is_operator(operator))
	}

	/// Collection, partition, index and field names.
	pub(crate) fn parse_identifier(&mut self) -> crate::Result<String> {
		Ok(self.consume(TokenKind::Identifier)?.text().to_string())
	}

	/// `[PARTITION p ON] coll`
	pub(crate) fn parse_target(&mut self) -> crate::Result<(Option<String>, String)> {
		if self.consume_if(TokenKind::Keyword(Keyword::Partition))?.is_some() {
			let part = self.parse_identifier()?;
			self.consume_keyword(Keyword::On)?;
			let coll = self.parse_identifier()?;
			Ok((Some(part), coll))
		} else {
			Ok((None, self.parse_identifier()?))
		}
	}

	/// Enter one level of `(`, `[`, `{` or `NOT`. Every successful call is
	/// paired with [`Self::ascend`].
	pub(crate) fn descend(&mut self) -> crate::Result<()> {
		if self.depth >= self.max_depth {
			return_error!(SqlError::NestingTooDeep {
				fragment: self.peek(0).map(|t| t.fragment.clone()).unwrap_or_default(),
				max: self.max_depth,
			});
		}
		self.depth += 1;
		Ok(())
	}

	pub(crate) fn ascend(&mut self) {
		self.depth -= 1;
	}

	pub(crate) fn unexpected_at(&self, offset: usize) -> vql_type::Error {
		match self.peek(offset) {
			Some(token) => unexpected(token),
			None => SqlError::UnexpectedEndOfInput.into(),
		}
	}
}

pub(crate) fn unexpected(token: &Token) -> vql_type::Error {
	error!(SqlError::UnexpectedToken {
		fragment: token.fragment.clone(),
	})
}
