// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	Command,
	command::{CreateIndex, IndexParams},
	parse::StatementParser,
	token::{Keyword, Operator, TokenKind},
};

impl StatementParser {
	/// `CREATE INDEX idx ON coll (field) [WITH {...}]`
	pub(crate) fn parse_create_index(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Create)?;
		self.consume_keyword(Keyword::Index)?;
		let idx = self.parse_identifier()?;
		self.consume_keyword(Keyword::On)?;
		let coll = self.parse_identifier()?;
		self.consume_operator(Operator::OpenParen)?;
		let field = self.parse_identifier()?;
		self.consume_operator(Operator::CloseParen)?;

		let params = if self.consume_if(TokenKind::Keyword(Keyword::With))?.is_some() {
			Some(IndexParams::from_params(self.parse_params()?))
		} else {
			None
		};

		Ok(Command::CreateIndex(CreateIndex {
			idx,
			coll,
			field,
			params,
		}))
	}

	pub(crate) fn parse_show_indexes(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Show)?;
		self.consume_keyword(Keyword::Indexes)?;
		self.consume_keyword(Keyword::On)?;
		Ok(Command::ShowIndexes {
			coll: self.parse_identifier()?,
		})
	}

	pub(crate) fn parse_drop_index(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Drop)?;
		self.consume_keyword(Keyword::Index)?;
		let idx = self.parse_identifier()?;
		self.consume_keyword(Keyword::On)?;
		let coll = self.parse_identifier()?;
		Ok(Command::DropIndex {
			idx,
			coll,
		})
	}
}
