// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vql_type::Params;

use crate::{
	Command,
	command::CreateCollection,
	parse::StatementParser,
	token::{Keyword, Operator, Separator, TokenKind},
};

impl StatementParser {
	pub(crate) fn parse_show_collections(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Show)?;
		self.consume_keyword(Keyword::Collections)?;
		Ok(Command::ShowCollections)
	}

	pub(crate) fn parse_drop_collection(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Drop)?;
		self.consume_keyword(Keyword::Collection)?;
		Ok(Command::DropCollection {
			name: self.parse_identifier()?,
		})
	}

	pub(crate) fn parse_release_collection(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Release)?;
		self.consume_keyword(Keyword::Collection)?;
		Ok(Command::ReleaseCollection {
			name: self.parse_identifier()?,
		})
	}

	pub(crate) fn parse_compact_collection(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Compact)?;
		self.consume_keyword(Keyword::Collection)?;
		Ok(Command::CompactCollection {
			name: self.parse_identifier()?,
		})
	}

	pub(crate) fn parse_load_collection(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Load)?;
		self.consume_keyword(Keyword::Collection)?;
		let name = self.parse_identifier()?;
		let params = self.parse_optional_with()?;
		Ok(Command::LoadCollection {
			name,
			params,
		})
	}

	pub(crate) fn parse_rename_collection(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Rename)?;
		self.consume_keyword(Keyword::Collection)?;
		let old_coll = self.parse_identifier()?;
		self.consume_keyword(Keyword::To)?;
		let new_coll = self.parse_identifier()?;
		self.consume_keyword(Keyword::In)?;
		let new_db = self.parse_identifier()?;
		Ok(Command::RenameCollection {
			old_coll,
			new_coll,
			new_db,
		})
	}

	pub(crate) fn parse_create_alias(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Create)?;
		self.consume_keyword(Keyword::Alias)?;
		let (alias, coll) = self.parse_alias_for()?;
		Ok(Command::CreateAlias {
			alias,
			coll,
		})
	}

	pub(crate) fn parse_drop_alias(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Drop)?;
		self.consume_keyword(Keyword::Alias)?;
		let (alias, coll) = self.parse_alias_for()?;
		Ok(Command::DropAlias {
			alias,
			coll,
		})
	}

	pub(crate) fn parse_show_aliases(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Show)?;
		self.consume_keyword(Keyword::Aliases)?;
		self.consume_keyword(Keyword::For)?;
		Ok(Command::ShowAliases {
			coll: self.parse_identifier()?,
		})
	}

	fn parse_alias_for(&mut self) -> crate::Result<(String, String)> {
		let alias = self.parse_identifier()?;
		self.consume_keyword(Keyword::For)?;
		let coll = self.parse_identifier()?;
		Ok((alias, coll))
	}

	/// `CREATE COLLECTION name (field ...) [WITH {...}]`
	pub(crate) fn parse_create_collection(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Create)?;
		self.consume_keyword(Keyword::Collection)?;
		let name = self.parse_identifier()?;

		self.consume_operator(Operator::OpenParen)?;
		let mut fields = Vec::new();
		loop {
			self.consume_if(TokenKind::Separator(Separator::Comma))?;
			if self.consume_if(TokenKind::Operator(Operator::CloseParen))?.is_some() {
				break;
			}
			fields.push(self.parse_field()?);
		}

		let params = self.parse_optional_with()?;
		Ok(Command::CreateCollection(CreateCollection {
			name,
			fields,
			params,
		}))
	}

	/// `[WITH {...}]`, empty when absent.
	pub(crate) fn parse_optional_with(&mut self) -> crate::Result<Params> {
		if self.consume_if(TokenKind::Keyword(Keyword::With))?.is_some() {
			self.parse_params()
		} else {
			Ok(Params::new())
		}
	}
}
