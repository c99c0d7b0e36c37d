// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	Command,
	parse::StatementParser,
	token::{Keyword, Separator, TokenKind},
};

impl StatementParser {
	pub(crate) fn parse_create_partition(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Create)?;
		self.consume_keyword(Keyword::Partition)?;
		let part = self.parse_identifier()?;
		self.consume_keyword(Keyword::On)?;
		let coll = self.parse_identifier()?;
		let params = self.parse_optional_with()?;
		Ok(Command::CreatePartition {
			part,
			coll,
			params,
		})
	}

	pub(crate) fn parse_show_partitions(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Show)?;
		self.consume_keyword(Keyword::Partitions)?;
		self.consume_keyword(Keyword::On)?;
		Ok(Command::ShowPartitions {
			coll: self.parse_identifier()?,
		})
	}

	pub(crate) fn parse_drop_partition(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Drop)?;
		self.consume_keyword(Keyword::Partition)?;
		let part = self.parse_identifier()?;
		self.consume_keyword(Keyword::On)?;
		let coll = self.parse_identifier()?;
		Ok(Command::DropPartition {
			part,
			coll,
		})
	}

	pub(crate) fn parse_load_partitions(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Load)?;
		self.consume_keyword(Keyword::Partition)?;
		let parts = self.parse_partition_list()?;
		self.consume_keyword(Keyword::On)?;
		let coll = self.parse_identifier()?;
		let params = self.parse_optional_with()?;
		Ok(Command::LoadPartitions {
			coll,
			parts,
			params,
		})
	}

	pub(crate) fn parse_release_partitions(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Release)?;
		self.consume_keyword(Keyword::Partition)?;
		let parts = self.parse_partition_list()?;
		self.consume_keyword(Keyword::On)?;
		let coll = self.parse_identifier()?;
		Ok(Command::ReleasePartitions {
			coll,
			parts,
		})
	}

	/// `p1 [, p2 ...]`
	pub(crate) fn parse_partition_list(&mut self) -> crate::Result<Vec<String>> {
		let mut parts = vec![self.parse_identifier()?];
		while self.consume_if(TokenKind::Separator(Separator::Comma))?.is_some() {
			parts.push(self.parse_identifier()?);
		}
		Ok(parts)
	}
}
