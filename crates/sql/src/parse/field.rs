// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	command::{FieldDefinition, FieldType},
	parse::{StatementParser, unexpected},
	token::{Literal, Operator, TokenKind},
};

impl StatementParser {
	/// `name type attr*`
	pub(crate) fn parse_field(&mut self) -> crate::Result<FieldDefinition> {
		let name = self.parse_identifier()?;
		let field_type = self.parse_field_type()?;
		let mut field = FieldDefinition::new(name, field_type);
		while self.parse_field_attribute(&mut field)? {}
		Ok(field)
	}

	/// One of `T`, `T(len)`, `T VECTOR(dim)`, `T ARRAY(cap)` or
	/// `VARCHAR(len) ARRAY(cap)`.
	fn parse_field_type(&mut self) -> crate::Result<FieldType> {
		let name = self.parse_word()?;

		if self.current_is_operator(Operator::OpenParen) {
			let max_length = self.parse_parenthesized_integer()?;
			if !self.sized_word_ahead() {
				return Ok(FieldType::Sized {
					name,
					max_length,
				});
			}
			let container = self.advance()?;
			if !container.is_word("ARRAY") {
				return Err(unexpected(&container));
			}
			let max_capacity = self.parse_parenthesized_integer()?;
			return Ok(FieldType::Array {
				element_type: name,
				max_capacity,
				max_length: Some(max_length),
			});
		}

		if !self.sized_word_ahead() {
			return Ok(FieldType::Scalar(name));
		}

		let container = self.advance()?;
		let size = self.parse_parenthesized_integer()?;
		if container.is_word("VECTOR") {
			Ok(FieldType::Vector {
				element: name,
				dim: size,
			})
		} else if container.is_word("ARRAY") && name != "VARCHAR" {
			Ok(FieldType::Array {
				element_type: name,
				max_capacity: size,
				max_length: None,
			})
		} else {
			Err(unexpected(&container))
		}
	}

	/// Applies one attribute and reports whether one was present. Attributes
	/// may come in any order; repeating one has no further effect.
	fn parse_field_attribute(&mut self, field: &mut FieldDefinition) -> crate::Result<bool> {
		const ATTRIBUTES: [&str; 5] = ["PRIMARY", "PARTITION", "AUTO", "DYNAMIC", "DESCRIPTION"];

		let Some(current) = self.peek(0) else {
			return Ok(false);
		};
		let Some(attribute) = ATTRIBUTES.into_iter().find(|word| current.is_word(word)) else {
			return Ok(false);
		};
		self.advance()?;

		match attribute {
			"PRIMARY" => {
				self.consume_word("KEY")?;
				field.is_primary = true;
			}
			"PARTITION" => {
				self.consume_word("KEY")?;
				field.is_partition_key = true;
			}
			"AUTO" => {
				self.consume_word("ID")?;
				field.auto_id = true;
			}
			"DYNAMIC" => field.is_dynamic = true,
			_ => {
				self.consume_operator(Operator::OpenParen)?;
				field.description = Some(self.parse_text()?);
				self.consume_operator(Operator::CloseParen)?;
			}
		}
		Ok(true)
	}

	/// Type names read case-insensitively and are stored upper-cased.
	fn parse_word(&mut self) -> crate::Result<String> {
		let current = self.current()?;
		if !matches!(current.kind, TokenKind::Identifier | TokenKind::Keyword(_)) {
			return Err(unexpected(current));
		}
		Ok(self.advance()?.text().to_ascii_uppercase())
	}

	/// Lookahead for `WORD ( INTEGER`, which starts a sized container type
	/// rather than the next attribute.
	fn sized_word_ahead(&self) -> bool {
		let is_word = self.peek(0).is_some_and(|t| matches!(t.kind, TokenKind::Identifier | TokenKind::Keyword(_)));
		is_word && self.peek(1).is_some_and(|t| t.is_operator(Operator::OpenParen))
			&& self.peek(2).is_some_and(|t| t.is_literal(Literal::Integer))
	}

	fn parse_parenthesized_integer(&mut self) -> crate::Result<i64> {
		self.consume_operator(Operator::OpenParen)?;
		let value = self.parse_integer()?;
		self.consume_operator(Operator::CloseParen)?;
		Ok(value)
	}
}
