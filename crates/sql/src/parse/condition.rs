// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vql_type::Value;

use crate::{
	ast::{BinaryOp, Comparator, Condition, ContainsFunction, Operand, Path, PathSegment, UnaryOp},
	emit::emit,
	parse::{StatementParser, literal::literal_value, unexpected},
	token::{Keyword, Literal, Operator, Separator, TokenKind},
};

enum Group {
	Condition(Condition),
	Operand(Operand),
}

impl StatementParser {
	/// `WHERE conditions`, compiled to the predicate string.
	pub(crate) fn parse_where(&mut self) -> crate::Result<String> {
		self.consume_keyword(Keyword::Where)?;
		let condition = self.parse_conditions()?;
		Ok(emit(&condition))
	}

	/// `unary ((AND | OR) unary)*`, grouped strictly left to right.
	pub(crate) fn parse_conditions(&mut self) -> crate::Result<Condition> {
		let first = self.parse_unary_condition()?;
		self.parse_connectives(first)
	}

	fn parse_connectives(&mut self, mut left: Condition) -> crate::Result<Condition> {
		loop {
			if self.consume_if(TokenKind::Keyword(Keyword::And))?.is_some() {
				let right = self.parse_unary_condition()?;
				left = Condition::And(Box::new(left), Box::new(right));
			} else if self.consume_if(TokenKind::Keyword(Keyword::Or))?.is_some() {
				let right = self.parse_unary_condition()?;
				left = Condition::Or(Box::new(left), Box::new(right));
			} else {
				return Ok(left);
			}
		}
	}

	fn parse_unary_condition(&mut self) -> crate::Result<Condition> {
		if !self.current_is_keyword(Keyword::Not) {
			return self.parse_primary_condition();
		}
		self.descend()?;
		self.advance()?;
		let inner = self.parse_unary_condition()?;
		self.ascend();
		Ok(Condition::Not(Box::new(inner)))
	}

	fn parse_primary_condition(&mut self) -> crate::Result<Condition> {
		if self.current_is_operator(Operator::OpenParen) {
			return match self.parse_group()? {
				Group::Condition(condition) => Ok(condition),
				Group::Operand(operand) => {
					let target = self.parse_operand_tail(operand)?;
					self.parse_predicate_tail(target)
				}
			};
		}

		if let Some(function) = self.peek_contains_function() {
			return self.parse_contains(function);
		}

		self.parse_predicate()
	}

	/// `( ... )` in condition position. The token after the leading operand
	/// decides between a grouped condition and a parenthesized operand.
	fn parse_group(&mut self) -> crate::Result<Group> {
		self.descend()?;
		self.consume_operator(Operator::OpenParen)?;
		let inner = self.parse_group_body()?;
		self.consume_operator(Operator::CloseParen)?;
		self.ascend();

		Ok(match inner {
			Group::Condition(condition) => Group::Condition(Condition::Nested(Box::new(condition))),
			Group::Operand(operand) => Group::Operand(Operand::Nested(Box::new(operand))),
		})
	}

	fn parse_group_body(&mut self) -> crate::Result<Group> {
		if self.current_is_keyword(Keyword::Not) || self.peek_contains_function().is_some() {
			return Ok(Group::Condition(self.parse_conditions()?));
		}

		let operand = if self.current_is_operator(Operator::OpenParen) {
			match self.parse_group()? {
				Group::Condition(condition) => return Ok(Group::Condition(self.parse_connectives(condition)?)),
				Group::Operand(operand) => self.parse_operand_tail(operand)?,
			}
		} else {
			self.parse_operand()?
		};

		if self.current_is_operator(Operator::CloseParen) {
			return Ok(Group::Operand(operand));
		}
		let first = self.parse_predicate_tail(operand)?;
		Ok(Group::Condition(self.parse_connectives(first)?))
	}

	fn peek_contains_function(&self) -> Option<ContainsFunction> {
		let TokenKind::Keyword(keyword) = self.peek(0)?.kind else {
			return None;
		};
		match keyword {
			Keyword::JsonContains => Some(ContainsFunction::JsonContains),
			Keyword::JsonContainsAll => Some(ContainsFunction::JsonContainsAll),
			Keyword::JsonContainsAny => Some(ContainsFunction::JsonContainsAny),
			Keyword::ArrayContains => Some(ContainsFunction::ArrayContains),
			Keyword::ArrayContainsAll => Some(ContainsFunction::ArrayContainsAll),
			Keyword::ArrayContainsAny => Some(ContainsFunction::ArrayContainsAny),
			_ => None,
		}
	}

	/// `FUNC(path [, value])`
	fn parse_contains(&mut self, function: ContainsFunction) -> crate::Result<Condition> {
		self.advance()?;
		self.consume_operator(Operator::OpenParen)?;
		let target = self.parse_path()?;
		let value = if self.consume_if(TokenKind::Separator(Separator::Comma))?.is_some() {
			Some(self.parse_value()?)
		} else {
			None
		};
		self.consume_operator(Operator::CloseParen)?;
		Ok(Condition::Contains {
			function,
			target,
			value,
		})
	}

	/// An operand followed by a comparator, `LIKE`, `BETWEEN`, `IN` or
	/// `IS NULL`, the last four optionally negated.
	fn parse_predicate(&mut self) -> crate::Result<Condition> {
		let target = self.parse_operand()?;
		self.parse_predicate_tail(target)
	}

	fn parse_predicate_tail(&mut self, target: Operand) -> crate::Result<Condition> {
		let comparator = match self.current()?.kind {
			TokenKind::Operator(Operator::Equal) => Some(Comparator::Eq),
			TokenKind::Operator(Operator::NotEqual | Operator::BangEqual) => Some(Comparator::NotEq),
			TokenKind::Operator(Operator::LeftAngle) => Some(Comparator::Lt),
			TokenKind::Operator(Operator::RightAngle) => Some(Comparator::Gt),
			TokenKind::Operator(Operator::LeftAngleEqual) => Some(Comparator::LtEq),
			TokenKind::Operator(Operator::RightAngleEqual) => Some(Comparator::GtEq),
			_ => None,
		};
		if let Some(op) = comparator {
			self.advance()?;
			let right = self.parse_operand()?;
			return Ok(Condition::Compare {
				left: target,
				op,
				right,
			});
		}

		if self.current_is_keyword(Keyword::Is) {
			self.advance()?;
			let negated = self.consume_if(TokenKind::Keyword(Keyword::Not))?.is_some();
			self.consume_literal(Literal::Null)?;
			return Ok(Condition::IsNull {
				target,
				negated,
			});
		}

		let negated = self.consume_if(TokenKind::Keyword(Keyword::Not))?.is_some();
		match self.current()?.kind {
			TokenKind::Keyword(Keyword::Like) => {
				self.advance()?;
				let pattern = self.parse_text()?;
				Ok(Condition::Like {
					target,
					pattern,
					negated,
				})
			}
			TokenKind::Keyword(Keyword::Between) => {
				self.advance()?;
				let low = self.parse_operand()?;
				self.consume_keyword(Keyword::And)?;
				let high = self.parse_operand()?;
				Ok(Condition::Between {
					target,
					low,
					high,
					negated,
				})
			}
			TokenKind::Keyword(Keyword::In) => {
				self.advance()?;
				let list = self.parse_value_list()?;
				Ok(Condition::In {
					target,
					list,
					negated,
				})
			}
			_ => Err(self.unexpected_at(0)),
		}
	}

	/// `term (op term)*`, kept in source order.
	pub(crate) fn parse_operand(&mut self) -> crate::Result<Operand> {
		let left = self.parse_unary_operand()?;
		self.parse_operand_tail(left)
	}

	fn parse_operand_tail(&mut self, mut left: Operand) -> crate::Result<Operand> {
		loop {
			let op = match self.peek(0).map(|t| t.kind) {
				Some(TokenKind::Operator(Operator::Plus)) => BinaryOp::Add,
				Some(TokenKind::Operator(Operator::Minus)) => BinaryOp::Sub,
				Some(TokenKind::Operator(Operator::Asterisk)) => BinaryOp::Mul,
				Some(TokenKind::Operator(Operator::Slash)) => BinaryOp::Div,
				Some(TokenKind::Operator(Operator::Percent)) => BinaryOp::Mod,
				Some(TokenKind::Operator(Operator::DoubleAsterisk)) => BinaryOp::Pow,
				Some(TokenKind::Literal(Literal::Integer | Literal::Float)) if self.glued_minus() => {
					left = Operand::Binary {
						left: Box::new(left),
						op: BinaryOp::Sub,
						right: Box::new(self.parse_glued_literal()?),
					};
					continue;
				}
				_ => return Ok(left),
			};
			self.advance()?;
			let right = self.parse_unary_operand()?;
			left = Operand::Binary {
				left: Box::new(left),
				op,
				right: Box::new(right),
			};
		}
	}

	fn glued_minus(&self) -> bool {
		self.peek(0).is_some_and(|t| t.text().starts_with('-'))
	}

	/// The `1` of `a-1`, which lexed as the literal `-1`.
	fn parse_glued_literal(&mut self) -> crate::Result<Operand> {
		let token = self.advance()?;
		let digits = &token.text()[1..];
		let value = match token.kind {
			TokenKind::Literal(Literal::Integer) => digits.parse::<i64>().ok().map(Value::Int),
			_ => digits.parse::<f64>().ok().map(Value::Float),
		};
		value.map(Operand::Literal).ok_or_else(|| unexpected(&token))
	}

	fn parse_unary_operand(&mut self) -> crate::Result<Operand> {
		let op = match self.current()?.kind {
			TokenKind::Operator(Operator::Minus) => UnaryOp::Neg,
			TokenKind::Operator(Operator::Plus) => UnaryOp::Plus,
			_ => return self.parse_primary_operand(),
		};
		self.advance()?;
		Ok(Operand::Unary {
			op,
			operand: Box::new(self.parse_primary_operand()?),
		})
	}

	fn parse_primary_operand(&mut self) -> crate::Result<Operand> {
		match self.current()?.kind {
			TokenKind::Literal(_) => {
				let token = self.advance()?;
				Ok(Operand::Literal(literal_value(&token)?))
			}
			TokenKind::Operator(Operator::OpenBracket) => Ok(Operand::Literal(self.parse_value()?)),
			TokenKind::Operator(Operator::OpenParen) => {
				self.descend()?;
				self.advance()?;
				let inner = self.parse_operand()?;
				self.consume_operator(Operator::CloseParen)?;
				self.ascend();
				Ok(Operand::Nested(Box::new(inner)))
			}
			TokenKind::Keyword(Keyword::ArrayLength) => {
				self.advance()?;
				self.consume_operator(Operator::OpenParen)?;
				let path = self.parse_path()?;
				self.consume_operator(Operator::CloseParen)?;
				Ok(Operand::ArrayLength(path))
			}
			TokenKind::Identifier => Ok(Operand::Path(self.parse_path()?)),
			_ => Err(self.unexpected_at(0)),
		}
	}

	/// `name ([ "key" ] | [ index ] | .field)*`
	fn parse_path(&mut self) -> crate::Result<Path> {
		let mut path = Path::field(self.parse_identifier()?);
		loop {
			if self.consume_if(TokenKind::Operator(Operator::OpenBracket))?.is_some() {
				let segment = match self.current()?.kind {
					TokenKind::Literal(Literal::Text) => PathSegment::Key(self.parse_text()?),
					TokenKind::Literal(Literal::Integer) => PathSegment::Index(self.parse_integer()?),
					_ => return Err(self.unexpected_at(0)),
				};
				self.consume_operator(Operator::CloseBracket)?;
				path.segments.push(segment);
			} else if self.consume_if(TokenKind::Operator(Operator::Dot))?.is_some() {
				path.segments.push(PathSegment::Field(self.parse_identifier()?));
			} else {
				return Ok(path);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::token::tokenize;

	fn condition(sql: &str) -> crate::Result<Condition> {
		let mut parser = StatementParser::new(tokenize(sql)?);
		let condition = parser.parse_conditions()?;
		assert!(parser.is_eof(), "trailing tokens in {sql}");
		Ok(condition)
	}

	#[test]
	fn test_left_to_right_tree() {
		let parsed = condition("a = 1 or b = 2 and c = 3").unwrap();
		let Condition::And(left, _) = parsed else {
			panic!("expected and at the root");
		};
		assert!(matches!(*left, Condition::Or(..)));
	}

	#[test]
	fn test_grouped_vs_parenthesized_operand() {
		assert!(matches!(condition("(a = 1)").unwrap(), Condition::Nested(_)));
		let Condition::Compare {
			left,
			..
		} = condition("(a + 1) > 2").unwrap()
		else {
			panic!("expected compare");
		};
		assert!(matches!(left, Operand::Nested(_)));
	}

	#[test]
	fn test_nested_parentheses() {
		assert!(matches!(condition("((a + 1) > 2)").unwrap(), Condition::Nested(_)));
		assert!(matches!(condition("((a = 1))").unwrap(), Condition::Nested(_)));
	}

	#[test]
	fn test_group_continues_after_operand() {
		let parsed = condition("((a) + 1 > 2 and (b) is null)").unwrap();
		let Condition::Nested(inner) = parsed else {
			panic!("expected group");
		};
		let Condition::And(left, right) = *inner else {
			panic!("expected and");
		};
		assert!(matches!(*left, Condition::Compare { .. }));
		assert!(matches!(*right, Condition::IsNull { negated: false, .. }));
	}

	#[test]
	fn test_deep_nesting_is_a_grammar_error() {
		for depth in [150, 1000] {
			let sql = format!("{}a = 1{}", "(".repeat(depth), ")".repeat(depth));
			let err = condition(&sql).unwrap_err();
			assert!(err.is_grammar());
			assert_eq!(err.code, "PARSE_003");

			let sql = format!("{}a{} = 1", "(".repeat(depth), ")".repeat(depth));
			assert_eq!(condition(&sql).unwrap_err().code, "PARSE_003");

			let sql = format!("{}a = 1", "not ".repeat(depth));
			assert_eq!(condition(&sql).unwrap_err().code, "PARSE_003");
		}
	}

	#[test]
	fn test_nesting_within_limit() {
		let sql = format!("{}a = 1{}", "(".repeat(32), ")".repeat(32));
		assert!(condition(&sql).is_ok());

		let sql = format!("{}a{} > 2", "(".repeat(32), ")".repeat(32));
		assert!(condition(&sql).is_ok());
	}

	#[test]
	fn test_unbalanced_group() {
		let err = condition("(a = 1").unwrap_err();
		assert!(err.is_grammar());
		assert!(err.fragment.is_none());

		let err = condition("(a = 1 b").unwrap_err();
		assert_eq!(err.fragment.text(), "b");
	}

	#[test]
	fn test_glued_minus_literal() {
		let Condition::Compare {
			left,
			..
		} = condition("a-1.5 = 2").unwrap()
		else {
			panic!("expected compare");
		};
		assert_eq!(
			left,
			Operand::Binary {
				left: Box::new(Operand::Path(Path::field("a"))),
				op: BinaryOp::Sub,
				right: Box::new(Operand::Literal(Value::Float(1.5))),
			}
		);
	}

	#[test]
	fn test_path_segments() {
		let Condition::Compare {
			left: Operand::Path(path),
			..
		} = condition(r#"meta["a"][2].b = 1"#).unwrap()
		else {
			panic!("expected path compare");
		};
		assert_eq!(path.root, "meta");
		assert_eq!(
			path.segments,
			vec![PathSegment::Key("a".to_string()), PathSegment::Index(2), PathSegment::Field("b".to_string())]
		);
	}

	#[test]
	fn test_contains_without_value() {
		assert_eq!(
			condition("array_contains_any(tags)").unwrap(),
			Condition::Contains {
				function: ContainsFunction::ArrayContainsAny,
				target: Path::field("tags"),
				value: None,
			}
		);
	}

	#[test]
	fn test_missing_comparator() {
		assert!(condition("a").unwrap_err().is_grammar());
		assert!(condition("a 5").unwrap_err().is_grammar());
	}

	#[test]
	fn test_like_requires_text() {
		assert!(condition("a like 5").unwrap_err().is_grammar());
	}

	#[test]
	fn test_in_requires_list() {
		assert!(condition("a in 5").unwrap_err().is_grammar());
	}

	#[test]
	fn test_is_requires_null() {
		assert!(condition("a is 5").unwrap_err().is_grammar());
	}

	#[test]
	fn test_dangling_connective() {
		assert!(condition("a = 1 and").unwrap_err().is_grammar());
	}
}
