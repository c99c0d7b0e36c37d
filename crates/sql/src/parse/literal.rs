// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vql_type::{Params, Value};

use crate::{
	parse::{StatementParser, unexpected},
	token::{Literal, Operator, Separator, Token, TokenKind},
};

impl StatementParser {
	/// A JSON-like literal: number, string, boolean, null, `[...]` or
	/// `{"key": value ...}`.
	pub(crate) fn parse_value(&mut self) -> crate::Result<Value> {
		match self.current()?.kind {
			TokenKind::Literal(_) => {
				let token = self.advance()?;
				literal_value(&token)
			}
			TokenKind::Operator(Operator::OpenBracket) => Ok(Value::Array(self.parse_value_list()?)),
			TokenKind::Operator(Operator::OpenCurly) => Ok(Value::Object(self.parse_params()?)),
			_ => Err(self.unexpected_at(0)),
		}
	}

	/// `[v1, v2, ...]`, possibly empty.
	pub(crate) fn parse_value_list(&mut self) -> crate::Result<Vec<Value>> {
		self.descend()?;
		self.consume_operator(Operator::OpenBracket)?;
		let mut values = Vec::new();
		if self.consume_if(TokenKind::Operator(Operator::CloseBracket))?.is_none() {
			loop {
				values.push(self.parse_value()?);
				if self.consume_if(TokenKind::Separator(Separator::Comma))?.is_none() {
					break;
				}
			}
			self.consume_operator(Operator::CloseBracket)?;
		}
		self.ascend();
		Ok(values)
	}

	/// `{"key": value ...}` with optional commas between entries. A repeated
	/// key takes the later value.
	pub(crate) fn parse_params(&mut self) -> crate::Result<Params> {
		self.descend()?;
		self.consume_operator(Operator::OpenCurly)?;
		let mut params = Params::new();
		loop {
			self.consume_if(TokenKind::Separator(Separator::Comma))?;
			if self.consume_if(TokenKind::Operator(Operator::CloseCurly))?.is_some() {
				break;
			}
			let key = self.parse_text()?;
			self.consume_operator(Operator::Colon)?;
			let value = self.parse_value()?;
			params.insert(key, value);
		}
		self.ascend();
		Ok(params)
	}

	pub(crate) fn parse_text(&mut self) -> crate::Result<String> {
		Ok(self.consume_literal(Literal::Text)?.text().to_string())
	}

	pub(crate) fn parse_integer(&mut self) -> crate::Result<i64> {
		let token = self.consume_literal(Literal::Integer)?;
		token.text().parse::<i64>().map_err(|_| unexpected(&token))
	}
}

pub(crate) fn literal_value(token: &Token) -> crate::Result<Value> {
	let TokenKind::Literal(literal) = token.kind else {
		return Err(unexpected(token));
	};
	match literal {
		Literal::Integer => token.text().parse::<i64>().map(Value::Int).map_err(|_| unexpected(token)),
		Literal::Float => token.text().parse::<f64>().map(Value::Float).map_err(|_| unexpected(token)),
		Literal::Text => Ok(Value::Text(token.text().to_string())),
		Literal::True => Ok(Value::Boolean(true)),
		Literal::False => Ok(Value::Boolean(false)),
		Literal::Null => Ok(Value::Null),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::token::tokenize;

	fn value(sql: &str) -> crate::Result<Value> {
		StatementParser::new(tokenize(sql)?).parse_value()
	}

	#[test]
	fn test_scalars_keep_their_kind() {
		assert_eq!(value("1").unwrap(), Value::Int(1));
		assert_eq!(value("1.0").unwrap(), Value::Float(1.0));
		assert_eq!(value("-3").unwrap(), Value::Int(-3));
		assert_eq!(value("'x'").unwrap(), Value::Text("x".to_string()));
		assert_eq!(value("TRUE").unwrap(), Value::Boolean(true));
		assert_eq!(value("null").unwrap(), Value::Null);
	}

	#[test]
	fn test_nested_array() {
		assert_eq!(
			value("[1, [2.5, 'a'], []]").unwrap(),
			Value::Array(vec![
				Value::Int(1),
				Value::Array(vec![Value::Float(2.5), Value::Text("a".to_string())]),
				Value::Array(vec![]),
			])
		);
	}

	#[test]
	fn test_params_optional_commas_and_last_wins() {
		let params = StatementParser::new(tokenize(r#"{"a": 1 "b": 2, "a": 3}"#).unwrap()).parse_params().unwrap();
		let keys: Vec<_> = params.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["a", "b"]);
		assert_eq!(params["a"], Value::Int(3));
	}

	#[test]
	fn test_object_value() {
		let Value::Object(entries) = value(r#"{"nprobe": 10}"#).unwrap() else {
			panic!("expected object");
		};
		assert_eq!(entries["nprobe"], Value::Int(10));
	}

	#[test]
	fn test_unquoted_key_rejected() {
		assert!(value("{nprobe: 10}").unwrap_err().is_grammar());
	}

	#[test]
	fn test_deeply_nested_value() {
		let sql = format!("{}1{}", "[".repeat(1000), "]".repeat(1000));
		let err = value(&sql).unwrap_err();
		assert!(err.is_grammar());
		assert_eq!(err.code, "PARSE_003");

		let sql = format!("{}{}", r#"{"a": "#.repeat(1000), "}".repeat(1000));
		assert_eq!(value(&sql).unwrap_err().code, "PARSE_003");
	}

	#[test]
	fn test_trailing_comma_rejected() {
		assert!(value("[1, 2,]").unwrap_err().is_grammar());
	}
}
