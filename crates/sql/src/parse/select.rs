// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vql_type::{Params, Value};

use crate::{
	Command,
	command::{Query, Search, SearchParam},
	parse::{StatementParser, delete::take_expr, unexpected},
	token::{Keyword, Operator, Separator, TokenKind},
};

impl StatementParser {
	/// `SELECT cols FROM [PARTITION p, ... ON] coll`, continued as a vector
	/// search when `ORDER BY` follows, as a query otherwise.
	pub(crate) fn parse_select(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Select)?;
		let fields = self.parse_columns()?;
		self.consume_keyword(Keyword::From)?;

		let parts = if self.consume_if(TokenKind::Keyword(Keyword::Partition))?.is_some() {
			let parts = self.parse_partition_list()?;
			self.consume_keyword(Keyword::On)?;
			parts
		} else {
			vec![]
		};
		let coll_name = self.parse_identifier()?;

		if self.current_is_keyword(Keyword::Order) {
			self.parse_search(coll_name, fields, parts)
		} else {
			self.parse_query(coll_name, fields, parts)
		}
	}

	/// `[LIMIT n] [OFFSET n] [WHERE cond] [WITH {...}]`, at least one of the
	/// two filter clauses present.
	fn parse_query(&mut self, coll_name: String, fields: Vec<String>, parts: Vec<String>) -> crate::Result<Command> {
		let limit = self.parse_optional_integer(Keyword::Limit)?;
		let offset = self.parse_optional_integer(Keyword::Offset)?;

		let mut expr = None;
		if self.current_is_keyword(Keyword::Where) {
			expr = Some(self.parse_where()?);
		}

		let mut params = Params::new();
		if self.consume_if(TokenKind::Keyword(Keyword::With))?.is_some() {
			params = self.parse_params()?;
		} else if expr.is_none() {
			return Err(self.unexpected_at(0));
		}
		if let Some(overridden) = take_expr(&mut params) {
			expr = Some(overridden);
		}

		Ok(Command::Query(Query {
			coll_name,
			fields,
			parts,
			limit,
			offset,
			expr,
			params,
		}))
	}

	/// `ORDER BY anns <-> [vector] [LIMIT n] [WHERE cond] WITH {...}`
	fn parse_search(&mut self, coll_name: String, fields: Vec<String>, parts: Vec<String>) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Order)?;
		self.consume_keyword(Keyword::By)?;
		let anns = self.parse_identifier()?;
		self.consume_operator(Operator::LeftAngle)?;
		self.consume_operator(Operator::Minus)?;
		self.consume_operator(Operator::RightAngle)?;
		let data = self.parse_vectors()?;

		let limit = self.parse_optional_integer(Keyword::Limit)?;
		let mut expr = None;
		if self.current_is_keyword(Keyword::Where) {
			expr = Some(self.parse_where()?);
		}

		self.consume_keyword(Keyword::With)?;
		let mut options = self.parse_params()?;
		if let Some(overridden) = take_expr(&mut options) {
			expr = Some(overridden);
		}

		Ok(Command::Search(Search {
			coll_name,
			fields,
			parts,
			anns,
			data,
			limit,
			expr,
			param: search_param(options),
		}))
	}

	/// A flat list is one query vector, a list of lists is several.
	fn parse_vectors(&mut self) -> crate::Result<Vec<Vec<Value>>> {
		let open = self.current()?.clone();
		let values = self.parse_value_list()?;

		let nested = values.iter().filter(|v| v.is_array()).count();
		if nested == 0 {
			return Ok(vec![values]);
		}
		if nested != values.len() {
			return Err(unexpected(&open));
		}
		Ok(values
			.into_iter()
			.filter_map(|v| match v {
				Value::Array(items) => Some(items),
				_ => None,
			})
			.collect())
	}

	/// `*`, `COUNT(*)` or field names, comma separated.
	fn parse_columns(&mut self) -> crate::Result<Vec<String>> {
		let mut columns = vec![self.parse_column()?];
		while self.consume_if(TokenKind::Separator(Separator::Comma))?.is_some() {
			columns.push(self.parse_column()?);
		}
		Ok(columns)
	}

	fn parse_column(&mut self) -> crate::Result<String> {
		match self.current()?.kind {
			TokenKind::Operator(Operator::Asterisk) => {
				self.advance()?;
				Ok("*".to_string())
			}
			TokenKind::Keyword(Keyword::Count) => {
				self.advance()?;
				self.consume_operator(Operator::OpenParen)?;
				self.consume_operator(Operator::Asterisk)?;
				self.consume_operator(Operator::CloseParen)?;
				Ok("count(*)".to_string())
			}
			TokenKind::Identifier => self.parse_identifier(),
			_ => Err(self.unexpected_at(0)),
		}
	}

	fn parse_optional_integer(&mut self, keyword: Keyword) -> crate::Result<Option<i64>> {
		if self.consume_if(TokenKind::Keyword(keyword))?.is_some() {
			Ok(Some(self.parse_integer()?))
		} else {
			Ok(None)
		}
	}
}

/// `metric_type` and `offset` are lifted out, a nested `"params"` object is
/// merged into the remaining search parameters.
fn search_param(options: Params) -> SearchParam {
	let mut param = SearchParam::default();
	for (key, value) in options {
		match key.as_str() {
			"metric_type" => param.metric_type = Some(value),
			"offset" => param.offset = Some(value),
			_ => match value {
				Value::Object(nested) if key == "params" => param.params.extend(nested),
				value => {
					param.params.insert(key, value);
				}
			},
		}
	}
	param
}
