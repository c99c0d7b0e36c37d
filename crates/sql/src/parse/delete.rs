// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vql_type::{Params, Value};

use crate::{
	Command,
	command::Delete,
	parse::StatementParser,
	token::{Keyword, TokenKind},
};

impl StatementParser {
	/// `DELETE FROM [PARTITION p ON] coll [WHERE cond] [WITH {...}]`, at
	/// least one of the two clauses present.
	pub(crate) fn parse_delete(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Delete)?;
		self.consume_keyword(Keyword::From)?;
		let (part_name, coll_name) = self.parse_target()?;

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

		Ok(Command::Delete(Delete {
			coll_name,
			part_name,
			expr,
			params,
		}))
	}
}

/// Removes an `"expr"` option. Non-text values are taken in their literal
/// encoding.
pub(crate) fn take_expr(params: &mut Params) -> Option<String> {
	params.shift_remove("expr").map(|value| match value {
		Value::Text(text) => text,
		other => other.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use serde_json::json;
	use vql_type::Value;

	use crate::{Command, parse::tests::parse};

	#[test]
	fn test_delete_where() {
		assert_eq!(
			parse("delete from T where book_id between 3 and 5;").unwrap().to_json(),
			json!({"type": "delete", "coll_name": "T", "expr": "(3 <= book_id <= 5)"})
		);
	}

	#[test]
	fn test_delete_from_partition() {
		let Command::Delete(delete) = parse("delete from partition p1 on books where id in [1, 2];").unwrap() else {
			panic!("expected delete");
		};
		assert_eq!(delete.part_name.as_deref(), Some("p1"));
		assert_eq!(delete.expr.as_deref(), Some("(id IN [1, 2])"));
	}

	#[test]
	fn test_delete_with_expr_option() {
		let Command::Delete(delete) =
			parse(r#"delete from books with {"expr": "id in [1]", "consistency_level": "Strong"};"#).unwrap()
		else {
			panic!("expected delete");
		};
		assert_eq!(delete.expr.as_deref(), Some("id in [1]"));
		assert!(!delete.params.contains_key("expr"));
		assert_eq!(delete.params["consistency_level"], Value::Text("Strong".to_string()));
	}

	#[test]
	fn test_with_expr_overrides_where() {
		let Command::Delete(delete) = parse(r#"delete from books where a = 1 with {"expr": "b == 2"};"#).unwrap() else {
			panic!("expected delete");
		};
		assert_eq!(delete.expr.as_deref(), Some("b == 2"));
	}

	#[test]
	fn test_delete_requires_filter() {
		assert!(parse("delete from books;").unwrap_err().is_grammar());
	}

	#[test]
	fn test_unbalanced_parenthesis() {
		assert!(parse("delete from T where (a = 1;").unwrap_err().is_grammar());
		assert!(parse("delete from T where a = 1);").unwrap_err().is_grammar());
	}
}
