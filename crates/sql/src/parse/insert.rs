// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vql_type::Params;

use crate::{
	Command,
	command::{BulkInsert, Write},
	parse::StatementParser,
	token::{Keyword, Literal, Operator, Separator, TokenKind},
};

impl StatementParser {
	/// `BULK INSERT (PARTITION p ON coll | COLLECTION coll) FROM 'file' ...`
	pub(crate) fn parse_bulk_insert(&mut self) -> crate::Result<Command> {
		self.consume_keyword(Keyword::Bulk)?;
		self.consume_keyword(Keyword::Insert)?;

		let (part, coll) = if self.consume_if(TokenKind::Keyword(Keyword::Partition))?.is_some() {
			let part = self.parse_identifier()?;
			self.consume_keyword(Keyword::On)?;
			(Some(part), self.parse_identifier()?)
		} else {
			self.consume_keyword(Keyword::Collection)?;
			(None, self.parse_identifier()?)
		};

		self.consume_keyword(Keyword::From)?;
		let mut files = Vec::new();
		loop {
			if self.consume_if(TokenKind::Separator(Separator::Comma))?.is_some() {
				files.push(self.parse_text()?);
			} else if self.peek(0).is_some_and(|t| t.is_literal(Literal::Text)) {
				files.push(self.parse_text()?);
			} else {
				break;
			}
		}

		Ok(Command::BulkInsert(BulkInsert {
			coll,
			part,
			files,
		}))
	}

	/// `INSERT|UPSERT INTO [PARTITION p ON] coll (a, b) VALUES (1, 2), ...`
	pub(crate) fn parse_insert(&mut self) -> crate::Result<Command> {
		let upsert = self.consume_if(TokenKind::Keyword(Keyword::Upsert))?.is_some();
		if !upsert {
			self.consume_keyword(Keyword::Insert)?;
		}
		self.consume_keyword(Keyword::Into)?;
		let (part_name, coll_name) = self.parse_target()?;

		self.consume_operator(Operator::OpenParen)?;
		let mut names = vec![self.parse_identifier()?];
		while self.consume_if(TokenKind::Separator(Separator::Comma))?.is_some() {
			names.push(self.parse_identifier()?);
		}
		self.consume_operator(Operator::CloseParen)?;

		self.consume_keyword(Keyword::Values)?;
		let mut data = vec![self.parse_row(&names)?];
		while self.consume_if(TokenKind::Separator(Separator::Comma))?.is_some() {
			data.push(self.parse_row(&names)?);
		}

		let write = Write {
			coll_name,
			part_name,
			data,
		};
		Ok(if upsert {
			Command::Upsert(write)
		} else {
			Command::Insert(write)
		})
	}

	/// One value tuple zipped against the column names. Extra values or
	/// extra names are dropped.
	fn parse_row(&mut self, names: &[String]) -> crate::Result<Params> {
		self.consume_operator(Operator::OpenParen)?;
		let mut values = vec![self.parse_value()?];
		while self.consume_if(TokenKind::Separator(Separator::Comma))?.is_some() {
			values.push(self.parse_value()?);
		}
		self.consume_operator(Operator::CloseParen)?;
		Ok(names.iter().cloned().zip(values).collect())
	}
}

#[cfg(test)]
mod tests {
	use vql_type::Value;

	use crate::{Command, parse::tests::parse};

	#[test]
	fn test_insert_zips_rows() {
		let Command::Insert(write) = parse("insert into T(a,b) values (1,2),(3,4);").unwrap() else {
			panic!("expected insert");
		};
		assert_eq!(write.coll_name, "T");
		assert!(write.part_name.is_none());
		assert_eq!(write.data.len(), 2);
		assert_eq!(write.data[0]["a"], Value::Int(1));
		assert_eq!(write.data[0]["b"], Value::Int(2));
		assert_eq!(write.data[1]["a"], Value::Int(3));
		assert_eq!(write.data[1]["b"], Value::Int(4));
	}

	#[test]
	fn test_upsert_into_partition() {
		let Command::Upsert(write) =
			parse(r#"upsert into partition p1 on books (id, tags, vec) values (7, ["a", "b"], [0.1, 0.2]);"#).unwrap()
		else {
			panic!("expected upsert");
		};
		assert_eq!(write.part_name.as_deref(), Some("p1"));
		assert_eq!(write.coll_name, "books");
		assert_eq!(
			write.data[0]["tags"],
			Value::Array(vec![Value::Text("a".to_string()), Value::Text("b".to_string())])
		);
		assert_eq!(write.data[0]["vec"], Value::Array(vec![Value::Float(0.1), Value::Float(0.2)]));
	}

	#[test]
	fn test_insert_arity_mismatch_truncates() {
		let Command::Insert(write) = parse("insert into t (a, b, c) values (1, 2);").unwrap() else {
			panic!("expected insert");
		};
		assert_eq!(write.data[0].len(), 2);
		assert!(!write.data[0].contains_key("c"));
	}

	#[test]
	fn test_insert_rejects_star() {
		assert!(parse("insert into t (*) values (1);").unwrap_err().is_grammar());
		assert!(parse("insert into t (count(*)) values (1);").unwrap_err().is_grammar());
	}

	#[test]
	fn test_insert_requires_into() {
		assert!(parse("insert t (a) values (1);").unwrap_err().is_grammar());
	}

	#[test]
	fn test_bulk_insert_collection() {
		assert_eq!(
			parse("bulk insert collection books from 'a.json', \"b.json\" `c.json`;").unwrap().to_json(),
			serde_json::json!({
				"type": "bulk_insert",
				"coll": "books",
				"files": ["a.json", "b.json", "c.json"]
			})
		);
	}

	#[test]
	fn test_bulk_insert_partition() {
		let Command::BulkInsert(bulk) = parse("bulk insert partition p1 on books from 'rows.json';").unwrap() else {
			panic!("expected bulk_insert");
		};
		assert_eq!(bulk.part.as_deref(), Some("p1"));
		assert_eq!(bulk.coll, "books");
		assert_eq!(bulk.files, vec!["rows.json"]);
	}

	#[test]
	fn test_bulk_insert_empty_file_list() {
		let Command::BulkInsert(bulk) = parse("bulk insert collection books from;").unwrap() else {
			panic!("expected bulk_insert");
		};
		assert!(bulk.files.is_empty());
	}
}
