// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{instrument, trace};
use vql_type::{Fragment, return_error};

use crate::error::SqlError;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	pub fragment: Fragment,
}

impl Token {
	pub fn text(&self) -> &str {
		self.fragment.text()
	}

	pub fn is_keyword(&self, keyword: Keyword) -> bool {
		self.kind == TokenKind::Keyword(keyword)
	}

	pub fn is_operator(&self, operator: Operator) -> bool {
		self.kind == TokenKind::Operator(operator)
	}

	pub fn is_separator(&self, separator: Separator) -> bool {
		self.kind == TokenKind::Separator(separator)
	}

	pub fn is_literal(&self, literal: Literal) -> bool {
		self.kind == TokenKind::Literal(literal)
	}

	pub fn is_identifier(&self) -> bool {
		self.kind == TokenKind::Identifier
	}

	/// Identifiers and keywords both read as bare words; attribute and
	/// type names are matched this way.
	pub fn is_word(&self, word: &str) -> bool {
		matches!(self.kind, TokenKind::Identifier | TokenKind::Keyword(_)) && self.text().eq_ignore_ascii_case(word)
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
	Keyword(Keyword),
	Identifier,
	Literal(Literal),
	Operator(Operator),
	Separator(Separator),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
	Integer,
	Float,
	Text,
	True,
	False,
	Null,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
	Equal,           // =
	NotEqual,        // <>
	BangEqual,       // !=
	LeftAngle,       // <
	LeftAngleEqual,  // <=
	RightAngle,      // >
	RightAngleEqual, // >=
	Plus,            // +
	Minus,           // -
	Asterisk,        // *
	DoubleAsterisk,  // **
	Slash,           // /
	Percent,         // %
	Dot,             // .
	Colon,           // :
	OpenParen,       // (
	CloseParen,      // )
	OpenBracket,     // [
	CloseBracket,    // ]
	OpenCurly,       // {
	CloseCurly,      // }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Separator {
	Comma,
	Semicolon,
}

macro_rules! keywords {
	($($variant:ident => $text:literal),* $(,)?) => {
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum Keyword {
			$($variant),*
		}

		impl Keyword {
			pub fn as_str(&self) -> &'static str {
				match self {
					$(Keyword::$variant => $text),*
				}
			}

			fn lookup(upper: &str) -> Option<Keyword> {
				match upper {
					$($text => Some(Keyword::$variant),)*
					_ => None,
				}
			}
		}
	};
}

keywords! {
	Alias => "ALIAS",
	Aliases => "ALIASES",
	Alter => "ALTER",
	And => "AND",
	ArrayContains => "ARRAY_CONTAINS",
	ArrayContainsAll => "ARRAY_CONTAINS_ALL",
	ArrayContainsAny => "ARRAY_CONTAINS_ANY",
	ArrayLength => "ARRAY_LENGTH",
	As => "AS",
	Asc => "ASC",
	Avg => "AVG",
	Between => "BETWEEN",
	Bool => "BOOL",
	Bulk => "BULK",
	By => "BY",
	Collection => "COLLECTION",
	Collections => "COLLECTIONS",
	Compact => "COMPACT",
	Count => "COUNT",
	Create => "CREATE",
	Database => "DATABASE",
	Databases => "DATABASES",
	Delete => "DELETE",
	Desc => "DESC",
	Distinct => "DISTINCT",
	Drop => "DROP",
	For => "FOR",
	From => "FROM",
	Full => "FULL",
	Group => "GROUP",
	Having => "HAVING",
	In => "IN",
	Index => "INDEX",
	Indexes => "INDEXES",
	Inner => "INNER",
	Insert => "INSERT",
	Into => "INTO",
	Is => "IS",
	Join => "JOIN",
	JsonContains => "JSON_CONTAINS",
	JsonContainsAll => "JSON_CONTAINS_ALL",
	JsonContainsAny => "JSON_CONTAINS_ANY",
	Left => "LEFT",
	Like => "LIKE",
	Limit => "LIMIT",
	Load => "LOAD",
	Max => "MAX",
	Min => "MIN",
	Not => "NOT",
	Offset => "OFFSET",
	On => "ON",
	Or => "OR",
	Order => "ORDER",
	Partition => "PARTITION",
	Partitions => "PARTITIONS",
	Release => "RELEASE",
	Rename => "RENAME",
	Right => "RIGHT",
	Select => "SELECT",
	Set => "SET",
	Show => "SHOW",
	Sum => "SUM",
	To => "TO",
	Update => "UPDATE",
	Upsert => "UPSERT",
	Use => "USE",
	Values => "VALUES",
	Where => "WHERE",
	With => "WITH",
}

struct Cursor {
	chars: Vec<char>,
	pos: usize,
	line: u32,
	column: u32,
}

impl Cursor {
	fn new(source: &str) -> Self {
		Self {
			chars: source.chars().collect(),
			pos: 0,
			line: 1,
			column: 1,
		}
	}

	fn peek(&self) -> Option<char> {
		self.chars.get(self.pos).copied()
	}

	fn peek_at(&self, offset: usize) -> Option<char> {
		self.chars.get(self.pos + offset).copied()
	}

	fn bump(&mut self) -> Option<char> {
		let c = self.peek()?;
		self.pos += 1;
		if c == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(c)
	}

	fn slice(&self, start: usize) -> String {
		self.chars[start..self.pos].iter().collect()
	}
}

#[instrument(name = "sql::tokenize", level = "trace", skip_all)]
pub fn tokenize(sql: &str) -> crate::Result<Vec<Token>> {
	let mut tokens = Vec::new();
	let mut cursor = Cursor::new(sql);

	while let Some(c) = cursor.peek() {
		if c.is_whitespace() {
			cursor.bump();
			continue;
		}

		let (line, column, start) = (cursor.line, cursor.column, cursor.pos);
		let token = |kind: TokenKind, text: String| Token {
			kind,
			fragment: Fragment::statement(text, line, column),
		};

		if c.is_ascii_digit() || (c == '-' && cursor.peek_at(1).is_some_and(|d| d.is_ascii_digit())) {
			let (kind, text) = scan_number(&mut cursor);
			if kind == Literal::Integer && text.parse::<i64>().is_err() {
				return_error!(SqlError::IntegerOutOfRange {
					fragment: Fragment::statement(text, line, column),
				});
			}
			tokens.push(token(TokenKind::Literal(kind), text));
			continue;
		}

		if c.is_ascii_alphabetic() {
			while cursor.peek().is_some_and(|d| d.is_ascii_alphanumeric() || d == '_') {
				cursor.bump();
			}
			let word = cursor.slice(start);
			let upper = word.to_ascii_uppercase();
			let kind = match upper.as_str() {
				"TRUE" => TokenKind::Literal(Literal::True),
				"FALSE" => TokenKind::Literal(Literal::False),
				"NULL" => TokenKind::Literal(Literal::Null),
				_ => match Keyword::lookup(&upper) {
					Some(keyword) => TokenKind::Keyword(keyword),
					None => TokenKind::Identifier,
				},
			};
			let text = match kind {
				TokenKind::Keyword(_) => upper,
				_ => word,
			};
			tokens.push(token(kind, text));
			continue;
		}

		if c == '\'' || c == '"' || c == '`' {
			cursor.bump();
			let body = cursor.pos;
			while cursor.peek().is_some_and(|d| d != c) {
				cursor.bump();
			}
			if cursor.peek().is_none() {
				return_error!(SqlError::IllegalCharacter {
					character: c,
					fragment: Fragment::statement(c.to_string(), line, column),
				});
			}
			let text = cursor.slice(body);
			cursor.bump();
			tokens.push(token(TokenKind::Literal(Literal::Text), text));
			continue;
		}

		let next = cursor.peek_at(1);
		let (kind, width) = match (c, next) {
			('<', Some('>')) => (TokenKind::Operator(Operator::NotEqual), 2),
			('<', Some('=')) => (TokenKind::Operator(Operator::LeftAngleEqual), 2),
			('>', Some('=')) => (TokenKind::Operator(Operator::RightAngleEqual), 2),
			('!', Some('=')) => (TokenKind::Operator(Operator::BangEqual), 2),
			('*', Some('*')) => (TokenKind::Operator(Operator::DoubleAsterisk), 2),
			('<', _) => (TokenKind::Operator(Operator::LeftAngle), 1),
			('>', _) => (TokenKind::Operator(Operator::RightAngle), 1),
			('=', _) => (TokenKind::Operator(Operator::Equal), 1),
			('+', _) => (TokenKind::Operator(Operator::Plus), 1),
			('-', _) => (TokenKind::Operator(Operator::Minus), 1),
			('*', _) => (TokenKind::Operator(Operator::Asterisk), 1),
			('/', _) => (TokenKind::Operator(Operator::Slash), 1),
			('%', _) => (TokenKind::Operator(Operator::Percent), 1),
			('.', _) => (TokenKind::Operator(Operator::Dot), 1),
			(':', _) => (TokenKind::Operator(Operator::Colon), 1),
			('(', _) => (TokenKind::Operator(Operator::OpenParen), 1),
			(')', _) => (TokenKind::Operator(Operator::CloseParen), 1),
			('[', _) => (TokenKind::Operator(Operator::OpenBracket), 1),
			(']', _) => (TokenKind::Operator(Operator::CloseBracket), 1),
			('{', _) => (TokenKind::Operator(Operator::OpenCurly), 1),
			('}', _) => (TokenKind::Operator(Operator::CloseCurly), 1),
			(',', _) => (TokenKind::Separator(Separator::Comma), 1),
			(';', _) => (TokenKind::Separator(Separator::Semicolon), 1),
			_ => {
				return_error!(SqlError::IllegalCharacter {
					character: c,
					fragment: Fragment::statement(c.to_string(), line, column),
				});
			}
		};
		for _ in 0..width {
			cursor.bump();
		}
		tokens.push(token(kind, cursor.slice(start)));
	}

	trace!(count = tokens.len(), "tokenized");
	Ok(tokens)
}

/// `-?(0|[1-9][0-9]*)` optionally followed by `.[0-9]+` and/or an exponent.
/// A leading `0` ends the integer part, so `007` reads as three tokens.
fn scan_number(cursor: &mut Cursor) -> (Literal, String) {
	let start = cursor.pos;
	if cursor.peek() == Some('-') {
		cursor.bump();
	}

	if cursor.peek() == Some('0') {
		cursor.bump();
	} else {
		while cursor.peek().is_some_and(|d| d.is_ascii_digit()) {
			cursor.bump();
		}
	}

	let mut kind = Literal::Integer;

	if cursor.peek() == Some('.') && cursor.peek_at(1).is_some_and(|d| d.is_ascii_digit()) {
		kind = Literal::Float;
		cursor.bump();
		while cursor.peek().is_some_and(|d| d.is_ascii_digit()) {
			cursor.bump();
		}
	}

	if matches!(cursor.peek(), Some('e' | 'E')) {
		let signed = matches!(cursor.peek_at(1), Some('+' | '-'));
		let digit_at = if signed { 2 } else { 1 };
		if cursor.peek_at(digit_at).is_some_and(|d| d.is_ascii_digit()) {
			kind = Literal::Float;
			for _ in 0..digit_at {
				cursor.bump();
			}
			while cursor.peek().is_some_and(|d| d.is_ascii_digit()) {
				cursor.bump();
			}
		}
	}

	(kind, cursor.slice(start))
}
