// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use serde::{Deserialize, Serialize};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatementColumn(pub u32);

impl Deref for StatementColumn {
	type Target = u32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<i32> for StatementColumn {
	fn eq(&self, other: &i32) -> bool {
		self.0 == *other as u32
	}
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatementLine(pub u32);

impl Deref for StatementLine {
	type Target = u32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<i32> for StatementLine {
	fn eq(&self, other: &i32) -> bool {
		self.0 == *other as u32
	}
}

/// A piece of statement text together with the position it was read from.
///
/// Lines and columns are 1-based. `Fragment::None` stands in where no source
/// text exists, e.g. when the input ended before the parser was satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fragment {
	None,
	Statement {
		text: String,
		line: StatementLine,
		column: StatementColumn,
	},
}

impl Fragment {
	pub fn statement(text: impl Into<String>, line: u32, column: u32) -> Self {
		Fragment::Statement {
			text: text.into(),
			line: StatementLine(line),
			column: StatementColumn(column),
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Statement {
				text,
				..
			} => text.as_str(),
		}
	}

	pub fn line(&self) -> StatementLine {
		match self {
			Fragment::None => StatementLine(1),
			Fragment::Statement {
				line,
				..
			} => *line,
		}
	}

	pub fn column(&self) -> StatementColumn {
		match self {
			Fragment::None => StatementColumn(0),
			Fragment::Statement {
				column,
				..
			} => *column,
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Fragment::None)
	}
}

impl Default for Fragment {
	fn default() -> Self {
		Fragment::None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_statement_position() {
		let fragment = Fragment::statement("coll", 2, 7);
		assert_eq!(fragment.text(), "coll");
		assert_eq!(fragment.line(), 2);
		assert_eq!(fragment.column(), 7);
	}

	#[test]
	fn test_none_defaults() {
		let fragment = Fragment::None;
		assert_eq!(fragment.text(), "");
		assert_eq!(fragment.line(), 1);
		assert_eq!(fragment.column(), 0);
		assert!(fragment.is_none());
	}
}
