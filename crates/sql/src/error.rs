// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vql_type::{Diagnostic, Fragment, IntoDiagnostic};

pub const SYNTAX_ERROR: &str = "Syntax error in input!";

#[derive(Debug, thiserror::Error)]
pub enum SqlError {
	#[error("Illegal character '{character}'")]
	IllegalCharacter {
		character: char,
		fragment: Fragment,
	},

	#[error("integer literal out of range")]
	IntegerOutOfRange {
		fragment: Fragment,
	},

	#[error("{SYNTAX_ERROR}")]
	UnexpectedToken {
		fragment: Fragment,
	},

	#[error("{SYNTAX_ERROR}")]
	UnexpectedEndOfInput,

	#[error("statement exceeds maximum length")]
	StatementTooLong {
		length: usize,
		max: usize,
	},

	#[error("statement nests deeper than {max} levels")]
	NestingTooDeep {
		fragment: Fragment,
		max: usize,
	},

	#[error("field `{field}` is both primary key and partition key")]
	PrimaryAndPartitionKey {
		field: String,
	},

	#[error("field `{field}` uses AUTO ID without PRIMARY KEY")]
	AutoIdWithoutPrimaryKey {
		field: String,
	},
}

impl IntoDiagnostic for SqlError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			SqlError::IllegalCharacter {
				character,
				fragment,
			} => Diagnostic {
				code: "LEX_001".to_string(),
				statement: None,
				message: format!(
					"Illegal character '{}' at line {} column {}",
					character,
					*fragment.line(),
					*fragment.column()
				),
				fragment,
				label: Some("no token starts with this character".to_string()),
				help: None,
				notes: vec![],
			},

			SqlError::IntegerOutOfRange {
				fragment,
			} => Diagnostic {
				code: "LEX_002".to_string(),
				statement: None,
				message: format!("integer literal `{}` does not fit into 64 bits", fragment.text()),
				fragment,
				label: Some("out of range".to_string()),
				help: Some("use a float literal for values outside the 64-bit integer range".to_string()),
				notes: vec![],
			},

			SqlError::UnexpectedToken {
				fragment,
			} => {
				let label = format!("unexpected `{}`", fragment.text());
				Diagnostic {
					code: "PARSE_001".to_string(),
					statement: None,
					message: SYNTAX_ERROR.to_string(),
					fragment,
					label: Some(label),
					help: None,
					notes: vec![],
				}
			}

			SqlError::UnexpectedEndOfInput => Diagnostic {
				code: "PARSE_001".to_string(),
				statement: None,
				message: SYNTAX_ERROR.to_string(),
				fragment: Fragment::None,
				label: None,
				help: Some("every statement ends with `;`".to_string()),
				notes: vec![],
			},

			SqlError::StatementTooLong {
				length,
				max,
			} => Diagnostic {
				code: "PARSE_002".to_string(),
				statement: None,
				message: "statement exceeds maximum length".to_string(),
				fragment: Fragment::None,
				label: None,
				help: None,
				notes: vec![format!("statement is {} bytes long, the limit is {}", length, max)],
			},

			SqlError::NestingTooDeep {
				fragment,
				max,
			} => Diagnostic {
				code: "PARSE_003".to_string(),
				statement: None,
				message: format!("statement nests deeper than {} levels", max),
				fragment,
				label: Some("nesting limit reached here".to_string()),
				help: Some("raise `ParseOptions::max_depth` or flatten the expression".to_string()),
				notes: vec![],
			},

			SqlError::PrimaryAndPartitionKey {
				field,
			} => Diagnostic {
				code: "SCHEMA_001".to_string(),
				statement: None,
				message: format!("field `{}` is both primary key and partition key", field),
				fragment: Fragment::None,
				label: None,
				help: Some("a field is either PRIMARY KEY or PARTITION KEY, not both".to_string()),
				notes: vec![],
			},

			SqlError::AutoIdWithoutPrimaryKey {
				field,
			} => Diagnostic {
				code: "SCHEMA_002".to_string(),
				statement: None,
				message: format!("field `{}` uses AUTO ID without PRIMARY KEY", field),
				fragment: Fragment::None,
				label: None,
				help: Some("declare the field as PRIMARY KEY AUTO ID".to_string()),
				notes: vec![],
			},
		}
	}
}

impl From<SqlError> for vql_type::Error {
	fn from(err: SqlError) -> Self {
		vql_type::Error(err.into_diagnostic())
	}
}
