// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vql_sql::CommandKind;
use vql_type::{Diagnostic, Fragment, IntoDiagnostic};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
	#[error("no handler for `{kind}`")]
	Unsupported {
		kind: CommandKind,
	},
}

impl IntoDiagnostic for SessionError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			SessionError::Unsupported {
				kind,
			} => Diagnostic {
				code: "SESSION_001".to_string(),
				statement: None,
				message: format!("no handler for `{}`", kind),
				fragment: Fragment::None,
				label: None,
				help: Some("implement the matching `Handler` method".to_string()),
				notes: vec![],
			},
		}
	}
}

impl From<SessionError> for vql_type::Error {
	fn from(err: SessionError) -> Self {
		vql_type::Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unsupported_code() {
		let err: vql_type::Error = SessionError::Unsupported {
			kind: CommandKind::Search,
		}
		.into();
		assert_eq!(err.code, "SESSION_001");
		assert_eq!(err.message, "no handler for `search`");
		assert!(!err.is_grammar());
	}
}
