// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::{error::Diagnostic, fragment::Fragment};

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

fn get_line(source: &str, line: u32) -> &str {
	source.lines().nth(line.saturating_sub(1) as usize).unwrap_or("")
}

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();

		let _ = writeln!(&mut output, "error[{}]: {}", d.code, d.message);

		if let Fragment::Statement {
			line,
			column,
			..
		} = &d.fragment
		{
			let line = line.0;
			let col = column.0.max(1);
			let width = line.to_string().len().max(2);

			let _ = writeln!(&mut output, " {:>width$}--> line {}, column {}", "", line, col, width = width);

			if let Some(statement) = &d.statement {
				let _ = writeln!(&mut output, " {:>width$} │", "", width = width);
				let _ = writeln!(&mut output, " {:>width$} │ {}", line, get_line(statement, line), width = width);
				let _ = writeln!(
					&mut output,
					" {:>width$} │ {}^ {}",
					"",
					" ".repeat((col - 1) as usize),
					d.label.as_deref().unwrap_or(""),
					width = width
				);
			}
		}

		if let Some(help) = &d.help {
			let _ = writeln!(&mut output, "\nhelp: {}", help);
		}

		for note in &d.notes {
			let _ = writeln!(&mut output, "note: {}", note);
		}

		output
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_with_statement() {
		let diagnostic = Diagnostic {
			code: "PARSE_001".to_string(),
			statement: Some("show collection;".to_string()),
			message: "Syntax error in input!".to_string(),
			fragment: Fragment::statement("collection", 1, 6),
			label: Some("found `collection`".to_string()),
			help: Some("check the statement".to_string()),
			notes: vec!["a note".to_string()],
		};

		let out = DefaultRenderer::render_string(&diagnostic);
		assert!(out.starts_with("error[PARSE_001]: Syntax error in input!\n"));
		assert!(out.contains("--> line 1, column 6"));
		assert!(out.contains(" 1 │ show collection;"));
		assert!(out.contains("│      ^ found `collection`"));
		assert!(out.contains("help: check the statement"));
		assert!(out.contains("note: a note"));
	}

	#[test]
	fn test_render_without_fragment() {
		let diagnostic = Diagnostic {
			code: "PARSE_001".to_string(),
			statement: None,
			message: "Syntax error in input!".to_string(),
			fragment: Fragment::None,
			label: None,
			help: None,
			notes: vec![],
		};
		assert_eq!(DefaultRenderer::render_string(&diagnostic), "error[PARSE_001]: Syntax error in input!\n");
	}
}
