// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::ast::*;

/// Compile a condition tree into the predicate string the store evaluates.
///
/// Every sub-expression is bracketed explicitly. Arithmetic is reproduced
/// as written, precedence is left to the evaluator.
pub fn emit(condition: &Condition) -> String {
	match condition {
		Condition::Compare {
			left,
			op,
			right,
		} => format!("({} {} {})", emit_operand(left), op.as_str(), emit_operand(right)),
		Condition::Like {
			target,
			pattern,
			negated,
		} => {
			let like = format!("({} LIKE {})", emit_operand(target), quote(pattern));
			if *negated {
				format!("(NOT {like})")
			} else {
				like
			}
		}
		Condition::Between {
			target,
			low,
			high,
			negated,
		} => {
			let range = format!("({} <= {} <= {})", emit_operand(low), emit_operand(target), emit_operand(high));
			if *negated {
				format!("(not {range})")
			} else {
				range
			}
		}
		Condition::In {
			target,
			list,
			negated,
		} => {
			let items: Vec<String> = list.iter().map(|v| v.to_string()).collect();
			let within = format!("({} IN [{}])", emit_operand(target), items.join(", "));
			if *negated {
				format!("(NOT {within})")
			} else {
				within
			}
		}
		Condition::IsNull {
			target,
			negated,
		} => {
			if *negated {
				format!("({} IS NOT NULL)", emit_operand(target))
			} else {
				format!("({} IS NULL)", emit_operand(target))
			}
		}
		Condition::Contains {
			function,
			target,
			value,
		} => match value {
			Some(value) => format!("({}({}, {}))", function.as_str(), emit_path(target), value),
			None => format!("({}({}))", function.as_str(), emit_path(target)),
		},
		Condition::Not(inner) => format!("NOT {}", emit(inner)),
		Condition::And(l, r) => format!("({}) AND ({})", emit(l), emit(r)),
		Condition::Or(l, r) => format!("({}) OR ({})", emit(l), emit(r)),
		Condition::Nested(inner) => format!("({})", emit(inner)),
	}
}

pub fn emit_operand(operand: &Operand) -> String {
	match operand {
		Operand::Path(path) => emit_path(path),
		Operand::ArrayLength(path) => format!("ARRAY_LENGTH({})", emit_path(path)),
		Operand::Literal(value) => value.to_string(),
		Operand::Unary {
			op,
			operand,
		} => match op {
			UnaryOp::Plus => format!("+{}", emit_operand(operand)),
			UnaryOp::Neg => format!("-{}", emit_operand(operand)),
		},
		Operand::Binary {
			left,
			op,
			right,
		} => format!("{} {} {}", emit_operand(left), op.as_str(), emit_operand(right)),
		Operand::Nested(inner) => format!("({})", emit_operand(inner)),
	}
}

fn emit_path(path: &Path) -> String {
	let mut out = path.root.clone();
	for segment in &path.segments {
		match segment {
			PathSegment::Key(key) => {
				out.push('[');
				out.push_str(&quote(key));
				out.push(']');
			}
			PathSegment::Index(idx) => out.push_str(&format!("[{idx}]")),
			PathSegment::Field(name) => {
				out.push('.');
				out.push_str(name);
			}
		}
	}
	out
}

fn quote(text: &str) -> String {
	vql_type::Value::Text(text.to_string()).to_string()
}

#[cfg(test)]
mod tests {
	use vql_type::Value;

	use super::*;
	use crate::{Command, parse};

	fn compile(condition: &str) -> String {
		match parse(&format!("delete from T where {condition};")).unwrap() {
			Command::Delete(delete) => delete.expr.unwrap(),
			other => panic!("expected delete, got {other:?}"),
		}
	}

	#[test]
	fn test_comparator_translation() {
		assert_eq!(compile("a = 5"), "(a == 5)");
		assert_eq!(compile("a <> 5"), "(a != 5)");
		assert_eq!(compile("a != 5"), "(a != 5)");
		assert_eq!(compile("a >= 5.0"), "(a >= 5.0)");
		assert_eq!(compile("5 < a"), "(5 < a)");
	}

	#[test]
	fn test_between() {
		assert_eq!(compile("book_id between 3 and 5.0"), "(3 <= book_id <= 5.0)");
		assert_eq!(compile("book_id not between 3.0 and 5"), "(not (3.0 <= book_id <= 5))");
	}

	#[test]
	fn test_like() {
		assert_eq!(compile(r#"book_id like "prefix%""#), r#"(book_id LIKE "prefix%")"#);
		assert_eq!(compile("book_id not like 'prefix%'"), r#"(NOT (book_id LIKE "prefix%"))"#);
	}

	#[test]
	fn test_in() {
		assert_eq!(compile("book_id in [1, 2.0, 3]"), "(book_id IN [1, 2.0, 3])");
		assert_eq!(compile(r#"book_id not in ["abc", "def", "'"]"#), r#"(NOT (book_id IN ["abc", "def", "'"]))"#);
		assert_eq!(compile(r#"book_id in [""]"#), r#"(book_id IN [""])"#);
	}

	#[test]
	fn test_not_binds_single_condition() {
		assert_eq!(compile("not book_id > 5"), "NOT (book_id > 5)");
		assert_eq!(compile("not ARRAY_LENGTH(book_id) = 8"), "NOT (ARRAY_LENGTH(book_id) == 8)");
		assert_eq!(compile("not book_id not between 1 and 5"), "NOT (not (1 <= book_id <= 5))");
		assert_eq!(compile("not a = 1 and b = 2"), "(NOT (a == 1)) AND ((b == 2))");
	}

	#[test]
	fn test_functions() {
		assert_eq!(compile("ARRAY_CONTAINS(book_id, 1)"), "(ARRAY_CONTAINS(book_id, 1))");
		assert_eq!(compile("ARRAY_CONTAINS_ALL(book_id, [1, 2, 8])"), "(ARRAY_CONTAINS_ALL(book_id, [1, 2, 8]))");
		assert_eq!(compile("json_contains_any(meta, [6, 9])"), "(JSON_CONTAINS_ANY(meta, [6, 9]))");
		assert_eq!(compile("JSON_CONTAINS(meta)"), "(JSON_CONTAINS(meta))");
		assert_eq!(compile("ARRAY_LENGTH(book_id) = 5"), "(ARRAY_LENGTH(book_id) == 5)");
	}

	#[test]
	fn test_and_or_left_to_right() {
		assert_eq!(compile("book_id = 5 and book_id = 6"), "((book_id == 5)) AND ((book_id == 6))");
		assert_eq!(compile("book_id = 5 or book_id = 6"), "((book_id == 5)) OR ((book_id == 6))");
		assert_eq!(
			compile("a = 4 and b = 5 or c = 6 and d = 7"),
			"((((a == 4)) AND ((b == 5))) OR ((c == 6))) AND ((d == 7))"
		);
	}

	#[test]
	fn test_grouping() {
		assert_eq!(compile("(a = 1)"), "((a == 1))");
		assert_eq!(compile("a = 1 and (b = 2 or c = 3)"), "((a == 1)) AND ((((b == 2)) OR ((c == 3))))");
	}

	#[test]
	fn test_arithmetic_is_verbatim() {
		assert_eq!(compile("book_id = 30 / 2 - 8"), "(book_id == 30 / 2 - 8)");
		assert_eq!(compile("book_id = (5*8/8)"), "(book_id == (5 * 8 / 8))");
		assert_eq!(compile("book_id = 5*(8/8)"), "(book_id == 5 * (8 / 8))");
		assert_eq!(compile("book_id = 5**(8/8)"), "(book_id == 5 ** (8 / 8))");
		assert_eq!(compile("book_id = -2 * -(2 - 4)"), "(book_id == -2 * -(2 - 4))");
		assert_eq!(compile("(a + 1) * 2 > b"), "((a + 1) * 2 > b)");
	}

	#[test]
	fn test_glued_minus_is_binary() {
		assert_eq!(compile("a-1 = 2"), "(a - 1 == 2)");
		assert_eq!(compile("a = 3-1"), "(a == 3 - 1)");
	}

	#[test]
	fn test_subscript() {
		assert_eq!(compile("arr[0] = 5"), "(arr[0] == 5)");
		assert_eq!(compile(r#"obj["key"] = 5"#), r#"(obj["key"] == 5)"#);
		assert_eq!(compile(r#"obj['key'][0] = 5"#), r#"(obj["key"][0] == 5)"#);
		assert_eq!(compile("a.b = 'x'"), r#"(a.b == "x")"#);
	}

	#[test]
	fn test_is_null() {
		assert_eq!(compile("a is null"), "(a IS NULL)");
		assert_eq!(compile("a IS NOT NULL"), "(a IS NOT NULL)");
	}

	#[test]
	fn test_emit_tree_directly() {
		let condition = Condition::Or(
			Box::new(Condition::Compare {
				left: Operand::Path(Path::field("x")),
				op: Comparator::Eq,
				right: Operand::Literal(Value::Boolean(true)),
			}),
			Box::new(Condition::Contains {
				function: ContainsFunction::ArrayContains,
				target: Path::field("y"),
				value: Some(Value::Text("q".to_string())),
			}),
		);
		assert_eq!(emit(&condition), r#"((x == true)) OR ((ARRAY_CONTAINS(y, "q")))"#);
	}
}
