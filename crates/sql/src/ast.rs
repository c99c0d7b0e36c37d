// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Filter-expression tree built while parsing `WHERE` clauses.
//!
//! The tree only lives between parsing and [`emit`](crate::emit::emit); a
//! [`Command`](crate::Command) carries the compiled predicate string.

use vql_type::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
	Compare {
		left: Operand,
		op: Comparator,
		right: Operand,
	},
	Like {
		target: Operand,
		pattern: String,
		negated: bool,
	},
	Between {
		target: Operand,
		low: Operand,
		high: Operand,
		negated: bool,
	},
	In {
		target: Operand,
		list: Vec<Value>,
		negated: bool,
	},
	IsNull {
		target: Operand,
		negated: bool,
	},
	Contains {
		function: ContainsFunction,
		target: Path,
		value: Option<Value>,
	},
	Not(Box<Condition>),
	And(Box<Condition>, Box<Condition>),
	Or(Box<Condition>, Box<Condition>),
	Nested(Box<Condition>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
	Path(Path),
	ArrayLength(Path),
	Literal(Value),
	Unary {
		op: UnaryOp,
		operand: Box<Operand>,
	},
	Binary {
		left: Box<Operand>,
		op: BinaryOp,
		right: Box<Operand>,
	},
	Nested(Box<Operand>),
}

/// A field reference with optional subscripts: `meta["tags"][0]`, `a.b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
	pub root: String,
	pub segments: Vec<PathSegment>,
}

impl Path {
	pub fn field(name: impl Into<String>) -> Self {
		Self {
			root: name.into(),
			segments: vec![],
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
	Key(String),
	Index(i64),
	Field(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparator {
	Eq,
	NotEq,
	Lt,
	Gt,
	LtEq,
	GtEq,
}

impl Comparator {
	pub fn as_str(&self) -> &'static str {
		match self {
			Comparator::Eq => "==",
			Comparator::NotEq => "!=",
			Comparator::Lt => "<",
			Comparator::Gt => ">",
			Comparator::LtEq => "<=",
			Comparator::GtEq => ">=",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
	Add,
	Sub,
	Mul,
	Div,
	Mod,
	Pow,
}

impl BinaryOp {
	pub fn as_str(&self) -> &'static str {
		match self {
			BinaryOp::Add => "+",
			BinaryOp::Sub => "-",
			BinaryOp::Mul => "*",
			BinaryOp::Div => "/",
			BinaryOp::Mod => "%",
			BinaryOp::Pow => "**",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
	Plus,
	Neg,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainsFunction {
	JsonContains,
	JsonContainsAll,
	JsonContainsAny,
	ArrayContains,
	ArrayContainsAll,
	ArrayContainsAny,
}

impl ContainsFunction {
	pub fn as_str(&self) -> &'static str {
		match self {
			ContainsFunction::JsonContains => "JSON_CONTAINS",
			ContainsFunction::JsonContainsAll => "JSON_CONTAINS_ALL",
			ContainsFunction::JsonContainsAny => "JSON_CONTAINS_ANY",
			ContainsFunction::ArrayContains => "ARRAY_CONTAINS",
			ContainsFunction::ArrayContainsAll => "ARRAY_CONTAINS_ALL",
			ContainsFunction::ArrayContainsAny => "ARRAY_CONTAINS_ANY",
		}
	}
}
