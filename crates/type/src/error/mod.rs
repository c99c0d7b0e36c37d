// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

mod diagnostic;
mod r#macro;
pub mod render;

pub use diagnostic::{Diagnostic, IntoDiagnostic};
use render::DefaultRenderer;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	/// The input contained a character no token rule accepts.
	pub fn is_lexical(&self) -> bool {
		self.0.code.starts_with("LEX_")
	}

	/// The token sequence did not match any statement production.
	pub fn is_grammar(&self) -> bool {
		self.0.code.starts_with("PARSE_")
	}
}

impl std::error::Error for Error {}
