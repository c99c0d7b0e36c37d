// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Build an [`Error`](crate::Error) from anything that converts into a
/// diagnostic.
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($crate::IntoDiagnostic::into_diagnostic($diagnostic))
	};
}

/// Return early with an [`Error`](crate::Error) built from a diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}
