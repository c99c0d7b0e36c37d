// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use test_each_file::test_each_file;
use vql_sql::parse;

fn run([sql, expected]: [&str; 2]) {
	let command = match parse(sql) {
		Ok(command) => command,
		Err(err) => panic!("{err}"),
	};
	let expected: serde_json::Value = serde_json::from_str(expected).unwrap();
	assert_eq!(command.to_json(), expected, "{sql}");

	// the same text always yields the same command
	assert_eq!(parse(sql).unwrap(), command);
}

test_each_file! { for ["sql", "json"] in "crates/sql/tests/scripts" => run }
