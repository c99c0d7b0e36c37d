// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vql_type::{Params, Value};

/// One search result: primary key, distance score and the returned fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
	pub pk: Value,
	pub score: f64,
	pub entity: Params,
}

/// Flatten the hits of every query vector into rows of
/// `{pk, score, <field>...}`.
///
/// `*` expands to every field of the hit's entity. A requested field the
/// entity lacks is reported as `null`.
pub fn flatten_hits(results: &[Vec<Hit>], output_fields: &[String]) -> Vec<Params> {
	let expand = output_fields.iter().any(|field| field == "*");

	results
		.iter()
		.flatten()
		.map(|hit| {
			let mut row = Params::new();
			row.insert("pk".to_string(), hit.pk.clone());
			row.insert("score".to_string(), Value::Float(hit.score));

			if expand {
				for (name, value) in &hit.entity {
					row.insert(name.clone(), value.clone());
				}
			} else {
				for name in output_fields {
					let value = hit.entity.get(name).cloned().unwrap_or(Value::Null);
					row.insert(name.clone(), value);
				}
			}
			row
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn hit(pk: i64, score: f64, fields: &[(&str, Value)]) -> Hit {
		Hit {
			pk: Value::Int(pk),
			score,
			entity: fields.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
		}
	}

	#[test]
	fn test_named_fields() {
		let results = vec![vec![hit(1, 0.5, &[("title", Value::from("Dune")), ("year", Value::Int(1965))])]];
		let rows = flatten_hits(&results, &["title".to_string(), "author".to_string()]);

		assert_eq!(rows.len(), 1);
		let keys: Vec<_> = rows[0].keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["pk", "score", "title", "author"]);
		assert_eq!(rows[0]["pk"], Value::Int(1));
		assert_eq!(rows[0]["score"], Value::Float(0.5));
		assert_eq!(rows[0]["author"], Value::Null);
	}

	#[test]
	fn test_star_expands_entity() {
		let results = vec![vec![hit(7, 0.1, &[("a", Value::Int(1)), ("b", Value::Int(2))])]];
		let rows = flatten_hits(&results, &["*".to_string()]);
		let keys: Vec<_> = rows[0].keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["pk", "score", "a", "b"]);
	}

	#[test]
	fn test_hits_of_every_vector_in_order() {
		let results = vec![vec![hit(1, 0.1, &[]), hit(2, 0.2, &[])], vec![hit(3, 0.3, &[])]];
		let rows = flatten_hits(&results, &[]);
		let pks: Vec<_> = rows.iter().map(|row| row["pk"].clone()).collect();
		assert_eq!(pks, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
	}
}
