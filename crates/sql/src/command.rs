// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Serialize, Serializer, ser::SerializeMap};
use vql_type::{Params, Value};

use crate::error::SqlError;

/// One parsed statement.
///
/// Serializes as a mapping whose `type` key names the operation, followed by
/// the operation's own keys. `WITH` options that have no dedicated field are
/// flattened next to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Command {
	#[serde(rename = "create_db")]
	CreateDatabase {
		name: String,
	},
	#[serde(rename = "drop_db")]
	DropDatabase {
		name: String,
	},
	#[serde(rename = "use_db")]
	UseDatabase {
		name: String,
	},
	#[serde(rename = "show_db")]
	ShowDatabases,

	#[serde(rename = "show_coll")]
	ShowCollections,
	#[serde(rename = "drop_coll")]
	DropCollection {
		name: String,
	},
	#[serde(rename = "release_coll")]
	ReleaseCollection {
		name: String,
	},
	#[serde(rename = "compact_coll")]
	CompactCollection {
		name: String,
	},
	#[serde(rename = "load_coll")]
	LoadCollection {
		name: String,
		#[serde(flatten)]
		params: Params,
	},
	#[serde(rename = "create_alias")]
	CreateAlias {
		alias: String,
		coll: String,
	},
	#[serde(rename = "drop_alias")]
	DropAlias {
		alias: String,
		coll: String,
	},
	#[serde(rename = "show_alias")]
	ShowAliases {
		coll: String,
	},
	#[serde(rename = "rename_coll")]
	RenameCollection {
		old_coll: String,
		new_coll: String,
		new_db: String,
	},
	#[serde(rename = "create_coll")]
	CreateCollection(CreateCollection),

	#[serde(rename = "create_part")]
	CreatePartition {
		part: String,
		coll: String,
		#[serde(flatten)]
		params: Params,
	},
	#[serde(rename = "show_part")]
	ShowPartitions {
		coll: String,
	},
	#[serde(rename = "drop_part")]
	DropPartition {
		part: String,
		coll: String,
	},
	#[serde(rename = "load_part")]
	LoadPartitions {
		coll: String,
		parts: Vec<String>,
		#[serde(flatten)]
		params: Params,
	},
	#[serde(rename = "release_part")]
	ReleasePartitions {
		coll: String,
		parts: Vec<String>,
	},

	#[serde(rename = "create_idx")]
	CreateIndex(CreateIndex),
	#[serde(rename = "show_idx")]
	ShowIndexes {
		coll: String,
	},
	#[serde(rename = "drop_idx")]
	DropIndex {
		idx: String,
		coll: String,
	},

	#[serde(rename = "bulk_insert")]
	BulkInsert(BulkInsert),
	#[serde(rename = "insert")]
	Insert(Write),
	#[serde(rename = "upsert")]
	Upsert(Write),
	#[serde(rename = "delete")]
	Delete(Delete),
	#[serde(rename = "query")]
	Query(Query),
	#[serde(rename = "search")]
	Search(Search),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCollection {
	pub name: String,
	pub fields: Vec<FieldDefinition>,
	pub params: Params,
}

impl CreateCollection {
	/// Check every field's attribute invariants. `parse` never calls this,
	/// the store is the authority on schema legality.
	pub fn validate(&self) -> crate::Result<()> {
		for field in &self.fields {
			field.validate()?;
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateIndex {
	pub idx: String,
	pub coll: String,
	pub field: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub params: Option<IndexParams>,
}

/// `index_type` and `metric_type` lifted out of the `WITH` block, everything
/// else stays under `params`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IndexParams {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub index_type: Option<Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub metric_type: Option<Value>,
	pub params: Params,
}

impl IndexParams {
	pub fn from_params(mut params: Params) -> Self {
		let index_type = params.shift_remove("index_type");
		let metric_type = params.shift_remove("metric_type");
		Self {
			index_type,
			metric_type,
			params,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkInsert {
	pub coll: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub part: Option<String>,
	pub files: Vec<String>,
}

/// Rows for `INSERT` and `UPSERT`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Write {
	pub coll_name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub part_name: Option<String>,
	pub data: Vec<Params>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delete {
	pub coll_name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub part_name: Option<String>,
	pub expr: Option<String>,
	#[serde(flatten)]
	pub params: Params,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
	pub coll_name: String,
	pub fields: Vec<String>,
	pub parts: Vec<String>,
	pub limit: Option<i64>,
	pub offset: Option<i64>,
	pub expr: Option<String>,
	#[serde(flatten)]
	pub params: Params,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Search {
	pub coll_name: String,
	pub fields: Vec<String>,
	pub parts: Vec<String>,
	pub anns: String,
	pub data: Vec<Vec<Value>>,
	pub limit: Option<i64>,
	pub expr: Option<String>,
	pub param: SearchParam,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchParam {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub metric_type: Option<Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub offset: Option<Value>,
	pub params: Params,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
	/// `INT64`, `JSON`, `VARCHAR`, ...
	Scalar(String),
	/// `VARCHAR(256)`
	Sized {
		name: String,
		max_length: i64,
	},
	/// `FLOAT VECTOR(128)`
	Vector {
		element: String,
		dim: i64,
	},
	/// `INT32 ARRAY(16)` or `VARCHAR(64) ARRAY(16)`
	Array {
		element_type: String,
		max_capacity: i64,
		max_length: Option<i64>,
	},
}

impl FieldType {
	pub fn type_name(&self) -> String {
		match self {
			FieldType::Scalar(name) => name.clone(),
			FieldType::Sized {
				name,
				..
			} => name.clone(),
			FieldType::Vector {
				element,
				..
			} => format!("{element}_VECTOR"),
			FieldType::Array {
				..
			} => "ARRAY".to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
	pub name: String,
	pub field_type: FieldType,
	pub is_primary: bool,
	pub is_partition_key: bool,
	pub auto_id: bool,
	pub is_dynamic: bool,
	pub description: Option<String>,
}

impl FieldDefinition {
	pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
		Self {
			name: name.into(),
			field_type,
			is_primary: false,
			is_partition_key: false,
			auto_id: false,
			is_dynamic: false,
			description: None,
		}
	}

	pub fn validate(&self) -> crate::Result<()> {
		if self.is_primary && self.is_partition_key {
			return Err(SqlError::PrimaryAndPartitionKey {
				field: self.name.clone(),
			}
			.into());
		}
		if self.auto_id && !self.is_primary {
			return Err(SqlError::AutoIdWithoutPrimaryKey {
				field: self.name.clone(),
			}
			.into());
		}
		Ok(())
	}
}

impl Serialize for FieldDefinition {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(None)?;
		map.serialize_entry("name", &self.name)?;
		map.serialize_entry("type", &self.field_type.type_name())?;
		match &self.field_type {
			FieldType::Scalar(_) => {}
			FieldType::Sized {
				max_length,
				..
			} => map.serialize_entry("max_length", max_length)?,
			FieldType::Vector {
				dim,
				..
			} => map.serialize_entry("dim", dim)?,
			FieldType::Array {
				element_type,
				max_capacity,
				max_length,
			} => {
				map.serialize_entry("element_type", element_type)?;
				map.serialize_entry("max_capacity", max_capacity)?;
				if let Some(max_length) = max_length {
					map.serialize_entry("max_length", max_length)?;
				}
			}
		}
		if self.is_primary {
			map.serialize_entry("is_primary", &true)?;
		}
		if self.is_partition_key {
			map.serialize_entry("is_partition_key", &true)?;
		}
		if self.auto_id {
			map.serialize_entry("auto_id", &true)?;
		}
		if self.is_dynamic {
			map.serialize_entry("is_dynamic", &true)?;
		}
		if let Some(description) = &self.description {
			map.serialize_entry("description", description)?;
		}
		map.end()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
	CreateDatabase,
	DropDatabase,
	UseDatabase,
	ShowDatabases,
	ShowCollections,
	DropCollection,
	ReleaseCollection,
	CompactCollection,
	LoadCollection,
	CreateAlias,
	DropAlias,
	ShowAliases,
	RenameCollection,
	CreateCollection,
	CreatePartition,
	ShowPartitions,
	DropPartition,
	LoadPartitions,
	ReleasePartitions,
	CreateIndex,
	ShowIndexes,
	DropIndex,
	BulkInsert,
	Insert,
	Upsert,
	Delete,
	Query,
	Search,
}

impl CommandKind {
	/// The `type` tag of the serialized command.
	pub fn as_str(&self) -> &'static str {
		match self {
			CommandKind::CreateDatabase => "create_db",
			CommandKind::DropDatabase => "drop_db",
			CommandKind::UseDatabase => "use_db",
			CommandKind::ShowDatabases => "show_db",
			CommandKind::ShowCollections => "show_coll",
			CommandKind::DropCollection => "drop_coll",
			CommandKind::ReleaseCollection => "release_coll",
			CommandKind::CompactCollection => "compact_coll",
			CommandKind::LoadCollection => "load_coll",
			CommandKind::CreateAlias => "create_alias",
			CommandKind::DropAlias => "drop_alias",
			CommandKind::ShowAliases => "show_alias",
			CommandKind::RenameCollection => "rename_coll",
			CommandKind::CreateCollection => "create_coll",
			CommandKind::CreatePartition => "create_part",
			CommandKind::ShowPartitions => "show_part",
			CommandKind::DropPartition => "drop_part",
			CommandKind::LoadPartitions => "load_part",
			CommandKind::ReleasePartitions => "release_part",
			CommandKind::CreateIndex => "create_idx",
			CommandKind::ShowIndexes => "show_idx",
			CommandKind::DropIndex => "drop_idx",
			CommandKind::BulkInsert => "bulk_insert",
			CommandKind::Insert => "insert",
			CommandKind::Upsert => "upsert",
			CommandKind::Delete => "delete",
			CommandKind::Query => "query",
			CommandKind::Search => "search",
		}
	}
}

impl std::fmt::Display for CommandKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Command {
	pub fn kind(&self) -> CommandKind {
		match self {
			Command::CreateDatabase {
				..
			} => CommandKind::CreateDatabase,
			Command::DropDatabase {
				..
			} => CommandKind::DropDatabase,
			Command::UseDatabase {
				..
			} => CommandKind::UseDatabase,
			Command::ShowDatabases => CommandKind::ShowDatabases,
			Command::ShowCollections => CommandKind::ShowCollections,
			Command::DropCollection {
				..
			} => CommandKind::DropCollection,
			Command::ReleaseCollection {
				..
			} => CommandKind::ReleaseCollection,
			Command::CompactCollection {
				..
			} => CommandKind::CompactCollection,
			Command::LoadCollection {
				..
			} => CommandKind::LoadCollection,
			Command::CreateAlias {
				..
			} => CommandKind::CreateAlias,
			Command::DropAlias {
				..
			} => CommandKind::DropAlias,
			Command::ShowAliases {
				..
			} => CommandKind::ShowAliases,
			Command::RenameCollection {
				..
			} => CommandKind::RenameCollection,
			Command::CreateCollection(_) => CommandKind::CreateCollection,
			Command::CreatePartition {
				..
			} => CommandKind::CreatePartition,
			Command::ShowPartitions {
				..
			} => CommandKind::ShowPartitions,
			Command::DropPartition {
				..
			} => CommandKind::DropPartition,
			Command::LoadPartitions {
				..
			} => CommandKind::LoadPartitions,
			Command::ReleasePartitions {
				..
			} => CommandKind::ReleasePartitions,
			Command::CreateIndex(_) => CommandKind::CreateIndex,
			Command::ShowIndexes {
				..
			} => CommandKind::ShowIndexes,
			Command::DropIndex {
				..
			} => CommandKind::DropIndex,
			Command::BulkInsert(_) => CommandKind::BulkInsert,
			Command::Insert(_) => CommandKind::Insert,
			Command::Upsert(_) => CommandKind::Upsert,
			Command::Delete(_) => CommandKind::Delete,
			Command::Query(_) => CommandKind::Query,
			Command::Search(_) => CommandKind::Search,
		}
	}

	/// The serialized form as a JSON value.
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_unit_variant_serializes_tag_only() {
		assert_eq!(Command::ShowDatabases.to_json(), json!({"type": "show_db"}));
	}

	#[test]
	fn test_flattened_params() {
		let mut params = Params::new();
		params.insert("replica_number".to_string(), Value::Int(2));
		let command = Command::LoadCollection {
			name: "books".to_string(),
			params,
		};
		assert_eq!(command.to_json(), json!({"type": "load_coll", "name": "books", "replica_number": 2}));
	}

	#[test]
	fn test_field_definition_omits_false_attributes() {
		let mut field = FieldDefinition::new("f1", FieldType::Scalar("INT64".to_string()));
		field.is_primary = true;
		assert_eq!(serde_json::to_value(&field).unwrap(), json!({"name": "f1", "type": "INT64", "is_primary": true}));
	}

	#[test]
	fn test_field_type_names() {
		let vector = FieldType::Vector {
			element: "FLOAT".to_string(),
			dim: 4,
		};
		assert_eq!(vector.type_name(), "FLOAT_VECTOR");

		let array = FieldDefinition::new(
			"tags",
			FieldType::Array {
				element_type: "VARCHAR".to_string(),
				max_capacity: 8,
				max_length: Some(16),
			},
		);
		assert_eq!(
			serde_json::to_value(&array).unwrap(),
			json!({"name": "tags", "type": "ARRAY", "element_type": "VARCHAR", "max_capacity": 8, "max_length": 16})
		);
	}

	#[test]
	fn test_index_params_hoisting() {
		let mut params = Params::new();
		params.insert("index_type".to_string(), Value::from("IVF_FLAT"));
		params.insert("nlist".to_string(), Value::Int(128));
		params.insert("metric_type".to_string(), Value::from("L2"));
		let hoisted = IndexParams::from_params(params);
		assert_eq!(
			serde_json::to_value(&hoisted).unwrap(),
			json!({"index_type": "IVF_FLAT", "metric_type": "L2", "params": {"nlist": 128}})
		);
	}

	#[test]
	fn test_validate_primary_and_partition_key() {
		let mut field = FieldDefinition::new("f", FieldType::Scalar("INT64".to_string()));
		field.is_primary = true;
		field.is_partition_key = true;
		assert_eq!(field.validate().unwrap_err().code, "SCHEMA_001");
	}

	#[test]
	fn test_validate_auto_id_requires_primary() {
		let mut field = FieldDefinition::new("f", FieldType::Scalar("INT64".to_string()));
		field.auto_id = true;
		assert_eq!(field.validate().unwrap_err().code, "SCHEMA_002");
		field.is_primary = true;
		assert!(field.validate().is_ok());
	}

	#[test]
	fn test_kind_matches_tag() {
		let command = Command::DropIndex {
			idx: "i".to_string(),
			coll: "c".to_string(),
		};
		assert_eq!(command.kind(), CommandKind::DropIndex);
		assert_eq!(command.to_json()["type"], json!(command.kind().as_str()));
	}
}
