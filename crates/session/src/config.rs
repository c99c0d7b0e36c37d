// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::Deserialize;
use vql_sql::CommandKind;

pub const DEFAULT_ALIAS: &str = "default";
pub const DEFAULT_CONSISTENCY_LEVEL: &str = "Bounded";

/// Per-operation defaults the execution layer applies to every command.
///
/// Deserializes from any serde format; missing sections and keys take their
/// defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
	pub connection: ConnectionConfig,
	pub database: OperationConfig,
	pub collection: OperationConfig,
	pub partition: OperationConfig,
	pub index: OperationConfig,
	pub insert: OperationConfig,
	pub delete: OperationConfig,
	pub query: QueryConfig,
	pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
	/// Name of the store connection commands run against.
	///
	/// Default: `"default"`
	pub alias: String,
}

impl Default for ConnectionConfig {
	fn default() -> Self {
		Self {
			alias: DEFAULT_ALIAS.to_string(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OperationConfig {
	/// Seconds. `None` leaves the store's own timeout in place.
	pub timeout: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
	pub timeout: Option<f64>,
	/// One of `Strong`, `Bounded`, `Session`, `Eventually`.
	pub consistency_level: String,
	pub ignore_growing: bool,
}

impl Default for QueryConfig {
	fn default() -> Self {
		Self {
			timeout: None,
			consistency_level: DEFAULT_CONSISTENCY_LEVEL.to_string(),
			ignore_growing: false,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
	pub timeout: Option<f64>,
	pub consistency_level: String,
	/// Digits kept in returned scores. `-1` keeps all of them.
	pub round_decimal: i64,
	pub ignore_growing: bool,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			timeout: None,
			consistency_level: DEFAULT_CONSISTENCY_LEVEL.to_string(),
			round_decimal: -1,
			ignore_growing: false,
		}
	}
}

/// The configuration section a command kind reads its defaults from. Also
/// selects the [`Handler`](crate::Handler) method a command is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
	Database,
	Collection,
	Partition,
	Index,
	Insert,
	Delete,
	Query,
	Search,
}

impl Section {
	pub fn of(kind: CommandKind) -> Self {
		match kind {
			CommandKind::CreateDatabase
			| CommandKind::DropDatabase
			| CommandKind::UseDatabase
			| CommandKind::ShowDatabases => Section::Database,
			CommandKind::ShowCollections
			| CommandKind::DropCollection
			| CommandKind::ReleaseCollection
			| CommandKind::CompactCollection
			| CommandKind::LoadCollection
			| CommandKind::CreateAlias
			| CommandKind::DropAlias
			| CommandKind::ShowAliases
			| CommandKind::RenameCollection
			| CommandKind::CreateCollection => Section::Collection,
			CommandKind::CreatePartition
			| CommandKind::ShowPartitions
			| CommandKind::DropPartition
			| CommandKind::LoadPartitions
			| CommandKind::ReleasePartitions => Section::Partition,
			CommandKind::CreateIndex | CommandKind::ShowIndexes | CommandKind::DropIndex => Section::Index,
			CommandKind::BulkInsert | CommandKind::Insert | CommandKind::Upsert => Section::Insert,
			CommandKind::Delete => Section::Delete,
			CommandKind::Query => Section::Query,
			CommandKind::Search => Section::Search,
		}
	}
}

/// Everything a handler needs from the configuration for one command.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefaults {
	pub alias: String,
	pub timeout: Option<f64>,
	pub consistency_level: Option<String>,
	pub round_decimal: Option<i64>,
	pub ignore_growing: Option<bool>,
}

impl SessionConfig {
	pub fn timeout_for(&self, kind: CommandKind) -> Option<f64> {
		match Section::of(kind) {
			Section::Database => self.database.timeout,
			Section::Collection => self.collection.timeout,
			Section::Partition => self.partition.timeout,
			Section::Index => self.index.timeout,
			Section::Insert => self.insert.timeout,
			Section::Delete => self.delete.timeout,
			Section::Query => self.query.timeout,
			Section::Search => self.search.timeout,
		}
	}

	pub fn defaults_for(&self, kind: CommandKind) -> OperationDefaults {
		let mut defaults = OperationDefaults {
			alias: self.connection.alias.clone(),
			timeout: self.timeout_for(kind),
			consistency_level: None,
			round_decimal: None,
			ignore_growing: None,
		};
		match Section::of(kind) {
			Section::Query => {
				defaults.consistency_level = Some(self.query.consistency_level.clone());
				defaults.ignore_growing = Some(self.query.ignore_growing);
			}
			Section::Search => {
				defaults.consistency_level = Some(self.search.consistency_level.clone());
				defaults.round_decimal = Some(self.search.round_decimal);
				defaults.ignore_growing = Some(self.search.ignore_growing);
			}
			_ => {}
		}
		defaults
	}
}
