// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{debug, instrument};
use vql_sql::{BulkInsert, Command, CommandKind, Delete, Query, Search, Write};

use crate::{
	config::{OperationDefaults, Section, SessionConfig},
	error::SessionError,
};

/// Rows handed to [`Handler::write`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WriteRequest<'a> {
	Bulk(&'a BulkInsert),
	Insert(&'a Write),
	Upsert(&'a Write),
}

impl WriteRequest<'_> {
	pub fn kind(&self) -> CommandKind {
		match self {
			WriteRequest::Bulk(_) => CommandKind::BulkInsert,
			WriteRequest::Insert(_) => CommandKind::Insert,
			WriteRequest::Upsert(_) => CommandKind::Upsert,
		}
	}
}

/// The store-facing side of a session. Each method receives the commands of
/// one family; families a store does not support keep the default body,
/// which fails with `SESSION_001`.
pub trait Handler {
	type Output;

	/// `create_db`, `drop_db`, `use_db`, `show_db`
	fn database(&mut self, command: &Command, _defaults: &OperationDefaults) -> crate::Result<Self::Output> {
		Err(unsupported(command.kind()))
	}

	/// Collection and alias statements, including `create_coll`.
	fn collection(&mut self, command: &Command, _defaults: &OperationDefaults) -> crate::Result<Self::Output> {
		Err(unsupported(command.kind()))
	}

	fn partition(&mut self, command: &Command, _defaults: &OperationDefaults) -> crate::Result<Self::Output> {
		Err(unsupported(command.kind()))
	}

	fn index(&mut self, command: &Command, _defaults: &OperationDefaults) -> crate::Result<Self::Output> {
		Err(unsupported(command.kind()))
	}

	fn write(&mut self, request: WriteRequest<'_>, _defaults: &OperationDefaults) -> crate::Result<Self::Output> {
		Err(unsupported(request.kind()))
	}

	fn delete(&mut self, _delete: &Delete, _defaults: &OperationDefaults) -> crate::Result<Self::Output> {
		Err(unsupported(CommandKind::Delete))
	}

	fn query(&mut self, _query: &Query, _defaults: &OperationDefaults) -> crate::Result<Self::Output> {
		Err(unsupported(CommandKind::Query))
	}

	fn search(&mut self, _search: &Search, _defaults: &OperationDefaults) -> crate::Result<Self::Output> {
		Err(unsupported(CommandKind::Search))
	}
}

fn unsupported(kind: CommandKind) -> vql_type::Error {
	SessionError::Unsupported {
		kind,
	}
	.into()
}

/// Route a parsed command to its handler method together with the
/// configuration defaults for its kind.
#[instrument(name = "session::dispatch", level = "trace", skip_all)]
pub fn dispatch<H: Handler>(handler: &mut H, config: &SessionConfig, command: &Command) -> crate::Result<H::Output> {
	let kind = command.kind();
	let defaults = config.defaults_for(kind);
	debug!(kind = %kind, alias = %defaults.alias, timeout = ?defaults.timeout, "dispatch");

	match command {
		Command::BulkInsert(bulk) => handler.write(WriteRequest::Bulk(bulk), &defaults),
		Command::Insert(write) => handler.write(WriteRequest::Insert(write), &defaults),
		Command::Upsert(write) => handler.write(WriteRequest::Upsert(write), &defaults),
		Command::Delete(delete) => handler.delete(delete, &defaults),
		Command::Query(query) => handler.query(query, &defaults),
		Command::Search(search) => handler.search(search, &defaults),
		_ => match Section::of(kind) {
			Section::Database => handler.database(command, &defaults),
			Section::Collection => handler.collection(command, &defaults),
			Section::Partition => handler.partition(command, &defaults),
			Section::Index => handler.index(command, &defaults),
			Section::Insert | Section::Delete | Section::Query | Section::Search => Err(unsupported(kind)),
		},
	}
}
