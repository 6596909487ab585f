// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Log record types and structured logging support

use std::{collections::HashMap, thread::current};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::LogLevel;

/// Structured log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
	/// Timestamp when the log was created
	pub timestamp: DateTime<Utc>,
	/// Log severity level
	pub level: LogLevel,
	/// Dotted name of the logger that produced the record; empty for the
	/// root logger
	pub logger: String,
	/// Log message
	pub message: String,
	/// Rendered failure chain attached via [`Record::with_cause`]
	pub cause: Option<String>,
	/// Structured fields (key-value pairs)
	pub fields: HashMap<String, serde_json::Value>,
	/// File location where log was generated
	pub file: Option<String>,
	/// Line number where log was generated
	pub line: Option<u32>,
	/// Thread ID that generated the log
	pub thread_id: String,
}

impl Record {
	pub fn new(
		level: LogLevel,
		logger: impl Into<String>,
		message: impl Into<String>,
	) -> Self {
		Self {
			timestamp: Utc::now(),
			level,
			logger: logger.into(),
			message: message.into(),
			cause: None,
			fields: HashMap::new(),
			file: None,
			line: None,
			thread_id: format!("{:?}", current().id()),
		}
	}

	pub fn with_field(
		mut self,
		key: impl Into<String>,
		value: impl Serialize,
	) -> Self {
		if let Ok(json_value) = serde_json::to_value(value) {
			self.fields.insert(key.into(), json_value);
		}
		self
	}

	pub fn with_location(
		mut self,
		file: impl Into<String>,
		line: u32,
	) -> Self {
		self.file = Some(file.into());
		self.line = Some(line);
		self
	}

	/// Attach an associated failure; the whole `source()` chain is
	/// rendered into the record.
	pub fn with_cause(
		mut self,
		cause: &(dyn std::error::Error + 'static),
	) -> Self {
		let mut rendered = cause.to_string();
		let mut source = cause.source();
		while let Some(err) = source {
			rendered.push_str(": ");
			rendered.push_str(&err.to_string());
			source = err.source();
		}
		self.cause = Some(rendered);
		self
	}
}
