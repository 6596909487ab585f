// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! In-memory capturing backend for tests and debugging

use loghive_core::{LogBackend, Record};
use parking_lot::Mutex;

/// Backend that keeps every record in memory.
///
/// Share it behind an `Arc` to keep a handle for assertions while the
/// logger owns the sink.
#[derive(Default)]
pub struct MemoryBackend {
	records: Mutex<Vec<Record>>,
}

impl MemoryBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of the captured records
	pub fn records(&self) -> Vec<Record> {
		self.records.lock().clone()
	}

	/// Drain the captured records
	pub fn take(&self) -> Vec<Record> {
		std::mem::take(&mut *self.records.lock())
	}

	pub fn len(&self) -> usize {
		self.records.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.lock().is_empty()
	}

	pub fn clear(&self) {
		self.records.lock().clear()
	}
}

impl LogBackend for MemoryBackend {
	fn name(&self) -> &str {
		"memory"
	}

	fn write(&self, record: &Record) -> loghive_core::Result<()> {
		self.records.lock().push(record.clone());
		Ok(())
	}
}
