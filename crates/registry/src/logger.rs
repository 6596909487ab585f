// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Logger handles and chain-of-responsibility dispatch

use std::sync::{
	Arc,
	atomic::{AtomicU8, Ordering},
};

use loghive_core::{LogBackend, LogLevel, Record};
use parking_lot::RwLock;

/// A named logger handle.
///
/// The effective level is frozen when the registry manufactures the
/// instance; [`Logger::set_level`] overrides it directly, bypassing the
/// configuration store. A logger optionally owns a backend sink and an
/// ordered chain of delegate loggers; every dispatched record reaches the
/// own sink and each delegate, each applying its level filter
/// independently.
pub struct Logger {
	name: String,
	level: AtomicU8,
	sink: Option<Box<dyn LogBackend>>,
	delegates: RwLock<Vec<Arc<Logger>>>,
	head: bool,
}

impl Logger {
	/// Create a logger that writes to `sink`
	pub fn new(
		name: impl Into<String>,
		level: LogLevel,
		sink: Box<dyn LogBackend>,
	) -> Self {
		Self {
			name: name.into(),
			level: AtomicU8::new(level as u8),
			sink: Some(sink),
			delegates: RwLock::new(Vec::new()),
			head: false,
		}
	}

	/// Create a sink-less head node that only fans out to its chain
	pub fn dispatch_head(
		name: impl Into<String>,
		level: LogLevel,
	) -> Self {
		Self {
			name: name.into(),
			level: AtomicU8::new(level as u8),
			sink: None,
			delegates: RwLock::new(Vec::new()),
			head: true,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn is_chain_head(&self) -> bool {
		self.head
	}

	/// Current effective level
	pub fn level(&self) -> LogLevel {
		LogLevel::from_repr(self.level.load(Ordering::Relaxed))
	}

	/// Override the frozen level for this handle
	pub fn set_level(&self, level: LogLevel) {
		self.level.store(level as u8, Ordering::Relaxed);
	}

	/// Whether a message at `severity` would pass this node's filter.
	/// Delegates are not consulted.
	pub fn is_enabled(&self, severity: LogLevel) -> bool {
		self.level().enables(severity)
	}

	pub fn is_trace_enabled(&self) -> bool {
		self.is_enabled(LogLevel::Trace)
	}

	pub fn is_debug_enabled(&self) -> bool {
		self.is_enabled(LogLevel::Debug)
	}

	pub fn is_info_enabled(&self) -> bool {
		self.is_enabled(LogLevel::Info)
	}

	pub fn is_warn_enabled(&self) -> bool {
		self.is_enabled(LogLevel::Warn)
	}

	pub fn is_error_enabled(&self) -> bool {
		self.is_enabled(LogLevel::Error)
	}

	pub fn is_fatal_enabled(&self) -> bool {
		self.is_enabled(LogLevel::Fatal)
	}

	/// Log a message at an explicit severity
	pub fn log(&self, severity: LogLevel, message: impl Into<String>) {
		self.dispatch(&Record::new(
			severity,
			self.name.clone(),
			message,
		));
	}

	pub fn trace(&self, message: impl Into<String>) {
		self.log(LogLevel::Trace, message);
	}

	pub fn debug(&self, message: impl Into<String>) {
		self.log(LogLevel::Debug, message);
	}

	pub fn info(&self, message: impl Into<String>) {
		self.log(LogLevel::Info, message);
	}

	pub fn warn(&self, message: impl Into<String>) {
		self.log(LogLevel::Warn, message);
	}

	pub fn error(&self, message: impl Into<String>) {
		self.log(LogLevel::Error, message);
	}

	pub fn fatal(&self, message: impl Into<String>) {
		self.log(LogLevel::Fatal, message);
	}

	/// Log an error with an associated failure; the failure's source
	/// chain is rendered into the record
	pub fn error_with_cause(
		&self,
		message: impl Into<String>,
		cause: &(dyn std::error::Error + 'static),
	) {
		self.dispatch(
			&Record::new(
				LogLevel::Error,
				self.name.clone(),
				message,
			)
			.with_cause(cause),
		);
	}

	/// Deliver a record to this node's sink and to every delegate.
	///
	/// Each node applies its own filter; a record suppressed here can
	/// still be emitted by a more verbose delegate. The delegate list is
	/// snapshotted for the duration of one dispatch call.
	pub fn dispatch(&self, record: &Record) {
		if self.level().enables(record.level) {
			if let Some(sink) = &self.sink {
				// sink failures never reach the caller
				let _ = sink.write(record);
			}
		}
		let delegates = self.delegates.read().clone();
		for delegate in delegates {
			delegate.dispatch(record);
		}
	}

	/// Append `delegate` unless it is already a chain member; duplicate
	/// membership (by identity) is silently ignored
	pub fn add_to_chain(&self, delegate: Arc<Logger>) {
		let mut delegates = self.delegates.write();
		if delegates
			.iter()
			.any(|existing| Arc::ptr_eq(existing, &delegate))
		{
			return;
		}
		delegates.push(delegate);
	}

	/// Remove `delegate` by identity; returns whether it was present
	pub fn remove_from_chain(&self, delegate: &Arc<Logger>) -> bool {
		let mut delegates = self.delegates.write();
		let before = delegates.len();
		delegates.retain(|existing| !Arc::ptr_eq(existing, delegate));
		delegates.len() != before
	}

	/// Drop every delegate, leaving only this node
	pub fn clear_chain(&self) {
		self.delegates.write().clear();
	}

	/// Chain length including this node
	pub fn chain_count(&self) -> usize {
		1 + self.delegates.read().len()
	}

	/// Flush this node's sink and every delegate's
	pub fn flush(&self) {
		if let Some(sink) = &self.sink {
			let _ = sink.flush();
		}
		let delegates = self.delegates.read().clone();
		for delegate in delegates {
			delegate.flush();
		}
	}
}
