// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Console logging backend

use colored::Colorize;
use loghive_core::{LogBackend, LogLevel, Record};

/// Console backend writing timestamped single-line records to stdout,
/// with error and fatal records optionally routed to stderr
pub struct ConsoleBackend {
	use_color: bool,
	stderr_for_errors: bool,
}

impl ConsoleBackend {
	pub fn new() -> Self {
		Self {
			use_color: true,
			stderr_for_errors: true,
		}
	}

	/// Enable or disable colored output
	pub fn with_color(mut self, enabled: bool) -> Self {
		self.use_color = enabled;
		self
	}

	/// Send error and fatal level logs to stderr
	pub fn with_stderr_for_errors(mut self, enabled: bool) -> Self {
		self.stderr_for_errors = enabled;
		self
	}

	fn level_label(&self, level: LogLevel) -> String {
		if !self.use_color {
			return level.as_str().to_string();
		}
		match level {
			LogLevel::Trace => {
				level.as_str().dimmed().to_string()
			}
			LogLevel::Debug => level.as_str().cyan().to_string(),
			LogLevel::Info => level.as_str().green().to_string(),
			LogLevel::Warn => level.as_str().yellow().to_string(),
			LogLevel::Error => level.as_str().red().to_string(),
			LogLevel::Fatal => {
				level.as_str().red().bold().to_string()
			}
			LogLevel::Off => level.as_str().to_string(),
		}
	}

	fn format(&self, record: &Record) -> String {
		let timestamp =
			record.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
		let logger = if record.logger.is_empty() {
			"root"
		} else {
			record.logger.as_str()
		};
		let mut line = format!(
			"{timestamp} {level} [{logger}] {message}",
			level = self.level_label(record.level),
			message = record.message,
		);
		if !record.fields.is_empty() {
			let mut keys: Vec<_> =
				record.fields.keys().collect();
			keys.sort();
			for key in keys {
				line.push_str(&format!(
					" {key}={}",
					record.fields[key]
				));
			}
		}
		if let Some(cause) = &record.cause {
			line.push_str(&format!(", caused by: {cause}"));
		}
		line
	}
}

impl Default for ConsoleBackend {
	fn default() -> Self {
		Self::new()
	}
}

impl LogBackend for ConsoleBackend {
	fn name(&self) -> &str {
		"console"
	}

	fn write(&self, record: &Record) -> loghive_core::Result<()> {
		let line = self.format(record);
		if self.stderr_for_errors && record.level >= LogLevel::Error
		{
			eprintln!("{line}");
		} else {
			println!("{line}");
		}
		Ok(())
	}
}
