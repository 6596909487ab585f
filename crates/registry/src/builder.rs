// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Builder pattern for assembling a configured logging context

use std::fs;

use loghive_core::{ConfigStore, LogLevel};

use crate::{
	backend::ConsoleBackend,
	context::LoggingContext,
	discover,
	logger::Logger,
};

/// Builder for configuring a [`LoggingContext`]
pub struct LoggingBuilder {
	config: ConfigStore,
	diagnostics: Vec<String>,
	use_color: bool,
	stderr_for_errors: bool,
}

impl LoggingBuilder {
	/// Create a new logging builder with default settings
	pub fn new() -> Self {
		Self {
			config: ConfigStore::new(),
			diagnostics: Vec::new(),
			use_color: true,
			stderr_for_errors: true,
		}
	}

	/// Use console backends with default settings
	pub fn with_console(self) -> Self {
		self.with_console_custom(true, true)
	}

	/// Use console backends with custom settings
	pub fn with_console_custom(
		mut self,
		use_color: bool,
		stderr_for_errors: bool,
	) -> Self {
		self.use_color = use_color;
		self.stderr_for_errors = stderr_for_errors;
		self
	}

	/// Set the root default level
	pub fn with_root_level(mut self, level: LogLevel) -> Self {
		self.config.set_root_level(level);
		self
	}

	/// Add a configuration rule; malformed patterns are collected as
	/// diagnostics rather than failing the build
	pub fn with_rule(mut self, pattern: &str, level: LogLevel) -> Self {
		if let Err(err) = self.config.set_rule(pattern, level) {
			self.diagnostics.push(err.to_string());
		}
		self
	}

	/// Apply `key=level` configuration text
	pub fn with_config_str(mut self, text: &str) -> Self {
		let result = self.config.load_from_str(text);
		self.diagnostics.extend(result.errors);
		self
	}

	/// Load the discovered configuration file, if any; absence is not an
	/// error
	pub fn with_discovered_config(mut self) -> Self {
		if let Some(path) = discover::discover() {
			match fs::read_to_string(&path) {
				Ok(text) => {
					let result = self
						.config
						.load_from_str(&text);
					self.diagnostics
						.extend(result.errors);
				}
				Err(err) => self.diagnostics.push(format!(
					"{}: {err}",
					path.display()
				)),
			}
		}
		self
	}

	/// Diagnostics collected so far
	pub fn diagnostics(&self) -> &[String] {
		&self.diagnostics
	}

	pub fn build(self) -> LoggingContext {
		let context = LoggingContext::with_config(self.config);
		let use_color = self.use_color;
		let stderr_for_errors = self.stderr_for_errors;
		context.set_named_logger_factory(move |name, level| {
			Logger::new(
				name,
				level,
				Box::new(ConsoleBackend::new()
					.with_color(use_color)
					.with_stderr_for_errors(
						stderr_for_errors,
					)),
			)
		});
		context
	}
}

impl Default for LoggingBuilder {
	fn default() -> Self {
		Self::new()
	}
}
