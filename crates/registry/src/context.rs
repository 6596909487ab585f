// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Process-wide logger registry
//!
//! [`LoggingContext`] owns the name-to-instance cache, the configuration
//! store and the construction strategy behind a single lock. One
//! process-default context backs the free functions of this module; tests
//! construct isolated contexts instead of mutating the shared one.

use std::{collections::HashMap, fs, path::Path, sync::Arc};

use loghive_core::{ConfigStore, Error, LoadResult, LogLevel, name};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::{backend::ConsoleBackend, logger::Logger};

/// Strategy used by the registry to construct backend-backed loggers
pub type NamedLoggerFactory = dyn Fn(&str, LogLevel) -> Logger + Send + Sync;

fn console_factory(name: &str, level: LogLevel) -> Logger {
	Logger::new(name, level, Box::new(ConsoleBackend::new()))
}

struct ContextInner {
	cache: HashMap<String, Arc<Logger>>,
	config: ConfigStore,
	factory: Arc<NamedLoggerFactory>,
	root: Option<Arc<Logger>>,
}

/// Registry owning the logger cache, the configuration store and the
/// construction strategy.
///
/// A logger's level is frozen when the instance is manufactured;
/// configuration changes only reach new instances, so callers wanting live
/// reconfiguration must [`LoggingContext::reset`] and re-acquire their
/// handles.
pub struct LoggingContext {
	inner: RwLock<ContextInner>,
}

impl LoggingContext {
	pub fn new() -> Self {
		Self::with_config(ConfigStore::new())
	}

	/// Create a context over an already populated store
	pub fn with_config(config: ConfigStore) -> Self {
		Self {
			inner: RwLock::new(ContextInner {
				cache: HashMap::new(),
				config,
				factory: Arc::new(console_factory),
				root: None,
			}),
		}
	}

	/// Return the cached instance for `name`, or manufacture one at the
	/// level the configuration currently resolves to.
	///
	/// Cached instances are returned as-is; their level is not
	/// re-resolved.
	pub fn get_logger(&self, name: &str) -> Arc<Logger> {
		{
			let inner = self.inner.read();
			if let Some(logger) = inner.cache.get(name) {
				return Arc::clone(logger);
			}
		}

		let mut inner = self.inner.write();
		// A racing caller may have filled the entry while the write
		// lock was acquired.
		if let Some(logger) = inner.cache.get(name) {
			return Arc::clone(logger);
		}
		let logger = match (&inner.root, name.is_empty()) {
			(Some(root), true) => Arc::clone(root),
			_ => {
				let level = inner.config.resolve(name);
				Arc::new((inner.factory)(name, level))
			}
		};
		inner.cache.insert(name.to_string(), Arc::clone(&logger));
		logger
	}

	/// The root/unnamed logger
	pub fn root_logger(&self) -> Arc<Logger> {
		self.get_logger(name::ROOT)
	}

	/// Upsert a configuration rule. Already cached instances keep their
	/// frozen level until [`LoggingContext::reset`].
	pub fn set_logger_level(
		&self,
		pattern: &str,
		level: LogLevel,
	) -> loghive_core::Result<()> {
		self.inner.write().config.set_rule(pattern, level)
	}

	/// Level the configuration currently resolves for `name`, without
	/// instantiating anything
	pub fn configured_level(&self, name: &str) -> LogLevel {
		self.inner.read().config.resolve(name)
	}

	/// Apply `key=level` configuration text. The cache is untouched;
	/// call [`LoggingContext::reset`] for loaded rules to reach
	/// already-created handles.
	pub fn load_config_str(&self, text: &str) -> LoadResult {
		self.inner.write().config.load_from_str(text)
	}

	/// Load configuration from an explicit file path. A missing file is
	/// an error here, unlike the silent fallback of discovery.
	pub fn load_config_path(
		&self,
		path: impl AsRef<Path>,
	) -> loghive_core::Result<LoadResult> {
		let path = path.as_ref();
		if !path.exists() {
			return Err(Error::ConfigNotFound {
				path: path.to_path_buf(),
			});
		}
		let text = fs::read_to_string(path).map_err(|source| {
			Error::ConfigIo {
				path: path.to_path_buf(),
				source,
			}
		})?;
		Ok(self.load_config_str(&text))
	}

	/// Drop every cached instance (and any injected root). Subsequent
	/// lookups rebuild against the current configuration.
	pub fn reset(&self) {
		let mut inner = self.inner.write();
		inner.cache.clear();
		inner.root = None;
	}

	/// Inject `logger` as the root instance, replacing whatever the
	/// cache holds for the unnamed logger
	pub fn set_logger(&self, logger: Arc<Logger>) {
		let mut inner = self.inner.write();
		inner.cache
			.insert(name::ROOT.to_string(), Arc::clone(&logger));
		inner.root = Some(logger);
	}

	/// Replace the construction strategy; affects future lookups only
	pub fn set_named_logger_factory<F>(&self, factory: F)
	where
		F: Fn(&str, LogLevel) -> Logger + Send + Sync + 'static,
	{
		self.inner.write().factory = Arc::new(factory);
	}

	/// Get or create the instance for `name` and chain `delegate` onto
	/// it
	pub fn add_logger(&self, name: &str, delegate: Arc<Logger>) {
		self.get_logger(name).add_to_chain(delegate);
	}

	/// Number of currently cached instances
	pub fn cached_loggers(&self) -> usize {
		self.inner.read().cache.len()
	}
}

impl Default for LoggingContext {
	fn default() -> Self {
		Self::new()
	}
}

static DEFAULT: Lazy<LoggingContext> = Lazy::new(LoggingContext::new);

/// The process-default registry
pub fn default_context() -> &'static LoggingContext {
	&DEFAULT
}

/// [`LoggingContext::get_logger`] on the process-default context
pub fn get_logger(name: &str) -> Arc<Logger> {
	DEFAULT.get_logger(name)
}

/// [`LoggingContext::root_logger`] on the process-default context
pub fn root_logger() -> Arc<Logger> {
	DEFAULT.root_logger()
}

/// [`LoggingContext::set_logger_level`] on the process-default context
pub fn set_logger_level(
	pattern: &str,
	level: LogLevel,
) -> loghive_core::Result<()> {
	DEFAULT.set_logger_level(pattern, level)
}

/// [`LoggingContext::configured_level`] on the process-default context
pub fn configured_level(name: &str) -> LogLevel {
	DEFAULT.configured_level(name)
}

/// [`LoggingContext::load_config_str`] on the process-default context
pub fn load_config_str(text: &str) -> LoadResult {
	DEFAULT.load_config_str(text)
}

/// [`LoggingContext::load_config_path`] on the process-default context
pub fn load_config_path(
	path: impl AsRef<Path>,
) -> loghive_core::Result<LoadResult> {
	DEFAULT.load_config_path(path)
}

/// [`LoggingContext::reset`] on the process-default context
pub fn reset() {
	DEFAULT.reset()
}

/// [`LoggingContext::set_logger`] on the process-default context
pub fn set_logger(logger: Arc<Logger>) {
	DEFAULT.set_logger(logger)
}

/// [`LoggingContext::set_named_logger_factory`] on the process-default
/// context
pub fn set_named_logger_factory<F>(factory: F)
where
	F: Fn(&str, LogLevel) -> Logger + Send + Sync + 'static,
{
	DEFAULT.set_named_logger_factory(factory)
}

/// [`LoggingContext::add_logger`] on the process-default context
pub fn add_logger(name: &str, delegate: Arc<Logger>) {
	DEFAULT.add_logger(name, delegate)
}
