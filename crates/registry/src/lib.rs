// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Hierarchical logging facade.
//!
//! Application code obtains named logger handles from a registry; a
//! dotted-namespace configuration (`app.database.*`) with
//! most-specific-rule-wins resolution decides, per name, which minimum
//! severity passes and which backends receive it. Logger handles can
//! chain further loggers, each filtering independently.

pub use backend::{ConsoleBackend, MemoryBackend};
pub use builder::LoggingBuilder;
pub use context::{
	LoggingContext, NamedLoggerFactory, add_logger, configured_level,
	default_context, get_logger, load_config_path, load_config_str,
	reset, root_logger, set_logger, set_logger_level,
	set_named_logger_factory,
};
pub use logger::Logger;
pub use loghive_core::{
	ConfigStore, DEFAULT_ROOT_LEVEL, Error, LoadResult, LogBackend,
	LogLevel, Pattern, Record, Result, name,
};

pub mod backend;
mod builder;
mod context;
pub mod discover;
mod logger;
mod macros;
