// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Configuration file discovery
//!
//! Probes the current working directory, the executable directory and
//! the executable's parent directory for the build-variant properties
//! file. A missing file is not an error; the root default applies.

use std::{env, path::PathBuf};

use loghive_core::LoadResult;

use crate::context::LoggingContext;

/// File name probed in debug builds
pub const DEBUG_FILE_NAME: &str = "logging-debug.properties";
/// File name probed in release builds
pub const FILE_NAME: &str = "logging.properties";

/// File name for the current build variant
pub fn file_name() -> &'static str {
	if cfg!(debug_assertions) {
		DEBUG_FILE_NAME
	} else {
		FILE_NAME
	}
}

/// Locate the configuration file for the current build variant
pub fn discover() -> Option<PathBuf> {
	discover_named(file_name())
}

/// Locate `file_name`, probing cwd, executable directory and executable
/// parent directory in that order
pub fn discover_named(file_name: &str) -> Option<PathBuf> {
	let mut candidates = Vec::new();
	if let Ok(cwd) = env::current_dir() {
		candidates.push(cwd);
	}
	if let Ok(exe) = env::current_exe() {
		if let Some(dir) = exe.parent() {
			candidates.push(dir.to_path_buf());
			if let Some(parent) = dir.parent() {
				candidates.push(parent.to_path_buf());
			}
		}
	}
	candidates
		.into_iter()
		.map(|dir| dir.join(file_name))
		.find(|path| path.is_file())
}

/// Load the discovered configuration into `context`. Absence yields an
/// empty result, unlike [`LoggingContext::load_config_path`] on an
/// explicit path.
pub fn init_discovered(context: &LoggingContext) -> LoadResult {
	match discover() {
		Some(path) => match context.load_config_path(&path) {
			Ok(result) => result,
			Err(err) => LoadResult {
				applied: 0,
				errors: vec![err.to_string()],
			},
		},
		None => LoadResult::default(),
	}
}
