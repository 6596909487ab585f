// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid logger name {name:?}")]
	InvalidName {
		name: String,
	},

	#[error("invalid rule pattern {pattern:?}")]
	InvalidPattern {
		pattern: String,
	},

	#[error("unknown log level {value:?}")]
	UnknownLevel {
		value: String,
	},

	#[error("configuration file not found: {}", path.display())]
	ConfigNotFound {
		path: PathBuf,
	},

	#[error("failed to read configuration file {}: {source}", path.display())]
	ConfigIo {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}
