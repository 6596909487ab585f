// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Log severity levels

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Log severity levels.
///
/// `Off` is a threshold sentinel: a logger configured to `Off` emits
/// nothing. It is never used as a message severity.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	Deserialize,
)]
pub enum LogLevel {
	Trace = 0,
	Debug = 1,
	Info = 2,
	Warn = 3,
	Error = 4,
	Fatal = 5,
	Off = 6,
}

impl LogLevel {
	/// Check whether a message at `severity` passes this threshold
	pub fn enables(&self, severity: LogLevel) -> bool {
		*self != LogLevel::Off && severity >= *self
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Trace => "TRACE",
			LogLevel::Debug => "DEBUG",
			LogLevel::Info => "INFO",
			LogLevel::Warn => "WARN",
			LogLevel::Error => "ERROR",
			LogLevel::Fatal => "FATAL",
			LogLevel::Off => "OFF",
		}
	}

	/// Inverse of `level as u8`; out-of-range values clamp to `Off`
	pub fn from_repr(value: u8) -> LogLevel {
		match value {
			0 => LogLevel::Trace,
			1 => LogLevel::Debug,
			2 => LogLevel::Info,
			3 => LogLevel::Warn,
			4 => LogLevel::Error,
			5 => LogLevel::Fatal,
			_ => LogLevel::Off,
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for LogLevel {
	type Err = Error;

	/// Parse a level name case-insensitively
	fn from_str(s: &str) -> Result<Self, Error> {
		match s.trim().to_ascii_lowercase().as_str() {
			"trace" => Ok(LogLevel::Trace),
			"debug" => Ok(LogLevel::Debug),
			"info" => Ok(LogLevel::Info),
			"warn" => Ok(LogLevel::Warn),
			"error" => Ok(LogLevel::Error),
			"fatal" => Ok(LogLevel::Fatal),
			"off" => Ok(LogLevel::Off),
			_ => Err(Error::UnknownLevel {
				value: s.to_string(),
			}),
		}
	}
}
