// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Hierarchical rule store and level resolution
//!
//! Rules are a set with specificity-derived precedence, not an ordered
//! list: an exact rule always outranks any wildcard matching the same
//! name, and among wildcards the longest prefix wins.

use std::collections::HashMap;

use crate::{level::LogLevel, name, pattern::Pattern};

/// Level applied when no rule matches and no `root` rule was set
pub const DEFAULT_ROOT_LEVEL: LogLevel = LogLevel::Info;

/// Outcome of loading configuration text
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
	/// Number of rules (including `root`) applied
	pub applied: usize,
	/// One diagnostic per skipped line
	pub errors: Vec<String>,
}

/// Set of (pattern, level) rules plus the root default
#[derive(Debug, Clone)]
pub struct ConfigStore {
	exact: HashMap<String, LogLevel>,
	wildcard: HashMap<String, LogLevel>,
	root: LogLevel,
}

impl ConfigStore {
	pub fn new() -> Self {
		Self {
			exact: HashMap::new(),
			wildcard: HashMap::new(),
			root: DEFAULT_ROOT_LEVEL,
		}
	}

	/// Insert or replace the rule for `pattern`
	pub fn set_rule(
		&mut self,
		pattern: &str,
		level: LogLevel,
	) -> crate::Result<()> {
		match Pattern::parse(pattern)? {
			Pattern::Root => self.root = level,
			Pattern::Exact(exact) => {
				self.exact.insert(exact, level);
			}
			Pattern::Wildcard(prefix) => {
				self.wildcard.insert(prefix, level);
			}
		}
		Ok(())
	}

	/// Replace the root default directly
	pub fn set_root_level(&mut self, level: LogLevel) {
		self.root = level;
	}

	/// Resolve the effective level for a logger name.
	///
	/// An exact rule for the name wins; otherwise the name's proper
	/// dot-prefixes are walked longest-first through the wildcard rules;
	/// otherwise the root default applies. Pure function of the current
	/// rule set.
	pub fn resolve(&self, name: &str) -> LogLevel {
		let normalized = name::normalize(name);
		if let Some(level) = self.exact.get(&normalized) {
			return *level;
		}
		let mut prefix = normalized.as_str();
		while let Some((parent, _)) = prefix.rsplit_once('.') {
			if let Some(level) = self.wildcard.get(parent) {
				return *level;
			}
			prefix = parent;
		}
		self.root
	}

	/// Apply line-oriented `key=level` configuration text.
	///
	/// `#` comments and blank lines are skipped; malformed lines are
	/// skipped individually and reported, never aborting the load.
	pub fn load_from_str(&mut self, text: &str) -> LoadResult {
		let mut result = LoadResult::default();
		for (index, raw) in text.lines().enumerate() {
			let line = raw.trim();
			if line.is_empty() || line.starts_with('#') {
				continue;
			}
			let number = index + 1;
			let Some((key, value)) = line.split_once('=') else {
				result.errors.push(format!(
					"line {number}: expected key=level, got {line:?}"
				));
				continue;
			};
			let level = match value.trim().parse::<LogLevel>() {
				Ok(level) => level,
				Err(err) => {
					result.errors.push(format!(
						"line {number}: {err}"
					));
					continue;
				}
			};
			match self.set_rule(key.trim(), level) {
				Ok(()) => result.applied += 1,
				Err(err) => result.errors.push(format!(
					"line {number}: {err}"
				)),
			}
		}
		result
	}

	/// Drop all rules and reset the root default
	pub fn clear(&mut self) {
		self.exact.clear();
		self.wildcard.clear();
		self.root = DEFAULT_ROOT_LEVEL;
	}

	/// Number of exact and wildcard rules currently held
	pub fn rule_count(&self) -> usize {
		self.exact.len() + self.wildcard.len()
	}

	pub fn root_level(&self) -> LogLevel {
		self.root
	}
}

impl Default for ConfigStore {
	fn default() -> Self {
		Self::new()
	}
}
