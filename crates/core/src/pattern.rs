// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Rule patterns and the matching contract between patterns and names

use std::fmt;

use crate::{error::Error, name};

/// Key of a configuration rule.
///
/// Exact and wildcard patterns hold the normalized (lowercased) form;
/// matching is case-insensitive throughout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
	/// The weakest rule; matches every logger name
	Root,
	/// Matches exactly one logger name
	Exact(String),
	/// `prefix.*`: matches everything nested beneath `prefix`, never the
	/// bare `prefix` itself
	Wildcard(String),
}

impl Pattern {
	/// Parse a rule key. `root` is recognized case-insensitively; a
	/// trailing `.*` segment makes the pattern a wildcard.
	pub fn parse(key: &str) -> crate::Result<Self> {
		let key = key.trim();
		if key.is_empty() {
			return Err(Error::InvalidPattern {
				pattern: key.to_string(),
			});
		}
		if key.eq_ignore_ascii_case("root") {
			return Ok(Pattern::Root);
		}
		if let Some(prefix) = key.strip_suffix(".*") {
			if name::validate(prefix).is_err() || prefix.is_empty()
			{
				return Err(Error::InvalidPattern {
					pattern: key.to_string(),
				});
			}
			return Ok(Pattern::Wildcard(name::normalize(prefix)));
		}
		if name::validate(key).is_err() {
			return Err(Error::InvalidPattern {
				pattern: key.to_string(),
			});
		}
		Ok(Pattern::Exact(name::normalize(key)))
	}

	/// Whether this pattern applies to `name`
	pub fn matches(&self, name: &str) -> bool {
		let name = name::normalize(name);
		match self {
			Pattern::Root => true,
			Pattern::Exact(exact) => *exact == name,
			Pattern::Wildcard(prefix) => {
				match name.strip_prefix(prefix.as_str()) {
					Some(rest) => rest.starts_with('.'),
					None => false,
				}
			}
		}
	}

	/// Number of literal segments; the tie-break metric between matching
	/// rules. `root` sits below every other pattern.
	pub fn specificity(&self) -> i32 {
		match self {
			Pattern::Root => -1,
			Pattern::Exact(exact) => {
				name::segment_count(exact) as i32
			}
			Pattern::Wildcard(prefix) => {
				name::segment_count(prefix) as i32
			}
		}
	}
}

impl fmt::Display for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Pattern::Root => f.write_str("root"),
			Pattern::Exact(exact) => f.write_str(exact),
			Pattern::Wildcard(prefix) => {
				write!(f, "{}.*", prefix)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_root() {
		assert_eq!(Pattern::parse("root").unwrap(), Pattern::Root);
		assert_eq!(Pattern::parse("ROOT").unwrap(), Pattern::Root);
	}

	#[test]
	fn test_parse_exact() {
		assert_eq!(
			Pattern::parse("App.Database").unwrap(),
			Pattern::Exact("app.database".to_string())
		);
	}

	#[test]
	fn test_parse_wildcard() {
		assert_eq!(
			Pattern::parse("app.database.*").unwrap(),
			Pattern::Wildcard("app.database".to_string())
		);
	}

	#[test]
	fn test_parse_rejects_bare_star() {
		assert!(Pattern::parse("*").is_err());
		assert!(Pattern::parse(".*").is_err());
	}

	#[test]
	fn test_parse_rejects_inner_star() {
		assert!(Pattern::parse("app.*.db").is_err());
		assert!(Pattern::parse("app.d*b").is_err());
	}

	#[test]
	fn test_parse_rejects_malformed_names() {
		assert!(Pattern::parse("").is_err());
		assert!(Pattern::parse("app..db").is_err());
		assert!(Pattern::parse(".app").is_err());
	}

	#[test]
	fn test_exact_matches_only_identical() {
		let pattern = Pattern::parse("mqtt.client").unwrap();
		assert!(pattern.matches("mqtt.client"));
		assert!(pattern.matches("MQTT.Client"));
		assert!(!pattern.matches("mqtt"));
		assert!(!pattern.matches("mqtt.client.session"));
	}

	#[test]
	fn test_wildcard_excludes_bare_prefix() {
		let pattern = Pattern::parse("mqtt.*").unwrap();
		assert!(pattern.matches("mqtt.client"));
		assert!(pattern.matches("mqtt.transport.ics"));
		assert!(!pattern.matches("mqtt"));
		assert!(!pattern.matches("mqttclient"));
	}

	#[test]
	fn test_root_matches_everything() {
		assert!(Pattern::Root.matches("anything.at.all"));
		assert!(Pattern::Root.matches(""));
	}

	#[test]
	fn test_specificity() {
		assert_eq!(Pattern::Root.specificity(), -1);
		assert_eq!(Pattern::parse("app").unwrap().specificity(), 1);
		assert_eq!(
			Pattern::parse("app.database.*").unwrap().specificity(),
			2
		);
		assert_eq!(
			Pattern::parse("app.database.repository.orders")
				.unwrap()
				.specificity(),
			4
		);
	}

	#[test]
	fn test_display_round_trip() {
		for key in ["root", "app.database", "app.database.*"] {
			let pattern = Pattern::parse(key).unwrap();
			assert_eq!(pattern.to_string(), key);
		}
	}
}
