// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Relation paths naming which nested relations of a root entity get flattened.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A relation of the root entity, or a relation of one of its relations.
///
/// Paths are at most two levels deep. In dotted notation `variants` is a
/// [`RelationPath::Relation`] and `variants.options` a
/// [`RelationPath::Nested`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RelationPath {
	/// `root[attr]` is translatable, or a list of translatable entities.
	Relation(String),
	/// `root[outer][inner]`, or `root[outer][i][inner]` for every `i` when
	/// `root[outer]` is a list.
	Nested(String, String),
}

impl RelationPath {
	pub fn relation(attr: impl Into<String>) -> Self {
		Self::Relation(attr.into())
	}

	pub fn nested(outer: impl Into<String>, inner: impl Into<String>) -> Self {
		Self::Nested(outer.into(), inner.into())
	}

	pub fn depth(&self) -> usize {
		match self {
			Self::Relation(_) => 1,
			Self::Nested(_, _) => 2,
		}
	}
}

/// Builds a single-level path. Dots are not interpreted; use `parse` for
/// dotted notation.
impl From<&str> for RelationPath {
	fn from(attr: &str) -> Self {
		Self::relation(attr)
	}
}

impl From<(&str, &str)> for RelationPath {
	fn from((outer, inner): (&str, &str)) -> Self {
		Self::nested(outer, inner)
	}
}

impl fmt::Display for RelationPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Relation(attr) => f.write_str(attr),
			Self::Nested(outer, inner) => write!(f, "{outer}.{inner}"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationPathError {
	#[error("relation path '{0}' has an empty segment")]
	EmptySegment(String),

	#[error("relation path '{0}' is deeper than two levels")]
	TooDeep(String),
}

impl FromStr for RelationPath {
	type Err = RelationPathError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let segments: Vec<&str> = s.trim().split('.').map(str::trim).collect();
		if segments.iter().any(|segment| segment.is_empty()) {
			return Err(RelationPathError::EmptySegment(s.to_string()));
		}

		match segments.as_slice() {
			[attr] => Ok(Self::relation(*attr)),
			[outer, inner] => Ok(Self::nested(*outer, *inner)),
			_ => Err(RelationPathError::TooDeep(s.to_string())),
		}
	}
}

impl TryFrom<String> for RelationPath {
	type Error = RelationPathError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<RelationPath> for String {
	fn from(path: RelationPath) -> Self {
		path.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_parse_single_level() {
		let path: RelationPath = "variants".parse().unwrap();
		assert_eq!(path, RelationPath::relation("variants"));
		assert_eq!(path.depth(), 1);
	}

	#[test]
	fn test_parse_two_levels() {
		let path: RelationPath = "variants.options".parse().unwrap();
		assert_eq!(path, RelationPath::nested("variants", "options"));
		assert_eq!(path.depth(), 2);
	}

	#[test]
	fn test_parse_rejects_empty_segments() {
		assert!(matches!(
			"".parse::<RelationPath>(),
			Err(RelationPathError::EmptySegment(_))
		));
		assert!(matches!(
			"variants.".parse::<RelationPath>(),
			Err(RelationPathError::EmptySegment(_))
		));
		assert!(matches!(
			".options".parse::<RelationPath>(),
			Err(RelationPathError::EmptySegment(_))
		));
	}

	#[test]
	fn test_parse_rejects_third_level() {
		assert_eq!(
			"variants.options.group".parse::<RelationPath>(),
			Err(RelationPathError::TooDeep("variants.options.group".to_string()))
		);
	}

	#[test]
	fn test_from_str_slice_does_not_split() {
		assert_eq!(
			RelationPath::from("variants.options"),
			RelationPath::Relation("variants.options".to_string())
		);
		assert_eq!(
			RelationPath::from(("variants", "options")),
			RelationPath::nested("variants", "options")
		);
	}

	#[test]
	fn test_serde_uses_dotted_notation() {
		let paths = vec![
			RelationPath::relation("optionGroups"),
			RelationPath::nested("variants", "options"),
		];
		let json = serde_json::to_string(&paths).unwrap();
		assert_eq!(json, r#"["optionGroups","variants.options"]"#);

		let parsed: Vec<RelationPath> = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed, paths);

		assert!(serde_json::from_str::<RelationPath>(r#""a.b.c""#).is_err());
	}

	proptest! {
		/// Display output parses back to the same path.
		#[test]
		fn display_parses_back(outer in "[a-zA-Z][a-zA-Z0-9_]{0,15}", inner in proptest::option::of("[a-zA-Z][a-zA-Z0-9_]{0,15}")) {
			let path = match inner {
				Some(inner) => RelationPath::nested(outer, inner),
				None => RelationPath::relation(outer),
			};
			prop_assert_eq!(path.to_string().parse::<RelationPath>(), Ok(path));
		}
	}
}
