// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed entry points: serialize, then flatten.

use serde::Serialize;
use serde_json::Value;

use crate::entity::Translatable;
use crate::error::TranslateError;
use crate::flatten::{flatten_deep, flatten_entity};
use crate::path::RelationPath;

/// Flatten a single translatable entity.
pub fn translate_entity<T: Translatable>(entity: &T) -> Result<Value, TranslateError> {
	let value = serde_json::to_value(entity)?;
	Ok(flatten_entity(&value)?)
}

/// Flatten an entity (or a wrapper holding translatable relations) and the
/// relations named by `paths`. See [`flatten_deep`].
pub fn translate_deep<T>(entity: &T, paths: &[RelationPath]) -> Result<Value, TranslateError>
where
	T: Serialize + ?Sized,
{
	let value = serde_json::to_value(entity)?;
	Ok(flatten_deep(&value, paths)?)
}

/// [`translate_deep`] over a list, failing on the first entity that fails.
pub fn translate_all<T: Serialize>(
	entities: &[T],
	paths: &[RelationPath],
) -> Result<Vec<Value>, TranslateError> {
	entities
		.iter()
		.map(|entity| translate_deep(entity, paths))
		.collect()
}
