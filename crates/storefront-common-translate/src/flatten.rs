// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flattening of serialized entity graphs.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::NotTranslatedError;
use crate::path::RelationPath;
use crate::{ID_KEY, LANGUAGE_CODE_KEY, TRANSLATIONS_KEY, TYPENAME_KEY};

/// Translation row keys that describe the row rather than the entity.
const ROW_METADATA_KEYS: &[&str] = &[ID_KEY, LANGUAGE_CODE_KEY, TYPENAME_KEY];

/// Merge the first translation row of `entity` onto a copy of it.
///
/// The copy loses its `translations` key. Every key of the selected row except
/// `id`, `languageCode` and `__typename` is set on the copy, overwriting any
/// same-named field of the entity. `entity` itself is left untouched.
///
/// A row's own `__typename` (e.g. `ProductTranslation`) is dropped so the
/// result keeps the entity's type name. Untyped input therefore loses any
/// row-level `__typename`.
///
/// # Errors
///
/// [`NotTranslatedError`] when `entity` has no `translations` array or the
/// array is empty.
pub fn flatten_entity(entity: &Value) -> Result<Value, NotTranslatedError> {
	let fields = match entity {
		Value::Object(fields) => fields,
		other => return Err(NotTranslatedError::new(entity_name(other))),
	};

	let translation = match fields.get(TRANSLATIONS_KEY) {
		Some(Value::Array(rows)) => rows.first(),
		_ => None,
	};
	let Some(translation) = translation else {
		return Err(NotTranslatedError::new(entity_name(entity)));
	};

	let mut flattened = fields.clone();
	flattened.remove(TRANSLATIONS_KEY);

	if let Some(row) = translation.as_object() {
		for (key, value) in row {
			if ROW_METADATA_KEYS.contains(&key.as_str()) {
				continue;
			}
			flattened.insert(key.clone(), value.clone());
		}
	}

	Ok(Value::Object(flattened))
}

/// Flatten `entity` and each relation named by `paths`.
///
/// The root itself is optional: a root without translations (for example a
/// wrapper object holding translatable relations) is kept as is and only its
/// relations are flattened. Relations are flattened in the order `paths` lists
/// them, so `variants` followed by `variants.options` flattens both levels.
///
/// A relation that is absent or `null` is skipped. A relation that is present
/// but carries no translation rows fails with [`NotTranslatedError`], as does a
/// scalar where an entity or list of entities is expected.
pub fn flatten_deep(entity: &Value, paths: &[RelationPath]) -> Result<Value, NotTranslatedError> {
	let mut root = match flatten_entity(entity) {
		Ok(flattened) => flattened,
		Err(err) => {
			debug!(
				entity = err.entity_name(),
				"root entity not translated, flattening relations only"
			);
			entity.clone()
		}
	};

	for path in paths {
		trace!(%path, "flattening relation");
		match path {
			RelationPath::Relation(attr) => flatten_relation(&mut root, attr)?,
			RelationPath::Nested(outer, inner) => match root.get_mut(outer.as_str()) {
				Some(Value::Array(items)) => {
					for item in items {
						flatten_relation(item, inner)?;
					}
				}
				Some(owner) if owner.is_object() => flatten_relation(owner, inner)?,
				Some(Value::Null) | None => {}
				Some(other) => return Err(NotTranslatedError::new(entity_name(other))),
			},
		}
	}

	Ok(root)
}

/// Replace `owner[attr]` with its flattened form, element-wise for lists.
fn flatten_relation(owner: &mut Value, attr: &str) -> Result<(), NotTranslatedError> {
	let Some(target) = owner.as_object_mut().and_then(|fields| fields.get_mut(attr)) else {
		return Ok(());
	};

	let flattened = match &*target {
		Value::Array(items) => Value::Array(
			items
				.iter()
				.map(flatten_entity)
				.collect::<Result<Vec<_>, _>>()?,
		),
		Value::Null => return Ok(()),
		other => flatten_entity(other)?,
	};

	*target = flattened;
	Ok(())
}

fn entity_name(entity: &Value) -> String {
	let name = match entity {
		Value::Object(fields) => fields
			.get(TYPENAME_KEY)
			.and_then(Value::as_str)
			.unwrap_or("object"),
		Value::Array(_) => "array",
		Value::String(_) => "string",
		Value::Number(_) => "number",
		Value::Bool(_) => "boolean",
		Value::Null => "null",
	};
	name.to_string()
}
