// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `storefront flatten`: flatten JSON entity graphs.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use storefront_catalog::retain_language_in_graph;
use storefront_common_i18n::LanguageCode;
use storefront_common_translate::{flatten_deep, NotTranslatedError, RelationPath};
use storefront_server_config::I18nConfig;

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_document(path: &Path) -> Result<Value> {
	let content = if path == Path::new("-") {
		let mut content = String::new();
		std::io::stdin()
			.read_to_string(&mut content)
			.context("failed to read stdin")?;
		content
	} else {
		std::fs::read_to_string(path)
			.with_context(|| format!("failed to read {}", path.display()))?
	};

	serde_json::from_str(&content).context("input is not valid JSON")
}

/// Accept an explicitly requested filter language only if the shop offers it.
///
/// Unlike request resolution there is no fallback to the default language.
pub fn filter_language(requested: LanguageCode, i18n: &I18nConfig) -> Result<LanguageCode> {
	if !i18n.available_languages.contains(&requested) {
		let available: Vec<&str> = i18n
			.available_languages
			.iter()
			.map(|code| code.as_str())
			.collect();
		bail!(
			"language '{requested}' is not configured for this shop (available: {})",
			available.join(", ")
		);
	}
	Ok(requested)
}

/// Flatten a single root entity, or every root of a top-level array.
///
/// With `language` set, translation rows in other languages are dropped first,
/// the way the data-fetch layer filters them for a request.
pub fn flatten_document(
	document: &Value,
	relations: &[RelationPath],
	language: Option<LanguageCode>,
) -> Result<Value, NotTranslatedError> {
	let mut document = document.clone();
	if let Some(code) = language {
		retain_language_in_graph(&mut document, code);
	}

	match &document {
		Value::Array(roots) => roots
			.iter()
			.map(|root| flatten_deep(root, relations))
			.collect::<Result<Vec<_>, _>>()
			.map(Value::Array),
		root => flatten_deep(root, relations),
	}
}
