// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language filtering of loaded entity graphs.
//!
//! Stands in for the `translation.languageCode = :code` join condition of the
//! database query: after filtering, each entity carries only the rows of the
//! request language, which is what flattening expects.

use serde_json::Value;
use storefront_common_i18n::LanguageCode;
use storefront_common_translate::{Translatable, LANGUAGE_CODE_KEY, TRANSLATIONS_KEY};

use crate::entity::{Product, ProductOption, ProductOptionGroup, ProductVariant};

/// Keep only `code` translation rows, on the entity and its loaded relations.
pub trait RetainLanguage {
	fn retain_language(&mut self, code: LanguageCode);
}

impl RetainLanguage for Product {
	fn retain_language(&mut self, code: LanguageCode) {
		self.retain_translations(code);
		for variant in self.variants.iter_mut().flatten() {
			variant.retain_language(code);
		}
		for group in self.option_groups.iter_mut().flatten() {
			group.retain_language(code);
		}
	}
}

impl RetainLanguage for ProductVariant {
	fn retain_language(&mut self, code: LanguageCode) {
		self.retain_translations(code);
		for option in self.options.iter_mut().flatten() {
			option.retain_language(code);
		}
	}
}

impl RetainLanguage for ProductOptionGroup {
	fn retain_language(&mut self, code: LanguageCode) {
		self.retain_translations(code);
		for option in self.options.iter_mut().flatten() {
			option.retain_language(code);
		}
	}
}

impl RetainLanguage for ProductOption {
	fn retain_language(&mut self, code: LanguageCode) {
		self.retain_translations(code);
	}
}

/// Untyped counterpart of [`RetainLanguage`] for serialized graphs.
///
/// Every `translations` array anywhere in `value` keeps only rows whose
/// `languageCode` is `code`, in their original order.
pub fn retain_language_in_graph(value: &mut Value, code: LanguageCode) {
	match value {
		Value::Object(fields) => {
			for (key, field) in fields.iter_mut() {
				match field {
					Value::Array(rows) if key == TRANSLATIONS_KEY => rows.retain(|row| {
						row.get(LANGUAGE_CODE_KEY).and_then(Value::as_str) == Some(code.as_str())
					}),
					_ => retain_language_in_graph(field, code),
				}
			}
		}
		Value::Array(items) => {
			for item in items {
				retain_language_in_graph(item, code);
			}
		}
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn test_graph_filter_keeps_matching_rows_in_order() {
		let mut graph = json!({
			"id": 1,
			"translations": [
				{ "id": 1, "languageCode": "de", "name": "Eins" },
				{ "id": 2, "languageCode": "en", "name": "One" },
				{ "id": 3, "languageCode": "en", "name": "One again" },
			],
		});
		retain_language_in_graph(&mut graph, LanguageCode::En);
		assert_eq!(
			graph["translations"],
			json!([
				{ "id": 2, "languageCode": "en", "name": "One" },
				{ "id": 3, "languageCode": "en", "name": "One again" },
			])
		);
	}

	#[test]
	fn test_graph_filter_descends_into_relations_and_wrappers() {
		let mut graph = json!({
			"items": [{
				"translations": [{ "languageCode": "fr", "name": "Bouilloire" }],
				"variants": [{
					"translations": [
						{ "languageCode": "fr", "name": "Petite" },
						{ "languageCode": "en", "name": "Small" },
					],
				}],
			}],
			"totalItems": 1,
		});
		retain_language_in_graph(&mut graph, LanguageCode::En);
		assert_eq!(graph["items"][0]["translations"], json!([]));
		assert_eq!(
			graph["items"][0]["variants"][0]["translations"],
			json!([{ "languageCode": "en", "name": "Small" }])
		);
		assert_eq!(graph["totalItems"], 1);
	}

	proptest! {
		/// Filtering keeps exactly the rows of the requested language.
		#[test]
		fn graph_filter_keeps_only_requested_rows(
			codes in proptest::collection::vec(proptest::sample::select(LanguageCode::ALL), 0..12),
			wanted in proptest::sample::select(LanguageCode::ALL),
		) {
			let rows: Vec<Value> = codes
				.iter()
				.enumerate()
				.map(|(i, code)| json!({ "id": i, "languageCode": code }))
				.collect();
			let mut graph = json!({ "translations": rows });
			retain_language_in_graph(&mut graph, wanted);

			let kept = graph["translations"].as_array().cloned().unwrap_or_default();
			prop_assert_eq!(kept.len(), codes.iter().filter(|code| **code == wanted).count());
			prop_assert!(kept.iter().all(|row| row["languageCode"] == wanted.as_str()));
		}
	}

	#[test]
	fn test_graph_filter_ignores_non_array_translations() {
		let mut graph = json!({ "translations": "not rows" });
		retain_language_in_graph(&mut graph, LanguageCode::En);
		assert_eq!(graph["translations"], "not rows");
	}
}
