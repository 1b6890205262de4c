// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flattening through the typed `Translatable` contract.

use serde::Serialize;
use storefront_common_i18n::LanguageCode;
use storefront_common_translate::{
	translate_all, translate_deep, translate_entity, RelationPath, TranslateError, Translatable,
	Translation,
};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "__typename", rename = "Facet", rename_all = "camelCase")]
struct Facet {
	id: i64,
	code: String,
	is_private: bool,
	translations: Vec<FacetTranslation>,
	#[serde(skip_serializing_if = "Option::is_none")]
	values: Option<Vec<FacetValue>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "__typename", rename = "FacetTranslation", rename_all = "camelCase")]
struct FacetTranslation {
	id: i64,
	language_code: LanguageCode,
	name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "__typename", rename = "FacetValue", rename_all = "camelCase")]
struct FacetValue {
	id: i64,
	code: String,
	translations: Vec<FacetTranslation>,
}

impl Translation for FacetTranslation {
	fn language_code(&self) -> LanguageCode {
		self.language_code
	}
}

impl Translatable for Facet {
	type Translation = FacetTranslation;

	fn translations(&self) -> &[FacetTranslation] {
		&self.translations
	}

	fn translations_mut(&mut self) -> &mut Vec<FacetTranslation> {
		&mut self.translations
	}
}

fn row(id: i64, language_code: LanguageCode, name: &str) -> FacetTranslation {
	FacetTranslation {
		id,
		language_code,
		name: name.to_string(),
	}
}

fn brand_facet() -> Facet {
	Facet {
		id: 1,
		code: "brand".to_string(),
		is_private: false,
		translations: vec![
			row(10, LanguageCode::En, "Brand"),
			row(11, LanguageCode::De, "Marke"),
		],
		values: Some(vec![FacetValue {
			id: 2,
			code: "acme".to_string(),
			translations: vec![row(20, LanguageCode::De, "Acme GmbH")],
		}]),
	}
}

#[test]
fn test_translate_entity_merges_first_row() {
	let flattened = translate_entity(&brand_facet()).unwrap();
	assert_eq!(flattened["__typename"], "Facet");
	assert_eq!(flattened["id"], 1);
	assert_eq!(flattened["name"], "Brand");
	assert_eq!(flattened["isPrivate"], false);
	assert!(flattened.get("languageCode").is_none());
	assert!(flattened.get("translations").is_none());
}

#[test]
fn test_retain_translations_emulates_language_join() {
	let mut facet = brand_facet();
	facet.retain_translations(LanguageCode::De);
	assert!(facet.is_translated());

	let flattened = translate_entity(&facet).unwrap();
	assert_eq!(flattened["name"], "Marke");

	facet.retain_translations(LanguageCode::Fr);
	assert!(!facet.is_translated());
	assert!(matches!(
		translate_entity(&facet),
		Err(TranslateError::NotTranslated(err)) if err.entity_name() == "Facet"
	));
}

#[test]
fn test_translate_deep_flattens_relations() {
	let flattened = translate_deep(&brand_facet(), &[RelationPath::from("values")]).unwrap();
	assert_eq!(flattened["name"], "Brand");
	assert_eq!(flattened["values"][0]["name"], "Acme GmbH");
	assert_eq!(flattened["values"][0]["__typename"], "FacetValue");
}

#[test]
fn test_translate_deep_accepts_plain_wrappers() {
	#[derive(Serialize)]
	#[serde(rename_all = "camelCase")]
	struct SearchResult {
		total_items: usize,
		facet: Facet,
	}

	let result = SearchResult {
		total_items: 1,
		facet: brand_facet(),
	};
	let paths = [
		RelationPath::from("facet"),
		RelationPath::from(("facet", "values")),
	];
	let flattened = translate_deep(&result, &paths).unwrap();
	assert_eq!(flattened["totalItems"], 1);
	assert_eq!(flattened["facet"]["name"], "Brand");
	assert_eq!(flattened["facet"]["values"][0]["name"], "Acme GmbH");
}

#[test]
fn test_translate_all_stops_at_first_untranslated_relation() {
	let mut broken = brand_facet();
	broken.id = 3;
	if let Some(values) = broken.values.as_mut() {
		values[0].translations.clear();
	}

	let paths = [RelationPath::from("values")];
	assert_eq!(translate_all(&[brand_facet()], &paths).unwrap().len(), 1);

	let err = translate_all(&[brand_facet(), broken], &paths).unwrap_err();
	assert!(err.to_string().contains("'FacetValue'"));
}
