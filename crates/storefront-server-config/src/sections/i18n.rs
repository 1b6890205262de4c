// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language configuration section.

use serde::{Deserialize, Serialize};
use storefront_common_i18n::{resolve_language, LanguageCode, DEFAULT_LANGUAGE};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	pub default_language: Option<LanguageCode>,
	pub available_languages: Option<Vec<LanguageCode>>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_language.is_some() {
			self.default_language = other.default_language;
		}
		if other.available_languages.is_some() {
			self.available_languages = other.available_languages;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			default_language: self.default_language.unwrap_or(DEFAULT_LANGUAGE),
			available_languages: self
				.available_languages
				.unwrap_or_else(|| vec![DEFAULT_LANGUAGE]),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
	/// Language served when a request names none, or one the shop lacks.
	pub default_language: LanguageCode,
	/// Languages the catalog has content in.
	pub available_languages: Vec<LanguageCode>,
}

impl I18nConfig {
	/// Resolve the language a request is served in.
	pub fn request_language(&self, requested: Option<&str>) -> LanguageCode {
		resolve_language(requested, self.default_language, &self.available_languages)
	}
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			default_language: DEFAULT_LANGUAGE,
			available_languages: vec![DEFAULT_LANGUAGE],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_values() {
		let config = I18nConfig::default();
		assert_eq!(config.default_language, LanguageCode::En);
		assert_eq!(config.available_languages, vec![LanguageCode::En]);
	}

	#[test]
	fn test_layer_finalize_defaults() {
		assert_eq!(I18nConfigLayer::default().finalize(), I18nConfig::default());
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = I18nConfigLayer {
			default_language: Some(LanguageCode::En),
			available_languages: Some(vec![LanguageCode::En, LanguageCode::De]),
		};
		let overlay = I18nConfigLayer {
			default_language: Some(LanguageCode::De),
			available_languages: None,
		};
		base.merge(overlay);
		assert_eq!(base.default_language, Some(LanguageCode::De));
		assert_eq!(
			base.available_languages,
			Some(vec![LanguageCode::En, LanguageCode::De])
		);
	}

	#[test]
	fn test_request_language() {
		let config = I18nConfig {
			default_language: LanguageCode::De,
			available_languages: vec![LanguageCode::En, LanguageCode::De],
		};
		assert_eq!(config.request_language(Some("en-GB")), LanguageCode::En);
		assert_eq!(config.request_language(Some("fr")), LanguageCode::De);
		assert_eq!(config.request_language(None), LanguageCode::De);
	}

	#[test]
	fn test_deserialize_layer_partial() {
		let toml_str = r#"
available_languages = ["en", "ar"]
"#;
		let layer: I18nConfigLayer = toml::from_str(toml_str).unwrap();
		assert!(layer.default_language.is_none());
		assert_eq!(
			layer.available_languages,
			Some(vec![LanguageCode::En, LanguageCode::Ar])
		);
	}
}
