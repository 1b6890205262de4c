// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog entities as loaded by the data-fetch layer.
//!
//! Relations that were not loaded are `None` and are left out of the
//! serialized form entirely.

use serde::Serialize;
use storefront_common_i18n::LanguageCode;
use storefront_common_translate::{Translatable, Translation};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename", rename_all = "camelCase")]
pub struct Product {
	pub id: i64,
	pub enabled: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub featured_asset: Option<String>,
	pub translations: Vec<ProductTranslation>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub variants: Option<Vec<ProductVariant>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub option_groups: Option<Vec<ProductOptionGroup>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename", rename_all = "camelCase")]
pub struct ProductTranslation {
	pub id: i64,
	pub language_code: LanguageCode,
	pub name: String,
	pub slug: String,
	pub description: String,
}

/// A purchasable SKU of a product. `price` is in minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename", rename_all = "camelCase")]
pub struct ProductVariant {
	pub id: i64,
	pub sku: String,
	pub price: i64,
	pub translations: Vec<ProductVariantTranslation>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub options: Option<Vec<ProductOption>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename", rename_all = "camelCase")]
pub struct ProductVariantTranslation {
	pub id: i64,
	pub language_code: LanguageCode,
	pub name: String,
}

/// A dimension variants differ in, e.g. "size" or "colour".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename", rename_all = "camelCase")]
pub struct ProductOptionGroup {
	pub id: i64,
	pub code: String,
	pub translations: Vec<ProductOptionGroupTranslation>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub options: Option<Vec<ProductOption>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename", rename_all = "camelCase")]
pub struct ProductOptionGroupTranslation {
	pub id: i64,
	pub language_code: LanguageCode,
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename", rename_all = "camelCase")]
pub struct ProductOption {
	pub id: i64,
	pub code: String,
	pub translations: Vec<ProductOptionTranslation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename", rename_all = "camelCase")]
pub struct ProductOptionTranslation {
	pub id: i64,
	pub language_code: LanguageCode,
	pub name: String,
}

macro_rules! impl_translatable {
	($($entity:ty => $translation:ty),* $(,)?) => {
		$(
			impl Translation for $translation {
				fn language_code(&self) -> LanguageCode {
					self.language_code
				}
			}

			impl Translatable for $entity {
				type Translation = $translation;

				fn translations(&self) -> &[$translation] {
					&self.translations
				}

				fn translations_mut(&mut self) -> &mut Vec<$translation> {
					&mut self.translations
				}
			}
		)*
	};
}

impl_translatable! {
	Product => ProductTranslation,
	ProductVariant => ProductVariantTranslation,
	ProductOptionGroup => ProductOptionGroupTranslation,
	ProductOption => ProductOptionTranslation,
}
