// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Product queries returning translated API objects.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use storefront_common_translate::{translate_all, translate_deep, RelationPath};
use storefront_server_config::I18nConfig;

use crate::error::{CatalogError, Result};
use crate::repository::ProductRepository;

/// Relations flattened for product listings.
pub fn product_list_relations() -> Vec<RelationPath> {
	vec![
		RelationPath::relation("variants"),
		RelationPath::relation("optionGroups"),
	]
}

/// Relations flattened for a single product, which also loads variant options.
pub fn product_detail_relations() -> Vec<RelationPath> {
	let mut relations = product_list_relations();
	relations.push(RelationPath::nested("variants", "options"));
	relations
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
	pub items: Vec<Value>,
	pub total_items: usize,
}

pub struct ProductService {
	repository: Arc<ProductRepository>,
	i18n: I18nConfig,
	list_relations: Vec<RelationPath>,
	detail_relations: Vec<RelationPath>,
}

impl ProductService {
	pub fn new(repository: Arc<ProductRepository>, i18n: I18nConfig) -> Self {
		Self {
			repository,
			i18n,
			list_relations: product_list_relations(),
			detail_relations: product_detail_relations(),
		}
	}

	/// All products in the request language.
	///
	/// A product without a row in that language is returned untranslated; a
	/// loaded variant or option group without one fails the whole listing.
	#[tracing::instrument(skip(self))]
	pub fn list_products(&self, language: Option<&str>) -> Result<ProductList> {
		let language = self.i18n.request_language(language);
		let products = self.repository.list_translated(language)?;
		let items = translate_all(&products, &self.list_relations)?;
		tracing::debug!(%language, count = items.len(), "translated product listing");
		Ok(ProductList {
			total_items: items.len(),
			items,
		})
	}

	#[tracing::instrument(skip(self))]
	pub fn find_product(&self, id: i64, language: Option<&str>) -> Result<Value> {
		let language = self.i18n.request_language(language);
		let product = self
			.repository
			.load_translated(id, language)?
			.ok_or(CatalogError::NotFound(id))?;
		Ok(translate_deep(&product, &self.detail_relations)?)
	}
}
