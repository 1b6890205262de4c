// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory product store.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_common_i18n::LanguageCode;

use crate::entity::Product;
use crate::error::{CatalogError, Result};
use crate::filter::RetainLanguage;

/// Product graphs keyed by id, listed in id order.
///
/// `*_translated` reads return copies whose translation rows are restricted to
/// one language, the way a query joining translations on the request language
/// would load them.
#[derive(Debug, Default)]
pub struct ProductRepository {
	products: RwLock<BTreeMap<i64, Product>>,
}

impl ProductRepository {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store `product`, returning the product previously stored under its id.
	#[tracing::instrument(skip(self, product), fields(product_id = product.id))]
	pub fn insert(&self, product: Product) -> Result<Option<Product>> {
		let previous = self.write()?.insert(product.id, product);
		tracing::debug!(replaced = previous.is_some(), "stored product");
		Ok(previous)
	}

	#[tracing::instrument(skip(self))]
	pub fn get(&self, id: i64) -> Result<Option<Product>> {
		Ok(self.read()?.get(&id).cloned())
	}

	#[tracing::instrument(skip(self))]
	pub fn list(&self) -> Result<Vec<Product>> {
		Ok(self.read()?.values().cloned().collect())
	}

	pub fn len(&self) -> Result<usize> {
		Ok(self.read()?.len())
	}

	pub fn is_empty(&self) -> Result<bool> {
		Ok(self.read()?.is_empty())
	}

	#[tracing::instrument(skip(self, language), fields(language = %language))]
	pub fn load_translated(&self, id: i64, language: LanguageCode) -> Result<Option<Product>> {
		Ok(self.get(id)?.map(|mut product| {
			product.retain_language(language);
			product
		}))
	}

	#[tracing::instrument(skip(self, language), fields(language = %language))]
	pub fn list_translated(&self, language: LanguageCode) -> Result<Vec<Product>> {
		let mut products = self.list()?;
		for product in &mut products {
			product.retain_language(language);
		}
		tracing::debug!(count = products.len(), "loaded products");
		Ok(products)
	}

	fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<i64, Product>>> {
		self.products
			.read()
			.map_err(|_| CatalogError::Internal("product store lock poisoned".to_string()))
	}

	fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<i64, Product>>> {
		self.products
			.write()
			.map_err(|_| CatalogError::Internal("product store lock poisoned".to_string()))
	}
}
