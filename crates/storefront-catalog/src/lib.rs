// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Product catalog for the storefront.
//!
//! Loads product graphs with their translations restricted to the request
//! language, then flattens them into the objects the API serializes.

pub mod entity;
pub mod error;
pub mod filter;
pub mod repository;
pub mod service;

pub use entity::{
	Product, ProductOption, ProductOptionGroup, ProductOptionGroupTranslation,
	ProductOptionTranslation, ProductTranslation, ProductVariant, ProductVariantTranslation,
};
pub use error::{CatalogError, Result};
pub use filter::{retain_language_in_graph, RetainLanguage};
pub use repository::ProductRepository;
pub use service::{product_detail_relations, product_list_relations, ProductList, ProductService};
