// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use http::StatusCode;
use storefront_common_translate::TranslateError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	#[error("Product not found: {0}")]
	NotFound(i64),

	#[error(transparent)]
	Translation(#[from] TranslateError),

	#[error("Internal: {0}")]
	Internal(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
	/// Status the API layer answers with.
	///
	/// A translation failure means the query did not load translations for a
	/// relation it asked to flatten, so it is reported as a server fault.
	pub fn status_code(&self) -> StatusCode {
		match self {
			CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
			CatalogError::Translation(_) | CatalogError::Internal(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}
