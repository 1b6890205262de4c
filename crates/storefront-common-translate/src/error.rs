// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// An entity was flattened without any translation rows attached.
///
/// This points at a data-fetch misconfiguration (the translations relation was
/// not joined, or was filtered to a language the entity has no row for), not at
/// bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Translatable entity '{entity_name}' has not been translated into the requested language")]
pub struct NotTranslatedError {
	entity_name: String,
}

impl NotTranslatedError {
	pub fn new(entity_name: impl Into<String>) -> Self {
		Self {
			entity_name: entity_name.into(),
		}
	}

	pub fn entity_name(&self) -> &str {
		&self.entity_name
	}
}

/// Errors from the typed entry points, which serialize before flattening.
#[derive(Debug, Error)]
pub enum TranslateError {
	#[error(transparent)]
	NotTranslated(#[from] NotTranslatedError),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}
