// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed contract for translatable entities.

use serde::Serialize;
use storefront_common_i18n::LanguageCode;

/// One language's values for the translatable fields of an entity.
///
/// Implementors serialize `id` and `languageCode` alongside the translated
/// fields; neither is copied onto the flattened entity.
pub trait Translation: Serialize {
	fn language_code(&self) -> LanguageCode;
}

/// An entity whose language-dependent fields live in translation rows.
///
/// Implementors must serialize their rows under the `translations` key.
pub trait Translatable: Serialize {
	type Translation: Translation;

	fn translations(&self) -> &[Self::Translation];

	fn translations_mut(&mut self) -> &mut Vec<Self::Translation>;

	/// Whether flattening would find a translation row to merge.
	fn is_translated(&self) -> bool {
		!self.translations().is_empty()
	}

	/// Drop every translation row not in `code`, preserving row order.
	fn retain_translations(&mut self, code: LanguageCode) {
		self.translations_mut()
			.retain(|translation| translation.language_code() == code);
	}
}
