// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request language resolution.

use tracing::debug;

use crate::language::LanguageCode;
use crate::locale::DEFAULT_LANGUAGE;

/// Resolve the language a request is served in.
///
/// Resolution order (highest to lowest priority):
/// 1. The requested language (if it parses and the shop offers it)
/// 2. The shop's default language (if the shop offers it)
/// 3. The first language the shop offers
/// 4. [`DEFAULT_LANGUAGE`]
///
/// # Arguments
///
/// * `requested` - Language asked for by the caller, e.g. a `languageCode`
///   query argument (may be None or invalid)
/// * `default` - Shop default from configuration
/// * `available` - Languages the shop has content in
///
/// # Example
///
/// ```
/// use storefront_common_i18n::{resolve_language, LanguageCode};
///
/// let available = [LanguageCode::En, LanguageCode::Es];
///
/// assert_eq!(resolve_language(Some("es"), LanguageCode::En, &available), LanguageCode::Es);
/// assert_eq!(resolve_language(None, LanguageCode::Es, &available), LanguageCode::Es);
/// assert_eq!(resolve_language(Some("invalid"), LanguageCode::Fr, &available), LanguageCode::En);
/// ```
pub fn resolve_language(
	requested: Option<&str>,
	default: LanguageCode,
	available: &[LanguageCode],
) -> LanguageCode {
	if let Some(tag) = requested {
		match tag.parse::<LanguageCode>() {
			Ok(code) if available.contains(&code) => return code,
			Ok(code) => debug!(%code, "requested language not offered, falling back"),
			Err(e) => debug!(error = %e, "ignoring unparseable requested language"),
		}
	}

	if available.contains(&default) {
		return default;
	}

	available.first().copied().unwrap_or(DEFAULT_LANGUAGE)
}

#[cfg(test)]
mod tests {
	use super::*;

	const SHOP: &[LanguageCode] = &[LanguageCode::En, LanguageCode::De, LanguageCode::Ar];

	#[test]
	fn test_requested_language_takes_priority() {
		assert_eq!(resolve_language(Some("de"), LanguageCode::En, SHOP), LanguageCode::De);
		assert_eq!(resolve_language(Some("ar"), LanguageCode::En, SHOP), LanguageCode::Ar);
	}

	#[test]
	fn test_default_when_nothing_requested() {
		assert_eq!(resolve_language(None, LanguageCode::De, SHOP), LanguageCode::De);
	}

	#[test]
	fn test_default_when_requested_not_offered() {
		assert_eq!(resolve_language(Some("fr"), LanguageCode::De, SHOP), LanguageCode::De);
		assert_eq!(resolve_language(Some("invalid"), LanguageCode::De, SHOP), LanguageCode::De);
	}

	#[test]
	fn test_first_available_when_default_not_offered() {
		assert_eq!(resolve_language(None, LanguageCode::Ja, SHOP), LanguageCode::En);
		assert_eq!(
			resolve_language(None, LanguageCode::Ja, &[LanguageCode::Nl]),
			LanguageCode::Nl
		);
	}

	#[test]
	fn test_empty_available_falls_back_to_english() {
		assert_eq!(resolve_language(Some("de"), LanguageCode::De, &[]), LanguageCode::En);
		assert_eq!(resolve_language(Some(""), LanguageCode::Fr, &[]), LanguageCode::En);
	}
}
