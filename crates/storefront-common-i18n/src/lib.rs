// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) primitives for the storefront.
//!
//! Catalog entities store their language-dependent fields in per-language
//! translation rows. This crate provides the vocabulary those rows are keyed
//! by, and the logic that picks the language a request is served in:
//!
//! - [`LanguageCode`]: ISO 639-1 codes the platform supports
//! - [`LOCALES`]: display metadata per language, including text direction
//! - [`resolve_language`]: request language selection against the configured
//!   default and available languages
//!
//! # Example
//!
//! ```
//! use storefront_common_i18n::{locale_info, resolve_language, Direction, LanguageCode};
//!
//! let available = [LanguageCode::En, LanguageCode::De];
//!
//! // The requested language wins when the shop offers it
//! assert_eq!(resolve_language(Some("de-AT"), LanguageCode::En, &available), LanguageCode::De);
//!
//! // Otherwise the shop default is used
//! assert_eq!(resolve_language(Some("fr"), LanguageCode::En, &available), LanguageCode::En);
//!
//! assert_eq!(locale_info(LanguageCode::Ar).map(|info| info.direction), Some(Direction::Rtl));
//! ```

mod language;
mod locale;
mod resolve;

pub use language::{LanguageCode, LanguageCodeError};
pub use locale::{available_locales, locale_info, Direction, LocaleInfo};
pub use resolve::resolve_language;

pub use locale::{DEFAULT_LANGUAGE, LOCALES};
