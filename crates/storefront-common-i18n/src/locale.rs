// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata for supported languages.

use serde::Serialize;

use crate::language::LanguageCode;

/// Language used when neither the request nor the configuration yields one.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::En;

/// Text direction of a language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Ltr,
	Rtl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
	pub code: LanguageCode,
	/// English name, for admin listings.
	pub name: &'static str,
	pub native_name: &'static str,
	pub direction: Direction,
}

pub static LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: LanguageCode::En,
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: LanguageCode::De,
		name: "German",
		native_name: "Deutsch",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: LanguageCode::Fr,
		name: "French",
		native_name: "Français",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: LanguageCode::Es,
		name: "Spanish",
		native_name: "Español",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: LanguageCode::It,
		name: "Italian",
		native_name: "Italiano",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: LanguageCode::Nl,
		name: "Dutch",
		native_name: "Nederlands",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: LanguageCode::Pt,
		name: "Portuguese",
		native_name: "Português",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: LanguageCode::Ja,
		name: "Japanese",
		native_name: "日本語",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: LanguageCode::Zh,
		name: "Chinese",
		native_name: "中文",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: LanguageCode::Ar,
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: LanguageCode::He,
		name: "Hebrew",
		native_name: "עברית",
		direction: Direction::Rtl,
	},
];

/// Look up display metadata for a language.
pub fn locale_info(code: LanguageCode) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|info| info.code == code)
}

pub fn available_locales() -> impl Iterator<Item = &'static LocaleInfo> {
	LOCALES.iter()
}
