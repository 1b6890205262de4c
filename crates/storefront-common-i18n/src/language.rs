// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// ISO 639-1 language code of a translation row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
	En,
	De,
	Fr,
	Es,
	It,
	Nl,
	Pt,
	Ja,
	Zh,
	Ar,
	He,
}

impl LanguageCode {
	pub const ALL: &'static [LanguageCode] = &[
		LanguageCode::En,
		LanguageCode::De,
		LanguageCode::Fr,
		LanguageCode::Es,
		LanguageCode::It,
		LanguageCode::Nl,
		LanguageCode::Pt,
		LanguageCode::Ja,
		LanguageCode::Zh,
		LanguageCode::Ar,
		LanguageCode::He,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			LanguageCode::En => "en",
			LanguageCode::De => "de",
			LanguageCode::Fr => "fr",
			LanguageCode::Es => "es",
			LanguageCode::It => "it",
			LanguageCode::Nl => "nl",
			LanguageCode::Pt => "pt",
			LanguageCode::Ja => "ja",
			LanguageCode::Zh => "zh",
			LanguageCode::Ar => "ar",
			LanguageCode::He => "he",
		}
	}
}

impl fmt::Display for LanguageCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageCodeError {
	#[error("empty language code")]
	Empty,

	#[error("unsupported language code: {0}")]
	Unsupported(String),
}

impl FromStr for LanguageCode {
	type Err = LanguageCodeError;

	/// Parses `en`, `EN`, `en-US` and `en_US` alike; the region is ignored.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let primary = s.trim().split(['-', '_']).next().unwrap_or_default();
		if primary.is_empty() {
			return Err(LanguageCodeError::Empty);
		}

		let primary = primary.to_ascii_lowercase();
		LanguageCode::ALL
			.iter()
			.copied()
			.find(|code| code.as_str() == primary)
			.ok_or_else(|| LanguageCodeError::Unsupported(s.to_string()))
	}
}
