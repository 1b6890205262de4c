// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use storefront_common_i18n::LanguageCode;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{I18nConfigLayer, LoggingConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/storefront/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: STOREFRONT_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			i18n: Some(load_i18n_from_env()?),
			logging: Some(load_logging_from_env()),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn parse_language(key: &str, value: &str) -> Result<LanguageCode, ConfigError> {
	value.parse().map_err(|e| ConfigError::InvalidValue {
		key: key.to_string(),
		message: format!("{e}"),
	})
}

/// Parse a comma separated language list such as `en,de, fr`.
fn parse_language_list(key: &str, value: &str) -> Result<Vec<LanguageCode>, ConfigError> {
	let mut languages = Vec::new();
	for tag in value.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
		let code = parse_language(key, tag)?;
		if !languages.contains(&code) {
			languages.push(code);
		}
	}
	Ok(languages)
}

fn load_i18n_from_env() -> Result<I18nConfigLayer, ConfigError> {
	const DEFAULT_KEY: &str = "STOREFRONT_DEFAULT_LANGUAGE";
	const AVAILABLE_KEY: &str = "STOREFRONT_AVAILABLE_LANGUAGES";

	Ok(I18nConfigLayer {
		default_language: env_var(DEFAULT_KEY)
			.map(|v| parse_language(DEFAULT_KEY, &v))
			.transpose()?,
		available_languages: env_var(AVAILABLE_KEY)
			.map(|v| parse_language_list(AVAILABLE_KEY, &v))
			.transpose()?,
	})
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("STOREFRONT_LOG_LEVEL"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_precedence_order() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}

	#[test]
	fn test_parse_language_list() {
		let languages = parse_language_list("KEY", "en, de,fr,,en").unwrap();
		assert_eq!(
			languages,
			vec![LanguageCode::En, LanguageCode::De, LanguageCode::Fr]
		);
	}

	#[test]
	fn test_parse_language_list_rejects_unknown() {
		let err = parse_language_list("STOREFRONT_AVAILABLE_LANGUAGES", "en,klingon").unwrap_err();
		match err {
			ConfigError::InvalidValue { key, message } => {
				assert_eq!(key, "STOREFRONT_AVAILABLE_LANGUAGES");
				assert!(message.contains("klingon"));
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn test_toml_source_missing_file_is_empty() {
		let source = TomlSource::new("/nonexistent/storefront.toml");
		assert_eq!(source.load().unwrap(), ServerConfigLayer::default());
	}

	#[test]
	fn test_toml_source_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"
[i18n]
default_language = "es"
available_languages = ["en", "es"]
"#
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		let i18n = layer.i18n.unwrap();
		assert_eq!(i18n.default_language, Some(LanguageCode::Es));
		assert_eq!(
			i18n.available_languages,
			Some(vec![LanguageCode::En, LanguageCode::Es])
		);
	}

	#[test]
	fn test_toml_source_reports_parse_errors() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[i18n]\ndefault_language = \"xx\"").unwrap();

		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}
}
