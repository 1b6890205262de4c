// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the storefront.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`STOREFRONT_*`)
//!
//! # Usage
//!
//! ```ignore
//! use storefront_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Default language: {}", config.i18n.default_language);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved storefront configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorefrontConfig {
	pub i18n: I18nConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`STOREFRONT_*`)
/// 2. Config file (`/etc/storefront/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<StorefrontConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<StorefrontConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Merge `sources` in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<StorefrontConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<StorefrontConfig, ConfigError> {
	let i18n = layer.i18n.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&i18n)?;

	info!(
		default_language = %i18n.default_language,
		available_languages = ?i18n.available_languages,
		log_level = %logging.level,
		"Storefront configuration loaded"
	);

	Ok(StorefrontConfig { i18n, logging })
}

/// Validate cross-field configuration rules.
fn validate_config(i18n: &I18nConfig) -> Result<(), ConfigError> {
	if i18n.available_languages.is_empty() {
		return Err(ConfigError::Validation(
			"STOREFRONT_AVAILABLE_LANGUAGES must name at least one language".to_string(),
		));
	}

	if !i18n.available_languages.contains(&i18n.default_language) {
		return Err(ConfigError::Validation(format!(
			"default language '{}' is not among the available languages {:?}",
			i18n.default_language, i18n.available_languages
		)));
	}

	Ok(())
}
