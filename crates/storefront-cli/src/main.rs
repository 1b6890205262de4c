// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Storefront command line tools.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use storefront_common_i18n::{available_locales, locale_info, LanguageCode, LocaleInfo};
use storefront_common_translate::RelationPath;
use storefront_server_config::StorefrontConfig;

mod flatten;
mod logging;
mod version;

/// Storefront - catalog translation tools.
#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Storefront catalog translation tools", version)]
struct Args {
	/// Config file to load instead of /etc/storefront/server.toml
	#[arg(long, global = true, env = "STOREFRONT_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Flatten translatable entities read as JSON
	Flatten(FlattenArgs),
	/// List the languages the catalog is configured for
	Languages {
		/// List every language the platform knows, not only the configured ones
		#[arg(long)]
		all: bool,
	},
	/// Show version and build information
	Version,
}

#[derive(clap::Args, Debug)]
struct FlattenArgs {
	/// JSON file holding an entity or an array of entities, `-` for stdin
	#[arg(short, long, default_value = "-")]
	input: PathBuf,

	/// Relation to flatten; `variants.options` for a relation of a relation
	#[arg(short, long = "relation", value_name = "PATH", value_parser = RelationPath::from_str)]
	relations: Vec<RelationPath>,

	/// Drop translations in other languages before flattening; must be one of
	/// the configured languages
	#[arg(short, long)]
	language: Option<LanguageCode>,

	/// Print JSON on a single line
	#[arg(long)]
	compact: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<StorefrontConfig> {
	let config = match path {
		Some(path) => storefront_server_config::load_config_with_file(path),
		None => storefront_server_config::load_config(),
	};
	config.context("failed to load configuration")
}

fn run_flatten(args: FlattenArgs, config: &StorefrontConfig) -> Result<()> {
	let language = args
		.language
		.map(|requested| flatten::filter_language(requested, &config.i18n))
		.transpose()?;

	let document = flatten::read_document(&args.input)?;
	tracing::info!(
		input = %args.input.display(),
		relations = args.relations.len(),
		language = ?language,
		"flattening document"
	);

	let flattened = flatten::flatten_document(&document, &args.relations, language)
		.context("failed to flatten document")?;

	let output = if args.compact {
		serde_json::to_string(&flattened)?
	} else {
		serde_json::to_string_pretty(&flattened)?
	};
	println!("{output}");
	Ok(())
}

fn run_languages(config: &StorefrontConfig, all: bool) {
	let codes: Vec<LanguageCode> = if all {
		available_locales().map(|info| info.code).collect()
	} else {
		config.i18n.available_languages.clone()
	};

	for code in codes {
		println!("{}", language_line(code, locale_info(code), config));
	}
}

fn language_line(code: LanguageCode, info: Option<&LocaleInfo>, config: &StorefrontConfig) -> String {
	let marker = if code == config.i18n.default_language {
		" (default)"
	} else if !config.i18n.available_languages.contains(&code) {
		" (not configured)"
	} else {
		""
	};
	match info {
		Some(info) => format!(
			"{code}\t{}\t{}\t{:?}{marker}",
			info.name, info.native_name, info.direction
		),
		None => format!("{code}{marker}"),
	}
}

fn main() -> Result<()> {
	let args = Args::parse();

	if let Command::Version = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	let config = load_config(args.config.as_ref())?;
	logging::init_tracing(&config.logging.level);

	match args.command {
		Command::Flatten(flatten_args) => run_flatten(flatten_args, &config),
		Command::Languages { all } => {
			run_languages(&config, all);
			Ok(())
		}
		Command::Version => Ok(()),
	}
}
