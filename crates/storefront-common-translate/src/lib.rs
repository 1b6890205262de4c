// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation resolution for storefront entities.
//!
//! Catalog entities keep their language-dependent fields (name, slug,
//! description, ...) in a `translations` array of per-language rows. Before an
//! entity is handed to the API layer it is *flattened*: the first translation
//! row is merged onto the entity and the `translations` array is dropped.
//!
//! The data-fetch layer is expected to have filtered `translations` down to the
//! request language already. The resolver never matches languages itself; it
//! always takes the first row.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use storefront_common_translate::{flatten_deep, RelationPath};
//!
//! let product = json!({
//!     "__typename": "Product",
//!     "id": 1,
//!     "translations": [{ "id": 10, "languageCode": "en", "name": "Laptop" }],
//!     "variants": [{
//!         "__typename": "ProductVariant",
//!         "id": 2,
//!         "translations": [{ "id": 20, "languageCode": "en", "name": "Laptop 13\"" }],
//!     }],
//! });
//!
//! let flattened = flatten_deep(&product, &[RelationPath::from("variants")]).unwrap();
//! assert_eq!(flattened["name"], "Laptop");
//! assert_eq!(flattened["id"], 1);
//! assert_eq!(flattened["variants"][0]["name"], "Laptop 13\"");
//! assert!(flattened.get("translations").is_none());
//! ```

pub mod entity;
pub mod error;
pub mod flatten;
pub mod path;
pub mod translate;

pub use entity::{Translatable, Translation};
pub use error::{NotTranslatedError, TranslateError};
pub use flatten::{flatten_deep, flatten_entity};
pub use path::{RelationPath, RelationPathError};
pub use translate::{translate_all, translate_deep, translate_entity};

/// Key holding the translation rows of a translatable entity.
pub const TRANSLATIONS_KEY: &str = "translations";

/// Key holding an entity's or translation row's own identity.
pub const ID_KEY: &str = "id";

/// Key holding a translation row's language.
pub const LANGUAGE_CODE_KEY: &str = "languageCode";

/// GraphQL-style key carrying the type name of a serialized entity.
pub const TYPENAME_KEY: &str = "__typename";
