//! Translation catalogs for the locus crates.
//!
//! A [`Catalog`] is a flat lookup table for one domain in one language. Catalogs
//! are produced by a [`CatalogLoader`]; the bundled [`PoCatalogLoader`] reads files
//! written in gettext `.po` syntax.
//!
//! # Supported `.po` syntax
//!
//! - `msgctxt`, `msgid`, `msgid_plural`, `msgstr` and `msgstr[N]` keywords.
//! - Multi-line strings (a quoted line continues the previous keyword).
//! - Comments (`#`, `#.`, `#:`, `#|`, `#~`); entries flagged `#, fuzzy` are skipped.
//! - The usual C escapes: `\n \t \r \\ \" \a \b \f \v`.
//! - A leading UTF-8 byte order mark.
//! - The `Plural-Forms` header, which selects the form returned by
//!   [`Catalog::get_plural`] (see [`PluralRule`]).
//!
//! # Example
//!
//! ```rust
//! use locus_catalog::Catalog;
//!
//! let catalog = Catalog::from_po_str(r#"
//! msgid "Hello"
//! msgstr "Bonjour"
//!
//! msgctxt "menu"
//! msgid "Open"
//! msgstr "Ouvrir"
//! "#).unwrap();
//!
//! assert_eq!(catalog.get("Hello"), Some("Bonjour"));
//! assert_eq!(catalog.get_with_context("menu", "Open"), Some("Ouvrir"));
//! assert_eq!(catalog.get("Missing"), None);
//! ```

mod catalog;
mod error;
mod loader;
mod plural;
mod po;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogErrorExt};
pub use loader::{CatalogLoader, PoCatalogLoader};
pub use plural::PluralRule;

/// Extension of catalog files resolved by the locus activator.
pub const CATALOG_EXTENSION: &str = "catalog";
