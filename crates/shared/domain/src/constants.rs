//! Names shared by every translation backend.

/// The reserved name of the default translation domain.
pub const DEFAULT_DOMAIN: &str = "ssp";

/// Encoding bound to every domain in the environment-bound backend.
pub const CATALOG_ENCODING: &str = "UTF-8";

/// Directory between the language subtag and the catalog file.
pub const LC_MESSAGES: &str = "LC_MESSAGES";

/// Default base directory of the catalogs, relative to the working directory.
pub const DEFAULT_LOCALE_DIR: &str = "locales";

/// Language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";
