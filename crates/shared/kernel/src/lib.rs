//! Kernel utilities shared by the locus applications.
//! Keep this crate lightweight; it provides the concrete configuration loader and
//! language resolver that feed the localization feature.
//!
//! ## Config loading
//! ```rust,ignore
//! use locus_kernel::config::load_config;
//! use locus_kernel::domain::config::L10nConfig;
//!
//! let cfg: L10nConfig = load_config(Some("locus.toml")).unwrap();
//! ```
//!
//! ## Language resolution
//! ```rust
//! use locus_kernel::domain::config::LanguageConfig;
//! use locus_kernel::domain::language::LanguageResolver;
//! use locus_kernel::language::ConfiguredLanguage;
//!
//! let config = LanguageConfig {
//!     language: Some("pt-br".to_owned()),
//!     default: "en".to_owned(),
//!     available: vec!["en".to_owned(), "pt-br".to_owned()],
//! };
//! assert_eq!(ConfiguredLanguage::new(&config).resolve_posix_language(), "pt_BR");
//! ```
pub mod config;
pub mod language;

pub use locus_domain as domain;
