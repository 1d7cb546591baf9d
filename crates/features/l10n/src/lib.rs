//! Localization feature slice: translation backend selection and domain activation.
//!
//! A [`DomainActivator`] maps a resolved language to translation catalogs
//! ("domains") and switches which one serves lookups. Three backend modes exist:
//!
//! - **unset**: no translation; every operation is a no-op.
//! - **environment-bound**: domains are bound in, and selected through, a
//!   [`LocaleEnvironment`] (gettext-style named-domain switching).
//! - **catalog-loaded**: each activation loads
//!   `{dir}/{primary_subtag}/LC_MESSAGES/{domain}.catalog` and installs it as the
//!   lookup table of a [`LocaleContext`].
//!
//! The default domain (`ssp`) is registered and activated at construction and
//! can always be restored with [`DomainActivator::restore_default`].

mod activator;
mod backend;
mod builder;
mod context;
mod domain;
mod environment;
mod error;

pub use activator::{DomainActivator, ScopedDomain};
pub use builder::{DomainActivatorBuilder, NoConfig, WithConfig};
pub use context::{BoundDomain, LocaleContext};
pub use domain::DomainName;
#[cfg(feature = "gettext")]
pub use environment::GettextEnvironment;
pub use environment::LocaleEnvironment;
pub use error::{L10nError, L10nErrorExt};

use locus_catalog::CATALOG_EXTENSION;
use locus_domain::constants::LC_MESSAGES;
use std::path::{Path, PathBuf};

/// Returns the portion of a POSIX language code before the first `_`.
///
/// ```rust
/// assert_eq!(locus_l10n::primary_subtag("nb_NO"), "nb");
/// assert_eq!(locus_l10n::primary_subtag("en"), "en");
/// ```
#[must_use]
pub fn primary_subtag(code: &str) -> &str {
    code.split_once('_').map_or(code, |(primary, _)| primary)
}

pub(crate) fn catalog_path(directory: &Path, subtag: &str, domain: &DomainName) -> PathBuf {
    directory.join(subtag).join(LC_MESSAGES).join(format!("{domain}.{CATALOG_EXTENSION}"))
}
