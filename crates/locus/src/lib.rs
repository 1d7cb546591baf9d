//! Facade crate for the locus localization crates.
//! Re-exports domain/kernel primitives, catalogs and the activation feature.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `locus`, optionally with the `gettext` feature for the C runtime binding.
//! - Build a [`DomainActivator`] from a loaded [`L10nConfig`](domain::config::L10nConfig).

pub use locus_catalog as catalog;
pub use locus_domain as domain;
pub use locus_kernel as kernel;
pub use locus_l10n as l10n;

pub use locus_l10n::{DomainActivator, DomainName, L10nError, LocaleContext, primary_subtag};

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "l10n",
        #[cfg(feature = "gettext")]
        "gettext",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l10n_is_always_enabled() {
        assert!(features::is_enabled("l10n"));
        assert!(!features::is_enabled("server"));
    }

    #[test]
    fn reexports_share_types() {
        let config = domain::config::L10nConfig::default();
        let activator = DomainActivator::builder()
            .config(config)
            .context(std::sync::Arc::new(LocaleContext::new()))
            .init()
            .unwrap();
        assert!(activator.is_inert());
        assert_eq!(primary_subtag("nb_NO"), "nb");
    }
}
