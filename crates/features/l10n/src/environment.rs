//! The environment-locale subsystem used by the environment-bound backend.

use std::fmt::Debug;
use std::path::Path;

/// Primitive operations of a gettext-like locale environment.
///
/// The calls are declarative and infallible from the caller's point of view.
/// Implementations that talk to a real runtime report failures through
/// `tracing` and carry on.
pub trait LocaleEnvironment: Debug + Send + Sync {
    /// Sets the locale used for every category (`LC_ALL`).
    fn set_process_locale(&self, code: &str);

    /// Binds `domain` to the directory holding its catalogs.
    fn bind_domain(&self, domain: &str, directory: &Path);

    /// Fixes the output encoding of `domain`'s translations.
    fn set_domain_encoding(&self, domain: &str, encoding: &str);

    /// Selects `domain` for subsequent lookups.
    fn select_active_domain(&self, domain: &str);
}

#[cfg(feature = "gettext")]
pub use self::gettext::GettextEnvironment;

#[cfg(feature = "gettext")]
mod gettext {
    use super::LocaleEnvironment;
    use gettextrs::{LocaleCategory, bind_textdomain_codeset, bindtextdomain, setlocale, textdomain};
    use std::path::Path;
    use tracing::{debug, warn};

    /// Forwards the environment primitives to the C gettext runtime.
    ///
    /// This mutates process-wide state: every `GettextEnvironment` shares it.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct GettextEnvironment;

    impl GettextEnvironment {
        #[must_use]
        pub const fn new() -> Self {
            Self
        }
    }

    impl LocaleEnvironment for GettextEnvironment {
        fn set_process_locale(&self, code: &str) {
            if setlocale(LocaleCategory::LcAll, code).is_none() {
                warn!(locale = code, "The C runtime rejected the locale");
            } else {
                debug!(locale = code, "Process locale set");
            }
        }

        fn bind_domain(&self, domain: &str, directory: &Path) {
            if let Err(err) = bindtextdomain(domain, directory) {
                warn!(domain, directory = %directory.display(), %err, "bindtextdomain failed");
            }
        }

        fn set_domain_encoding(&self, domain: &str, encoding: &str) {
            if let Err(err) = bind_textdomain_codeset(domain, encoding) {
                warn!(domain, encoding, %err, "bind_textdomain_codeset failed");
            }
        }

        fn select_active_domain(&self, domain: &str) {
            if let Err(err) = textdomain(domain) {
                warn!(domain, %err, "textdomain failed");
            }
        }
    }
}
