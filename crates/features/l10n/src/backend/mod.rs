//! Translation backends.
//!
//! Each backend is a strategy behind [`Backend`]; the activator picks one at
//! construction from the configured [`BackendMode`] and never branches on the
//! mode again. The unset mode has no backend at all.

mod catalog;
mod environment;

pub(crate) use catalog::CatalogLoadedBackend;
pub(crate) use environment::EnvironmentBoundBackend;

use crate::domain::DomainName;
use crate::error::L10nError;
use locus_domain::config::BackendMode;
use std::fmt::Debug;
use std::path::Path;

pub(crate) trait Backend: Debug + Send + Sync {
    fn mode(&self) -> BackendMode;

    /// Side effects of registering `domain` after its binding was stored.
    fn register(&self, domain: &DomainName, directory: &Path);

    /// Makes `domain` the source of subsequent lookups.
    ///
    /// `directory` is the domain's registered binding, if any. On error the
    /// previously active domain must stay in effect.
    fn activate(&self, domain: &DomainName, directory: Option<&Path>) -> Result<(), L10nError>;

    fn restore_default(&self, directory: Option<&Path>) -> Result<(), L10nError> {
        self.activate(&DomainName::default_domain(), directory)
    }
}

pub(crate) fn unbound(domain: &DomainName) -> L10nError {
    L10nError::UnboundDomain {
        message: domain.to_string().into(),
        context: Some("Domain must be registered before activation".into()),
    }
}
