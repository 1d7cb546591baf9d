use super::{Backend, unbound};
use crate::domain::DomainName;
use crate::environment::LocaleEnvironment;
use crate::error::L10nError;
use locus_domain::config::BackendMode;
use locus_domain::constants::CATALOG_ENCODING;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Named-domain switching, understood natively by the locale environment.
#[derive(Debug)]
pub(crate) struct EnvironmentBoundBackend {
    environment: Arc<dyn LocaleEnvironment>,
    strict: bool,
}

impl EnvironmentBoundBackend {
    /// Sets the process locale as part of backend construction.
    pub(crate) fn new(environment: Arc<dyn LocaleEnvironment>, language: &str, strict: bool) -> Self {
        environment.set_process_locale(language);
        debug!(language, strict, "Environment-bound backend ready");
        Self { environment, strict }
    }
}

impl Backend for EnvironmentBoundBackend {
    fn mode(&self) -> BackendMode {
        BackendMode::EnvironmentBound
    }

    fn register(&self, domain: &DomainName, directory: &Path) {
        self.environment.bind_domain(domain.as_str(), directory);
        self.environment.set_domain_encoding(domain.as_str(), CATALOG_ENCODING);
    }

    fn activate(&self, domain: &DomainName, directory: Option<&Path>) -> Result<(), L10nError> {
        if directory.is_none() && self.strict {
            return Err(unbound(domain));
        }
        self.environment.select_active_domain(domain.as_str());
        Ok(())
    }
}
