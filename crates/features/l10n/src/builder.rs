use crate::activator::DomainActivator;
use crate::backend::{Backend, CatalogLoadedBackend, EnvironmentBoundBackend};
use crate::context::LocaleContext;
use crate::environment::LocaleEnvironment;
use crate::error::L10nError;
use locus_catalog::{CatalogLoader, PoCatalogLoader};
use locus_domain::config::{BackendMode, L10nConfig};
use locus_domain::language::LanguageResolver;
use locus_kernel::language::ConfiguredLanguage;
use private::Sealed;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct NoConfig;
#[derive(Debug)]
pub struct WithConfig(L10nConfig);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoConfig {}
impl Sealed for WithConfig {}

/// Builder for [`DomainActivator`].
///
/// Only the configuration is required. The other collaborators default to:
/// - context: [`LocaleContext::global`];
/// - environment: the context itself (in-memory);
/// - loader: [`PoCatalogLoader`];
/// - language: [`ConfiguredLanguage`] over `config.language`, i.e. the
///   configured selection when it is available, else the default, converted to
///   POSIX form.
#[allow(private_bounds)]
#[derive(Debug)]
pub struct DomainActivatorBuilder<C: Sealed = NoConfig> {
    config: C,
    context: Option<Arc<LocaleContext>>,
    environment: Option<Arc<dyn LocaleEnvironment>>,
    loader: Option<Arc<dyn CatalogLoader>>,
    language: Option<String>,
}

impl DomainActivatorBuilder {
    #[must_use = "Builder must be configured with `config` before use"]
    pub const fn new() -> Self {
        Self { config: NoConfig, context: None, environment: None, loader: None, language: None }
    }

    /// Sets the configuration snapshot the activator is built from.
    #[must_use]
    pub fn config(self, config: L10nConfig) -> DomainActivatorBuilder<WithConfig> {
        DomainActivatorBuilder {
            config: WithConfig(config),
            context: self.context,
            environment: self.environment,
            loader: self.loader,
            language: self.language,
        }
    }
}

impl Default for DomainActivatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(private_bounds)]
impl<C: Sealed> DomainActivatorBuilder<C> {
    /// The context receiving installed catalogs (and environment calls, unless
    /// [`environment`](Self::environment) is set).
    #[must_use]
    pub fn context(mut self, context: Arc<LocaleContext>) -> Self {
        self.context = Some(context);
        self
    }

    /// The environment-locale subsystem used by the environment-bound backend.
    #[must_use]
    pub fn environment(mut self, environment: Arc<dyn LocaleEnvironment>) -> Self {
        self.environment = Some(environment);
        self
    }

    #[must_use]
    pub fn loader(mut self, loader: Arc<dyn CatalogLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Resolves the POSIX language code through `resolver` instead of the
    /// configured language.
    #[must_use]
    pub fn language(mut self, resolver: &impl LanguageResolver) -> Self {
        self.language = Some(resolver.resolve_posix_language());
        self
    }
}

impl DomainActivatorBuilder<WithConfig> {
    /// Selects the backend and runs the startup sequence.
    ///
    /// # Errors
    /// Returns the errors of [`DomainActivator::activate`] for the default
    /// domain, e.g. [`L10nError::CatalogLoad`] when the default catalog is
    /// missing in catalog-loaded mode.
    pub fn init(self) -> Result<DomainActivator, L10nError> {
        let WithConfig(config) = self.config;
        let language = self.language.unwrap_or_else(|| {
            ConfiguredLanguage::new(&config.language).resolve_posix_language()
        });
        let context = self.context.unwrap_or_else(LocaleContext::global);

        let backend: Option<Box<dyn Backend>> = match config.backend {
            BackendMode::Unset => None,
            BackendMode::EnvironmentBound => {
                let environment: Arc<dyn LocaleEnvironment> = match self.environment {
                    Some(environment) => environment,
                    None => context,
                };
                Some(Box::new(EnvironmentBoundBackend::new(
                    environment,
                    &language,
                    config.strict_domains,
                )))
            },
            BackendMode::CatalogLoaded => {
                let loader = self.loader.unwrap_or_else(|| Arc::new(PoCatalogLoader::new()));
                Some(Box::new(CatalogLoadedBackend::new(context, loader, &language)))
            },
        };

        DomainActivator::start(config, language, backend)
    }
}
