use crate::backend::Backend;
use crate::builder::{DomainActivatorBuilder, NoConfig};
use crate::domain::DomainName;
use crate::error::L10nError;
use crate::{catalog_path, primary_subtag};
use fxhash::FxHashMap;
use locus_domain::config::{BackendMode, L10nConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Selects which translation domain serves subsequent lookups.
///
/// An activator is built once per process (or per request, in tests) from an
/// [`L10nConfig`]. When the configured backend is [`BackendMode::Unset`] the
/// activator is inert: every operation succeeds without side effects.
/// Otherwise the default domain is registered against the configured locale
/// directory and activated during [`init`](DomainActivatorBuilder::init).
///
/// # Example
///
/// ```rust
/// use locus_domain::config::{BackendMode, L10nConfigInner};
/// use locus_domain::language::FixedLanguage;
/// use locus_l10n::{DomainActivator, LocaleContext};
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), locus_l10n::L10nError> {
/// let context = Arc::new(LocaleContext::new());
/// let config = L10nConfigInner { backend: BackendMode::EnvironmentBound, ..Default::default() };
///
/// let mut activator = DomainActivator::builder()
///     .config(config.into())
///     .context(Arc::clone(&context))
///     .language(&FixedLanguage::new("nb_NO"))
///     .init()?;
///
/// activator.register("messages", "/srv/app/locales")?;
/// activator.activate("messages")?;
/// assert_eq!(context.selected_domain().as_deref(), Some("messages"));
///
/// activator.restore_default()?;
/// assert_eq!(context.selected_domain().as_deref(), Some("ssp"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DomainActivator {
    config: L10nConfig,
    language: String,
    state: Option<Ready>,
}

#[derive(Debug)]
struct Ready {
    backend: Box<dyn Backend>,
    bindings: FxHashMap<DomainName, PathBuf>,
    active: DomainName,
}

impl DomainActivator {
    /// Starts building an activator; a configuration is required.
    #[must_use = "Builder must be configured with `config` before use"]
    pub fn builder() -> DomainActivatorBuilder<NoConfig> {
        DomainActivatorBuilder::new()
    }

    /// Runs the startup sequence: register and activate the default domain.
    pub(crate) fn start(
        config: L10nConfig,
        language: String,
        backend: Option<Box<dyn Backend>>,
    ) -> Result<Self, L10nError> {
        let Some(backend) = backend else {
            debug!(%language, "No translation backend configured");
            return Ok(Self { config, language, state: None });
        };

        let default = DomainName::default_domain();
        let mut ready =
            Ready { backend, bindings: FxHashMap::default(), active: default.clone() };
        ready.bind(default.clone(), config.locale_dir.clone());
        ready.switch(default)?;

        info!(
            mode = %ready.backend.mode(),
            %language,
            locale_dir = %config.locale_dir.display(),
            "Translation backend ready"
        );

        Ok(Self { config, language, state: Some(ready) })
    }

    /// Binds `domain` to the directory holding its catalogs.
    ///
    /// Registering an existing name overwrites its binding. In environment-bound
    /// mode the binding is also pushed to the locale environment with UTF-8
    /// output encoding.
    ///
    /// # Errors
    /// Returns [`L10nError::InvalidDomain`] for names that cannot name a catalog file.
    pub fn register<D>(&mut self, domain: D, directory: impl Into<PathBuf>) -> Result<(), L10nError>
    where
        D: TryInto<DomainName, Error = L10nError>,
    {
        let Some(ready) = self.state.as_mut() else {
            return Ok(());
        };

        let domain = domain.try_into()?;
        let directory = directory.into();
        debug!(%domain, directory = %directory.display(), "Registering translation domain");
        ready.bind(domain, directory);

        Ok(())
    }

    /// Makes `domain` the source of subsequent lookups.
    ///
    /// On failure the previously active domain stays in effect.
    ///
    /// # Errors
    /// - [`L10nError::InvalidDomain`] for malformed names.
    /// - [`L10nError::UnboundDomain`] if `domain` was never registered (always in
    ///   catalog-loaded mode, and in environment-bound mode unless `strict_domains`
    ///   is disabled).
    /// - [`L10nError::CatalogLoad`] if the catalog cannot be loaded.
    pub fn activate<D>(&mut self, domain: D) -> Result<(), L10nError>
    where
        D: TryInto<DomainName, Error = L10nError>,
    {
        let Some(ready) = self.state.as_mut() else {
            return Ok(());
        };

        ready.switch(domain.try_into()?)
    }

    /// Activates the default domain again.
    ///
    /// # Errors
    /// Same as [`activate`](Self::activate).
    pub fn restore_default(&mut self) -> Result<(), L10nError> {
        let Some(ready) = self.state.as_mut() else {
            return Ok(());
        };

        ready.restore()
    }

    /// Activates `domain` until the returned guard is dropped.
    ///
    /// # Errors
    /// Same as [`activate`](Self::activate); no guard is returned on failure.
    pub fn activate_scoped<D>(&mut self, domain: D) -> Result<ScopedDomain<'_>, L10nError>
    where
        D: TryInto<DomainName, Error = L10nError>,
    {
        self.activate(domain)?;
        Ok(ScopedDomain { activator: self, restored: false })
    }

    #[must_use]
    pub fn mode(&self) -> BackendMode {
        self.state.as_ref().map_or(BackendMode::Unset, |ready| ready.backend.mode())
    }

    #[must_use]
    pub const fn is_inert(&self) -> bool {
        self.state.is_none()
    }

    /// The active domain, or `None` when inert.
    #[must_use]
    pub fn active_domain(&self) -> Option<&DomainName> {
        self.state.as_ref().map(|ready| &ready.active)
    }

    /// The resolved POSIX language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn binding(&self, domain: &str) -> Option<&Path> {
        self.state.as_ref()?.bindings.get(domain).map(PathBuf::as_path)
    }

    #[must_use]
    pub const fn config(&self) -> &L10nConfig {
        &self.config
    }

    /// The file a catalog-loaded activation of `domain` would read.
    ///
    /// # Errors
    /// Returns [`L10nError::UnboundDomain`] if `domain` has no binding and
    /// [`L10nError::InvalidDomain`] for malformed names.
    pub fn catalog_path<D>(&self, domain: D) -> Result<PathBuf, L10nError>
    where
        D: TryInto<DomainName, Error = L10nError>,
    {
        let domain = domain.try_into()?;
        let directory =
            self.binding(domain.as_str()).ok_or_else(|| crate::backend::unbound(&domain))?;
        Ok(catalog_path(directory, primary_subtag(&self.language), &domain))
    }
}

impl Ready {
    fn bind(&mut self, domain: DomainName, directory: PathBuf) {
        self.backend.register(&domain, &directory);
        self.bindings.insert(domain, directory);
    }

    fn switch(&mut self, domain: DomainName) -> Result<(), L10nError> {
        let directory = self.bindings.get(&domain).map(PathBuf::as_path);
        self.backend.activate(&domain, directory)?;

        debug!(from = %self.active, to = %domain, "Activated translation domain");
        self.active = domain;

        Ok(())
    }

    fn restore(&mut self) -> Result<(), L10nError> {
        let default = DomainName::default_domain();
        let directory = self.bindings.get(&default).map(PathBuf::as_path);
        self.backend.restore_default(directory)?;

        debug!(from = %self.active, "Restored default translation domain");
        self.active = default;

        Ok(())
    }
}

/// Keeps a domain active for a scope and restores the default domain on drop.
///
/// Use [`restore`](Self::restore) to observe restore failures; a failed restore
/// on drop is only logged.
#[derive(Debug)]
#[must_use = "The default domain is restored as soon as the guard is dropped"]
pub struct ScopedDomain<'a> {
    activator: &'a mut DomainActivator,
    restored: bool,
}

impl ScopedDomain<'_> {
    /// The activator, with the scoped domain active.
    #[must_use]
    pub fn activator(&self) -> &DomainActivator {
        self.activator
    }

    /// Restores the default domain now.
    ///
    /// # Errors
    /// Same as [`DomainActivator::restore_default`].
    pub fn restore(mut self) -> Result<(), L10nError> {
        self.restored = true;
        self.activator.restore_default()
    }
}

impl Drop for ScopedDomain<'_> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(err) = self.activator.restore_default() {
            warn!(%err, "Failed to restore the default translation domain");
        }
    }
}
