#![allow(dead_code)]

use locus_catalog::{Catalog, CatalogError, CatalogLoader};
use locus_domain::config::{BackendMode, L10nConfig, L10nConfigInner};
use locus_domain::language::FixedLanguage;
use locus_l10n::{DomainActivator, L10nError, LocaleContext};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A loader that records every requested path and serves a synthetic catalog.
///
/// The catalog maps `"path"` to the requested path, so two tables are equal
/// exactly when they were loaded from the same file.
#[derive(Debug, Default)]
pub struct RecordingLoader {
    requests: Mutex<Vec<PathBuf>>,
    missing: Mutex<Vec<PathBuf>>,
}

impl RecordingLoader {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes subsequent loads of `path` fail with [`CatalogError::NotFound`].
    pub fn remove(&self, path: impl Into<PathBuf>) {
        self.missing.lock().push(path.into());
    }

    pub fn requests(&self) -> Vec<PathBuf> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<PathBuf> {
        self.requests.lock().last().cloned()
    }
}

impl CatalogLoader for RecordingLoader {
    fn load(&self, path: &Path) -> Result<Catalog, CatalogError> {
        self.requests.lock().push(path.to_path_buf());

        if self.missing.lock().iter().any(|missing| missing == path) {
            return Err(CatalogError::NotFound {
                message: path.display().to_string().into(),
                context: None,
            });
        }

        let mut catalog = Catalog::new();
        catalog.insert("path", path.display().to_string());
        Ok(catalog)
    }
}

pub fn config(backend: BackendMode, locale_dir: &str) -> L10nConfig {
    L10nConfigInner { backend, locale_dir: PathBuf::from(locale_dir), ..Default::default() }
        .into()
}

/// Builds a catalog-loaded activator over isolated collaborators.
pub fn catalog_loaded(
    locale_dir: &str,
    language: &str,
) -> (Result<DomainActivator, L10nError>, Arc<LocaleContext>, Arc<RecordingLoader>) {
    let context = Arc::new(LocaleContext::new());
    let loader = RecordingLoader::new();
    let activator = DomainActivator::builder()
        .config(config(BackendMode::CatalogLoaded, locale_dir))
        .context(Arc::clone(&context))
        .loader(Arc::clone(&loader) as Arc<dyn CatalogLoader>)
        .language(&FixedLanguage::new(language))
        .init();

    (activator, context, loader)
}

/// Builds an environment-bound activator recording into an isolated context.
pub fn environment_bound(
    locale_dir: &str,
    language: &str,
    strict: bool,
) -> (DomainActivator, Arc<LocaleContext>) {
    let context = Arc::new(LocaleContext::new());
    let mut config = config(BackendMode::EnvironmentBound, locale_dir);
    config.strict_domains = strict;

    let activator = DomainActivator::builder()
        .config(config)
        .context(Arc::clone(&context))
        .language(&FixedLanguage::new(language))
        .init()
        .expect("environment-bound init never loads files");

    (activator, context)
}

/// The path recorded in a table served by [`RecordingLoader`].
pub fn table_source(context: &LocaleContext) -> Option<String> {
    context.active_table().and_then(|table| table.get("path").map(str::to_owned))
}
