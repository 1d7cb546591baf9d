use super::{Backend, unbound};
use crate::context::LocaleContext;
use crate::domain::DomainName;
use crate::error::{L10nError, L10nErrorExt};
use crate::{catalog_path, primary_subtag};
use locus_catalog::CatalogLoader;
use locus_domain::config::BackendMode;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Flat catalogs loaded by hand and installed as the context's lookup table.
///
/// There is no notion of a current domain beyond the last installed table.
#[derive(Debug)]
pub(crate) struct CatalogLoadedBackend {
    context: Arc<LocaleContext>,
    loader: Arc<dyn CatalogLoader>,
    subtag: String,
}

impl CatalogLoadedBackend {
    pub(crate) fn new(
        context: Arc<LocaleContext>,
        loader: Arc<dyn CatalogLoader>,
        language: &str,
    ) -> Self {
        Self { context, loader, subtag: primary_subtag(language).to_owned() }
    }
}

impl Backend for CatalogLoadedBackend {
    fn mode(&self) -> BackendMode {
        BackendMode::CatalogLoaded
    }

    fn register(&self, _domain: &DomainName, _directory: &Path) {}

    fn activate(&self, domain: &DomainName, directory: Option<&Path>) -> Result<(), L10nError> {
        let directory = directory.ok_or_else(|| unbound(domain))?;
        let path = catalog_path(directory, &self.subtag, domain);

        let catalog =
            self.loader.load(&path).context(format!("Activating domain '{domain}'"))?;
        debug!(%domain, path = %path.display(), messages = catalog.len(), "Installing catalog");
        self.context.install_table(Arc::new(catalog));

        Ok(())
    }
}
