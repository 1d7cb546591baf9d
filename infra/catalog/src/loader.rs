use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogErrorExt};
use std::fmt::Debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Turns a catalog file into a [`Catalog`].
///
/// Loaders are shared between activators, so they must be `Send + Sync`.
pub trait CatalogLoader: Debug + Send + Sync {
    /// Loads the catalog stored at `path`.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] when the file is missing, and
    /// [`CatalogError::Io`] or [`CatalogError::Malformed`] when it cannot be read or parsed.
    fn load(&self, path: &Path) -> Result<Catalog, CatalogError>;
}

/// Loads catalogs written in gettext `.po` syntax from the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct PoCatalogLoader;

impl PoCatalogLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CatalogLoader for PoCatalogLoader {
    fn load(&self, path: &Path) -> Result<Catalog, CatalogError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(CatalogError::NotFound {
                    message: path.display().to_string().into(),
                    context: None,
                });
            },
            Err(err) => {
                return Err(err).context(format!("Read failed: {}", path.display()));
            },
        };

        let catalog = Catalog::from_po_str(&text).context(path.display().to_string())?;
        debug!(path = %path.display(), messages = catalog.len(), "Loaded catalog");

        Ok(catalog)
    }
}
