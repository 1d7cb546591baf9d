//! The active-locale context shared by activators and translation lookups.

use crate::environment::LocaleEnvironment;
use fxhash::FxHashMap;
use locus_catalog::Catalog;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};
use tracing::trace;

static GLOBAL: LazyLock<Arc<LocaleContext>> = LazyLock::new(|| Arc::new(LocaleContext::new()));

/// A domain binding as recorded by the environment-bound backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundDomain {
    pub directory: PathBuf,
    pub encoding: Option<String>,
}

#[derive(Debug, Default)]
struct ContextState {
    process_locale: Option<String>,
    bound: FxHashMap<String, BoundDomain>,
    selected_domain: Option<String>,
    table: Option<Arc<Catalog>>,
}

/// Locale and lookup state that the translation backends mutate.
///
/// The context plays two roles:
/// - an in-memory [`LocaleEnvironment`], recording the process locale, domain
///   bindings and the selected domain;
/// - the slot holding the installed lookup table of the catalog-loaded backend,
///   which serves [`gettext`](Self::gettext) and friends.
///
/// Lookups are safe from any thread. Activation sequences against the same
/// context must be serialized by the caller.
///
/// # Example
///
/// ```rust
/// use locus_catalog::Catalog;
/// use locus_l10n::LocaleContext;
/// use std::sync::Arc;
///
/// let context = LocaleContext::new();
/// assert_eq!(context.gettext("Hello"), "Hello");
///
/// let mut catalog = Catalog::new();
/// catalog.insert("Hello", "Hei");
/// context.install_table(Arc::new(catalog));
/// assert_eq!(context.gettext("Hello"), "Hei");
/// ```
#[derive(Debug, Default)]
pub struct LocaleContext {
    state: RwLock<ContextState>,
}

impl LocaleContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide context, for callers that want ambient behavior.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Replaces the active lookup table and returns the previous one.
    pub fn install_table(&self, table: Arc<Catalog>) -> Option<Arc<Catalog>> {
        trace!(messages = table.len(), "Installing lookup table");
        self.state.write().table.replace(table)
    }

    #[must_use]
    pub fn active_table(&self) -> Option<Arc<Catalog>> {
        self.state.read().table.clone()
    }

    #[must_use]
    pub fn process_locale(&self) -> Option<String> {
        self.state.read().process_locale.clone()
    }

    #[must_use]
    pub fn selected_domain(&self) -> Option<String> {
        self.state.read().selected_domain.clone()
    }

    #[must_use]
    pub fn bound_domain(&self, domain: &str) -> Option<BoundDomain> {
        self.state.read().bound.get(domain).cloned()
    }

    /// Translates `msgid`, falling back to the id itself.
    #[must_use]
    pub fn gettext(&self, msgid: &str) -> String {
        let state = self.state.read();
        state.table.as_deref().and_then(|t| t.get(msgid)).unwrap_or(msgid).to_owned()
    }

    /// Translates `msgid` within `context`, falling back to the id itself.
    #[must_use]
    pub fn pgettext(&self, context: &str, msgid: &str) -> String {
        let state = self.state.read();
        state
            .table
            .as_deref()
            .and_then(|t| t.get_with_context(context, msgid))
            .unwrap_or(msgid)
            .to_owned()
    }

    /// Picks the translated form for `n` items, falling back to `singular`/`plural`.
    #[must_use]
    pub fn ngettext(&self, singular: &str, plural: &str, n: u64) -> String {
        let state = self.state.read();
        state
            .table
            .as_deref()
            .and_then(|t| t.get_plural(singular, n))
            .unwrap_or(if n == 1 { singular } else { plural })
            .to_owned()
    }

    /// Drops every binding, the selected domain, the locale and the lookup table.
    pub fn reset(&self) {
        *self.state.write() = ContextState::default();
    }
}

impl LocaleEnvironment for LocaleContext {
    fn set_process_locale(&self, code: &str) {
        self.state.write().process_locale = Some(code.to_owned());
    }

    fn bind_domain(&self, domain: &str, directory: &Path) {
        self.state
            .write()
            .bound
            .entry(domain.to_owned())
            .and_modify(|bound| bound.directory = directory.to_path_buf())
            .or_insert_with(|| BoundDomain { directory: directory.to_path_buf(), encoding: None });
    }

    fn set_domain_encoding(&self, domain: &str, encoding: &str) {
        let mut state = self.state.write();
        if let Some(bound) = state.bound.get_mut(domain) {
            bound.encoding = Some(encoding.to_owned());
        }
    }

    fn select_active_domain(&self, domain: &str) {
        self.state.write().selected_domain = Some(domain.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> Arc<Catalog> {
        let mut catalog = Catalog::new();
        for (id, translation) in pairs {
            catalog.insert(*id, *translation);
        }
        Arc::new(catalog)
    }

    #[test]
    fn install_replaces_instead_of_layering() {
        let context = LocaleContext::new();
        assert!(context.install_table(table(&[("a", "A"), ("b", "B")])).is_none());

        let previous = context.install_table(table(&[("a", "Å")])).unwrap();
        assert_eq!(previous.get("b"), Some("B"));
        assert_eq!(context.gettext("a"), "Å");
        assert_eq!(context.gettext("b"), "b");
    }

    #[test]
    fn plural_and_context_fallbacks() {
        let context = LocaleContext::new();
        assert_eq!(context.ngettext("%d item", "%d items", 1), "%d item");
        assert_eq!(context.ngettext("%d item", "%d items", 2), "%d items");
        assert_eq!(context.pgettext("menu", "Open"), "Open");

        let mut catalog = Catalog::new();
        catalog.insert_with_context("menu", "Open", "Åpne");
        catalog.insert_plural("%d item", vec!["%d element".to_owned(), "%d elementer".to_owned()]);
        context.install_table(Arc::new(catalog));

        assert_eq!(context.pgettext("menu", "Open"), "Åpne");
        assert_eq!(context.ngettext("%d item", "%d items", 3), "%d elementer");
    }

    #[test]
    fn encoding_applies_to_bound_domains_only() {
        let context = LocaleContext::new();
        context.set_domain_encoding("ghost", "UTF-8");
        assert!(context.bound_domain("ghost").is_none());

        context.bind_domain("ssp", Path::new("/a"));
        context.set_domain_encoding("ssp", "UTF-8");
        context.bind_domain("ssp", Path::new("/b"));

        let bound = context.bound_domain("ssp").unwrap();
        assert_eq!(bound.directory, PathBuf::from("/b"));
        assert_eq!(bound.encoding.as_deref(), Some("UTF-8"));
    }

    #[test]
    fn reset_clears_everything() {
        let context = LocaleContext::new();
        context.set_process_locale("nb_NO");
        context.select_active_domain("ssp");
        context.install_table(table(&[("a", "A")]));

        context.reset();

        assert!(context.process_locale().is_none());
        assert!(context.selected_domain().is_none());
        assert!(context.active_table().is_none());
    }
}
