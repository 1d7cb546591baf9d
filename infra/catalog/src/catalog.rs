use crate::error::CatalogError;
use crate::plural::PluralRule;
use crate::po;
use fxhash::FxHashMap;

/// Separator between a message context and its id, as used by gettext.
const CONTEXT_SEPARATOR: char = '\u{4}';

/// A flat translation table for one domain in one language.
///
/// Messages are keyed by their id, or by `context + EOT + id` when they carry a
/// `msgctxt`. Each message holds one or more translated forms; index `0` is the
/// singular form and higher indices are plural forms. An empty form counts as
/// untranslated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    messages: FxHashMap<String, Vec<String>>,
    headers: FxHashMap<String, String>,
    plural_rule: Option<PluralRule>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses catalog text written in gettext `.po` syntax.
    ///
    /// # Errors
    /// Returns [`CatalogError::Malformed`] with the offending line number.
    pub fn from_po_str(source: &str) -> Result<Self, CatalogError> {
        po::parse(source)
    }

    /// Adds or replaces a singular translation.
    pub fn insert(&mut self, msgid: impl Into<String>, translation: impl Into<String>) {
        self.messages.insert(msgid.into(), vec![translation.into()]);
    }

    /// Adds or replaces a translation that only applies within `context`.
    pub fn insert_with_context(
        &mut self,
        context: &str,
        msgid: &str,
        translation: impl Into<String>,
    ) {
        self.messages.insert(context_key(context, msgid), vec![translation.into()]);
    }

    /// Adds or replaces all forms of a pluralized message.
    pub fn insert_plural(&mut self, msgid: impl Into<String>, forms: Vec<String>) {
        if !forms.is_empty() {
            self.messages.insert(msgid.into(), forms);
        }
    }

    pub(crate) fn insert_forms(&mut self, key: String, forms: Vec<String>) {
        self.messages.insert(key, forms);
    }

    pub(crate) fn insert_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Sets the rule that picks plural forms, replacing any parsed header rule.
    pub fn set_plural_rule(&mut self, rule: PluralRule) {
        self.plural_rule = Some(rule);
    }

    #[must_use]
    pub const fn plural_rule(&self) -> Option<&PluralRule> {
        self.plural_rule.as_ref()
    }

    /// Returns the singular translation of `msgid`.
    #[must_use]
    pub fn get(&self, msgid: &str) -> Option<&str> {
        self.messages.get(msgid).and_then(|forms| translated(forms, 0))
    }

    /// Returns the translation of `msgid` within `context`.
    #[must_use]
    pub fn get_with_context(&self, context: &str, msgid: &str) -> Option<&str> {
        self.messages.get(&context_key(context, msgid)).and_then(|forms| translated(forms, 0))
    }

    /// Returns the form of `msgid` to use for `n` items.
    ///
    /// The index comes from the catalog's [`PluralRule`]; without one, form `0`
    /// is selected for `n == 1` and form `1` otherwise. The index is clamped to
    /// the forms the catalog actually provides.
    #[must_use]
    pub fn get_plural(&self, msgid: &str, n: u64) -> Option<&str> {
        let forms = self.messages.get(msgid)?;
        let index = self.plural_rule.as_ref().map_or(usize::from(n != 1), |rule| rule.index(n));
        translated(forms, index.min(forms.len().saturating_sub(1)))
    }

    /// Returns a header value from the catalog's metadata entry (e.g. `Language`).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    #[must_use]
    pub const fn headers(&self) -> &FxHashMap<String, String> {
        &self.headers
    }

    /// Number of translated messages (headers excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn translated(forms: &[String], index: usize) -> Option<&str> {
    forms.get(index).map(String::as_str).filter(|form| !form.is_empty())
}

pub(crate) fn context_key(context: &str, msgid: &str) -> String {
    let mut key = String::with_capacity(context.len() + msgid.len() + 1);
    key.push_str(context);
    key.push(CONTEXT_SEPARATOR);
    key.push_str(msgid);
    key
}
