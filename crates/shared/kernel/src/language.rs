//! Language resolution from configuration.

use locus_domain::config::LanguageConfig;
use locus_domain::language::LanguageResolver;
use tracing::debug;

/// Language codes whose POSIX locale is not a plain case conversion.
const POSIX_OVERRIDES: &[(&str, &str)] = &[
    ("no", "nb_NO"),
    ("nb", "nb_NO"),
    ("nn", "nn_NO"),
    ("se", "se_NO"),
    ("sma", "sma_NO"),
    ("zh", "zh_CN"),
    ("zh-tw", "zh_TW"),
];

/// Resolves the language from a [`LanguageConfig`].
///
/// The explicit selection (or a caller override) wins when it is one of the
/// available languages; otherwise the configured default is used.
#[derive(Debug, Clone)]
pub struct ConfiguredLanguage<'a> {
    config: &'a LanguageConfig,
    requested: Option<String>,
}

impl<'a> ConfiguredLanguage<'a> {
    #[must_use]
    pub const fn new(config: &'a LanguageConfig) -> Self {
        Self { config, requested: None }
    }

    /// Prefers `language` over the configured selection (e.g. from a CLI flag).
    #[must_use]
    pub fn with_override(mut self, language: Option<impl Into<String>>) -> Self {
        if let Some(language) = language {
            self.requested = Some(language.into());
        }
        self
    }

    /// Returns the selected language in its configured (IETF-like) form.
    #[must_use]
    pub fn language(&self) -> &str {
        [self.requested.as_deref(), self.config.language.as_deref()]
            .into_iter()
            .flatten()
            .find(|candidate| self.is_available(candidate))
            .unwrap_or(&self.config.default)
    }

    fn is_available(&self, candidate: &str) -> bool {
        self.config.available.is_empty()
            || self.config.available.iter().any(|lang| lang.eq_ignore_ascii_case(candidate))
    }
}

impl LanguageResolver for ConfiguredLanguage<'_> {
    fn resolve_posix_language(&self) -> String {
        let language = self.language();
        let posix = posix_language(language);
        debug!(language, posix = %posix, "Resolved language");
        posix
    }
}

/// Converts a language tag such as `pt-br` or `en_us` to POSIX form (`pt_BR`, `en_US`).
#[must_use]
pub fn posix_language(language: &str) -> String {
    let normalized = language.trim().replace('_', "-").to_ascii_lowercase();

    if let Some((_, posix)) = POSIX_OVERRIDES.iter().find(|(tag, _)| *tag == normalized) {
        return (*posix).to_owned();
    }

    match normalized.split_once('-') {
        Some((primary, region)) if !region.is_empty() => {
            format!("{primary}_{}", region.to_ascii_uppercase())
        },
        Some((primary, _)) => primary.to_owned(),
        None => normalized,
    }
}
