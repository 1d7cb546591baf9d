//! The language-resolution seam.

/// Supplies the language code the translation backends should use.
///
/// Implementations decide the language from whatever inputs they have
/// (configuration, request headers, user preferences) and return it in
/// POSIX form, e.g. `en_US` or `nb_NO`.
pub trait LanguageResolver {
    fn resolve_posix_language(&self) -> String;
}

impl<T: LanguageResolver + ?Sized> LanguageResolver for &T {
    fn resolve_posix_language(&self) -> String {
        (**self).resolve_posix_language()
    }
}

/// A fixed, already-resolved language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLanguage(pub String);

impl FixedLanguage {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl LanguageResolver for FixedLanguage {
    fn resolve_posix_language(&self) -> String {
        self.0.clone()
    }
}
