use std::borrow::Cow;

/// A specialized [`CatalogError`] enum of this crate.
#[locus_derive::locus_error]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("Catalog not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Catalog I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The catalog text could not be parsed.
    #[error("Malformed catalog{}: line {line}: {message}", format_context(.context))]
    Malformed { line: usize, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid Plural-Forms header{}: {message}", format_context(.context))]
    InvalidPluralForms { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl CatalogError {
    pub(crate) fn malformed(line: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Malformed { line, message: message.into(), context: None }
    }
}
