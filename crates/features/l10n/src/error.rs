use locus_catalog::CatalogError;
use std::borrow::Cow;

/// A specialized [`L10nError`] enum of this crate.
#[locus_derive::locus_error]
pub enum L10nError {
    /// A domain was activated without a prior `register` call.
    #[error("Unbound translation domain{}: {message}", format_context(.context))]
    UnboundDomain { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The domain name cannot be used as a catalog file name.
    #[error("Invalid translation domain{}: {message}", format_context(.context))]
    InvalidDomain { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The catalog loader failed; nothing was installed.
    #[error("Catalog load failure{}: {source}", format_context(.context))]
    CatalogLoad { source: CatalogError, context: Option<Cow<'static, str>> },
}
