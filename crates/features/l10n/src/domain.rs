use crate::error::L10nError;
use locus_domain::constants::DEFAULT_DOMAIN;
use std::borrow::Borrow;
use std::fmt;

/// A validated translation domain name.
///
/// Names become part of a catalog file path, so they are limited to ASCII
/// alphanumerics, `_`, `-` and `.`, and may not be `.` or `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainName(String);

impl DomainName {
    /// The reserved default domain.
    #[must_use]
    pub fn default_domain() -> Self {
        Self(DEFAULT_DOMAIN.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_DOMAIN
    }
}

impl TryFrom<&str> for DomainName {
    type Error = L10nError;

    fn try_from(value: &str) -> Result<Self, L10nError> {
        if value.is_empty() {
            return Err(L10nError::InvalidDomain {
                message: "EMPTY".into(),
                context: Some("Domain name cannot be empty".into()),
            });
        }

        if value == "." || value == ".." {
            return Err(L10nError::InvalidDomain {
                message: value.to_owned().into(),
                context: Some("Domain name cannot be a relative path component".into()),
            });
        }

        if !value.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')) {
            return Err(L10nError::InvalidDomain {
                message: value.to_owned().into(),
                context: Some("Domain name contains illegal characters".into()),
            });
        }

        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for DomainName {
    type Error = L10nError;

    fn try_from(value: String) -> Result<Self, L10nError> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&String> for DomainName {
    type Error = L10nError;

    fn try_from(value: &String) -> Result<Self, L10nError> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&DomainName> for DomainName {
    type Error = L10nError;

    fn try_from(value: &DomainName) -> Result<Self, L10nError> {
        Ok(value.clone())
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DomainName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
