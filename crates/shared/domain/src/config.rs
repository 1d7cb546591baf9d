use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_LOCALE_DIR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Which translation mechanism is in effect for the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendMode {
    /// No backend: every domain operation is a no-op.
    #[default]
    #[serde(alias = "none")]
    Unset,
    /// Domains are bound in, and selected through, the environment-locale subsystem.
    EnvironmentBound,
    /// Each activation loads a catalog file and installs it as the lookup table.
    CatalogLoaded,
}

impl BackendMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::EnvironmentBound => "environment-bound",
            Self::CatalogLoaded => "catalog-loaded",
        }
    }

    #[must_use]
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl fmt::Display for BackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "unset" | "none" => Ok(Self::Unset),
            "environment-bound" => Ok(Self::EnvironmentBound),
            "catalog-loaded" => Ok(Self::CatalogLoaded),
            other => Err(format!("unknown translation backend '{other}'")),
        }
    }
}

/// Localization settings, read once when an activator is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct L10nConfigInner {
    /// Base directory holding the default domain's catalogs.
    pub locale_dir: PathBuf,
    pub backend: BackendMode,
    /// Reject activation of unregistered domains in every backend.
    pub strict_domains: bool,
    pub language: LanguageConfig,
}

/// Thin Arc-wrapped config for inexpensive sharing with activators.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct L10nConfig {
    #[serde(flatten, default)]
    inner: Arc<L10nConfigInner>,
}

impl L10nConfig {
    #[must_use]
    pub fn new(inner: L10nConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl From<L10nConfigInner> for L10nConfig {
    fn from(inner: L10nConfigInner) -> Self {
        Self::new(inner)
    }
}

impl Deref for L10nConfig {
    type Target = L10nConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for L10nConfig {
    fn deref_mut(&mut self) -> &mut L10nConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Inputs for language resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Explicitly selected language (e.g. from a user preference).
    pub language: Option<String>,
    /// Fallback when the selection is missing or unavailable.
    pub default: String,
    /// Languages with installed catalogs.
    pub available: Vec<String>,
}

// --- Default ---

impl Default for L10nConfigInner {
    fn default() -> Self {
        Self {
            locale_dir: PathBuf::from(DEFAULT_LOCALE_DIR),
            backend: BackendMode::Unset,
            strict_domains: true,
            language: LanguageConfig::default(),
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            language: None,
            default: DEFAULT_LANGUAGE.to_owned(),
            available: vec![DEFAULT_LANGUAGE.to_owned()],
        }
    }
}
