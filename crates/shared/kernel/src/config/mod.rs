use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment variables overriding file settings.
pub const ENV_PREFIX: &str = "LOCUS";

const DEFAULT_CONFIG_FILE: &str = "locus";

/// Custom error type for config loading.
#[locus_derive::locus_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: the given path, or `locus` (any supported extension) in the
///    working directory. The file is required.
/// 2. **Environment Overrides**: variables prefixed with `LOCUS__`. Nested keys use
///    double underscores (e.g. `LOCUS__LANGUAGE__DEFAULT=nb` maps to `language.default`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, a value is malformed,
/// or the merged settings do not match `T`.
///
/// # Example
/// ```rust
/// use locus_kernel::config::load_config;
/// use locus_kernel::domain::config::L10nConfig;
///
/// let cfg: L10nConfig = load_config(Some("config/missing")).unwrap_or_default();
/// assert!(cfg.backend.is_unset());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context(format!("Failed to build config from {}", effective_path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
