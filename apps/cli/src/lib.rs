//! # Locus CLI
//!
//! Loads a localization config, activates the default translation domain (and
//! optionally one extra domain for the duration of the command) and prints one
//! translation per message id.
//!
//! ## Example
//! ```no_run
//! use clap::Parser;
//! use locus_cli::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     let cli = Cli::parse_from(["locus", "--config", "locus.toml", "--lang", "nb", "Username"]);
//!     cli.run(&mut std::io::stdout().lock())
//! }
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use locus::domain::config::{BackendMode, L10nConfig};
use locus::kernel::config::load_config;
use locus::kernel::language::ConfiguredLanguage;
use locus::{DomainActivator, LocaleContext};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Activate translation domains and translate message ids.
#[derive(Debug, Parser)]
#[command(name = "locus", version, about)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON); `LOCUS__*` variables override it.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Language to translate into; must be one of the configured languages.
    #[arg(short, long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Overrides the configured backend (`unset`, `environment-bound`, `catalog-loaded`).
    #[arg(long, value_name = "MODE")]
    pub backend: Option<BackendMode>,

    /// Overrides the directory holding the default domain's catalogs.
    #[arg(long, value_name = "DIR")]
    pub locale_dir: Option<PathBuf>,

    /// Extra domain to activate while translating.
    #[arg(short, long, value_name = "NAME", requires = "domain_dir")]
    pub domain: Option<String>,

    /// Catalog directory of `--domain`.
    #[arg(long, value_name = "DIR", requires = "domain")]
    pub domain_dir: Option<PathBuf>,

    /// Increases log verbosity (`-v` info, `-vv` debug, `-vvv` trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Message ids to translate.
    #[arg(required = true, value_name = "MSGID")]
    pub msgids: Vec<String>,
}

impl Cli {
    /// Runs the command against the process-wide locale context.
    ///
    /// # Errors
    /// Fails on malformed configuration, invalid domain names and catalog load errors.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        self.run_with(LocaleContext::global(), out)
    }

    /// Runs the command against `context`.
    ///
    /// # Errors
    /// Same as [`Cli::run`].
    pub fn run_with(&self, context: Arc<LocaleContext>, out: &mut impl Write) -> Result<()> {
        let config = self.load_config()?;
        let resolver =
            ConfiguredLanguage::new(&config.language).with_override(self.lang.as_deref());

        let builder = DomainActivator::builder()
            .config(config.clone())
            .context(Arc::clone(&context))
            .language(&resolver);
        #[cfg(feature = "gettext")]
        let builder = builder.environment(Arc::new(locus::l10n::GettextEnvironment::new()));

        let mut activator =
            builder.init().context("Failed to activate the default translation domain")?;
        debug!(mode = %activator.mode(), language = activator.language(), "Activator ready");

        match (&self.domain, &self.domain_dir) {
            (Some(domain), Some(directory)) => {
                activator.register(domain, directory.clone())?;
                let scope = activator
                    .activate_scoped(domain)
                    .with_context(|| format!("Failed to activate domain '{domain}'"))?;
                write_translations(scope.activator(), &context, &self.msgids, out)?;
                scope.restore()?;
            },
            _ => write_translations(&activator, &context, &self.msgids, out)?,
        }

        Ok(())
    }

    /// Reads `--config` (or falls back to defaults) and applies the flag overrides.
    ///
    /// # Errors
    /// Returns an error if the configuration file is missing or malformed.
    pub fn load_config(&self) -> Result<L10nConfig> {
        let mut config: L10nConfig = match &self.config {
            Some(path) => load_config(Some(path))
                .with_context(|| format!("Configuration is malformed: {}", path.display()))?,
            None => L10nConfig::default(),
        };

        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(dir) = &self.locale_dir {
            config.locale_dir.clone_from(dir);
        }

        Ok(config)
    }
}

fn write_translations(
    activator: &DomainActivator,
    context: &LocaleContext,
    msgids: &[String],
    out: &mut impl Write,
) -> Result<()> {
    for msgid in msgids {
        writeln!(out, "{}", translate(activator, context, msgid))?;
    }
    Ok(())
}

#[cfg(feature = "gettext")]
fn translate(activator: &DomainActivator, context: &LocaleContext, msgid: &str) -> String {
    match activator.mode() {
        BackendMode::EnvironmentBound => gettextrs::gettext(msgid),
        _ => context.gettext(msgid),
    }
}

#[cfg(not(feature = "gettext"))]
fn translate(_activator: &DomainActivator, context: &LocaleContext, msgid: &str) -> String {
    context.gettext(msgid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_requires_directory() {
        assert!(Cli::try_parse_from(["locus", "--domain", "messages", "Hello"]).is_err());
        assert!(Cli::try_parse_from(["locus", "--domain-dir", "/app", "Hello"]).is_err());
        assert!(
            Cli::try_parse_from(["locus", "--domain", "messages", "--domain-dir", "/app", "Hello"])
                .is_ok()
        );
    }

    #[test]
    fn package_metadata_names_no_individual() {
        assert_eq!(env!("CARGO_PKG_AUTHORS"), "Locus contributors");
        assert!(env!("CARGO_PKG_REPOSITORY").is_empty());
    }

    #[test]
    fn msgids_are_required() {
        assert!(Cli::try_parse_from(["locus"]).is_err());
    }

    #[test]
    fn backend_flag_parses_modes() {
        let cli = Cli::try_parse_from(["locus", "--backend", "catalog-loaded", "-vv", "Hi"]).unwrap();
        assert_eq!(cli.backend, Some(BackendMode::CatalogLoaded));
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["locus", "--backend", "magic", "Hi"]).is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "locus",
            "--backend",
            "environment-bound",
            "--locale-dir",
            "/srv/locales",
            "Hi",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.backend, BackendMode::EnvironmentBound);
        assert_eq!(config.locale_dir, PathBuf::from("/srv/locales"));
    }
}
