//! # Logger
//!
//! Subscriber setup for the locus binaries. Library crates only emit `tracing`
//! events; the executable installs one subscriber at startup through
//! [`Logger::builder`] and holds the returned [`Logger`] until exit.
//!
//! Console output goes to stderr in the compact format, so stdout stays free
//! for translations. A log directory adds a rolling file (optionally JSON).
//! Filtering comes from [`LoggerBuilder::env_filter`] when set, else from
//! `RUST_LOG`, on top of the [`LoggerBuilder::level`] floor.
//!
//! ```rust
//! # use locus_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("locus")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    ansi: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            ansi: true,
            path: None,
            level: LevelFilter::WARN,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

impl LoggerConfig {
    fn validate(&self, name: &str) -> Result<(), LoggerError> {
        if name.trim().is_empty() {
            return Err(invalid("Logger name cannot be empty".to_owned()));
        }
        if self.max_files == 0 {
            return Err(invalid("max_files must be greater than zero".to_owned()));
        }
        if !self.console && self.path.is_none() {
            return Err(invalid("Neither console nor file output is enabled".to_owned()));
        }
        Ok(())
    }

    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => builder
                .parse(directives)
                .map_err(|e| invalid(format!("Invalid env filter '{directives}': {e}"))),
        }
    }

    fn console_layer<S>(&self) -> Option<BoxedLayer<S>>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        self.console.then(|| {
            layer().compact().with_writer(std::io::stderr).with_ansi(self.ansi).boxed()
        })
    }

    fn file_layer<S>(
        &self,
        name: &str,
        dir: &Path,
    ) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fs::create_dir_all(dir)
            .map_err(|e| LoggerError::Internal { message: e.to_string().into(), context: None })
            .context(format!("Failed to create log directory: {}", dir.display()))?;

        let appender = RollingFileAppender::builder()
            .rotation(self.rotation.clone())
            .filename_prefix(name)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(self.max_files)
            .build(dir)?;

        let (writer, guard) = tracing_appender::non_blocking(appender);
        let file = layer().with_writer(writer).with_ansi(false);
        let boxed = if self.json { file.json().boxed() } else { file.boxed() };

        Ok((boxed, guard))
    }
}

fn invalid(message: String) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Maps a repeated `-v` flag count to a level, starting from `WARN`.
#[must_use]
pub const fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Collects subscriber settings; `N` tracks whether a name was given and `F`
/// whether file output was requested, so file-only options need a path first.
#[derive(Debug)]
#[must_use = "Call `init` to install the subscriber"]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file_state: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the application; the name prefixes rolled log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { name: WithName(name.into()), config: self.config, file_state: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// How many rolled files survive cleanup.
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// One JSON object per line in the log file.
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Floor level applied beneath any filter directives.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Filter directives such as `locus_l10n=debug,locus_catalog=info`.
    ///
    /// They replace `RUST_LOG`. A directive that does not parse fails
    /// [`init`](LoggerBuilder::init).
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Colours on the console layer; files are always plain.
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Directory for rolling log files; created on `init` if missing.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file_state: PhantomData }
    }

    /// Installs the subscriber for the whole process.
    ///
    /// With file output the returned [`Logger`] owns the background writer;
    /// dropping it early loses buffered lines.
    ///
    /// # Errors
    /// - [`LoggerError::InvalidConfiguration`] for a blank name, `max_files == 0`,
    ///   no output at all, or unparsable filter directives.
    /// - [`LoggerError::Internal`] / [`LoggerError::Appender`] when the log
    ///   directory or file cannot be set up.
    /// - [`LoggerError::Subscriber`] when a subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let LoggerBuilder { config, name: WithName(name), .. } = self;
        config.validate(&name)?;
        let filter = config.filter()?;

        let mut layers = Vec::with_capacity(2);
        if let Some(console) = config.console_layer() {
            layers.push(console);
        }

        let guard = match &config.path {
            Some(dir) => {
                let (file, guard) = config.file_layer(&name, dir)?;
                layers.push(file);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Keeps the file writer alive; hold it for the lifetime of `main`.
#[must_use = "Dropping the handle stops the background log writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the process-wide subscriber.
    ///
    /// ```rust
    /// use locus_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("locus")
    ///     .level(LevelFilter::INFO)
    ///     .init()
    ///     .unwrap();
    /// ```
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, file_state: PhantomData }
    }

    /// The file writer guard; `None` for console-only logging.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing file log before shutdown");
        }
    }
}
