//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for the native binaries: a compact console
//! layer and, when a directory is given, a non-blocking rolling file layer (plain text or
//! JSON). `RUST_LOG` still wins over the level configured here unless an explicit
//! [`LoggerBuilder::env_filter`] is set.
//!
//! ```rust
//! # use folio_logger::{LevelFilter, Logger};
//! let _logger = Logger::builder()
//!     .name("folio-render")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use folio_domain::config::LoggingConfig;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Rolling file output.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FileOutput {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

/// Configures and installs the global subscriber. Obtain one with [`Logger::builder`].
#[derive(Debug)]
#[must_use = "The builder does nothing until `init` is called."]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOutput>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            name: String::new(),
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            file: None,
        }
    }
}

impl LoggerBuilder {
    /// Identifies the process; also the prefix of log file names (`<name>.<date>.log`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Explicit directives (e.g. `folio_reveal=debug,info`). Replaces `RUST_LOG`.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Also writes to rolling files under `directory`.
    pub fn path(mut self, directory: impl Into<PathBuf>) -> Self {
        let directory = directory.into();
        match &mut self.file {
            Some(file) => file.directory = directory,
            None => {
                self.file = Some(FileOutput {
                    directory,
                    rotation: Rotation::DAILY,
                    max_files: DEFAULT_MAX_FILES,
                    json: false,
                });
            },
        }
        self
    }

    /// Number of rotated files to keep. Only meaningful together with [`Self::path`].
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = &mut self.file {
            file.max_files = max;
        }
        self
    }

    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = &mut self.file {
            file.rotation = rotation;
        }
        self
    }

    /// Writes the file output as JSON lines.
    pub fn json(mut self) -> Self {
        if let Some(file) = &mut self.file {
            file.json = true;
        }
        self
    }

    /// Applies the `[logging]` table of the site configuration.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] when `level` is not a known level name.
    pub fn with_config(mut self, config: &LoggingConfig) -> Result<Self, LoggerError> {
        self.level = LevelFilter::from_str(&config.level)
            .map_err(|_| LoggerError::invalid(format!("unknown log level '{}'", config.level)))?;

        if let Some(directory) = &config.directory {
            self = self.path(directory).max_files(config.max_files);
            if config.json {
                self = self.json();
            }
        }
        Ok(self)
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive for as long as the process logs: it owns the file
    /// writer's worker guard.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, a bad
    ///   filter, or no enabled output.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.filter()?;

        let mut layers: Vec<BoxedLayer> = Vec::new();
        if self.console {
            layers.push(fmt::layer().compact().with_target(false).boxed());
        }

        let guard = match &self.file {
            Some(file) => {
                let (layer, guard) = file_layer(&self.name, file)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("no output enabled; enable the console or a path"));
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(filter)
            .try_init()
            .context("installing the global subscriber")?;

        tracing::debug!(name = %self.name, level = %self.level, "logger initialised");
        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("logger name cannot be empty"));
        }
        if self.file.as_ref().is_some_and(|file| file.max_files == 0) {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }
        Ok(())
    }

    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            Some(directives) => builder.parse(directives).map_err(|e| {
                LoggerError::invalid(format!("invalid env filter '{directives}': {e}"))
            }),
            None => Ok(builder.from_env_lossy()),
        }
    }
}

fn file_layer(name: &str, file: &FileOutput) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(&file.directory)
        .context(format!("creating {}", file.directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.directory)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if file.json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}

/// Handle to the installed logging system.
#[must_use = "Dropping the logger stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Whether file output (and its worker thread) is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_console_at_info() {
        let builder = Logger::builder().name("folio");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.file.is_none());
    }

    #[test]
    fn file_options_apply_in_any_order_after_path() {
        let builder = Logger::builder()
            .name("folio")
            .path("logs")
            .max_files(3)
            .rotation(Rotation::HOURLY)
            .json()
            .path("other");

        let file = builder.file.as_ref().map(|f| (f.directory.clone(), f.max_files, f.json));
        assert_eq!(file, Some((PathBuf::from("other"), 3, true)));
    }

    #[test]
    fn file_options_without_path_are_ignored() {
        let builder = Logger::builder().name("folio").max_files(0).json();
        assert!(builder.file.is_none());
        assert!(builder.validate().is_ok());
    }

    #[test]
    fn with_config_maps_level_and_directory() -> Result<(), LoggerError> {
        let config = LoggingConfig {
            level: "debug".to_owned(),
            directory: Some(PathBuf::from("target/logs")),
            json: true,
            max_files: 4,
        };
        let builder = Logger::builder().name("folio").with_config(&config)?;

        assert_eq!(builder.level, LevelFilter::DEBUG);
        let file = builder.file.as_ref().map(|f| (f.max_files, f.json));
        assert_eq!(file, Some((4, true)));
        Ok(())
    }

    #[test]
    fn with_config_rejects_unknown_level() {
        let config = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };
        let err = Logger::builder().name("folio").with_config(&config).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }), "{err}");
    }

    #[test]
    fn validation_rejects_blank_name_and_zero_files() {
        assert!(Logger::builder().name("  ").validate().is_err());
        assert!(Logger::builder().name("folio").path("logs").max_files(0).validate().is_err());
    }

    #[test]
    fn bad_directives_are_reported() {
        let err = Logger::builder().name("folio").env_filter("folio=loud").filter().unwrap_err();
        assert!(err.to_string().contains("invalid env filter"), "{err}");
    }
}
