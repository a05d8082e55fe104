//! # Logger
//!
//! Installs the global `tracing` subscriber for the command-line tools.
//!
//! * Console output goes to stderr, so command output on stdout stays machine-readable.
//! * Optional rolling log files through a non-blocking writer.
//! * Levels and filters come from [`LogSettings`] (the `[logging]` section of a process
//!   file), from the builder, and from `RUST_LOG` when no explicit filter is set.
//!
//! ## Example
//!
//! ```rust
//! # use tfp_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder("tfp").level(LevelFilter::DEBUG).init().unwrap();
//! tracing::debug!("ready");
//! ```

mod error;
mod settings;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::settings::{LogFormat, LogRotation, LogSettings};
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    settings: LogSettings,
}

impl LoggerBuilder {
    /// Takes every option from `settings`, keeping the logger name.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn settings(mut self, settings: LogSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level.to_string();
        self
    }

    /// Adds `EnvFilter` directives (e.g. `tfp_wiring=trace`). Replaces `RUST_LOG`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.settings.format = format;
        self
    }

    /// Writes rolling log files named `<name>.<date>.log` into `directory`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.settings.directory = Some(directory.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: LogRotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Consumes the builder and installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown: it owns the file writer guard.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, bad level or filter, or
    ///   when neither console nor file output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { name, settings } = self;
        validate(&name, &settings)?;

        let filter = env_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if settings.console {
            let console = layer().with_writer(io::stderr);
            layers.push(match settings.format {
                LogFormat::Compact => console.compact().boxed(),
                LogFormat::Pretty => console.pretty().boxed(),
                LogFormat::Json => console.json().boxed(),
            });
        }

        let guard = match &settings.directory {
            Some(directory) => {
                fs::create_dir_all(directory)
                    .context(format!("Failed to create {}", directory.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(settings.rotation.into())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(settings.max_files)
                    .build(directory)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if settings.format == LogFormat::Json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("Enable console or file output"));
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
///
/// Dropping it flushes and stops the background file writer.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder for a logger called `name` (also the log file prefix).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder { name: name.into(), settings: LogSettings::default() }
    }

    /// Whether log lines are also written to files.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers");
        }
    }
}

fn validate(name: &str, settings: &LogSettings) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::invalid("Logger name cannot be empty"));
    }
    if settings.directory.is_some() && settings.max_files == 0 {
        return Err(LoggerError::invalid("max_files must be greater than zero"));
    }
    Ok(())
}

fn env_filter(settings: &LogSettings) -> Result<EnvFilter, LoggerError> {
    let level = LevelFilter::from_str(settings.level.trim())
        .map_err(|e| LoggerError::invalid(format!("Invalid level '{}': {e}", settings.level)))?;
    let builder = EnvFilter::builder().with_default_directive(level.into());

    settings.filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder
                .parse(filter)
                .map_err(|e| LoggerError::invalid(format!("Invalid filter '{filter}': {e}")))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_settings() {
        let builder = Logger::builder("tfp")
            .settings(LogSettings { level: "warn".into(), ..LogSettings::default() })
            .level(LevelFilter::TRACE)
            .filter("tfp_wiring=debug")
            .max_files(3);

        assert_eq!(builder.name, "tfp");
        assert_eq!(builder.settings.level, "trace");
        assert_eq!(builder.settings.filter.as_deref(), Some("tfp_wiring=debug"));
        assert_eq!(builder.settings.max_files, 3);
        assert!(builder.settings.console);
    }

    #[test]
    fn invalid_settings_are_rejected_before_install() {
        let settings = LogSettings { level: "loud".into(), ..LogSettings::default() };
        assert!(matches!(env_filter(&settings), Err(LoggerError::InvalidConfiguration { .. })));

        let settings = LogSettings { filter: Some("tfp=[".into()), ..LogSettings::default() };
        assert!(matches!(env_filter(&settings), Err(LoggerError::InvalidConfiguration { .. })));

        assert!(validate(" ", &LogSettings::default()).is_err());
        let settings =
            LogSettings { directory: Some("logs".into()), max_files: 0, ..LogSettings::default() };
        assert!(validate("tfp", &settings).is_err());
    }

    #[test]
    fn no_output_is_a_configuration_error() {
        let err = Logger::builder("tfp").console(false).init().unwrap_err();
        assert_eq!(err.to_string(), "Invalid logger configuration: Enable console or file output");
    }
}
