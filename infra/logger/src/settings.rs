use serde::Deserialize;
use std::path::PathBuf;
use strum_macros::{Display, EnumString};
use tracing_appender::rolling::Rotation;

pub(crate) const DEFAULT_LEVEL: &str = "info";
pub(crate) const DEFAULT_MAX_FILES: usize = 10;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    /// One JSON object per line, on the console and in files.
    Json,
}

/// How often the log file is rolled over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Minutely => Self::MINUTELY,
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

/// The `[logging]` section of a process file.
///
/// ```toml
/// [logging]
/// level = "debug"
/// filter = "tfp_wiring=trace"
/// directory = "logs"
/// format = "json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default level directive (`error` .. `trace`, or `off`).
    pub level: String,
    /// Extra `EnvFilter` directives, e.g. `tfp_kernel=debug`.
    pub filter: Option<String>,
    pub console: bool,
    pub format: LogFormat,
    /// Directory for rolling log files. No file output when unset.
    pub directory: Option<PathBuf>,
    pub rotation: LogRotation,
    pub max_files: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_owned(),
            filter: None,
            console: true,
            format: LogFormat::default(),
            directory: None,
            rotation: LogRotation::default(),
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: LogSettings = toml::from_str(r#"level = "debug""#).unwrap();
        assert_eq!(settings.level, "debug");
        assert!(settings.console);
        assert_eq!(settings.rotation, LogRotation::Daily);
        assert_eq!(settings.max_files, DEFAULT_MAX_FILES);
    }

    #[test]
    fn formats_and_rotations_parse_by_name() {
        let settings: LogSettings =
            toml::from_str("format = \"json\"\nrotation = \"hourly\"\ndirectory = \"logs\"").unwrap();
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.rotation, LogRotation::Hourly);
        assert_eq!(settings.directory.as_deref(), Some(std::path::Path::new("logs")));
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!(LogRotation::Never.to_string(), "never");
    }
}
