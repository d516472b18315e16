use std::{env, fmt, fs, path::PathBuf, str::FromStr};

use keylist_error::{bail, ListError, ListResult};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`LoggingConfig::level`].
pub const ENV_LOG_LEVEL: &str = "KEYLIST_LOG_LEVEL";
/// Environment variable overriding [`LoggingConfig::format`].
pub const ENV_LOG_FORMAT: &str = "KEYLIST_LOG_FORMAT";

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Output format of the console and file layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

/// Rolling file sink settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSinkConfig {
    /// Directory that receives the daily log files.
    pub dir: PathBuf,
    /// File name prefix, e.g. `keylist.log` -> `keylist.log.2024-01-01`.
    #[serde(default = "default_file_prefix")]
    pub prefix: String,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for the `keylist` target: trace, debug, info, warn, error, off.
    pub level: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_target: bool,
    /// Optional rolling file sink; console only when absent.
    pub file: Option<FileSinkConfig>,
}

fn default_file_prefix() -> String {
    "keylist.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            with_ansi: true,
            with_target: true,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Applies `KEYLIST_LOG_LEVEL` and `KEYLIST_LOG_FORMAT` on top of the
    /// loaded values. Unparseable formats are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var(ENV_LOG_LEVEL) {
            self.level = level.trim().to_ascii_lowercase();
        }
        if let Ok(format) = env::var(ENV_LOG_FORMAT) {
            if let Ok(format) = format.parse() {
                self.format = format;
            }
        }
    }

    pub fn validate(&self) -> ListResult<()> {
        if !LEVELS.contains(&self.level.as_str()) {
            bail!(Logging, "unknown log level '{}'", self.level);
        }
        if let Some(file) = &self.file {
            if file.prefix.is_empty() {
                bail!(Logging, "log file prefix cannot be empty");
            }
        }
        Ok(())
    }

    /// Creates the file sink directory when one is configured.
    pub fn ensure_log_dir(&self) -> ListResult<()> {
        if let Some(file) = &self.file {
            fs::create_dir_all(&file.dir).map_err(|source| ListError::Io {
                path: file.dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Filter directive for this crate, e.g. `keylist=debug`.
    pub fn build_filter_directive(&self) -> String {
        format!("keylist={}", self.level)
    }
}

impl fmt::Display for LogFormat {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        };
        f.write_str(s)
    }
}

impl FromStr for LogFormat {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(ListError::Logging(format!("unknown log format '{other}'"))),
        }
    }
}
