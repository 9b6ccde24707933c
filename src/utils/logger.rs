// src/utils/logger.rs
use crate::err;
use crate::utils::error::Error;
use std::fs;
use std::path::PathBuf;
use time::macros::format_description;
use tracing_appender::rolling;
use tracing_subscriber::{
    fmt::{self, time::LocalTime},
    layer::SubscriberExt,
    registry,
    util::SubscriberInitExt,
    EnvFilter,
};

const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_FILE_PREFIX: &str = "app.log";
const DEFAULT_LEVEL: &str = "info";

#[derive(Debug)]
pub struct LoggerBuilder {
    log_dir: PathBuf,
    file_prefix: String,
    default_level: String,
    stdout: bool,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        LoggerBuilder {
            log_dir: DEFAULT_LOG_DIR.into(),
            file_prefix: DEFAULT_FILE_PREFIX.into(),
            default_level: DEFAULT_LEVEL.into(),
            stdout: true,
        }
    }

    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    pub fn stdout(mut self, enabled: bool) -> Self {
        self.stdout = enabled;
        self
    }

    /// Installs the global subscriber: a daily-rolling file plus, optionally,
    /// stdout. `RUST_LOG` takes precedence over the default level.
    pub fn init(self) -> Result<(), Error> {
        fs::create_dir_all(&self.log_dir)?;
        let file_appender = rolling::daily(&self.log_dir, &self.file_prefix);

        let time_format = LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
        ));

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_thread_names(true)
            .with_thread_ids(true)
            .with_timer(time_format.clone());

        let stdout_layer = self.stdout.then(|| {
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(false)
                .with_thread_names(true)
                .with_thread_ids(true)
                .with_timer(time_format)
        });

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_level));

        registry()
            .with(filter)
            .with(file_layer)
            .with(stdout_layer)
            .try_init()
            .map_err(|e| err!("Failed to install log subscriber: {}", e))?;
        Ok(())
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
