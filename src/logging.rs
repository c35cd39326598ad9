//! tracing 初始化
//!
//! 日志按天滚动写入文件，级别由 `RUST_LOG` 控制（默认 `gridmatch=info`）。

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "gridmatch=info";
const LOG_FILE_PREFIX: &str = "gridmatch.log";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
    pub file_prefix: String,
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: std::env::temp_dir().join("gridmatch").join("logs"),
            file_prefix: LOG_FILE_PREFIX.to_string(),
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

/// 持有后台写线程；drop 时刷盘
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// 已有全局 subscriber 或目录无法创建时返回 `None`
pub fn init(config: &LoggingConfig) -> Option<LoggingGuard> {
    std::fs::create_dir_all(&config.log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %config.log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir: config.log_dir.clone(),
    })
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
