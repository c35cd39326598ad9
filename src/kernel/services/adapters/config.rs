//! 匹配器配置文件读取（JSON）
//!
//! 缺省字段回落到 `MatcherConfig::default()`。

use crate::kernel::services::ports::config::MatcherConfig;
use std::io;
use std::path::Path;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

pub fn parse_matcher_config(data: &str) -> Result<MatcherConfig> {
    Ok(serde_json::from_str(data)?)
}

pub fn load_matcher_config(path: &Path) -> Result<MatcherConfig> {
    let data = std::fs::read_to_string(path)?;
    let config = parse_matcher_config(&data)?;
    tracing::debug!(path = %path.display(), ?config, "matcher config loaded");
    Ok(config)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
