use super::matching::{MatchError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub top_n: usize,
    pub chunk_size: usize,
    pub max_in_flight: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_in_flight: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 || self.top_n > DEFAULT_TOP_N {
            return Err(MatchError::InvalidArgument(format!(
                "top_n must be in 1..={}",
                DEFAULT_TOP_N
            )));
        }
        if self.chunk_size == 0 {
            return Err(MatchError::InvalidArgument("chunk_size must be > 0".into()));
        }
        if self.max_in_flight == 0 {
            return Err(MatchError::InvalidArgument(
                "max_in_flight must be > 0".into(),
            ));
        }
        Ok(())
    }
}
