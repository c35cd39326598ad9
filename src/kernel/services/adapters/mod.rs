//! Service adapters: runtime specific implementations (IO/async).

pub mod config;
pub mod matching;

pub use config::{load_matcher_config, parse_matcher_config, ConfigError};
pub use matching::{FrequencyTable, MatchService, MatchTask, StreamMatcher};
