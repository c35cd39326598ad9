//! Service ports: traits + data contracts.

pub mod config;
pub mod matching;

pub use config::MatcherConfig;
pub use matching::{Candidate, MatchError, MatchSummary, Result as MatchResult};
