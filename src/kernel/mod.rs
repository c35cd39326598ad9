//! Headless core: grid index + stream matching services.

pub mod index;
pub mod services;

pub use index::{fold_case, Axis, GridIndex};
pub use services::adapters::{MatchService, MatchTask, StreamMatcher};
pub use services::ports::{Candidate, MatchError, MatchSummary, MatcherConfig};
