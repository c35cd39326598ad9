//! 同步匹配器
//!
//! 在调用线程上顺序扫描输入流；适合小流或已经处于 worker 线程的场景。

use super::frequency::FrequencyTable;
use crate::kernel::index::GridIndex;
use crate::kernel::services::ports::config::MatcherConfig;
use crate::kernel::services::ports::matching::{Candidate, MatchSummary, Result};

#[derive(Debug, Clone, Default)]
pub struct StreamMatcher {
    config: MatcherConfig,
}

impl StreamMatcher {
    pub fn new(config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn find_top<I>(&self, index: &GridIndex, words: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: Candidate,
    {
        self.match_with_summary(index, words).words
    }

    pub fn match_with_summary<I>(&self, index: &GridIndex, words: I) -> MatchSummary
    where
        I: IntoIterator,
        I::Item: Candidate,
    {
        let mut table = FrequencyTable::new();
        for (position, item) in words.into_iter().enumerate() {
            table.record(position, &item);
        }
        table.rank(index, self.config.top_n)
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/matching/matcher.rs"]
mod tests;
