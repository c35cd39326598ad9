//! 单次匹配的词频表
//!
//! 每个 worker 各持一份，结束后合并；合并满足交换律和结合律，
//! 因此与分块方式、完成顺序无关。

use crate::kernel::index::{fold_case, GridIndex};
use crate::kernel::services::ports::matching::{Candidate, MatchSummary};
use compact_str::CompactString;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::hash_map::Entry as MapEntry;

#[derive(Debug, Clone)]
struct Entry {
    count: usize,
    first_seen: usize,
    surface: CompactString,
}

#[derive(Debug, Default)]
pub struct FrequencyTable {
    entries: FxHashMap<CompactString, Entry>,
    scanned: usize,
    skipped: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 统计一个分块，`offset` 为块首在整个流中的位置
    pub fn from_chunk<T: Candidate>(offset: usize, items: &[T]) -> Self {
        let mut table = Self::new();
        for (i, item) in items.iter().enumerate() {
            table.record(offset + i, item);
        }
        table
    }

    pub fn record<T: Candidate + ?Sized>(&mut self, position: usize, item: &T) {
        self.scanned += 1;
        let word = match item.word() {
            Some(word) if !word.is_empty() => word,
            _ => {
                self.skipped += 1;
                return;
            }
        };

        match self.entries.entry(fold_case(word)) {
            MapEntry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                entry.count += 1;
                if position < entry.first_seen {
                    entry.first_seen = position;
                    entry.surface = CompactString::from(word);
                }
            }
            MapEntry::Vacant(slot) => {
                slot.insert(Entry {
                    count: 1,
                    first_seen: position,
                    surface: CompactString::from(word),
                });
            }
        }
    }

    pub fn merge(&mut self, other: FrequencyTable) {
        self.scanned += other.scanned;
        self.skipped += other.skipped;
        for (key, incoming) in other.entries {
            match self.entries.entry(key) {
                MapEntry::Occupied(mut slot) => {
                    let entry = slot.get_mut();
                    entry.count += incoming.count;
                    if incoming.first_seen < entry.first_seen {
                        entry.first_seen = incoming.first_seen;
                        entry.surface = incoming.surface;
                    }
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(incoming);
                }
            }
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.entries
            .get(fold_case(word).as_str())
            .map_or(0, |entry| entry.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn scanned(&self) -> usize {
        self.scanned
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// 过滤出网格中存在的词，按 (频次降序, key 升序) 取前 `top_n` 个
    pub fn rank(&self, index: &GridIndex, top_n: usize) -> MatchSummary {
        let mut eligible: Vec<(&CompactString, &Entry)> = self
            .entries
            .iter()
            .filter(|(key, _)| index.contains_folded(key))
            .collect();
        let eligible_count = eligible.len();

        if eligible.len() > top_n && top_n > 0 {
            eligible.select_nth_unstable_by(top_n - 1, by_rank);
        }
        eligible.truncate(top_n);
        eligible.sort_unstable_by(by_rank);

        MatchSummary {
            words: eligible
                .into_iter()
                .map(|(_, entry)| entry.surface.to_string())
                .collect(),
            scanned: self.scanned,
            skipped: self.skipped,
            distinct: self.entries.len(),
            eligible: eligible_count,
        }
    }
}

fn by_rank(a: &(&CompactString, &Entry), b: &(&CompactString, &Entry)) -> Ordering {
    b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(b.0))
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/matching/frequency.rs"]
mod tests;
