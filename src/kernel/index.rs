//! 网格索引
//!
//! 预先展开所有行、列上的连续子串（正反两个方向），
//! 查询时只做一次哈希查找。

use crate::models::grid::{Grid, Result as GridResult};
use compact_str::CompactString;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// 大小写折叠：逐个 `char` 先转大写再转小写，`ς`/`σ`/`Σ` 折叠为同一个 key
pub fn fold_case(word: &str) -> CompactString {
    word.chars().flat_map(fold_char).collect()
}

fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_uppercase().flat_map(char::to_lowercase)
}

#[derive(Debug)]
pub struct GridIndex {
    grid: Grid,
    row_words: FxHashSet<CompactString>,
    col_words: FxHashSet<CompactString>,
}

impl GridIndex {
    pub fn new<I, S>(rows: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_grid(Grid::new(rows)?))
    }

    pub fn parse(text: &str) -> GridResult<Self> {
        Ok(Self::from_grid(Grid::parse(text)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        let mut row_words = FxHashSet::default();
        for row in grid.rows() {
            insert_runs(&mut row_words, row);
        }

        let mut col_words = FxHashSet::default();
        for col in grid.columns() {
            insert_runs(&mut col_words, &col);
        }

        tracing::debug!(
            size = grid.size(),
            row_words = row_words.len(),
            col_words = col_words.len(),
            "grid index built"
        );

        Self {
            grid,
            row_words,
            col_words,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let key = fold_case(word);
        self.row_words.contains(&key) || self.col_words.contains(&key)
    }

    pub fn contains_on(&self, axis: Axis, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.words(axis).contains(&fold_case(word))
    }

    /// 已折叠大小写的 key 直接查表，供匹配器复用
    pub(crate) fn contains_folded(&self, key: &str) -> bool {
        !key.is_empty() && (self.row_words.contains(key) || self.col_words.contains(key))
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn axis_len(&self, axis: Axis) -> usize {
        self.words(axis).len()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn words(&self, axis: Axis) -> &FxHashSet<CompactString> {
        match axis {
            Axis::Row => &self.row_words,
            Axis::Column => &self.col_words,
        }
    }
}

/// 插入一条线上所有 [start, end) 子串及其反转
fn insert_runs(set: &mut FxHashSet<CompactString>, line: &[char]) {
    for start in 0..line.len() {
        for end in start + 1..=line.len() {
            let run = &line[start..end];
            let forward: CompactString = run.iter().copied().flat_map(fold_char).collect();
            let backward: CompactString = run.iter().rev().copied().flat_map(fold_char).collect();
            if backward != forward {
                set.insert(backward);
            }
            set.insert(forward);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/index.rs"]
mod tests;
