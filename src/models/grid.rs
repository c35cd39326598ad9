//! 字符网格数据模型
//!
//! 只负责校验与存储，不做任何索引。

use std::fmt;

pub const MAX_GRID_SIZE: usize = 64;

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    TooManyRows { rows: usize },
    RowTooLong { row: usize, len: usize },
    Ragged { row: usize, expected: usize, found: usize },
    NotSquare { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "invalid grid: empty"),
            GridError::TooManyRows { rows } => write!(
                f,
                "invalid grid: too large ({} rows, max {})",
                rows, MAX_GRID_SIZE
            ),
            GridError::RowTooLong { row, len } => write!(
                f,
                "invalid grid: too large (row {} has length {}, max {})",
                row, len, MAX_GRID_SIZE
            ),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "invalid grid: ragged rows (row {} has length {}, expected {})",
                row, found, expected
            ),
            GridError::NotSquare { rows, cols } => {
                write!(f, "invalid grid: not square ({}x{})", rows, cols)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// 已校验的正方形字符网格，行长按 `char` 计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    pub fn new<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        if cells.is_empty() {
            return Err(GridError::Empty);
        }
        if cells.len() > MAX_GRID_SIZE {
            return Err(GridError::TooManyRows { rows: cells.len() });
        }
        if let Some((row, r)) = cells
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() > MAX_GRID_SIZE)
        {
            return Err(GridError::RowTooLong { row, len: r.len() });
        }

        let expected = cells[0].len();
        if let Some((row, r)) = cells.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(GridError::Ragged {
                row,
                expected,
                found: r.len(),
            });
        }
        if cells.len() != expected {
            return Err(GridError::NotSquare {
                rows: cells.len(),
                cols: expected,
            });
        }

        Ok(Self { cells })
    }

    /// 按行解析文本（支持 `\r\n`），忽略末尾空行
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<&str> = text.lines().collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        Self::new(rows)
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn row(&self, index: usize) -> &[char] {
        &self.cells[index]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        (0..self.size()).map(move |index| self.row(index))
    }

    pub(crate) fn column(&self, index: usize) -> Vec<char> {
        self.cells.iter().map(|row| row[index]).collect()
    }

    pub fn columns(&self) -> impl Iterator<Item = Vec<char>> + '_ {
        (0..self.size()).map(|col| self.column(col))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/grid.rs"]
mod tests;
