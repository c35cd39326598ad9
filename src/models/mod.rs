//! 数据模型层

pub mod grid;

pub use grid::{Grid, GridError, MAX_GRID_SIZE};
