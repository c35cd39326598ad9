//! gridmatch - 网格取词与词流排名库
//!
//! 模块结构：
//! - models: 数据模型（Grid）
//! - kernel: 网格索引（GridIndex）与匹配服务（StreamMatcher, MatchService）
//! - logging: tracing 初始化

pub mod kernel;
pub mod logging;
pub mod models;

pub use kernel::{
    Axis, Candidate, GridIndex, MatchError, MatchService, MatchSummary, MatchTask, MatcherConfig,
    StreamMatcher,
};
pub use models::{Grid, GridError, MAX_GRID_SIZE};
