//! 词流匹配模块
//!
//! - FrequencyTable: 单次调用的词频表（可合并）
//! - StreamMatcher: 同步匹配，调用线程上顺序扫描
//! - MatchService: 异步匹配，tokio blocking 线程池上分块并行

mod frequency;
mod matcher;
mod service;

pub use frequency::FrequencyTable;
pub use matcher::StreamMatcher;
pub use service::{MatchService, MatchTask};
