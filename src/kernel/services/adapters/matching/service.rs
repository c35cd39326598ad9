//! 异步匹配服务
//!
//! - 读取输入流放在 blocking 线程上，按 chunk_size 分块
//! - 每块交给 spawn_blocking 统计局部词频，同时在途的块不超过 max_in_flight
//! - 全部完成后合并、过滤、排序（单线程）

use super::frequency::FrequencyTable;
use crate::kernel::index::GridIndex;
use crate::kernel::services::ports::config::MatcherConfig;
use crate::kernel::services::ports::matching::{Candidate, MatchError, MatchSummary, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle, JoinSet};

static MATCH_ID: AtomicU64 = AtomicU64::new(0);

fn next_match_id() -> u64 {
    MATCH_ID.fetch_add(1, Ordering::Relaxed)
}

/// 一次匹配的句柄，不支持取消，总会跑完整个输入流
pub struct MatchTask {
    id: u64,
    handle: JoinHandle<Result<MatchSummary>>,
}

impl MatchTask {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn join(self) -> Result<Vec<String>> {
        Ok(self.join_summary().await?.words)
    }

    pub async fn join_summary(self) -> Result<MatchSummary> {
        self.handle.await.map_err(worker_error)?
    }
}

pub struct MatchService {
    runtime: tokio::runtime::Handle,
    config: MatcherConfig,
}

impl MatchService {
    pub fn new(runtime: tokio::runtime::Handle, config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { runtime, config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn spawn_match<I>(&self, index: Arc<GridIndex>, words: I) -> MatchTask
    where
        I: IntoIterator,
        I::IntoIter: Send + 'static,
        I::Item: Candidate + Send + 'static,
    {
        let id = next_match_id();
        let words = words.into_iter();
        let config = self.config.clone();
        let handle = self.runtime.spawn(run_match(id, index, words, config));
        MatchTask { id, handle }
    }
}

async fn run_match<W>(
    id: u64,
    index: Arc<GridIndex>,
    words: W,
    config: MatcherConfig,
) -> Result<MatchSummary>
where
    W: Iterator + Send + 'static,
    W::Item: Candidate + Send + 'static,
{
    tracing::debug!(match_id = id, chunk_size = config.chunk_size, "match started");

    let (chunk_tx, mut chunk_rx) = mpsc::channel::<(usize, Vec<W::Item>)>(config.max_in_flight);
    let chunk_size = config.chunk_size;
    let producer = tokio::task::spawn_blocking(move || read_chunks(words, chunk_size, &chunk_tx));

    let mut workers = JoinSet::new();
    let mut table = FrequencyTable::new();
    while let Some((offset, chunk)) = chunk_rx.recv().await {
        while workers.len() >= config.max_in_flight {
            merge_next(&mut workers, &mut table).await.inspect_err(|e| {
                tracing::error!(match_id = id, error = %e, "match worker failed");
            })?;
        }
        workers.spawn_blocking(move || FrequencyTable::from_chunk(offset, &chunk));
    }
    while !workers.is_empty() {
        merge_next(&mut workers, &mut table).await.inspect_err(|e| {
            tracing::error!(match_id = id, error = %e, "match worker failed");
        })?;
    }
    let total = producer.await.map_err(worker_error)?;

    let top_n = config.top_n;
    let summary = tokio::task::spawn_blocking(move || table.rank(&index, top_n))
        .await
        .map_err(worker_error)?;

    tracing::info!(
        match_id = id,
        scanned = total,
        distinct = summary.distinct,
        eligible = summary.eligible,
        returned = summary.words.len(),
        "match complete"
    );
    Ok(summary)
}

/// 返回已读取的条目数；接收端提前关闭时停止读取
fn read_chunks<W: Iterator>(
    mut words: W,
    chunk_size: usize,
    tx: &mpsc::Sender<(usize, Vec<W::Item>)>,
) -> usize {
    let mut offset = 0usize;
    loop {
        let chunk: Vec<W::Item> = words.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        if tx.blocking_send((offset, chunk)).is_err() {
            break;
        }
        offset += len;
    }
    offset
}

async fn merge_next(
    workers: &mut JoinSet<FrequencyTable>,
    table: &mut FrequencyTable,
) -> Result<()> {
    if let Some(joined) = workers.join_next().await {
        table.merge(joined.map_err(worker_error)?);
    }
    Ok(())
}

fn worker_error(e: JoinError) -> MatchError {
    MatchError::Worker(e.to_string())
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/matching/service.rs"]
mod tests;
