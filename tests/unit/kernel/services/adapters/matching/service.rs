use super::*;
use crate::kernel::services::adapters::matching::StreamMatcher;

fn create_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap()
}

fn index() -> Arc<GridIndex> {
    Arc::new(GridIndex::new(["chill", "coldw", "windx", "abcde", "fghij"]).unwrap())
}

fn small_chunks() -> MatcherConfig {
    MatcherConfig {
        chunk_size: 2,
        max_in_flight: 2,
        ..MatcherConfig::default()
    }
}

#[test]
fn test_async_match_basic() {
    let rt = create_runtime();
    let service = MatchService::new(rt.handle().clone(), small_chunks()).unwrap();

    let task = service.spawn_match(index(), vec!["chill", "cold", "wind", "hello"]);
    let words = rt.block_on(task.join()).unwrap();

    assert_eq!(words, vec!["chill", "cold", "wind"]);
}

#[test]
fn test_async_match_frequency_across_chunks() {
    let rt = create_runtime();
    let service = MatchService::new(rt.handle().clone(), small_chunks()).unwrap();

    let task = service.spawn_match(index(), vec!["wind", "hello", "Cold", "cold", "x", "COLD"]);
    let summary = rt.block_on(task.join_summary()).unwrap();

    assert_eq!(summary.words, vec!["Cold", "wind", "x"]);
    assert_eq!(summary.scanned, 6);
    assert_eq!(summary.distinct, 4);
    assert_eq!(summary.eligible, 3);
}

#[test]
fn test_async_matches_sync_result() {
    let rt = create_runtime();
    let index = index();
    let stream: Vec<String> = (0..5000)
        .map(|i| match i % 7 {
            0 => "cold".to_string(),
            1 => "WIND".to_string(),
            2 => "nope".to_string(),
            3 => ["a", "b", "c", "d", "e", "f"][i % 6].to_string(),
            4 => "Chill".to_string(),
            5 => String::new(),
            _ => "fghij".to_string(),
        })
        .collect();

    let expected = StreamMatcher::default().find_top(&index, &stream);

    for chunk_size in [1, 3, 64, 10_000] {
        let config = MatcherConfig {
            chunk_size,
            max_in_flight: 3,
            ..MatcherConfig::default()
        };
        let service = MatchService::new(rt.handle().clone(), config).unwrap();
        let task = service.spawn_match(index.clone(), stream.clone());
        assert_eq!(rt.block_on(task.join()).unwrap(), expected, "chunk_size {chunk_size}");
    }
}

#[test]
fn test_concurrent_matches_share_index() {
    let rt = create_runtime();
    let service = MatchService::new(rt.handle().clone(), small_chunks()).unwrap();
    let index = index();

    let a = service.spawn_match(index.clone(), vec!["cold", "cold", "wind"]);
    let b = service.spawn_match(index.clone(), vec!["chill", "abc", "abc", "hello"]);
    let c = service.spawn_match(index.clone(), Vec::<String>::new());
    assert_ne!(a.id(), b.id());

    let (a, b, c) = rt.block_on(async { (a.join().await, b.join().await, c.join().await) });
    assert_eq!(a.unwrap(), vec!["cold", "wind"]);
    assert_eq!(b.unwrap(), vec!["abc", "chill"]);
    assert!(c.unwrap().is_empty());
}

#[test]
fn test_lazy_stream_with_missing_items() {
    let rt = create_runtime();
    let service = MatchService::new(rt.handle().clone(), small_chunks()).unwrap();

    let stream = (0..100).map(|i| if i % 2 == 0 { Some("wind") } else { None });
    let summary = rt.block_on(service.spawn_match(index(), stream).join_summary()).unwrap();

    assert_eq!(summary.words, vec!["wind"]);
    assert_eq!(summary.scanned, 100);
    assert_eq!(summary.skipped, 50);
}

#[test]
fn test_result_bounded_to_top_n() {
    let rt = create_runtime();
    let service = MatchService::new(rt.handle().clone(), small_chunks()).unwrap();

    let stream = vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "chill", "wind"];
    let words = rt.block_on(service.spawn_match(index(), stream).join()).unwrap();
    assert_eq!(words.len(), 10);
}

#[test]
fn test_invalid_config_rejected() {
    let rt = create_runtime();
    let config = MatcherConfig {
        chunk_size: 0,
        ..MatcherConfig::default()
    };
    let result = MatchService::new(rt.handle().clone(), config);
    assert!(matches!(result, Err(MatchError::InvalidArgument(_))));
}

#[test]
fn test_panicking_stream_reports_worker_error() {
    let rt = create_runtime();
    let service = MatchService::new(rt.handle().clone(), small_chunks()).unwrap();

    let stream = (0..10).map(|i| {
        if i == 5 {
            panic!("stream source failed");
        }
        "cold"
    });
    let result = rt.block_on(service.spawn_match(index(), stream).join());
    assert!(matches!(result, Err(MatchError::Worker(_))));
}

#[test]
fn test_task_reports_finished() {
    let rt = create_runtime();
    let service = MatchService::new(rt.handle().clone(), small_chunks()).unwrap();

    let task = service.spawn_match(index(), vec!["cold", "wind", "cold"]);
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    while !task.is_finished() {
        assert!(std::time::Instant::now() < deadline, "Timeout");
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    assert!(task.is_finished());
    assert_eq!(rt.block_on(task.join()).unwrap(), vec!["cold", "wind"]);
}
