use station_stats::store::{LoadSummary, MeasurementStore};
use station_stats::utils::config::DEFAULT_BATCH_SIZE;
use station_stats::utils::error::StoreError;
use std::io::Cursor;

fn input_with_rows(n: usize) -> String {
    (0..n).map(|i| format!("key{};{}.5\n", i % 7, i % 40)).collect()
}

#[test]
fn test_load_default_batches() {
    let mut store = MeasurementStore::open_in_memory().unwrap();
    let input = input_with_rows(25_001);

    let summary = store.load(Cursor::new(input), DEFAULT_BATCH_SIZE).unwrap();

    assert_eq!(
        summary,
        LoadSummary {
            rows: 25_001,
            batches: 3
        }
    );
    assert_eq!(store.row_count().unwrap(), 25_001);
    assert_eq!(store.key_count().unwrap(), 7);
}

#[test]
fn test_exact_multiple_of_batch_size() {
    let mut store = MeasurementStore::open_in_memory().unwrap();
    let summary = store.load(Cursor::new(input_with_rows(20)), 10).unwrap();

    assert_eq!(summary.batches, 2);
    assert_eq!(store.row_count().unwrap(), 20);
}

#[test]
fn test_empty_input_commits_nothing() {
    let mut store = MeasurementStore::open_in_memory().unwrap();
    let summary = store.load(Cursor::new(""), 10).unwrap();

    assert_eq!(summary, LoadSummary::default());
    assert_eq!(store.row_count().unwrap(), 0);
}

#[test]
fn test_index_exists() {
    let store = MeasurementStore::open_in_memory().unwrap();
    assert!(store.has_id_index().unwrap());
}

#[test]
fn test_malformed_line_is_parse_error() {
    let mut store = MeasurementStore::open_in_memory().unwrap();
    let err = store.load(Cursor::new("A;1\nB;x\n"), 10).unwrap_err();

    assert!(matches!(err, StoreError::Parse(_)));
    // The failing batch was never committed
    assert_eq!(store.row_count().unwrap(), 0);
}
