//! End-to-end tests for the public tail-reading API: concrete scenarios,
//! concurrency, the async variant, and a property check that both reading
//! strategies always agree.

use proptest::prelude::*;
use rltail::{Line, ReaderConfig, TailError, TailReader};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn create_test_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content).expect("Failed to write test data");
    file.flush().expect("Failed to flush test data");
    file
}

fn numbered_lines(count: usize) -> Vec<u8> {
    (1..=count)
        .map(|i| format!("Line {i}\n"))
        .collect::<String>()
        .into_bytes()
}

#[test]
fn last_ten_of_fifteen_lines() {
    let file = create_test_file(&numbered_lines(15));
    let reader = TailReader::with_defaults();

    let lines = reader.read_last_lines(file.path(), 10).unwrap();

    let expected: Vec<Line> = (6..=15)
        .map(|i| Line::new(i, format!("Line {i}")))
        .collect();
    assert_eq!(lines, expected);
}

#[test]
fn short_file_returns_everything_from_line_one() {
    let file = create_test_file(&numbered_lines(3));
    let reader = TailReader::with_defaults();

    let lines = reader.read_last_lines(file.path(), 10).unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].number(), 1);
    assert_eq!(lines[2], Line::new(3, "Line 3"));
}

#[test]
fn missing_file_and_bad_count_fail_fast() {
    let reader = TailReader::with_defaults();

    assert!(matches!(
        reader.read_last_lines("/no/such/file.log", 10),
        Err(TailError::FileNotFound { .. })
    ));

    let file = create_test_file(b"content\n");
    assert!(matches!(
        reader.read_last_lines(file.path(), 0),
        Err(TailError::InvalidArgument { .. })
    ));
}

#[test]
fn concurrent_calls_on_one_reader_agree() {
    let file = create_test_file(&numbered_lines(200));
    let reader = Arc::new(
        TailReader::new(ReaderConfig {
            // Force the backward scan so the test exercises the chunked path.
            small_file_threshold_bytes: 1,
            buffer_size_bytes: 64,
            ..Default::default()
        })
        .unwrap(),
    );

    let expected = reader.read_last_lines(file.path(), 25).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reader = Arc::clone(&reader);
                let path = file.path().to_path_buf();
                scope.spawn(move || reader.read_last_lines(path, 25).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[tokio::test]
async fn async_variant_matches_sync_result() {
    let file = create_test_file(&numbered_lines(50));
    let reader = Arc::new(TailReader::with_defaults());

    let sync_lines = reader.read_last_lines(file.path(), 10).unwrap();
    let async_lines = Arc::clone(&reader)
        .read_last_lines_async(file.path().to_path_buf(), 10)
        .await
        .unwrap();

    assert_eq!(async_lines, sync_lines);
}

#[tokio::test]
async fn async_variant_propagates_errors() {
    let reader = Arc::new(TailReader::with_defaults());

    let result = reader
        .read_last_lines_async("/no/such/file.log".to_string(), 10)
        .await;
    assert!(matches!(result, Err(TailError::FileNotFound { .. })));
}

proptest! {
    /// The reverse scan must be indistinguishable from the whole-file
    /// baseline for any content, request size, and buffer size.
    #[test]
    fn strategies_agree_on_arbitrary_files(
        lines in prop::collection::vec("[a-zA-Z0-9 \r]{0,12}", 0..40),
        trailing_newline in any::<bool>(),
        count in 1usize..50,
        buffer_size in 1usize..32,
    ) {
        let mut content = lines.join("\n");
        if trailing_newline && !content.is_empty() {
            content.push('\n');
        }
        let file = create_test_file(content.as_bytes());

        let whole = TailReader::new(ReaderConfig {
            small_file_threshold_bytes: u64::MAX,
            ..Default::default()
        })
        .unwrap();
        let reverse = TailReader::new(ReaderConfig {
            small_file_threshold_bytes: 1,
            buffer_size_bytes: buffer_size,
            ..Default::default()
        })
        .unwrap();

        let baseline = whole.read_last_lines(file.path(), count).unwrap();
        let scanned = reverse.read_last_lines(file.path(), count).unwrap();
        prop_assert_eq!(&scanned, &baseline);

        // Independent oracle: slice the last `count` of the decoded lines.
        let all: Vec<&str> = content.lines().collect();
        let start = all.len().saturating_sub(count);
        let expected: Vec<Line> = all[start..]
            .iter()
            .enumerate()
            .map(|(offset, text)| Line::new((start + offset) as u64 + 1, *text))
            .collect();
        prop_assert_eq!(baseline, expected);
    }
}
