//! Tail reading: retrieve the last N lines of a text file.
//!
//! [`TailReader`] validates the request, sizes up the file, and picks one of
//! two strategies: small files are decoded whole and sliced
//! ([`whole_file`]), large files are scanned backward from EOF in bounded
//! chunks ([`reverse_scan`]). Both produce identical results; the strategies
//! differ only in I/O and memory profile.
//!
//! Calls on one reader instance are serialized by an instance-scoped mutex,
//! so concurrent callers never overlap. Independent instances share nothing.

use crate::config::ReaderConfig;
use crate::error::{Result, TailError};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

pub mod line;
mod reverse_scan;
mod whole_file;

pub use line::Line;

/// Line count used when the caller does not specify one
pub const DEFAULT_LINE_COUNT: usize = 10;

/// Reading strategy selected from the file's size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadStrategy {
    /// Decode the entire file and slice the final lines
    WholeFile,
    /// Scan fixed-size chunks backward from end-of-file
    ReverseScan,
}

/// Reads the last N lines of text files without loading large files whole.
///
/// Construct once with a [`ReaderConfig`] and share freely; the configuration
/// is immutable and concurrent calls on the same instance are strictly
/// serialized.
#[derive(Debug)]
pub struct TailReader {
    config: ReaderConfig,
    /// Serializes reads on this instance. Not path-specific: two calls on the
    /// same reader never overlap even for different files.
    lock: Mutex<()>,
}

impl TailReader {
    /// Create a reader, rejecting configurations with non-positive limits.
    pub fn new(config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            lock: Mutex::new(()),
        })
    }

    /// Create a reader with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: ReaderConfig::default(),
            lock: Mutex::new(()),
        }
    }

    /// The configuration this reader was built with
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read the last `count` lines of the file at `path`.
    ///
    /// Lines are returned in ascending line-number order with absolute,
    /// 1-based numbers. At most `count` lines are returned; an empty file
    /// yields an empty result rather than an error.
    ///
    /// # Errors
    /// * [`TailError::InvalidArgument`] - blank path or `count` of zero
    /// * [`TailError::FileNotFound`] / [`TailError::NotAFile`] - path problems
    /// * [`TailError::FileTooLarge`] - file exceeds `max_file_size_bytes`
    /// * [`TailError::FileError`] - I/O failure or invalid UTF-8; the whole
    ///   operation fails, no partial result is returned
    pub fn read_last_lines(&self, path: impl AsRef<Path>, count: usize) -> Result<Vec<Line>> {
        let path = path.as_ref();
        validate_request(path, count)?;

        let _guard = self.lock.lock();
        let started = self.config.enable_performance_logging.then(Instant::now);

        let result = self.read_locked(path, count);

        if let Some(started) = started {
            log::info!(
                "read_last_lines({}, {count}) took {:?}",
                path.display(),
                started.elapsed()
            );
        }
        result
    }

    /// Non-blocking variant of [`read_last_lines`](Self::read_last_lines).
    ///
    /// Runs the synchronous path on a blocking worker thread; semantics are
    /// otherwise identical, including serialization against other calls on
    /// the same instance.
    pub async fn read_last_lines_async(
        self: Arc<Self>,
        path: impl Into<PathBuf>,
        count: usize,
    ) -> Result<Vec<Line>> {
        let path = path.into();
        tokio::task::spawn_blocking(move || self.read_last_lines(path, count))
            .await
            .map_err(|e| TailError::other(format!("tail read task failed: {e}")))?
    }

    fn read_locked(&self, path: &Path, count: usize) -> Result<Vec<Line>> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TailError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(TailError::file_error("Failed to read file metadata", e)),
        };

        if !metadata.is_file() {
            return Err(TailError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let file_size = metadata.len();
        if file_size > self.config.max_file_size_bytes {
            return Err(TailError::FileTooLarge {
                path: path.to_path_buf(),
                size: file_size,
                max_size: self.config.max_file_size_bytes,
            });
        }

        let (spans, start_line) = match self.strategy_for(file_size) {
            ReadStrategy::WholeFile => whole_file::read(path, count)?,
            ReadStrategy::ReverseScan => {
                reverse_scan::read(path, file_size, count, self.config.buffer_size_bytes)?
            }
        };

        Ok(line::assemble(spans, start_line))
    }

    fn strategy_for(&self, file_size: u64) -> ReadStrategy {
        let strategy = if file_size <= self.config.small_file_threshold_bytes {
            ReadStrategy::WholeFile
        } else {
            ReadStrategy::ReverseScan
        };
        log::debug!("selected {strategy:?} for {file_size} byte file");
        strategy
    }
}

/// Input validation, performed before any filesystem access.
fn validate_request(path: &Path, count: usize) -> Result<()> {
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        return Err(TailError::invalid_argument(
            "file path must not be empty or blank",
        ));
    }
    if count < 1 {
        return Err(TailError::invalid_argument("line count must be at least 1"));
    }
    Ok(())
}
