//! Reader configuration.
//!
//! Configuration is an explicit immutable struct handed to [`TailReader::new`]
//! at construction time, not discovered from the environment. After
//! construction it is shared read-only across concurrent calls.
//!
//! [`TailReader::new`]: crate::tail::TailReader::new

use crate::error::{Result, TailError};

/// Default cap on the size of files the reader will accept (100 MiB)
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 100 * 1024 * 1024;

/// Default file size below which the whole file is read and sliced (1 MiB)
pub const DEFAULT_SMALL_FILE_THRESHOLD_BYTES: u64 = 1024 * 1024;

/// Default chunk size for the backward scan over large files
pub const DEFAULT_BUFFER_SIZE_BYTES: usize = 4096;

/// Tuning knobs for a [`TailReader`](crate::tail::TailReader).
///
/// # Strategy Selection
/// Files of at most `small_file_threshold_bytes` are decoded whole and sliced;
/// larger files are scanned backward from EOF in `buffer_size_bytes` chunks,
/// which caps peak memory regardless of file size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Emit one timing measurement per read via `log::info!`
    pub enable_performance_logging: bool,
    /// Reject files longer than this many bytes
    pub max_file_size_bytes: u64,
    /// File size at or below which the whole-file strategy is used
    pub small_file_threshold_bytes: u64,
    /// Chunk size for backward scanning of large files
    pub buffer_size_bytes: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            enable_performance_logging: false,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            small_file_threshold_bytes: DEFAULT_SMALL_FILE_THRESHOLD_BYTES,
            buffer_size_bytes: DEFAULT_BUFFER_SIZE_BYTES,
        }
    }
}

impl ReaderConfig {
    /// Check that every numeric field is positive.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_file_size_bytes == 0 {
            return Err(TailError::invalid_argument(
                "max_file_size_bytes must be greater than zero",
            ));
        }
        if self.small_file_threshold_bytes == 0 {
            return Err(TailError::invalid_argument(
                "small_file_threshold_bytes must be greater than zero",
            ));
        }
        if self.buffer_size_bytes == 0 {
            return Err(TailError::invalid_argument(
                "buffer_size_bytes must be greater than zero",
            ));
        }
        Ok(())
    }
}
