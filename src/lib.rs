//! # rltail - Bounded-Memory Tail Reads
//!
//! Retrieve the last N lines of a text file without loading arbitrarily large
//! files entirely into memory.
//!
//! ## Features
//!
//! - **Size-Adaptive Strategy**: small files are decoded whole; large files
//!   are scanned backward from EOF in fixed-size chunks
//! - **Bounded Memory**: peak usage on large files is capped by the configured
//!   buffer size, independent of file size
//! - **Exact Semantics**: absolute 1-based line numbers, `\n` and `\r\n`
//!   terminators, interior empty lines preserved, empty file means zero lines
//! - **Async Variant**: the same read offloaded to a blocking worker via tokio
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Immutable reader configuration
//! - [`tail`] - Strategy selection, both readers, and line assembly
//!
//! ## Example
//!
//! ```no_run
//! use rltail::{ReaderConfig, TailReader};
//!
//! let reader = TailReader::new(ReaderConfig::default())?;
//! for line in reader.read_last_lines("server.log", 10)? {
//!     println!("{:>6}  {}", line.number(), line.content());
//! }
//! # Ok::<(), rltail::TailError>(())
//! ```

pub mod config;
pub mod error;
pub mod tail;

// Re-export commonly used types for convenience
pub use config::ReaderConfig;
pub use error::{Result, TailError};
pub use tail::{Line, TailReader, DEFAULT_LINE_COUNT};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
