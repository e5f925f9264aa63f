//! Reverse-scan strategy for large files.
//!
//! Reads fixed-size chunks backward from end-of-file, splitting on `\n`,
//! until the requested number of lines has been collected or the file start
//! is reached. Peak memory is bounded by the chunk size plus the lines kept,
//! regardless of file size.
//!
//! A line that straddles a chunk boundary accumulates across iterations, so a
//! terminator landing exactly on a boundary is neither dropped nor counted
//! twice. Lines are decoded as UTF-8 only once complete, never from a raw
//! chunk slice, so buffer alignment cannot split a multi-byte character.

use crate::error::{Result, TailError};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Read the last `count` lines of `path` by scanning backward from EOF.
///
/// Produces exactly the spans the whole-file strategy would, plus the 1-based
/// number of the first returned span. Determining absolute line numbers
/// requires a second, forward counting pass over the file.
///
/// Any I/O error fails the whole operation; no partial result is returned.
pub(crate) fn read(
    path: &Path,
    file_size: u64,
    count: usize,
    buffer_size: usize,
) -> Result<(Vec<String>, u64)> {
    let mut file = File::open(path).map_err(|e| {
        TailError::file_error(format!("Failed to open file: {}", path.display()), e)
    })?;

    // Collected newest-first, reversed to chronological order below.
    let mut spans = collect_tail(&mut file, file_size, count, buffer_size)?;
    spans.reverse();

    let total_lines = count_total_lines(&mut file, buffer_size)?;
    let start_line = total_lines.saturating_sub(spans.len() as u64) + 1;

    Ok((spans, start_line))
}

/// Scan backward from EOF and return up to `count` lines, newest first.
fn collect_tail(
    file: &mut File,
    file_size: u64,
    count: usize,
    buffer_size: usize,
) -> Result<Vec<String>> {
    let mut collected: Vec<String> = Vec::new();
    // Bytes of the line currently being accumulated, in reverse order.
    let mut partial: Vec<u8> = Vec::new();
    // Whether a `\n` sits immediately to the right of `partial`. Only the
    // file's final line can be unterminated; termination decides whether a
    // trailing `\r` belongs to a `\r\n` terminator or to the line itself.
    let mut terminated = false;
    // The very last byte of the file gets special treatment: a trailing `\n`
    // terminates the final line instead of opening an empty one.
    let mut at_last_byte = true;

    let mut cursor = file_size;
    let chunk_capacity = buffer_size.min(file_size.min(usize::MAX as u64) as usize);
    let mut chunk = vec![0u8; chunk_capacity];

    'scan: while cursor > 0 && collected.len() < count {
        let read_len = (buffer_size as u64).min(cursor) as usize;
        cursor -= read_len as u64;

        file.seek(SeekFrom::Start(cursor))
            .map_err(|e| TailError::file_error("Failed to seek while scanning backward", e))?;
        file.read_exact(&mut chunk[..read_len])
            .map_err(|e| TailError::file_error("Failed to read while scanning backward", e))?;

        for &byte in chunk[..read_len].iter().rev() {
            if byte == b'\n' {
                if at_last_byte {
                    terminated = true;
                } else {
                    collected.push(finish_line(&mut partial, terminated)?);
                    terminated = true;
                    if collected.len() == count {
                        break 'scan;
                    }
                }
            } else {
                partial.push(byte);
            }
            at_last_byte = false;
        }
    }

    // Reaching the file start means one more line remains: everything before
    // the last terminator seen, which may legitimately be empty.
    if cursor == 0 && collected.len() < count && file_size > 0 {
        collected.push(finish_line(&mut partial, terminated)?);
    }

    Ok(collected)
}

/// Finalize the accumulated line: restore byte order, strip the `\r` of a
/// `\r\n` terminator, and decode as UTF-8.
fn finish_line(partial: &mut Vec<u8>, terminated: bool) -> Result<String> {
    let mut bytes = std::mem::take(partial);
    bytes.reverse();
    if terminated && bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    String::from_utf8(bytes).map_err(|e| {
        TailError::file_error(
            "File is not valid UTF-8",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

/// Count the file's total lines with a forward pass in `buffer_size` chunks.
///
/// A final line without a trailing `\n` still counts; an empty file has zero
/// lines.
fn count_total_lines(file: &mut File, buffer_size: usize) -> Result<u64> {
    file.seek(SeekFrom::Start(0))
        .map_err(|e| TailError::file_error("Failed to seek to file start", e))?;

    let mut chunk = vec![0u8; buffer_size];
    let mut newlines: u64 = 0;
    let mut last_byte: Option<u8> = None;

    loop {
        let n = file
            .read(&mut chunk)
            .map_err(|e| TailError::file_error("Failed to read while counting lines", e))?;
        if n == 0 {
            break;
        }
        newlines += memchr::memchr_iter(b'\n', &chunk[..n]).count() as u64;
        last_byte = Some(chunk[n - 1]);
    }

    match last_byte {
        None => Ok(0),
        Some(b'\n') => Ok(newlines),
        Some(_) => Ok(newlines + 1),
    }
}
