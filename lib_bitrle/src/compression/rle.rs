use log::trace;
use thiserror::Error;

use crate::config::{RleConfig, MAX_RUN};

/// Count byte of an escaped literal token: `escape, 0x01, escape`.
const ESCAPED_LITERAL_COUNT: u8 = 0x01;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RleEncodeError {
    #[error("Invalid parameter: min_run must be at least 2, got {min_run}")]
    InvalidParameter { min_run: u32 },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RleDecodeError {
    #[error("Truncated stream: token is missing its byte at offset {offset}")]
    TruncatedStream { offset: usize },
    #[error("Malformed token at offset {offset}: count {count} with value {value:#04x}")]
    MalformedToken { offset: usize, count: u8, value: u8 },
}

/// Compresses a byte sequence with escape-byte run-length encoding.
///
/// Runs of at least `config.min_run` identical bytes (split at 255) become
/// `escape, count, value`. Single occurrences of the escape byte become
/// `escape, 0x01, escape`. Everything else is copied through.
///
/// # Arguments
/// * `data` - Slice of bytes to compress
/// * `config` - Escape byte and minimum run length
///
/// # Returns
/// * `Result<Vec<u8>, RleEncodeError>` - Token stream or error
pub fn rle_encode(data: &[u8], config: &RleConfig) -> Result<Vec<u8>, RleEncodeError> {
    config.validate()?;

    let escape = config.escape_byte;
    let min_run = config.min_run as usize;
    let mut encoded = Vec::with_capacity(data.len());
    let mut i = 0;

    while i < data.len() {
        let current = data[i];
        let run_length = data[i..]
            .iter()
            .take(MAX_RUN)
            .take_while(|&&byte| byte == current)
            .count();

        if run_length >= min_run {
            encoded.extend_from_slice(&[escape, run_length as u8, current]);
        } else if current == escape {
            // Every suffix of a short run is itself short, so the whole run goes out literally
            for _ in 0..run_length {
                encoded.extend_from_slice(&[escape, ESCAPED_LITERAL_COUNT, escape]);
            }
        } else {
            encoded.extend(std::iter::repeat(current).take(run_length));
        }
        i += run_length;
    }

    trace!(
        "RLE encoded {} bytes into {} bytes (escape={:#04x}, min_run={})",
        data.len(),
        encoded.len(),
        escape,
        config.min_run
    );

    Ok(encoded)
}

/// Decompresses a token stream produced by `rle_encode`.
///
/// # Arguments
/// * `stream` - Token stream
/// * `escape_byte` - Escape byte the stream was encoded with
///
/// # Returns
/// * `Result<Vec<u8>, RleDecodeError>` - Original bytes or error
pub fn rle_decode(stream: &[u8], escape_byte: u8) -> Result<Vec<u8>, RleDecodeError> {
    let mut decoded = Vec::with_capacity(stream.len());
    let mut i = 0;

    while i < stream.len() {
        let byte = stream[i];
        if byte != escape_byte {
            decoded.push(byte);
            i += 1;
            continue;
        }

        let count = *stream
            .get(i + 1)
            .ok_or(RleDecodeError::TruncatedStream { offset: i + 1 })?;
        let value = *stream
            .get(i + 2)
            .ok_or(RleDecodeError::TruncatedStream { offset: i + 2 })?;

        match count {
            ESCAPED_LITERAL_COUNT if value == escape_byte => decoded.push(escape_byte),
            0 | ESCAPED_LITERAL_COUNT => {
                return Err(RleDecodeError::MalformedToken {
                    offset: i,
                    count,
                    value,
                })
            }
            _ => decoded.resize(decoded.len() + count as usize, value),
        }
        i += 3;
    }

    trace!(
        "RLE decoded {} bytes into {} bytes (escape={:#04x})",
        stream.len(),
        decoded.len(),
        escape_byte
    );

    Ok(decoded)
}
