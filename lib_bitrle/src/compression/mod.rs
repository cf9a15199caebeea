pub mod rle;

use log::{debug, error, info};
use rle::{RleDecodeError, RleEncodeError};
use thiserror::Error;

use crate::config::RleConfig;

#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("RLE compression failed")]
    RleCompressionFailed(#[from] RleEncodeError),
}

#[derive(Error, Debug)]
pub enum DecompressionError {
    #[error("RLE decompression failed")]
    RleDecompressionFailed(#[from] RleDecodeError),
    #[error("Decompressed length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionResult {
    pub data: Vec<u8>,
    pub uncompressed_len: usize,
}

impl CompressionResult {
    /// Compressed size as a whole percentage of the original size.
    pub fn ratio_percent(&self) -> usize {
        if self.uncompressed_len == 0 {
            return 100;
        }
        100 * self.data.len() / self.uncompressed_len
    }
}

pub fn compress(data: &[u8], config: &RleConfig) -> Result<CompressionResult, CompressionError> {
    info!("Starting compression");
    debug!("Input data length: {}", data.len());
    debug!("Escape byte: {:#04x}, min run: {}", config.escape_byte, config.min_run);

    let encoded = rle::rle_encode(data, config)?;

    let result = CompressionResult {
        data: encoded,
        uncompressed_len: data.len(),
    };

    info!(
        "RLE compressed: {} bytes ({}% of original)",
        result.data.len(),
        result.ratio_percent()
    );
    if has_zero_pair(&result.data) {
        debug!("Compressed stream contains consecutive zero bytes");
    }

    Ok(result)
}

pub fn decompress(
    compressed: &CompressionResult,
    escape_byte: u8,
) -> Result<Vec<u8>, DecompressionError> {
    info!("Starting decompression");
    debug!("Input data length: {}", compressed.data.len());

    let decoded = rle::rle_decode(&compressed.data, escape_byte)?;

    if decoded.len() != compressed.uncompressed_len {
        error!(
            "Decompressed {} bytes but expected {}",
            decoded.len(),
            compressed.uncompressed_len
        );
        return Err(DecompressionError::LengthMismatch {
            expected: compressed.uncompressed_len,
            actual: decoded.len(),
        });
    }

    info!("Decompression completed successfully");
    Ok(decoded)
}

/// Reports whether `bytes` contains two consecutive `0x00` bytes, which some
/// load media cannot represent.
pub fn has_zero_pair(bytes: &[u8]) -> bool {
    bytes.windows(2).any(|pair| pair == [0x00, 0x00])
}
