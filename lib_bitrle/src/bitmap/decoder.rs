use log::{debug, error, info};
use thiserror::Error;

use super::format::{Bitmap, BitmapHeader, MAGIC_HEADER};
use crate::compression::{decompress, CompressionResult, DecompressionError};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid format or header")]
    InvalidHeader,
    #[error("Inconsistent header: {width}x{height} cannot hold {uncompressed_len} packed bytes")]
    InconsistentHeader {
        width: u16,
        height: u16,
        uncompressed_len: u32,
    },
    #[error("Failed to parse bitmap header")]
    HeaderParsingFailed(#[from] bincode::Error),
    #[error("Decompression failed")]
    DecompressionFailed(#[from] DecompressionError),
}

pub fn decode(encoded_data: &[u8]) -> Result<Bitmap, DecodeError> {
    // Check the magic number
    if encoded_data.len() < Bitmap::MAGIC_SIZE || !encoded_data.starts_with(&MAGIC_HEADER) {
        error!("Invalid format or missing magic number in header");
        return Err(DecodeError::InvalidHeader);
    }
    debug!("Magic number validated successfully");
    let rest = &encoded_data[Bitmap::MAGIC_SIZE..];

    // Read header
    let header: BitmapHeader = bincode::deserialize(rest).map_err(|e| {
        error!("Failed to parse header: {}", e);
        DecodeError::HeaderParsingFailed(e)
    })?;
    let header_size = bincode::serialized_size(&header)? as usize;
    debug!("Header read: {:?}", header);

    let expected_len = header.width as usize / 8 * header.height as usize;
    if header.width % 8 != 0 || header.uncompressed_len as usize != expected_len {
        error!(
            "Header {}x{} does not match {} packed bytes",
            header.width, header.height, header.uncompressed_len
        );
        return Err(DecodeError::InconsistentHeader {
            width: header.width,
            height: header.height,
            uncompressed_len: header.uncompressed_len,
        });
    }

    // The remaining data is the RLE token stream
    let compressed_data = &rest[header_size..];
    debug!("Compressed data length: {}", compressed_data.len());

    let data = decompress(
        &CompressionResult {
            data: compressed_data.to_vec(),
            uncompressed_len: header.uncompressed_len as usize,
        },
        header.config.escape_byte,
    )?;
    info!("Decompression successful");

    Ok(Bitmap::new(header.width, header.height, header.config, data))
}
