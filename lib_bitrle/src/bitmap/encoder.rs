use log::{debug, error, info};
use thiserror::Error;

use super::format::{BitmapHeader, MAGIC_HEADER};
use super::packer::{pack, PackError, PixelSource};
use crate::compression::{compress, CompressionError};
use crate::config::RleConfig;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Failed to pack pixel data")]
    PackingFailed(#[from] PackError),
    #[error("Failed to compress bitmap data")]
    CompressionFailed(#[from] CompressionError),
    #[error("Dimensions {width}x{height} exceed the 65535 pixel limit")]
    DimensionsTooLarge { width: u32, height: u32 },
    #[error("Failed to serialize header")]
    HeaderSerializationFailed(#[from] bincode::Error),
}

pub fn encode<P, F>(source: &P, is_on: F, config: &RleConfig) -> Result<Vec<u8>, EncodingError>
where
    P: PixelSource + ?Sized,
    F: Fn(&P::Sample) -> bool,
{
    info!("Starting encoding");

    let (width, height) = source.dimensions();
    let (Ok(header_width), Ok(header_height)) = (u16::try_from(width), u16::try_from(height))
    else {
        error!("Image dimensions {}x{} do not fit the header", width, height);
        return Err(EncodingError::DimensionsTooLarge { width, height });
    };

    // Step 1: Pack pixels into bytes
    let packed = pack(source, is_on)?;
    debug!("Packed {}x{} pixels into {} bytes", width, height, packed.len());

    // Step 2: RLE compression
    let compressed = compress(&packed, config)?;

    // Step 3: Write header and payload
    let header = BitmapHeader {
        width: header_width,
        height: header_height,
        config: *config,
        uncompressed_len: packed.len() as u32,
    };
    let header_bytes = bincode::serialize(&header)?;
    debug!("Header written: {:?} ({} bytes)", header, header_bytes.len());

    let mut encoded_data =
        Vec::with_capacity(MAGIC_HEADER.len() + header_bytes.len() + compressed.data.len());
    encoded_data.extend_from_slice(&MAGIC_HEADER);
    encoded_data.extend_from_slice(&header_bytes);
    encoded_data.extend_from_slice(&compressed.data);

    info!("Encoding process completed successfully");
    Ok(encoded_data)
}
