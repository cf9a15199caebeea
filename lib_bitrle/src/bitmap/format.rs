use serde::{Deserialize, Serialize};

use super::packer::{unpack, PackError, PixelGrid};
use crate::config::RleConfig;

pub const MAGIC_HEADER: [u8; 4] = *b"MRL1";

/// Metadata written (bincode) between the magic number and the token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitmapHeader {
    pub width: u16,
    pub height: u16,
    pub config: RleConfig,
    pub uncompressed_len: u32,
}

/// A decoded monochrome bitmap in packed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub magic: [u8; 4],
    pub width: u16,
    pub height: u16,
    pub config: RleConfig,
    pub data: Vec<u8>,
}

impl Bitmap {
    pub const MAGIC_SIZE: usize = 4;

    pub fn new(width: u16, height: u16, config: RleConfig, data: Vec<u8>) -> Self {
        Self {
            magic: MAGIC_HEADER,
            width,
            height,
            config,
            data,
        }
    }

    pub fn bytes_per_row(&self) -> usize {
        self.width as usize / 8
    }

    /// Expands the packed bytes into one `bool` per pixel.
    pub fn pixels(&self) -> Result<PixelGrid<bool>, PackError> {
        unpack(&self.data, self.width.into(), self.height.into())
    }
}
