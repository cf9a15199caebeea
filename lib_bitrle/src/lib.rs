pub mod bitmap;
pub mod compression;
pub mod config;

use log::*;
use std::io::Write;

pub use crate::bitmap::format::{Bitmap, BitmapHeader};
pub use crate::bitmap::packer::{bright_red, nonzero, pack, unpack, PixelGrid, PixelSource};
pub use crate::bitmap::{decode, encode};
pub use crate::compression::rle::{rle_decode, rle_encode};
pub use crate::config::RleConfig;

/// Routes the crate's log output to stderr. Fails if a logger is already installed.
pub fn init_logging() -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_bitrle"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()
}
