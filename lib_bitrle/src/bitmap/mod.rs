pub mod decoder;
pub mod encoder;
pub mod format;
pub mod packer;

pub use decoder::decode;
pub use encoder::encode;
