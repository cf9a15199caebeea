use serde::{Deserialize, Serialize};

use crate::compression::rle::RleEncodeError;

pub const DEFAULT_ESCAPE_BYTE: u8 = 0x01;
pub const DEFAULT_MIN_RUN: u32 = 4;

/// Longest run a single token can describe (the count field is one byte).
pub const MAX_RUN: usize = 255;

/// Parameters shared by the RLE encoder and decoder.
///
/// `min_run` only steers the encoder; a stream decodes with `escape_byte` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RleConfig {
    pub escape_byte: u8,
    pub min_run: u32,
}

impl RleConfig {
    pub fn new(escape_byte: u8, min_run: u32) -> Self {
        Self {
            escape_byte,
            min_run,
        }
    }

    pub fn validate(&self) -> Result<(), RleEncodeError> {
        if self.min_run < 2 {
            return Err(RleEncodeError::InvalidParameter {
                min_run: self.min_run,
            });
        }
        Ok(())
    }
}

impl Default for RleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ESCAPE_BYTE, DEFAULT_MIN_RUN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RleConfig::default();
        assert_eq!(config.escape_byte, 0x01);
        assert_eq!(config.min_run, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_min_run_below_two_rejected() {
        for min_run in [0, 1] {
            assert!(matches!(
                RleConfig::new(0x01, min_run).validate(),
                Err(RleEncodeError::InvalidParameter { min_run: m }) if m == min_run
            ));
        }
        assert!(RleConfig::new(0xFF, 2).validate().is_ok());
    }
}
