use log::trace;
use thiserror::Error;

/// Red-channel cutoff the RGBA threshold uses unless told otherwise.
pub const DEFAULT_BRIGHTNESS_THRESHOLD: u8 = 128;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PackError {
    #[error("Invalid dimensions: width {width} is not a multiple of 8")]
    InvalidDimensions { width: u32 },
    #[error("Invalid buffer length: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Read access to a rectangular grid of samples.
pub trait PixelSource {
    type Sample;

    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Sample at `(x, y)`. Coordinates must lie within `dimensions()`.
    fn get_pixel(&self, x: u32, y: u32) -> Self::Sample;
}

/// Row-major in-memory grid of samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<S> {
    width: u32,
    height: u32,
    samples: Vec<S>,
}

impl<S> PixelGrid<S> {
    /// Wraps `samples` as a `width` x `height` grid. Returns `LengthMismatch`
    /// when the buffer does not hold exactly one sample per pixel.
    pub fn new(width: u32, height: u32, samples: Vec<S>) -> Result<Self, PackError> {
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(PackError::LengthMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[S] {
        &self.samples
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&S> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.samples
            .get(y as usize * self.width as usize + x as usize)
    }
}

impl<S: Copy> PixelSource for PixelGrid<S> {
    type Sample = S;

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Panics when `(x, y)` is outside the grid; use `get` for checked access.
    fn get_pixel(&self, x: u32, y: u32) -> S {
        self.samples[y as usize * self.width as usize + x as usize]
    }
}

/// "On" when the red channel of an RGBA sample is brighter than `threshold`.
pub fn bright_red(threshold: u8) -> impl Fn(&[u8; 4]) -> bool {
    move |pixel: &[u8; 4]| pixel[0] > threshold
}

/// "On" for any non-zero palette index or grayscale value.
pub fn nonzero(sample: &u8) -> bool {
    *sample != 0
}

/// Packs a monochrome image into bytes, 8 pixels per byte.
///
/// Rows are emitted top to bottom and each row left to right. Bit 7 of every
/// byte holds the leftmost of its 8 pixels.
///
/// # Arguments
/// * `source` - Image to pack; its width must be a multiple of 8
/// * `is_on` - Decides whether a sample is a set pixel
///
/// # Returns
/// * `Result<Vec<u8>, PackError>` - `height * width / 8` bytes or error
pub fn pack<P, F>(source: &P, is_on: F) -> Result<Vec<u8>, PackError>
where
    P: PixelSource + ?Sized,
    F: Fn(&P::Sample) -> bool,
{
    let (width, height) = source.dimensions();
    if width % 8 != 0 {
        return Err(PackError::InvalidDimensions { width });
    }

    let bytes_per_row = width / 8;
    let mut packed = Vec::with_capacity(bytes_per_row as usize * height as usize);

    for y in 0..height {
        for byte_x in 0..bytes_per_row {
            let mut byte = 0u8;
            for bit_x in 0..8 {
                if is_on(&source.get_pixel(byte_x * 8 + bit_x, y)) {
                    byte |= 0x80 >> bit_x;
                }
            }
            packed.push(byte);
        }
    }

    trace!("Packed {}x{} pixels into {} bytes", width, height, packed.len());
    Ok(packed)
}

/// Expands packed bytes back into a grid of set/unset pixels.
pub fn unpack(bytes: &[u8], width: u32, height: u32) -> Result<PixelGrid<bool>, PackError> {
    if width % 8 != 0 {
        return Err(PackError::InvalidDimensions { width });
    }

    let expected = (width / 8) as usize * height as usize;
    if bytes.len() != expected {
        return Err(PackError::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }

    let pixels = bytes
        .iter()
        .flat_map(|&byte| (0..8).map(move |bit_x| byte & (0x80 >> bit_x) != 0))
        .collect();

    PixelGrid::new(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(bits: &[bool]) -> PixelGrid<bool> {
        PixelGrid::new(bits.len() as u32, 1, bits.to_vec()).unwrap()
    }

    #[test]
    fn test_pack_msb_is_leftmost() {
        let grid = row(&[true, true, false, false, true, false, false, true]);
        assert_eq!(pack(&grid, |&on| on).unwrap(), vec![0xC9]);
    }

    #[test]
    fn test_pack_row_major_order() {
        // 16x2: first row 0xFF 0x00, second row 0x01 0x80
        let mut samples = vec![false; 32];
        samples[..8].fill(true);
        samples[16 + 7] = true;
        samples[16 + 8] = true;
        let grid = PixelGrid::new(16, 2, samples).unwrap();

        assert_eq!(pack(&grid, |&on| on).unwrap(), vec![0xFF, 0x00, 0x01, 0x80]);
    }

    #[test]
    fn test_pack_rejects_bad_width() {
        let grid = PixelGrid::new(10, 1, vec![true; 10]).unwrap();
        assert_eq!(
            pack(&grid, |&on| on),
            Err(PackError::InvalidDimensions { width: 10 })
        );
    }

    #[test]
    fn test_pack_empty_image() {
        let grid: PixelGrid<bool> = PixelGrid::new(8, 0, vec![]).unwrap();
        assert!(pack(&grid, |&on| on).unwrap().is_empty());
    }

    #[test]
    fn test_pack_with_thresholds() {
        let rgba = PixelGrid::new(
            8,
            1,
            vec![
                [255u8, 255, 255, 255],
                [128, 0, 0, 255],
                [129, 0, 0, 255],
                [0, 255, 255, 255],
                [200, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [255, 0, 0, 255],
            ],
        )
        .unwrap();
        assert_eq!(
            pack(&rgba, bright_red(DEFAULT_BRIGHTNESS_THRESHOLD)).unwrap(),
            vec![0b1010_1001]
        );

        let indexed = PixelGrid::new(8, 1, vec![0u8, 3, 0, 0, 0, 0, 1, 0]).unwrap();
        assert_eq!(pack(&indexed, nonzero).unwrap(), vec![0b0100_0010]);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let bits: Vec<bool> = (0..48).map(|i| i % 3 == 0 || i % 7 == 0).collect();
        let grid = PixelGrid::new(16, 3, bits).unwrap();
        let packed = pack(&grid, |&on| on).unwrap();
        assert_eq!(unpack(&packed, 16, 3).unwrap(), grid);
    }

    #[test]
    fn test_unpack_length_mismatch() {
        assert_eq!(
            unpack(&[0xFF, 0x00, 0x11], 16, 1),
            Err(PackError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_grid_rejects_wrong_sample_count() {
        assert!(matches!(
            PixelGrid::new(8, 2, vec![0u8; 15]),
            Err(PackError::LengthMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }
}
