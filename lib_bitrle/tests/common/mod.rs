#![allow(dead_code)]

use lib_bitrle::PixelGrid;

pub const SPRITE_WIDTH: u32 = 16;
pub const SPRITE_HEIGHT: u32 = 8;

// 16x8 block glyph, '#' = set pixel
pub const SPRITE: [&str; 8] = [
    "################",
    "#..............#",
    "#.####....####.#",
    "#.#..#....#..#.#",
    "#.####....####.#",
    "#..............#",
    "#..............#",
    "################",
];

pub const SPRITE_PACKED: [u8; 16] = [
    0xFF, 0xFF, 0x80, 0x01, 0xBC, 0x3D, 0xA4, 0x25, 0xBC, 0x3D, 0x80, 0x01, 0x80, 0x01, 0xFF,
    0xFF,
];

/// Sprite as RGBA samples: white for set pixels, black otherwise.
pub fn sprite_rgba() -> PixelGrid<[u8; 4]> {
    let samples = SPRITE
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| {
            if c == '#' {
                [255, 255, 255, 255]
            } else {
                [0, 0, 0, 255]
            }
        })
        .collect();
    PixelGrid::new(SPRITE_WIDTH, SPRITE_HEIGHT, samples).unwrap()
}

/// Deterministic byte noise drawn from `alphabet`.
pub fn noise(len: usize, seed: u32, alphabet: &[u8]) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            alphabet[(state >> 16) as usize % alphabet.len()]
        })
        .collect()
}

/// Bytes with runs of assorted lengths, including long ones over 255.
pub fn runs(seed: u32) -> Vec<u8> {
    let values = noise(40, seed, &[0x00, 0x01, 0x02, 0xFF, 0x7E]);
    let lengths = noise(40, seed.wrapping_add(7), &[1, 2, 3, 4, 5, 17, 200, 255]);
    let mut data = Vec::new();
    for (i, (&value, &len)) in values.iter().zip(lengths.iter()).enumerate() {
        let extra = if i % 9 == 0 { 300 } else { 0 };
        data.extend(std::iter::repeat(value).take(len as usize + extra));
    }
    data
}
