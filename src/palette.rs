//! Display palette shared by the reader, terminal renderer and SVG
//! exporter.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::board::MAX_COLORS;

/// Display entry for one puzzle color: canonical input letter, a
/// monochrome fallback glyph, and foreground/background RGB.
pub struct PaletteEntry {
    pub input_char: char,
    pub display_char: char,
    pub fg_rgb: (u8, u8, u8),
    pub bg_rgb: (u8, u8, u8),
}

pub const PALETTE: [PaletteEntry; MAX_COLORS] = [
    PaletteEntry { input_char: 'R', display_char: 'o', fg_rgb: (0xff, 0x00, 0x00), bg_rgb: (0x72, 0x39, 0x39) }, // red
    PaletteEntry { input_char: 'B', display_char: '+', fg_rgb: (0x00, 0x00, 0xff), bg_rgb: (0x39, 0x39, 0x72) }, // blue
    PaletteEntry { input_char: 'Y', display_char: '@', fg_rgb: (0xee, 0xee, 0x00), bg_rgb: (0x6e, 0x6e, 0x39) }, // yellow
    PaletteEntry { input_char: 'G', display_char: '*', fg_rgb: (0x00, 0x81, 0x00), bg_rgb: (0x39, 0x55, 0x39) }, // green
    PaletteEntry { input_char: 'O', display_char: 'x', fg_rgb: (0xff, 0x80, 0x00), bg_rgb: (0x72, 0x55, 0x39) }, // orange
    PaletteEntry { input_char: 'C', display_char: '%', fg_rgb: (0x00, 0xff, 0xff), bg_rgb: (0x39, 0x72, 0x72) }, // cyan
    PaletteEntry { input_char: 'M', display_char: '?', fg_rgb: (0xff, 0x00, 0xff), bg_rgb: (0x72, 0x39, 0x72) }, // magenta
    PaletteEntry { input_char: 'm', display_char: 'v', fg_rgb: (0xa5, 0x2a, 0x2a), bg_rgb: (0x5f, 0x42, 0x42) }, // maroon
    PaletteEntry { input_char: 'P', display_char: '^', fg_rgb: (0x80, 0x00, 0x80), bg_rgb: (0x55, 0x39, 0x55) }, // purple
    PaletteEntry { input_char: 'A', display_char: '=', fg_rgb: (0xa6, 0xa6, 0xa6), bg_rgb: (0x5f, 0x5e, 0x5f) }, // gray
    PaletteEntry { input_char: 'W', display_char: '~', fg_rgb: (0xff, 0xff, 0xff), bg_rgb: (0x72, 0x72, 0x72) }, // white
    PaletteEntry { input_char: 'g', display_char: '-', fg_rgb: (0x00, 0xff, 0x00), bg_rgb: (0x39, 0x72, 0x39) }, // bright green
    PaletteEntry { input_char: 'T', display_char: '$', fg_rgb: (0xbd, 0xb7, 0x6b), bg_rgb: (0x64, 0x62, 0x51) }, // tan
    PaletteEntry { input_char: 'b', display_char: '"', fg_rgb: (0x00, 0x00, 0x8b), bg_rgb: (0x39, 0x39, 0x58) }, // dark blue
    PaletteEntry { input_char: 'c', display_char: '&', fg_rgb: (0x00, 0x81, 0x80), bg_rgb: (0x39, 0x55, 0x55) }, // dark cyan
    PaletteEntry { input_char: 'p', display_char: '.', fg_rgb: (0xff, 0x14, 0x93), bg_rgb: (0x72, 0x41, 0x5a) }, // pink
];

lazy_static! {
    static ref COLOR_IDS: HashMap<char, usize> = PALETTE
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.input_char, i))
        .collect();
}

/// Palette index for a legacy-dialect input letter.
pub fn color_id(c: char) -> Option<usize> {
    COLOR_IDS.get(&c).copied()
}

pub fn hex(rgb: (u8, u8, u8)) -> String {
    format!("{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2)
}
