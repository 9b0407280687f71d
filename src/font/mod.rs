//! # Glyph Tables
//!
//! Immutable bitmap fonts used by the glyph blitter.
//!
//! - ASCII: two fixed cells, 6x12 and 8x16, covering `' '..='~'`. One byte
//!   per row, most significant bit is the leftmost pixel.
//! - CJK: square 16/24/32 px bitmaps keyed by a two-byte code (GB2312 on
//!   the shipped panel firmware), see [`cjk`].
//!
//! Every bitmap is read through [`GlyphBitmap::bit`], so the MSB-first bit
//! order is decided in exactly one place ([`msb_bit`]).

mod ascii6x12;
mod ascii8x16;
pub mod cjk;

pub use cjk::{CjkFont, CjkGlyph, CjkSize, FontError, FontSet};

/// First and last printable code with an ASCII glyph.
pub const FIRST_PRINTABLE: u8 = b' ';
pub const LAST_PRINTABLE: u8 = b'~';

/// Tests pixel `col` of a row stored 8 pixels per byte, MSB first.
#[inline]
pub fn msb_bit(bytes: &[u8], col: usize) -> bool {
    match bytes.get(col / 8) {
        Some(byte) => byte & (0x80 >> (col % 8)) != 0,
        None => false,
    }
}

/// A monochrome glyph bitmap.
pub trait GlyphBitmap {
    fn width(&self) -> u16;
    fn height(&self) -> u16;
    fn bit(&self, row: u16, col: u16) -> bool;
}

/// The two ASCII cell sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsciiFont {
    /// 6 px wide, 12 px tall.
    Font6x12,
    /// 8 px wide, 16 px tall.
    Font8x16,
}

impl AsciiFont {
    /// Maps the firmware's size selector: 12 or 16.
    pub fn from_size(size: u8) -> Option<Self> {
        match size {
            12 => Some(AsciiFont::Font6x12),
            16 => Some(AsciiFont::Font8x16),
            _ => None,
        }
    }

    pub const fn width(self) -> u16 {
        match self {
            AsciiFont::Font6x12 => 6,
            AsciiFont::Font8x16 => 8,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            AsciiFont::Font6x12 => 12,
            AsciiFont::Font8x16 => 16,
        }
    }

    /// Looks up the glyph for `code`; `None` outside `' '..='~'`.
    pub fn glyph(self, code: u8) -> Option<AsciiGlyph> {
        if !(FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&code) {
            return None;
        }
        let idx = (code - FIRST_PRINTABLE) as usize;
        let mut rows = [0u8; 16];
        match self {
            AsciiFont::Font6x12 => rows[..12].copy_from_slice(ascii6x12::glyphs().get(idx)?),
            AsciiFont::Font8x16 => rows.copy_from_slice(ascii8x16::GLYPHS.get(idx)?),
        }
        Some(AsciiGlyph { font: self, rows })
    }
}

/// One ASCII glyph, copied out of its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiGlyph {
    font: AsciiFont,
    rows: [u8; 16],
}

impl AsciiGlyph {
    pub fn font(&self) -> AsciiFont {
        self.font
    }

    /// Row bytes, `height` of them.
    pub fn rows(&self) -> &[u8] {
        &self.rows[..self.font.height() as usize]
    }
}

impl GlyphBitmap for AsciiGlyph {
    fn width(&self) -> u16 {
        self.font.width()
    }

    fn height(&self) -> u16 {
        self.font.height()
    }

    fn bit(&self, row: u16, col: u16) -> bool {
        if row >= self.height() || col >= self.width() {
            return false;
        }
        msb_bit(&self.rows[row as usize..row as usize + 1], col as usize)
    }
}

/// Size selector for mixed ASCII/CJK layout.
///
/// The value is the line height, the CJK advance and the CJK table size;
/// ASCII glyphs use the 6x12 cell for 12 and the 8x16 cell otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSize {
    Px12,
    Px16,
    Px24,
    Px32,
}

impl TextSize {
    pub fn from_px(px: u8) -> Option<Self> {
        match px {
            12 => Some(TextSize::Px12),
            16 => Some(TextSize::Px16),
            24 => Some(TextSize::Px24),
            32 => Some(TextSize::Px32),
            _ => None,
        }
    }

    pub const fn px(self) -> u16 {
        match self {
            TextSize::Px12 => 12,
            TextSize::Px16 => 16,
            TextSize::Px24 => 24,
            TextSize::Px32 => 32,
        }
    }

    pub const fn ascii_font(self) -> AsciiFont {
        match self {
            TextSize::Px12 => AsciiFont::Font6x12,
            _ => AsciiFont::Font8x16,
        }
    }

    /// 12 px text still draws CJK glyphs from the 16 px table.
    pub const fn cjk_size(self) -> CjkSize {
        match self {
            TextSize::Px32 => CjkSize::S32,
            TextSize::Px24 => CjkSize::S24,
            _ => CjkSize::S16,
        }
    }
}

impl From<AsciiFont> for TextSize {
    fn from(font: AsciiFont) -> Self {
        match font {
            AsciiFont::Font6x12 => TextSize::Px12,
            AsciiFont::Font8x16 => TextSize::Px16,
        }
    }
}
