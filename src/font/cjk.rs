//! # CJK glyph tables
//!
//! Square ideographic bitmaps keyed by a two-byte code. A table is built
//! once from a list of glyphs, sorted by code and searched with a binary
//! search; a code that is not in the table simply has no glyph.
//!
//! Bitmaps are row-major, 8 pixels per byte, most significant bit first,
//! `size / 8` bytes per row.

use alloc::vec::Vec;
use core::fmt;

use log::debug;

use super::{msb_bit, GlyphBitmap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CjkSize {
    S16,
    S24,
    S32,
}

impl CjkSize {
    pub fn from_px(px: u8) -> Option<Self> {
        match px {
            16 => Some(CjkSize::S16),
            24 => Some(CjkSize::S24),
            32 => Some(CjkSize::S32),
            _ => None,
        }
    }

    /// Side length in pixels.
    pub const fn px(self) -> u16 {
        match self {
            CjkSize::S16 => 16,
            CjkSize::S24 => 24,
            CjkSize::S32 => 32,
        }
    }

    pub const fn bytes_per_row(self) -> usize {
        self.px() as usize / 8
    }

    pub const fn bitmap_len(self) -> usize {
        self.bytes_per_row() * self.px() as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontError {
    /// A bitmap does not hold exactly `size * size / 8` bytes.
    BadBitmapLength {
        index: [u8; 2],
        expected: usize,
        got: usize,
    },
    /// Two glyphs share one code.
    DuplicateIndex([u8; 2]),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::BadBitmapLength {
                index,
                expected,
                got,
            } => write!(
                f,
                "glyph {:02X}{:02X}: bitmap is {} bytes, expected {}",
                index[0], index[1], got, expected
            ),
            FontError::DuplicateIndex(index) => {
                write!(f, "glyph {:02X}{:02X} appears twice", index[0], index[1])
            }
        }
    }
}

/// A table entry: code plus bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CjkGlyph {
    pub index: [u8; 2],
    pub mask: &'static [u8],
}

impl CjkGlyph {
    pub const fn new(index: [u8; 2], mask: &'static [u8]) -> Self {
        Self { index, mask }
    }
}

/// A glyph bitmap found in a table, ready to blit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CjkBitmap {
    size: CjkSize,
    mask: &'static [u8],
}

impl CjkBitmap {
    pub fn size(&self) -> CjkSize {
        self.size
    }
}

impl GlyphBitmap for CjkBitmap {
    fn width(&self) -> u16 {
        self.size.px()
    }

    fn height(&self) -> u16 {
        self.size.px()
    }

    fn bit(&self, row: u16, col: u16) -> bool {
        if row >= self.size.px() || col >= self.size.px() {
            return false;
        }
        let stride = self.size.bytes_per_row();
        let start = row as usize * stride;
        msb_bit(&self.mask[start..start + stride], col as usize)
    }
}

/// An immutable table of same-size CJK glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CjkFont {
    size: CjkSize,
    glyphs: Vec<CjkGlyph>,
}

impl CjkFont {
    pub fn new<I>(size: CjkSize, glyphs: I) -> Result<Self, FontError>
    where
        I: IntoIterator<Item = CjkGlyph>,
    {
        let mut glyphs: Vec<CjkGlyph> = glyphs.into_iter().collect();
        for glyph in &glyphs {
            if glyph.mask.len() != size.bitmap_len() {
                return Err(FontError::BadBitmapLength {
                    index: glyph.index,
                    expected: size.bitmap_len(),
                    got: glyph.mask.len(),
                });
            }
        }
        glyphs.sort_unstable_by_key(|g| g.index);
        if let Some(pair) = glyphs.windows(2).find(|w| w[0].index == w[1].index) {
            return Err(FontError::DuplicateIndex(pair[0].index));
        }
        debug!("font: CJK {}px table with {} glyphs", size.px(), glyphs.len());
        Ok(Self { size, glyphs })
    }

    pub fn size(&self) -> CjkSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyph(&self, index: [u8; 2]) -> Option<CjkBitmap> {
        let pos = self.glyphs.binary_search_by_key(&index, |g| g.index).ok()?;
        Some(CjkBitmap {
            size: self.size,
            mask: self.glyphs[pos].mask,
        })
    }

    pub fn contains(&self, index: [u8; 2]) -> bool {
        self.glyph(index).is_some()
    }

    /// Codes in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = [u8; 2]> + '_ {
        self.glyphs.iter().map(|g| g.index)
    }
}

/// GB2312 code of 中.
pub const ZHONG: [u8; 2] = [0xD6, 0xD0];

#[rustfmt::skip]
static ZHONG_16: [u8; 32] = [
    0x00, 0x00,
    0x0F, 0xF0,
    0x08, 0x10,
    0x08, 0x10,
    0x7F, 0xFE,
    0x08, 0x10,
    0x08, 0x10,
    0x7F, 0xFE,
    0x08, 0x10,
    0x08, 0x10,
    0x08, 0x10,
    0x08, 0x10,
    0x0F, 0xF0,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
];

/// The compiled-in 16x16 glyphs.
pub static BUILTIN_16: [CjkGlyph; 1] = [CjkGlyph::new(ZHONG, &ZHONG_16)];

/// The CJK tables available to a canvas, one optional table per size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSet {
    cjk16: Option<CjkFont>,
    cjk24: Option<CjkFont>,
    cjk32: Option<CjkFont>,
}

impl FontSet {
    /// No CJK tables; ASCII still renders.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in 16x16 table.
    pub fn builtin() -> Self {
        match CjkFont::new(CjkSize::S16, BUILTIN_16.iter().copied()) {
            Ok(font) => Self::empty().with_cjk(font),
            Err(e) => {
                log::error!("font: builtin CJK table rejected: {}", e);
                Self::empty()
            }
        }
    }

    /// Installs `font` in the slot for its size, replacing any previous one.
    pub fn with_cjk(mut self, font: CjkFont) -> Self {
        let slot = match font.size() {
            CjkSize::S16 => &mut self.cjk16,
            CjkSize::S24 => &mut self.cjk24,
            CjkSize::S32 => &mut self.cjk32,
        };
        *slot = Some(font);
        self
    }

    pub fn cjk(&self, size: CjkSize) -> Option<&CjkFont> {
        match size {
            CjkSize::S16 => self.cjk16.as_ref(),
            CjkSize::S24 => self.cjk24.as_ref(),
            CjkSize::S32 => self.cjk32.as_ref(),
        }
    }

    pub fn has_cjk(&self) -> bool {
        self.cjk16.is_some() || self.cjk24.is_some() || self.cjk32.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SOLID_24: [u8; 72] = [0xFF; 72];
    static EMPTY_24: [u8; 72] = [0; 72];
    static SHORT: [u8; 10] = [0; 10];

    #[test_log::test]
    fn lookup_is_exact_on_both_bytes() {
        let fonts = FontSet::builtin();
        let font = fonts.cjk(CjkSize::S16).unwrap();
        assert!(font.contains(ZHONG));
        assert!(!font.contains([0xD6, 0xD1]));
        assert!(!font.contains([0xD5, 0xD0]));
        assert!(fonts.cjk(CjkSize::S24).is_none());
    }

    #[test_log::test]
    fn builtin_zhong_bitmap() {
        let fonts = FontSet::builtin();
        let glyph = fonts.cjk(CjkSize::S16).unwrap().glyph(ZHONG).unwrap();
        assert_eq!((glyph.width(), glyph.height()), (16, 16));
        // row 4 is the first full bar: 0x7F 0xFE
        assert!(!glyph.bit(4, 0));
        assert!((1..15).all(|col| glyph.bit(4, col)));
        assert!(!glyph.bit(4, 15));
        assert!(!glyph.bit(0, 8));
    }

    #[test_log::test]
    fn tables_are_sorted_for_lookup() {
        let font = CjkFont::new(
            CjkSize::S24,
            [
                CjkGlyph::new([0xCE, 0xC4], &SOLID_24),
                CjkGlyph::new([0xB2, 0xE2], &EMPTY_24),
                CjkGlyph::new([0xCA, 0xD0], &SOLID_24),
            ],
        )
        .unwrap();
        let order: Vec<[u8; 2]> = font.indices().collect();
        assert_eq!(order, [[0xB2, 0xE2], [0xCA, 0xD0], [0xCE, 0xC4]]);
        assert!(font.glyph([0xB2, 0xE2]).map(|g| !g.bit(0, 0)).unwrap());
        assert!(font.glyph([0xCE, 0xC4]).map(|g| g.bit(23, 23)).unwrap());
    }

    #[test_log::test]
    fn rejects_malformed_tables() {
        assert_eq!(
            CjkFont::new(CjkSize::S24, [CjkGlyph::new([0xB0, 0xA1], &SHORT)]),
            Err(FontError::BadBitmapLength {
                index: [0xB0, 0xA1],
                expected: 72,
                got: 10,
            })
        );
        assert_eq!(
            CjkFont::new(
                CjkSize::S24,
                [
                    CjkGlyph::new([0xB0, 0xA1], &SOLID_24),
                    CjkGlyph::new([0xB0, 0xA1], &EMPTY_24),
                ]
            ),
            Err(FontError::DuplicateIndex([0xB0, 0xA1]))
        );
    }

    #[test_log::test]
    fn font_set_slots_by_size() {
        let font24 = CjkFont::new(CjkSize::S24, [CjkGlyph::new(ZHONG, &SOLID_24)]).unwrap();
        let fonts = FontSet::empty().with_cjk(font24);
        assert!(fonts.has_cjk());
        assert!(fonts.cjk(CjkSize::S16).is_none());
        assert_eq!(fonts.cjk(CjkSize::S24).map(CjkFont::len), Some(1));
        assert!(!FontSet::empty().has_cjk());
    }
}
