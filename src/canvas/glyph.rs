//! Glyph blitting for ASCII and CJK bitmaps.

use core::fmt;

use log::trace;

use super::Canvas;
use crate::font::{AsciiFont, CjkSize, GlyphBitmap};
use crate::framebuffer::{Color, Surface};

/// How the clear bits of a glyph are composited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphMode {
    /// Clear bits are painted with the background color.
    #[default]
    Opaque,
    /// Clear bits leave the destination untouched.
    Transparent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Outside `' '..='~'`.
    Unprintable(u8),
    /// No CJK table of this size is loaded.
    NoTable(CjkSize),
    /// The table has no glyph for this code.
    MissingGlyph([u8; 2]),
    /// The glyph origin is past the right or bottom edge.
    OffSurface,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unprintable(code) => write!(f, "unprintable code {:#04X}", code),
            SkipReason::NoTable(size) => write!(f, "no {}px CJK table", size.px()),
            SkipReason::MissingGlyph(index) => {
                write!(f, "no glyph for {:02X}{:02X}", index[0], index[1])
            }
            SkipReason::OffSurface => write!(f, "origin off surface"),
        }
    }
}

/// Result of a glyph draw. Nothing is ever an error: a skipped glyph just
/// leaves the surface alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn,
    Skipped(SkipReason),
}

impl DrawOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, DrawOutcome::Drawn)
    }
}

impl<S: Surface + ?Sized> Canvas<'_, S> {
    /// Draws one ASCII glyph with its top-left corner at `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        fg: Color,
        bg: Color,
        code: u8,
        font: AsciiFont,
        mode: GlyphMode,
    ) -> DrawOutcome {
        let glyph = match font.glyph(code) {
            Some(glyph) => glyph,
            None => return self.skipped(SkipReason::Unprintable(code)),
        };
        if x >= self.width() || y >= self.height() {
            return self.skipped(SkipReason::OffSurface);
        }
        self.blit(x, y, fg, bg, &glyph, mode);
        DrawOutcome::Drawn
    }

    /// Draws the CJK glyph for the two-byte `code` from the `size` table.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_cjk(
        &mut self,
        x: u16,
        y: u16,
        fg: Color,
        bg: Color,
        code: [u8; 2],
        size: CjkSize,
        mode: GlyphMode,
    ) -> DrawOutcome {
        let fonts = self.fonts;
        let table = match fonts.cjk(size) {
            Some(table) => table,
            None => return self.skipped(SkipReason::NoTable(size)),
        };
        let glyph = match table.glyph(code) {
            Some(glyph) => glyph,
            None => return self.skipped(SkipReason::MissingGlyph(code)),
        };
        if x >= self.width() || y >= self.height() {
            return self.skipped(SkipReason::OffSurface);
        }
        self.blit(x, y, fg, bg, &glyph, mode);
        DrawOutcome::Drawn
    }

    fn skipped(&self, reason: SkipReason) -> DrawOutcome {
        trace!("glyph skipped: {}", reason);
        DrawOutcome::Skipped(reason)
    }

    /// Per-pixel clipped blit; a row or column past the edge ends that loop.
    fn blit<B: GlyphBitmap>(&mut self, x: u16, y: u16, fg: Color, bg: Color, bitmap: &B, mode: GlyphMode) {
        let (w, h) = (self.width() as u32, self.height() as u32);
        for row in 0..bitmap.height() {
            let yy = y as u32 + row as u32;
            if yy >= h {
                break;
            }
            for col in 0..bitmap.width() {
                let xx = x as u32 + col as u32;
                if xx >= w {
                    break;
                }
                if bitmap.bit(row, col) {
                    self.surface.set_pixel(xx as u16, yy as u16, fg);
                } else if mode == GlyphMode::Opaque {
                    self.surface.set_pixel(xx as u16, yy as u16, bg);
                }
            }
        }
    }
}
