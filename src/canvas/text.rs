//! # Text layout
//!
//! Byte-string rendering on top of the glyph blitter:
//!
//! - `show_string`: printable ASCII in one font, stops at the first
//!   non-printable byte or the right edge
//! - `show_num` / `show_2num`: fixed-width decimal numbers, with and
//!   without leading-zero blanking
//! - `show_str`: mixed ASCII/CJK text with `'\r'` line breaks
//! - `show_str_centered`: `show_str` started at an approximately centered x
//! - `TextWriter`: `core::fmt::Write` front end for `show_str` layout
//!
//! In mixed text a byte above `0x80` is the lead byte of a two-byte CJK
//! code. Layout stops as soon as the next glyph cell does not fit in the
//! remaining width or height; it does not draw partial glyphs at the edge.

use core::fmt;

use super::{Canvas, GlyphMode};
use crate::font::{AsciiFont, TextSize, FIRST_PRINTABLE, LAST_PRINTABLE};
use crate::framebuffer::{Color, Surface};

/// Where layout stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: u16,
    pub y: u16,
}

fn to_u16(v: u32) -> u16 {
    v.min(u16::MAX as u32) as u16
}

/// X of cell `t` in a row of `w`-wide cells, if it is still addressable.
fn cell_x(x: u16, w: u16, t: u32) -> Option<u16> {
    u16::try_from(x as u32 + w as u32 * t).ok()
}

/// Stand-in for a non-ASCII `char` in `TextWriter`: one cell, no glyph.
const NO_GLYPH: u8 = 0x7F;

/// The bytes before the first NUL.
fn until_nul(text: &[u8]) -> &[u8] {
    match text.iter().position(|&b| b == 0) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Mixed-script layout state, kept between chunks by `TextWriter`.
#[derive(Debug, Clone, Copy)]
struct Layout {
    origin_x: u32,
    x: u32,
    y: u32,
    size: TextSize,
    fg: Color,
    bg: Color,
    mode: GlyphMode,
    lead: Option<u8>,
    stopped: bool,
}

impl Layout {
    fn new(x: u16, y: u16, fg: Color, bg: Color, size: TextSize, mode: GlyphMode) -> Self {
        Self {
            origin_x: x as u32,
            x: x as u32,
            y: y as u32,
            size,
            fg,
            bg,
            mode,
            lead: None,
            stopped: false,
        }
    }

    fn cursor(&self) -> Cursor {
        Cursor {
            x: to_u16(self.x),
            y: to_u16(self.y),
        }
    }

    /// True when a `w`-wide cell at the cursor still fits on the surface.
    fn fits(&self, w: u32, width: u16, height: u16) -> bool {
        self.x + w <= width as u32 && self.y + self.size.px() as u32 <= height as u32
    }

    fn feed<S: Surface + ?Sized>(&mut self, canvas: &mut Canvas<'_, S>, bytes: &[u8]) {
        for &b in bytes {
            if self.stopped {
                return;
            }
            self.step(canvas, b);
        }
    }

    fn step<S: Surface + ?Sized>(&mut self, canvas: &mut Canvas<'_, S>, b: u8) {
        let (width, height) = (canvas.width(), canvas.height());

        if let Some(lead) = self.lead.take() {
            let advance = self.size.px() as u32;
            if !self.fits(advance, width, height) {
                self.stopped = true;
                return;
            }
            canvas.draw_cjk(
                to_u16(self.x),
                to_u16(self.y),
                self.fg,
                self.bg,
                [lead, b],
                self.size.cjk_size(),
                self.mode,
            );
            self.x += advance;
            return;
        }

        match b {
            0 => self.stopped = true,
            b if b > 0x80 => self.lead = Some(b),
            b'\r' => {
                self.x = self.origin_x;
                self.y = self.y.saturating_add(self.size.px() as u32);
                if self.y >= height as u32 {
                    self.stopped = true;
                }
            }
            _ => {
                let font = self.size.ascii_font();
                let advance = font.width() as u32;
                if !self.fits(advance, width, height) {
                    self.stopped = true;
                    return;
                }
                canvas.draw_char(
                    to_u16(self.x),
                    to_u16(self.y),
                    self.fg,
                    self.bg,
                    b,
                    font,
                    self.mode,
                );
                self.x += advance;
            }
        }
    }
}

impl<'a, S: Surface + ?Sized> Canvas<'a, S> {
    /// Printable ASCII in the pen/background colors.
    ///
    /// Stops at the first byte outside `' '..='~'` (a NUL terminator
    /// included) or once the next cell would start at or past the right
    /// edge.
    pub fn show_string(&mut self, x: u16, y: u16, font: AsciiFont, text: &[u8], mode: GlyphMode) {
        let (fg, bg) = self.colors();
        let width = self.width() as u32;
        let mut cx = x as u32;
        for &b in text {
            if !(FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&b) {
                break;
            }
            self.draw_char(to_u16(cx), y, fg, bg, b, font, mode);
            cx += font.width() as u32;
            if cx >= width {
                break;
            }
        }
    }

    /// `len` decimal digits of `value`, leading zeros shown as blank cells.
    /// The last digit is always drawn. Always opaque.
    pub fn show_num(&mut self, x: u16, y: u16, value: u32, len: u8, font: AsciiFont) {
        let (fg, bg) = self.colors();
        let mut shown = false;
        for t in 0..len as u32 {
            let digit = nth_digit(value, len as u32 - t - 1);
            let cx = match cell_x(x, font.width(), t) {
                Some(cx) => cx,
                None => break,
            };
            if !shown && t + 1 < len as u32 {
                if digit == 0 {
                    self.draw_char(cx, y, fg, bg, b' ', font, GlyphMode::Opaque);
                    continue;
                }
                shown = true;
            }
            self.draw_char(cx, y, fg, bg, b'0' + digit, font, GlyphMode::Opaque);
        }
    }

    /// `len` decimal digits of `value`, zero padded.
    pub fn show_2num(&mut self, x: u16, y: u16, value: u32, len: u8, font: AsciiFont, mode: GlyphMode) {
        let (fg, bg) = self.colors();
        for t in 0..len as u32 {
            let digit = nth_digit(value, len as u32 - t - 1);
            let cx = match cell_x(x, font.width(), t) {
                Some(cx) => cx,
                None => break,
            };
            self.draw_char(cx, y, fg, bg, b'0' + digit, font, mode);
        }
    }

    /// Mixed ASCII/CJK text starting at `(x, y)`; returns where layout
    /// stopped.
    ///
    /// The string ends at a NUL or at the end of the slice. A lead byte
    /// with no trail byte ends it too.
    #[allow(clippy::too_many_arguments)]
    pub fn show_str(
        &mut self,
        x: u16,
        y: u16,
        fg: Color,
        bg: Color,
        text: &[u8],
        size: TextSize,
        mode: GlyphMode,
    ) -> Cursor {
        let mut layout = Layout::new(x, y, fg, bg, size, mode);
        layout.feed(self, text);
        layout.cursor()
    }

    /// `show_str` on row `y`, horizontally centered.
    ///
    /// The width estimate counts every byte as one ASCII cell, so a CJK
    /// character is counted as two cells. For 16 px text that is exact;
    /// for other sizes mixed strings land only roughly in the middle.
    pub fn show_str_centered(
        &mut self,
        y: u16,
        fg: Color,
        bg: Color,
        text: &[u8],
        size: TextSize,
        mode: GlyphMode,
    ) -> Cursor {
        let approx = until_nul(text).len() as u32 * size.ascii_font().width() as u32;
        let width = self.width() as u32;
        let x = if width > approx { (width - approx) / 2 } else { 0 };
        self.show_str(to_u16(x), y, fg, bg, text, size, mode)
    }

    /// A `fmt::Write` sink laying text out like `show_str`, in the
    /// pen/background colors.
    pub fn text_writer(&mut self, x: u16, y: u16, size: TextSize, mode: GlyphMode) -> TextWriter<'_, 'a, S> {
        let (fg, bg) = self.colors();
        TextWriter {
            layout: Layout::new(x, y, fg, bg, size, mode),
            canvas: self,
        }
    }
}

fn nth_digit(value: u32, power: u32) -> u8 {
    let div = 10u64.saturating_pow(power);
    ((value as u64 / div) % 10) as u8
}

/// Formatted text on a canvas.
///
/// Text is laid out like `show_str`, except that a `&str` holds UTF-8,
/// never GB2312: each non-ASCII `char` takes one empty ASCII cell and
/// never starts a CJK pair. Use `show_str` for CJK glyphs.
///
/// ```
/// use core::fmt::Write;
/// use hmi_gfx::{Canvas, FontSet, Framebuffer, GlyphMode, TextSize};
///
/// let mut pixels = [0u16; 128 * 16];
/// let mut fb = Framebuffer::new(&mut pixels, 128, 16).unwrap();
/// let fonts = FontSet::empty();
/// let mut canvas = Canvas::new(&mut fb, &fonts);
///
/// let mut w = canvas.text_writer(0, 0, TextSize::Px16, GlyphMode::Opaque);
/// write!(w, "{:02}:{:02}", 3, 7).unwrap();
/// assert_eq!(w.cursor().x, 5 * 8);
/// ```
pub struct TextWriter<'c, 'a, S: Surface + ?Sized> {
    canvas: &'c mut Canvas<'a, S>,
    layout: Layout,
}

impl<S: Surface + ?Sized> TextWriter<'_, '_, S> {
    pub fn cursor(&self) -> Cursor {
        self.layout.cursor()
    }

    /// Layout hit the edge of the surface (or a NUL); later text is dropped.
    pub fn is_stopped(&self) -> bool {
        self.layout.stopped
    }
}

impl<S: Surface + ?Sized> fmt::Write for TextWriter<'_, '_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.layout.stopped {
                break;
            }
            let b = if c.is_ascii() { c as u8 } else { NO_GLYPH };
            self.layout.step(self.canvas, b);
        }
        Ok(())
    }
}
