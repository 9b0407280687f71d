//! Bring-up screens for a freshly wired panel.
//!
//! Each screen clears the canvas first and leaves the canvas colors as its
//! last primitive set them.

use log::debug;

use super::Theme;
use crate::canvas::{Canvas, GlyphMode};
use crate::font::{AsciiFont, CjkSize, TextSize};
use crate::framebuffer::Surface;

/// GB2312 codes of the CJK sample glyphs, per table size, with their origin.
const CJK_SAMPLES: [(CjkSize, &[(u16, u16, [u8; 2])]); 3] = [
    (
        CjkSize::S16,
        &[(6, 20, [0xC9, 0xEE]), (22, 20, [0xDB, 0xDA]), (38, 20, [0xD6, 0xD0])],
    ),
    (CjkSize::S24, &[(6, 50, [0xCA, 0xD0]), (30, 50, [0xD6, 0xD0])]),
    (CjkSize::S32, &[(6, 90, [0xCE, 0xC4]), (38, 90, [0xB2, 0xE2])]),
];

/// Frame, both diagonals, a circle and a filled triangle.
pub fn lcd_probe<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, theme: &Theme) {
    let (w, h) = (canvas.width(), canvas.height());
    debug!("demo: lcd probe on {}x{}", w, h);

    canvas.clear(theme.background);
    canvas.set_pen(theme.frame);
    canvas.draw_rectangle(2, 2, w.saturating_sub(3), h.saturating_sub(3));

    canvas.set_pen(theme.line);
    canvas.draw_line(0, 0, w.saturating_sub(1), h.saturating_sub(1));
    canvas.draw_line(w.saturating_sub(1), 0, 0, h.saturating_sub(1));

    canvas.draw_circle(40, 40, theme.shape, 18);

    canvas.set_pen(theme.fill);
    canvas.fill_triangle(80, 30, 110, 60, 50, 60);
}

/// Both ASCII fonts, the two number formats and a centered line.
pub fn text_ascii<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, theme: &Theme) {
    debug!("demo: ascii text");
    let f16 = AsciiFont::Font8x16;

    canvas.clear(theme.text_background);
    canvas.set_colors(theme.text, theme.text_background);

    canvas.show_string(6, 6, f16, b"Hello, STM32!", GlyphMode::Opaque);
    canvas.show_string(6, 28, AsciiFont::Font6x12, b"ASCII 6x12 font", GlyphMode::Opaque);

    canvas.show_string(6, 50, f16, b"Count:", GlyphMode::Opaque);
    canvas.show_num(6 + 7 * 8, 50, 123456, 6, f16);

    canvas.show_string(6, 72, f16, b"Zero-pad:", GlyphMode::Opaque);
    canvas.show_2num(6 + 9 * 8, 72, 42, 5, f16, GlyphMode::Opaque);

    canvas.show_str_centered(
        100,
        theme.highlight,
        theme.text_background,
        b"CENTER DEMO",
        TextSize::Px16,
        GlyphMode::Opaque,
    );
}

/// The CJK samples of every loaded table, or a notice when none is loaded.
///
/// Returns the number of glyphs actually drawn.
pub fn text_cjk<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, theme: &Theme) -> usize {
    let bg = theme.cjk_background;
    canvas.clear(bg);
    canvas.set_colors(theme.cjk_text, bg);

    if !canvas.fonts().has_cjk() {
        debug!("demo: no CJK tables loaded");
        for (y, line) in [(40, &b"No CJK fonts loaded."[..]), (64, &b"Add a CjkFont table"[..])] {
            canvas.show_str(8, y, theme.cjk_text, bg, line, TextSize::Px16, GlyphMode::Opaque);
        }
        return 0;
    }

    let mut drawn = 0;
    for (size, samples) in CJK_SAMPLES {
        let fg = match size {
            CjkSize::S16 => theme.cjk_16,
            CjkSize::S24 => theme.cjk_24,
            CjkSize::S32 => theme.cjk_32,
        };
        for &(x, y, code) in samples {
            if canvas.draw_cjk(x, y, fg, bg, code, size, GlyphMode::Opaque).is_drawn() {
                drawn += 1;
            }
        }
    }
    debug!("demo: drew {} CJK samples", drawn);
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontSet, GlyphBitmap};
    use crate::framebuffer::{Color, Framebuffer};

    const W: u16 = 160;
    const H: u16 = 128;

    fn cell_is(fb: &Framebuffer<'_>, x: u16, y: u16, code: u8, font: AsciiFont, fg: Color, bg: Color) -> bool {
        let glyph = font.glyph(code).unwrap();
        (0..font.height()).all(|row| {
            (0..font.width()).all(|col| {
                let want = if glyph.bit(row, col) { fg } else { bg };
                fb.get_pixel(x + col, y + row) == Some(want)
            })
        })
    }

    #[test_log::test]
    fn probe_draws_every_element() {
        let mut pixels = vec![0u16; W as usize * H as usize];
        let mut fb = Framebuffer::new(&mut pixels, W, H).unwrap();
        let fonts = FontSet::empty();
        let theme = Theme::classic();
        let mut canvas = Canvas::new(&mut fb, &fonts);
        lcd_probe(&mut canvas, &theme);
        drop(canvas);

        assert_eq!(fb.get_pixel(0, 0), Some(theme.line));
        assert_eq!(fb.get_pixel(W - 1, H - 1), Some(theme.line));
        assert_eq!(fb.get_pixel(W - 1, 0), Some(theme.line));
        assert_eq!(fb.get_pixel(50, 2), Some(theme.frame));
        assert_eq!(fb.get_pixel(W - 3, 64), Some(theme.frame));
        assert_eq!(fb.get_pixel(40, 22), Some(theme.shape));
        assert_eq!(fb.get_pixel(80, 45), Some(theme.fill));
        assert_eq!(fb.get_pixel(150, 64), Some(theme.background));
    }

    #[test_log::test]
    fn probe_survives_a_tiny_panel() {
        let mut pixels = vec![0u16; 4];
        let mut fb = Framebuffer::new(&mut pixels, 2, 2).unwrap();
        let fonts = FontSet::empty();
        let mut canvas = Canvas::new(&mut fb, &fonts);
        lcd_probe(&mut canvas, &Theme::high_contrast());
    }

    #[test_log::test]
    fn ascii_screen_layout() {
        let mut pixels = vec![0u16; W as usize * H as usize];
        let mut fb = Framebuffer::new(&mut pixels, W, H).unwrap();
        let fonts = FontSet::empty();
        let theme = Theme::classic();
        let mut canvas = Canvas::new(&mut fb, &fonts);
        text_ascii(&mut canvas, &theme);
        assert_eq!(canvas.colors(), (theme.text, theme.text_background));
        drop(canvas);

        let (fg, bg) = (theme.text, theme.text_background);
        let f16 = AsciiFont::Font8x16;
        assert!(cell_is(&fb, 6, 6, b'H', f16, fg, bg));
        assert!(cell_is(&fb, 6, 28, b'A', AsciiFont::Font6x12, fg, bg));
        for (i, &code) in b"123456".iter().enumerate() {
            assert!(cell_is(&fb, 62 + i as u16 * 8, 50, code, f16, fg, bg));
        }
        for (i, &code) in b"00042".iter().enumerate() {
            assert!(cell_is(&fb, 78 + i as u16 * 8, 72, code, f16, fg, bg));
        }
        // (160 - 11 * 8) / 2
        assert!(cell_is(&fb, 36, 100, b'C', f16, theme.highlight, bg));
    }

    #[test_log::test]
    fn cjk_screen_draws_loaded_samples_only() {
        let mut pixels = vec![0u16; W as usize * H as usize];
        let mut fb = Framebuffer::new(&mut pixels, W, H).unwrap();
        let fonts = FontSet::builtin();
        let theme = Theme::classic();
        let mut canvas = Canvas::new(&mut fb, &fonts);
        assert_eq!(text_cjk(&mut canvas, &theme), 1);
        drop(canvas);
        // row 4 of the 16px sample: 0x7F 0xFE
        assert_eq!(fb.get_pixel(38, 24), Some(theme.cjk_background));
        assert_eq!(fb.get_pixel(39, 24), Some(theme.cjk_16));
        assert_eq!(fb.get_pixel(6, 20), Some(theme.cjk_background));
    }

    #[test_log::test]
    fn cjk_screen_without_tables_prints_notice() {
        let mut pixels = vec![0u16; W as usize * H as usize];
        let mut fb = Framebuffer::new(&mut pixels, W, H).unwrap();
        let fonts = FontSet::empty();
        let theme = Theme::classic();
        let mut canvas = Canvas::new(&mut fb, &fonts);
        assert_eq!(text_cjk(&mut canvas, &theme), 0);
        drop(canvas);
        let f16 = AsciiFont::Font8x16;
        assert!(cell_is(&fb, 8, 40, b'N', f16, theme.cjk_text, theme.cjk_background));
        assert!(cell_is(&fb, 8, 64, b'A', f16, theme.cjk_text, theme.cjk_background));
    }
}
