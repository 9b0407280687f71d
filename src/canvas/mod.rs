//! # Canvas
//!
//! The drawing context: a borrowed [`Surface`], the CJK [`FontSet`] and the
//! pen/background [`DrawingState`]. All primitives are methods on
//! [`Canvas`] and every one of them clips against the surface before
//! writing, so no coordinate outside `[0, width) x [0, height)` ever
//! reaches the driver.
//!
//! ## Modules
//!
//! - `shapes`: points, lines, rectangles, circles, triangles
//! - `glyph`: ASCII and CJK glyph blitting
//! - `text`: strings, numbers, mixed-script layout, `TextWriter`
//!
//! ## Example
//!
//! ```
//! use hmi_gfx::{AsciiFont, Canvas, Color, FontSet, Framebuffer, GlyphMode};
//!
//! let mut pixels = [0u16; 64 * 32];
//! let mut fb = Framebuffer::new(&mut pixels, 64, 32).unwrap();
//! let fonts = FontSet::builtin();
//! let mut canvas = Canvas::new(&mut fb, &fonts);
//!
//! canvas.set_colors(Color::YELLOW, Color::NAVY);
//! canvas.draw_rectangle(0, 0, 63, 31);
//! canvas.show_string(4, 4, AsciiFont::Font8x16, b"12:30", GlyphMode::Opaque);
//! ```

mod glyph;
mod shapes;
mod state;
mod text;

pub use glyph::{DrawOutcome, GlyphMode, SkipReason};
pub use state::DrawingState;
pub use text::{Cursor, TextWriter};

use crate::font::FontSet;
use crate::framebuffer::{Color, Surface};

/// Drawing context: a surface, the CJK fonts and the pen/background colors.
pub struct Canvas<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    fonts: &'a FontSet,
    state: DrawingState,
}

impl<'a, S: Surface + ?Sized> Canvas<'a, S> {
    pub fn new(surface: &'a mut S, fonts: &'a FontSet) -> Self {
        Self::with_state(surface, fonts, DrawingState::default())
    }

    pub fn with_state(surface: &'a mut S, fonts: &'a FontSet, state: DrawingState) -> Self {
        Self {
            surface,
            fonts,
            state,
        }
    }

    pub fn surface(&self) -> &S {
        &*self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut *self.surface
    }

    pub fn fonts(&self) -> &FontSet {
        self.fonts
    }

    pub fn width(&self) -> u16 {
        self.surface.width()
    }

    pub fn height(&self) -> u16 {
        self.surface.height()
    }

    // -------------------------------------------------------------------------
    // Drawing state
    // -------------------------------------------------------------------------

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn set_colors(&mut self, pen: Color, background: Color) {
        self.state = DrawingState::new(pen, background);
    }

    /// `(pen, background)`
    pub fn colors(&self) -> (Color, Color) {
        (self.state.pen, self.state.background)
    }

    pub fn pen(&self) -> Color {
        self.state.pen
    }

    pub fn background(&self) -> Color {
        self.state.background
    }

    pub fn set_pen(&mut self, pen: Color) {
        self.state.pen = pen;
    }

    pub fn set_background(&mut self, background: Color) {
        self.state.background = background;
    }

    /// Runs `f` with the pen set to `pen`, then puts the old pen back.
    fn with_pen<R>(&mut self, pen: Color, f: impl FnOnce(&mut Self) -> R) -> R {
        let old = self.state.pen;
        self.state.pen = pen;
        let out = f(self);
        self.state.pen = old;
        out
    }

    /// Fill the whole surface.
    pub fn clear(&mut self, color: Color) {
        self.surface.clear_surface(color);
    }

    // -------------------------------------------------------------------------
    // Clipped writes; every primitive funnels through these.
    // -------------------------------------------------------------------------

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i32 && y < self.height() as i32
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if self.contains(x, y) {
            self.surface.set_pixel(x as u16, y as u16, color);
        }
    }

    /// Inclusive span `x1..=x2` on row `y`, in either order.
    fn span(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let lo = lo.max(0);
        let hi = hi.min(self.width() as i32 - 1);
        if lo > hi {
            return;
        }
        self.surface
            .fast_hline(lo as u16, y as u16, (hi - lo + 1) as u16, color);
    }

    /// Inclusive run `y1..=y2` on column `x`.
    fn column(&mut self, x: i32, y1: i32, y2: i32, color: Color) {
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        if x < 0 || x >= self.width() as i32 {
            return;
        }
        let lo = lo.max(0);
        let hi = hi.min(self.height() as i32 - 1);
        if lo > hi {
            return;
        }
        self.surface
            .fast_vline(x as u16, lo as u16, (hi - lo + 1) as u16, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;

    #[test_log::test]
    fn default_state_is_white_on_black() {
        let mut pixels = [0u16; 16];
        let mut fb = Framebuffer::new(&mut pixels, 4, 4).unwrap();
        let fonts = FontSet::empty();
        let canvas = Canvas::new(&mut fb, &fonts);
        assert_eq!(canvas.colors(), (Color::WHITE, Color::BLACK));
    }

    #[test_log::test]
    fn set_and_get_colors() {
        let mut pixels = [0u16; 16];
        let mut fb = Framebuffer::new(&mut pixels, 4, 4).unwrap();
        let fonts = FontSet::empty();
        let mut canvas = Canvas::new(&mut fb, &fonts);
        canvas.set_colors(Color::YELLOW, Color::NAVY);
        assert_eq!(canvas.colors(), (Color::YELLOW, Color::NAVY));
        canvas.set_pen(Color::RED);
        assert_eq!(canvas.state(), DrawingState::new(Color::RED, Color::NAVY));
        let seen = canvas.with_pen(Color::GREEN, |c| c.pen());
        assert_eq!(seen, Color::GREEN);
        assert_eq!(canvas.pen(), Color::RED);
    }

    #[test_log::test]
    fn spans_are_clipped_on_both_sides() {
        let mut pixels = [0u16; 16];
        let mut fb = Framebuffer::new(&mut pixels, 4, 4).unwrap();
        let fonts = FontSet::empty();
        let mut canvas = Canvas::new(&mut fb, &fonts);
        canvas.span(10, -10, 1, Color::WHITE);
        canvas.span(0, 3, 4, Color::RED);
        canvas.column(2, -5, 1, Color::GREEN);
        drop(canvas);
        assert_eq!(fb.row(1), Some(&[0xFFFF, 0xFFFF, 0x07E0, 0xFFFF][..]));
        assert_eq!(fb.row(0), Some(&[0, 0, 0x07E0, 0][..]));
        assert_eq!(fb.row(3), Some(&[0, 0, 0, 0][..]));
    }
}
