//! # Pixel Surface
//!
//! The minimal pixel-level driver interface every drawing routine goes
//! through. Implementations may assume callers clip: the canvas never
//! forwards a coordinate outside `[0, width) x [0, height)`. They should
//! still not write out of bounds when handed one.
//!
//! `DrawTargetSurface` lets any embedded-graphics display driver with an
//! RGB565 color type act as a surface.

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    primitives::Rectangle,
    Pixel,
};
use log::warn;

use super::color::Color;

pub trait Surface {
    fn width(&self) -> u16;
    fn height(&self) -> u16;

    fn set_pixel(&mut self, x: u16, y: u16, color: Color);

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) {
        for yy in y..y.saturating_add(h) {
            for xx in x..x.saturating_add(w) {
                self.set_pixel(xx, yy, color);
            }
        }
    }

    fn fast_hline(&mut self, x: u16, y: u16, len: u16, color: Color) {
        self.fill_rect(x, y, len, 1, color);
    }

    fn fast_vline(&mut self, x: u16, y: u16, len: u16, color: Color) {
        self.fill_rect(x, y, 1, len, color);
    }

    fn clear_surface(&mut self, color: Color) {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0, 0, w, h, color);
    }
}

/// Adapter from an embedded-graphics `DrawTarget` to `Surface`.
///
/// Driver errors are logged and dropped, drawing stays infallible.
pub struct DrawTargetSurface<D> {
    target: D,
}

impl<D> DrawTargetSurface<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
    D::Error: core::fmt::Debug,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

fn clamp_u16(v: u32) -> u16 {
    v.min(u16::MAX as u32) as u16
}

impl<D> Surface for DrawTargetSurface<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
    D::Error: core::fmt::Debug,
{
    fn width(&self) -> u16 {
        clamp_u16(self.target.size().width)
    }

    fn height(&self) -> u16 {
        clamp_u16(self.target.size().height)
    }

    fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        let pixel = Pixel(Point::new(x as i32, y as i32), color.to_rgb565());
        if let Err(e) = self.target.draw_iter(core::iter::once(pixel)) {
            warn!("surface: set_pixel({}, {}) failed: {:?}", x, y, e);
        }
    }

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) {
        if w == 0 || h == 0 {
            return;
        }
        let area = Rectangle::new(
            Point::new(x as i32, y as i32),
            Size::new(w as u32, h as u32),
        );
        if let Err(e) = self.target.fill_solid(&area, color.to_rgb565()) {
            warn!("surface: fill_rect({}, {}, {}, {}) failed: {:?}", x, y, w, h, e);
        }
    }

    fn clear_surface(&mut self, color: Color) {
        if let Err(e) = self.target.clear(color.to_rgb565()) {
            warn!("surface: clear failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    struct Panel {
        size: Size,
        pixels: Vec<Rgb565>,
        writes: usize,
    }

    impl Panel {
        fn new(w: u32, h: u32) -> Self {
            Self {
                size: Size::new(w, h),
                pixels: vec![Rgb565::from(Color::BLACK); (w * h) as usize],
                writes: 0,
            }
        }

        fn at(&self, x: u32, y: u32) -> Color {
            Color::from(self.pixels[(y * self.size.width + x) as usize])
        }
    }

    impl OriginDimensions for Panel {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for Panel {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, c) in pixels {
                self.writes += 1;
                if p.x >= 0
                    && p.y >= 0
                    && (p.x as u32) < self.size.width
                    && (p.y as u32) < self.size.height
                {
                    self.pixels[(p.y as u32 * self.size.width + p.x as u32) as usize] = c;
                }
            }
            Ok(())
        }
    }

    #[test_log::test]
    fn adapter_reports_target_dimensions() {
        let surface = DrawTargetSurface::new(Panel::new(20, 10));
        assert_eq!((surface.width(), surface.height()), (20, 10));
    }

    #[test_log::test]
    fn adapter_forwards_pixels_and_fills() {
        let mut surface = DrawTargetSurface::new(Panel::new(8, 8));
        surface.set_pixel(1, 2, Color::RED);
        surface.fill_rect(4, 4, 2, 3, Color::GREEN);
        surface.fast_hline(0, 7, 3, Color::BLUE);

        let panel = surface.into_inner();
        assert_eq!(panel.at(1, 2), Color::RED);
        assert_eq!(panel.at(5, 6), Color::GREEN);
        assert_eq!(panel.at(4, 3), Color::BLACK);
        assert_eq!(panel.at(2, 7), Color::BLUE);
        assert_eq!(panel.at(3, 7), Color::BLACK);
    }

    #[test_log::test]
    fn empty_fill_touches_nothing() {
        let mut surface = DrawTargetSurface::new(Panel::new(4, 4));
        surface.fill_rect(0, 0, 0, 4, Color::WHITE);
        assert_eq!(surface.target().writes, 0);
    }
}
