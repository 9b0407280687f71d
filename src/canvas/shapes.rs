//! Shape rasterization: points, lines, rectangles, circles and triangles.
//!
//! Coordinates come in as panel `u16`s and are walked as `i32`, so octants
//! and edge intercepts left of or above the origin are simply clipped.

use super::Canvas;
use crate::framebuffer::{Color, Surface};

impl<S: Surface + ?Sized> Canvas<'_, S> {
    /// Single pixel with an explicit color.
    pub fn draw_point(&mut self, x: u16, y: u16, color: Color) {
        self.plot(x as i32, y as i32, color);
    }

    /// Bresenham line in the pen color, both endpoints included.
    ///
    /// The endpoints are walked top-down (then left-right), so swapping them
    /// plots the same pixels.
    pub fn draw_line(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
        let ((x1, y1), (x2, y2)) = if (y1, x1) <= (y2, x2) {
            ((x1 as i32, y1 as i32), (x2 as i32, y2 as i32))
        } else {
            ((x2 as i32, y2 as i32), (x1 as i32, y1 as i32))
        };
        let color = self.state.pen;

        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x2 >= x1 { 1 } else { -1 };
        let sy = if y2 >= y1 { 1 } else { -1 };

        let mut err = (if dx > dy { dx } else { -dy }) / 2;
        let (mut x, mut y) = (x1, y1);
        loop {
            self.plot(x, y, color);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                x += sx;
            }
            if e2 < dy {
                err += dx;
                y += sy;
            }
        }
    }

    /// Rectangle outline in the pen color; corners may be given in any order.
    pub fn draw_rectangle(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
        let (x1, x2) = (x1.min(x2) as i32, x1.max(x2) as i32);
        let (y1, y2) = (y1.min(y2) as i32, y1.max(y2) as i32);
        let color = self.state.pen;
        self.span(x1, x2, y1, color);
        self.span(x1, x2, y2, color);
        self.column(x1, y1, y2, color);
        self.column(x2, y1, y2, color);
    }

    /// Filled rectangle in the pen color, issued as one bulk fill.
    pub fn fill_rectangle(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));
        let (w, h) = (self.width(), self.height());
        if x1 >= w || y1 >= h {
            return;
        }
        let x2 = x2.min(w - 1);
        let y2 = y2.min(h - 1);
        let color = self.state.pen;
        self.surface
            .fill_rect(x1, y1, x2 - x1 + 1, y2 - y1 + 1, color);
    }

    /// Midpoint circle outline of radius `r` in `color`.
    ///
    /// The pen is `color` only for the duration of the call.
    pub fn draw_circle(&mut self, xc: u16, yc: u16, color: Color, r: u8) {
        self.with_pen(color, |canvas| {
            let pen = canvas.state.pen;
            canvas.walk_circle(r, |canvas, x, y| {
                canvas.plot_octants(xc as i32, yc as i32, x, y, pen);
            });
        });
    }

    /// Filled midpoint circle: every step fills whole rows between the
    /// symmetric points instead of plotting them.
    pub fn fill_circle(&mut self, xc: u16, yc: u16, color: Color, r: u8) {
        self.with_pen(color, |canvas| {
            let pen = canvas.state.pen;
            let (xc, yc) = (xc as i32, yc as i32);
            canvas.walk_circle(r, |canvas, x, y| {
                canvas.span(xc - x, xc + x, yc + y, pen);
                canvas.span(xc - x, xc + x, yc - y, pen);
                canvas.span(xc - y, xc + y, yc + x, pen);
                canvas.span(xc - y, xc + y, yc - x, pen);
            });
        });
    }

    /// Steps the first octant from `(0, r)`, handing each `(x, y)` to `step`.
    fn walk_circle(&mut self, r: u8, mut step: impl FnMut(&mut Self, i32, i32)) {
        let mut x = 0i32;
        let mut y = r as i32;
        let mut d = 3 - 2 * r as i32;
        while x <= y {
            step(self, x, y);
            if d < 0 {
                d += 4 * x + 6;
            } else {
                d += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;
        }
    }

    fn plot_octants(&mut self, xc: i32, yc: i32, x: i32, y: i32, color: Color) {
        self.plot(xc + x, yc + y, color);
        self.plot(xc - x, yc + y, color);
        self.plot(xc + x, yc - y, color);
        self.plot(xc - x, yc - y, color);
        self.plot(xc + y, yc + x, color);
        self.plot(xc - y, yc + x, color);
        self.plot(xc + y, yc - x, color);
        self.plot(xc - y, yc - x, color);
    }

    /// Triangle outline: the three edges as lines.
    pub fn draw_triangle(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, x2: u16, y2: u16) {
        self.draw_line(x0, y0, x1, y1);
        self.draw_line(x1, y1, x2, y2);
        self.draw_line(x2, y2, x0, y0);
    }

    /// Scanline triangle fill in the pen color.
    pub fn fill_triangle(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, x2: u16, y2: u16) {
        let mut v = [
            (x0 as i32, y0 as i32),
            (x1 as i32, y1 as i32),
            (x2 as i32, y2 as i32),
        ];
        if v[0].1 > v[1].1 {
            v.swap(0, 1);
        }
        if v[1].1 > v[2].1 {
            v.swap(1, 2);
        }
        if v[0].1 > v[1].1 {
            v.swap(0, 1);
        }
        let [(x0, y0), (x1, y1), (x2, y2)] = v;
        let color = self.state.pen;

        if y0 == y2 {
            let a = x0.min(x1).min(x2);
            let b = x0.max(x1).max(x2);
            self.span(a, b, y0, color);
            return;
        }

        let (dx01, dy01) = ((x1 - x0) as i64, (y1 - y0) as i64);
        let (dx02, dy02) = ((x2 - x0) as i64, (y2 - y0) as i64);
        let (dx12, dy12) = ((x2 - x1) as i64, (y2 - y1) as i64);
        let edge = |start: i32, acc: i64, dy: i64| -> i32 {
            if dy == 0 {
                start
            } else {
                start + (acc / dy) as i32
            }
        };

        // Upper part: edges 0-1 and 0-2. A flat bottom is finished here,
        // otherwise row y1 belongs to the lower part.
        let last = if y1 == y2 { y1 } else { y1 - 1 };
        let (mut sa, mut sb) = (0i64, 0i64);
        let mut y = y0;
        while y <= last {
            let a = edge(x0, sa, dy01);
            let b = edge(x0, sb, dy02);
            sa += dx01;
            sb += dx02;
            self.span(a, b, y, color);
            y += 1;
        }

        // Lower part: edges 1-2 and 0-2.
        sa = dx12 * (y - y1) as i64;
        sb = dx02 * (y - y0) as i64;
        while y <= y2 {
            let a = edge(x1, sa, dy12);
            let b = edge(x0, sb, dy02);
            sa += dx12;
            sb += dx02;
            self.span(a, b, y, color);
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::canvas::Canvas;
    use crate::font::FontSet;
    use crate::framebuffer::{Color, Framebuffer};

    const W: u16 = 32;
    const H: u16 = 24;

    fn lit(fb: &Framebuffer<'_>) -> Vec<(u16, u16)> {
        let mut out = Vec::new();
        for y in 0..fb.height {
            for x in 0..fb.width {
                if fb.get_pixel(x, y) != Some(Color::BLACK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    fn render(draw: impl FnOnce(&mut Canvas<'_, Framebuffer<'_>>)) -> Vec<(u16, u16)> {
        let mut pixels = vec![0u16; W as usize * H as usize];
        let mut fb = Framebuffer::new(&mut pixels, W, H).unwrap();
        let fonts = FontSet::empty();
        {
            let mut canvas = Canvas::new(&mut fb, &fonts);
            draw(&mut canvas);
        }
        lit(&fb)
    }

    #[test_log::test]
    fn horizontal_and_vertical_lines() {
        assert_eq!(
            render(|c| c.draw_line(2, 3, 5, 3)),
            vec![(2, 3), (3, 3), (4, 3), (5, 3)]
        );
        assert_eq!(render(|c| c.draw_line(1, 4, 1, 2)), vec![(1, 2), (1, 3), (1, 4)]);
    }

    #[test_log::test]
    fn shallow_line_steps_once() {
        let pts = render(|c| c.draw_line(0, 0, 4, 1));
        assert_eq!(pts.len(), 5);
        assert!(pts.contains(&(0, 0)));
        assert!(pts.contains(&(4, 1)));
    }

    #[test_log::test]
    fn line_is_symmetric() {
        for &(x1, y1, x2, y2) in &[(0, 0, 2, 1), (3, 1, 20, 17), (30, 2, 1, 9), (5, 20, 6, 0)] {
            assert_eq!(
                render(|c| c.draw_line(x1, y1, x2, y2)),
                render(|c| c.draw_line(x2, y2, x1, y1)),
                "({}, {}) - ({}, {})",
                x1,
                y1,
                x2,
                y2
            );
        }
    }

    #[test_log::test]
    fn line_off_panel_keeps_visible_part() {
        let pts = render(|c| c.draw_line(0, 10, 500, 10));
        assert_eq!(pts.len(), W as usize);
    }

    #[test_log::test]
    fn rectangle_outline_normalizes_corners() {
        let a = render(|c| c.draw_rectangle(1, 1, 4, 3));
        let b = render(|c| c.draw_rectangle(4, 3, 1, 1));
        assert_eq!(a, b);
        // perimeter of a 4x3 box
        assert_eq!(a.len(), 10);
        assert!(!a.contains(&(2, 2)));
    }

    #[test_log::test]
    fn filled_rectangle_clamps_far_corner() {
        let pts = render(|c| c.fill_rectangle(30, 22, 100, 100));
        assert_eq!(pts, vec![(30, 22), (31, 22), (30, 23), (31, 23)]);
        assert!(render(|c| c.fill_rectangle(40, 0, 50, 5)).is_empty());
    }

    #[test_log::test]
    fn circle_restores_pen() {
        let mut pixels = vec![0u16; W as usize * H as usize];
        let mut fb = Framebuffer::new(&mut pixels, W, H).unwrap();
        let fonts = FontSet::empty();
        let mut canvas = Canvas::new(&mut fb, &fonts);
        canvas.set_pen(Color::YELLOW);
        canvas.draw_circle(10, 10, Color::CYAN, 4);
        canvas.fill_circle(20, 10, Color::RED, 3);
        assert_eq!(canvas.pen(), Color::YELLOW);
        drop(canvas);
        assert_eq!(fb.get_pixel(14, 10), Some(Color::CYAN));
        assert_eq!(fb.get_pixel(20, 10), Some(Color::RED));
    }

    #[test_log::test]
    fn circle_outline_extremes() {
        let pts = render(|c| c.draw_circle(10, 10, Color::WHITE, 5));
        for p in [(15, 10), (5, 10), (10, 15), (10, 5)] {
            assert!(pts.contains(&p), "{:?}", p);
        }
        assert!(!pts.contains(&(10, 10)));
    }

    #[test_log::test]
    fn zero_radius_is_one_point() {
        assert_eq!(render(|c| c.draw_circle(3, 3, Color::WHITE, 0)), vec![(3, 3)]);
        assert_eq!(render(|c| c.fill_circle(3, 3, Color::WHITE, 0)), vec![(3, 3)]);
    }

    #[test_log::test]
    fn filled_circle_covers_outline() {
        let outline = render(|c| c.draw_circle(12, 12, Color::WHITE, 7));
        let filled = render(|c| c.fill_circle(12, 12, Color::WHITE, 7));
        assert!(outline.iter().all(|p| filled.contains(p)));
        assert!(filled.contains(&(12, 12)));
    }

    #[test_log::test]
    fn flat_triangle_is_one_span() {
        assert_eq!(
            render(|c| c.fill_triangle(5, 4, 2, 4, 9, 4)),
            (2..=9).map(|x| (x, 4)).collect::<Vec<_>>()
        );
    }

    #[test_log::test]
    fn triangle_fill_contains_vertices() {
        let pts = render(|c| c.fill_triangle(16, 1, 2, 20, 28, 14));
        for v in [(16, 1), (2, 20), (28, 14)] {
            assert!(pts.contains(&v), "{:?}", v);
        }
        let outline = render(|c| c.draw_triangle(16, 1, 2, 20, 28, 14));
        assert!(outline.contains(&(16, 1)));
        assert!(outline.len() < pts.len());
    }

    #[test_log::test]
    fn triangle_with_flat_top_and_bottom() {
        let top = render(|c| c.fill_triangle(2, 2, 12, 2, 7, 10));
        let rows: std::collections::BTreeSet<u16> = top.iter().map(|p| p.1).collect();
        assert_eq!(rows.len(), 9);
        let bottom = render(|c| c.fill_triangle(7, 2, 2, 10, 12, 10));
        assert!((2..=12).all(|x| bottom.contains(&(x, 10))));
    }
}
