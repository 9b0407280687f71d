//! 6x12 ASCII glyphs.
//!
//! The rows are taken from embedded-graphics' `FONT_6X12` the first time
//! they are needed: each printable character is rendered once into a
//! one-glyph capture target and packed MSB-first, so the blitter sees the
//! same row-byte layout as the 8x16 table.

use core::convert::Infallible;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X12, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use log::debug;
use spin::Lazy;

const WIDTH: i32 = 6;
const HEIGHT: i32 = 12;
const COUNT: usize = 95;

static GLYPHS: Lazy<[[u8; 12]; COUNT]> = Lazy::new(build);

pub(crate) fn glyphs() -> &'static [[u8; 12]; COUNT] {
    &GLYPHS
}

/// Collects the lit pixels of one glyph cell.
struct Capture {
    rows: [u8; 12],
}

impl OriginDimensions for Capture {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Capture {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if !color.is_on() || !(0..WIDTH).contains(&x) || !(0..HEIGHT).contains(&y) {
                continue;
            }
            self.rows[y as usize] |= 0x80u8 >> x;
        }
        Ok(())
    }
}

fn build() -> [[u8; 12]; COUNT] {
    let style = MonoTextStyle::new(&FONT_6X12, BinaryColor::On);
    let mut table = [[0u8; 12]; COUNT];
    for (slot, code) in table.iter_mut().zip(b' '..=b'~') {
        let mut buf = [0u8; 4];
        let s = char::from(code).encode_utf8(&mut buf);
        let mut capture = Capture { rows: [0; 12] };
        Text::with_baseline(s, Point::zero(), style, Baseline::Top)
            .draw(&mut capture)
            .ok();
        *slot = capture.rows;
    }
    debug!("font: built 6x12 ASCII table ({} glyphs)", COUNT);
    table
}
