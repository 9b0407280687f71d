//! Framebuffer writer over caller-owned RGB565 panel memory
use core::convert::Infallible;
use core::fmt;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb565,
    Pixel,
};

use super::color::Color;
use super::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferError {
    /// The pixel slice cannot hold `stride * height` pixels.
    BufferTooSmall { needed: usize, got: usize },
    /// The stride is narrower than a row.
    StrideTooSmall { width: u16, stride: usize },
}

impl fmt::Display for FramebufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramebufferError::BufferTooSmall { needed, got } => {
                write!(f, "framebuffer needs {} pixels, got {}", needed, got)
            }
            FramebufferError::StrideTooSmall { width, stride } => {
                write!(f, "stride {} is smaller than width {}", stride, width)
            }
        }
    }
}

pub struct Framebuffer<'a> {
    pixels: &'a mut [u16],
    pub width: u16,
    pub height: u16,
    pub stride: usize,
}

impl<'a> Framebuffer<'a> {
    pub fn new(pixels: &'a mut [u16], width: u16, height: u16) -> Result<Self, FramebufferError> {
        Self::with_stride(pixels, width, height, width as usize)
    }

    /// Rows are `stride` pixels apart; the tail of each row past `width`
    /// is never touched.
    pub fn with_stride(
        pixels: &'a mut [u16],
        width: u16,
        height: u16,
        stride: usize,
    ) -> Result<Self, FramebufferError> {
        if stride < width as usize {
            return Err(FramebufferError::StrideTooSmall { width, stride });
        }
        let needed = stride.checked_mul(height as usize).unwrap_or(usize::MAX);
        if pixels.len() < needed {
            return Err(FramebufferError::BufferTooSmall {
                needed,
                got: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            stride,
        })
    }

    /// Read back a pixel, `None` outside the panel.
    pub fn get_pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Color(self.pixels[y as usize * self.stride + x as usize]))
    }

    pub fn row(&self, y: u16) -> Option<&[u16]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride;
        Some(&self.pixels[start..start + self.width as usize])
    }

    fn span_mut(&mut self, x: u16, y: u16, len: u16) -> Option<&mut [u16]> {
        if x >= self.width || y >= self.height || len == 0 {
            return None;
        }
        let len = len.min(self.width - x) as usize;
        let start = y as usize * self.stride + x as usize;
        Some(&mut self.pixels[start..start + len])
    }
}

impl Surface for Framebuffer<'_> {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.stride + x as usize] = color.0;
        }
    }

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) {
        let bottom = y.saturating_add(h).min(self.height);
        for yy in y..bottom {
            if let Some(span) = self.span_mut(x, yy, w) {
                span.fill(color.0);
            }
        }
    }

    fn clear_surface(&mut self, color: Color) {
        for y in 0..self.height {
            if let Some(span) = self.span_mut(0, y, self.width) {
                span.fill(color.0);
            }
        }
    }
}

// Lets embedded-graphics primitives and fonts draw straight into the panel memory.
impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            if point.x >= self.width as i32 || point.y >= self.height as i32 {
                continue;
            }
            Surface::set_pixel(self, point.x as u16, point.y as u16, Color::from(color));
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}
