use crate::framebuffer::Color;

/// Pen and background colors used by primitives that take no explicit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingState {
    pub pen: Color,
    pub background: Color,
}

impl DrawingState {
    pub const fn new(pen: Color, background: Color) -> Self {
        Self { pen, background }
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new(Color::WHITE, Color::BLACK)
    }
}
