//! # hmi-gfx
//!
//! Pixel-level 2D drawing for small RGB565 panels: shapes, fixed-cell ASCII
//! text, bitmap CJK glyphs and mixed-script text layout.
//!
//! ## Modules
//!
//! - `framebuffer`: `Color`, the `Surface` trait, `Framebuffer` and the
//!   embedded-graphics adapter
//! - `font`: ASCII glyph tables and CJK font tables
//! - `canvas`: the drawing context and every primitive
//! - `ui`: themes and bring-up screens
//!
//! The crate is `no_std` with `alloc`; CJK tables are the only heap users.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod canvas;
pub mod font;
pub mod framebuffer;
pub mod ui;

pub use canvas::{Canvas, Cursor, DrawOutcome, DrawingState, GlyphMode, SkipReason, TextWriter};
pub use font::{
    AsciiFont, AsciiGlyph, CjkFont, CjkGlyph, CjkSize, FontError, FontSet, GlyphBitmap, TextSize,
};
pub use framebuffer::{Color, DrawTargetSurface, Framebuffer, FramebufferError, Surface};
pub use ui::Theme;
