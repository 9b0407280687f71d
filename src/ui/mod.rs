//! # User Interface Module
//!
//! Themes and the bring-up screens built on [`Canvas`](crate::Canvas).
//!
//! ## Modules
//!
//! - `theme`: named screen colors (classic / high contrast)
//! - `demo`: panel probe, ASCII text and CJK text screens
//!
//! ## Example
//!
//! ```
//! use hmi_gfx::{ui::demo, Canvas, FontSet, Framebuffer, Theme};
//!
//! let mut pixels = vec![0u16; 160 * 128];
//! let mut fb = Framebuffer::new(&mut pixels, 160, 128).unwrap();
//! let fonts = FontSet::builtin();
//! let mut canvas = Canvas::new(&mut fb, &fonts);
//!
//! demo::lcd_probe(&mut canvas, &Theme::classic());
//! ```

pub mod demo;
pub mod theme;
pub use theme::Theme;
