//! # Framebuffer
//!
//! Pixel destinations for the canvas.
//!
//! ## Modules
//!
//! - `color`: 16-bit `Color` (RGB565) with the panel's named colors
//! - `surface`: the `Surface` trait and an adapter for embedded-graphics
//!   display drivers
//! - `framebuffer`: `Framebuffer`, a surface over caller-owned pixel memory
//!
//! Only `Surface` is required by the drawing code; a board support package
//! can implement it directly over its LCD controller instead.

pub mod color;
#[allow(clippy::module_inception)]
pub mod framebuffer;
pub mod surface;

pub use color::Color;
pub use framebuffer::{Framebuffer, FramebufferError};
pub use surface::{DrawTargetSurface, Surface};
