//! # pixelgfx
//!
//! Device independent 2D drawing for pixel addressable displays.
//!
//! A display driver implements [`Surface`] (at minimum: report its size and
//! set one pixel). Wrapping it in a [`Gfx`] adds:
//!
//! - rotation in quarter turns, with clipping against the rotated bounds
//! - lines, rectangles, rounded rectangles, circles and triangles
//! - 1-bit, grayscale and RGB565 bitmaps, optionally masked
//! - text in the built-in 5x8 font or a proportional [`GfxFont`]
//!
//! [`Canvas1`] is a ready-made in-memory monochrome surface, and
//! [`DrawTargetSurface`] lets `Gfx` draw onto any `embedded-graphics`
//! RGB565 draw target.
//!
//! ```
//! use pixelgfx::{Canvas1, Color, Gfx};
//!
//! let mut gfx = Gfx::new(Canvas1::new(64, 32));
//! gfx.set_rotation(2);
//! gfx.draw_round_rect(0, 0, 64, 32, 6, Color::ON);
//! gfx.set_cursor(4, 4);
//! gfx.print("hello");
//! assert!(gfx.get_pixel(0, 16));
//! ```
//!
//! ## Threading
//!
//! Nothing here is shared. A `Gfx` owns its surface and every call runs to
//! completion on the caller's thread.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod bitmap;
pub mod canvas;
pub mod color;
pub mod eg;
pub mod error;
pub mod gfx;
pub mod raster;
pub mod rotation;
pub mod surface;
pub mod text;

pub use canvas::Canvas1;
pub use color::Color;
pub use eg::DrawTargetSurface;
pub use error::{Error, Result};
pub use gfx::Gfx;
pub use raster::Corners;
pub use rotation::Rotation;
pub use surface::Surface;
pub use text::{GfxFont, Glyph, TextBounds};
