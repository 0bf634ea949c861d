//! # Rasterizer
//!
//! Integer-only shape rasterization on top of [`crate::Gfx`] spans and
//! pixels: lines (Bresenham), circles and quarter circles (midpoint),
//! scanline triangle fill, and rectangles with or without rounded corners.
//!
//! Nothing here touches a surface directly; every pixel goes through the
//! clip-and-rotate path of [`crate::Gfx`].

pub mod circle;
pub mod line;
pub mod rect;
pub mod triangle;

pub use circle::Corners;
