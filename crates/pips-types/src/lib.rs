//! Foundation types and traits for PIPS.
//!
//! This crate contains the platform-agnostic core types shared by all PIPS
//! crates: colors, logical geometry, input events, backend trait definitions,
//! the bitmap font, and the error type.

pub mod backend;
pub mod bitmap_font;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
