//! Image file boundary for Tinct.
//!
//! Converts encoded images (PNG, JPEG, BMP, ...) to and from the
//! [`tinct_core::Raster`] the filter pipeline operates on. Everything is
//! decoded to 8-bit RGBA.

mod codec;
mod error;

pub use codec::{decode, encode, load, save};
pub use error::CodecError;
pub use image::ImageFormat;
