//! Decoding and encoding through the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{ExtendedColorType, ImageFormat};
use tinct_core::Raster;

use crate::error::CodecError;

/// Decode an encoded image into an RGBA8 raster.
///
/// The format is sniffed from the data. Sources that are already RGBA8 come
/// through bit-for-bit; other layouts are expanded (gray to R=G=B, missing
/// alpha to 255).
pub fn decode(bytes: &[u8]) -> Result<Raster, CodecError> {
    let img = image::load_from_memory(bytes).map_err(CodecError::Decode)?;
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Raster::from_rgba_bytes(width, height, rgba.as_raw())?)
}

/// Encode a raster in the given format.
///
/// Lossless formats such as PNG reproduce every pixel exactly.
pub fn encode(raster: &Raster, format: ImageFormat) -> Result<Vec<u8>, CodecError> {
    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        raster.as_bytes(),
        raster.width(),
        raster.height(),
        ExtendedColorType::Rgba8,
        format,
    )
    .map_err(CodecError::Encode)?;
    Ok(out.into_inner())
}

/// Load an image file from disk.
pub fn load(path: &Path) -> Result<Raster, CodecError> {
    let bytes = std::fs::read(path)?;
    let raster = decode(&bytes)?;
    tracing::info!(
        "loaded {} ({}x{})",
        path.display(),
        raster.width(),
        raster.height()
    );
    Ok(raster)
}

/// Write a raster to disk; the format follows the file extension.
pub fn save(raster: &Raster, path: &Path) -> Result<(), CodecError> {
    let format = ImageFormat::from_path(path)
        .map_err(|_| CodecError::UnsupportedFormat(path.display().to_string()))?;
    let bytes = encode(raster, format)?;
    std::fs::write(path, bytes)?;
    tracing::info!("wrote {} ({format:?})", path.display());
    Ok(())
}
