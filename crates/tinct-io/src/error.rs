use tinct_core::FilterError;

/// Errors that can occur while converting between files and rasters.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to decode image")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode image")]
    Encode(#[source] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decoded pixels do not form a raster: {0}")]
    Raster(#[from] FilterError),
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
}
