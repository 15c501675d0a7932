use crate::filters::FilterKind;

/// Errors raised while building rasters or running filters.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Pixel buffer length does not match `width * height`.
    #[error("invalid raster: {width}x{height} needs {expected} pixels, got {actual}")]
    InvalidRaster {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    /// `width * height` does not fit in memory addressing.
    #[error("invalid raster: {width}x{height} overflows the pixel count")]
    RasterTooLarge { width: u32, height: u32 },
    /// Channel averages were requested on a raster with no pixels.
    #[error("channel average undefined for a zero-pixel raster")]
    DivisionUndefined,
    #[error("unknown filter: {0:?}")]
    UnknownFilter(String),
    #[error("invalid pipeline description: {0}")]
    Json(#[from] serde_json::Error),
    /// A pipeline stage failed; the whole `process` call is aborted.
    #[error("stage {index} ({kind}) failed: {source}")]
    Stage {
        index: usize,
        kind: FilterKind,
        #[source]
        source: Box<FilterError>,
    },
}

impl FilterError {
    /// The innermost error, skipping any pipeline stage wrappers.
    pub fn root_cause(&self) -> &FilterError {
        match self {
            Self::Stage { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
