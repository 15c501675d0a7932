//! Tinct Core — domain layer for RGBA filter pipelines.
//!
//! This crate contains the raster representation, the fixed filter library,
//! and the sequencer that folds a raster through an ordered filter list.
//! No file formats or framework dependencies.

pub mod error;
pub mod filters;
pub mod pipeline;
pub mod raster;

// Re-exports for convenience.
pub use error::FilterError;
pub use filters::{Channel, ChannelAverages, FilterKind};
pub use pipeline::{Pipeline, process};
pub use raster::{Pixel, Raster};
