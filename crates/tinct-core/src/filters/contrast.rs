//! Average-pivoted contrast.

use super::{CONTRAST_FACTOR, clamp_channel};
use crate::error::FilterError;
use crate::filters::stats::{Channel, ChannelAverages};
use crate::raster::Raster;

/// Push every channel away from the image-wide average of that channel.
///
/// ```text
/// out = clamp(avg + 2 × (in − avg))
/// ```
///
/// Averages are taken over this call's input before any pixel changes.
/// A pixel equal to the averages is left unchanged.
pub fn high_contrast(raster: Raster) -> Result<Raster, FilterError> {
    let avg = ChannelAverages::compute(&raster)?;
    let pivots = Channel::ALL.map(|c| avg.get(c));

    Ok(raster.map_pixels(|px| {
        let mut rgb = px.rgb();
        for (c, pivot) in rgb.iter_mut().zip(pivots) {
            let delta = i32::from(*c) - pivot;
            *c = clamp_channel(pivot + CONTRAST_FACTOR * delta);
        }
        px.with_rgb(rgb)
    }))
}
