//! Statistic-free tone filters: greyscale, brightness, darken.

use super::{BRIGHTNESS_FACTOR, DARKEN_AMOUNT, clamp_channel};
use crate::raster::{Pixel, Raster};

/// Replace R, G and B with their truncated mean.
///
/// Each pixel uses only its own channels; there is no image-wide term.
pub fn greyscale(raster: Raster) -> Raster {
    raster.map_pixels(|px| {
        let sum = u16::from(px.red) + u16::from(px.green) + u16::from(px.blue);
        let gray = (sum / 3) as u8;
        px.with_rgb([gray; 3])
    })
}

/// Double every color channel, saturating at 255.
pub fn double_brightness(raster: Raster) -> Raster {
    raster.map_pixels(|px| map_rgb(px, |c| clamp_channel(c * BRIGHTNESS_FACTOR)))
}

/// Subtract a fixed amount from every color channel, saturating at 0.
pub fn darken(raster: Raster) -> Raster {
    raster.map_pixels(|px| map_rgb(px, |c| clamp_channel(c - DARKEN_AMOUNT)))
}

fn map_rgb(px: Pixel, f: impl Fn(i32) -> u8) -> Pixel {
    px.with_rgb(px.rgb().map(|c| f(i32::from(c))))
}
