//! Image-wide channel statistics shared by the average-based filters.

use crate::error::FilterError;
use crate::raster::Raster;

/// One of the three color channels. Alpha is never a filter channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    /// Color channels in `[R, G, B]` order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel in [`Pixel::rgb`](crate::raster::Pixel::rgb).
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Floor of the per-channel mean over every pixel of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelAverages {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl ChannelAverages {
    /// Compute averages over the whole raster.
    ///
    /// Fails with [`FilterError::DivisionUndefined`] when the raster has no
    /// pixels.
    pub fn compute(raster: &Raster) -> Result<Self, FilterError> {
        let count = raster.len() as u64;
        if count == 0 {
            return Err(FilterError::DivisionUndefined);
        }

        let mut sum = [0u64; 3];
        for px in raster.pixels() {
            for (total, c) in sum.iter_mut().zip(px.rgb()) {
                *total += u64::from(c);
            }
        }

        // Each mean is at most 255, so the narrowing is lossless.
        let [red, green, blue] = sum.map(|s| (s / count) as i32);
        let averages = Self { red, green, blue };
        tracing::trace!(?averages, pixels = count, "computed channel averages");
        Ok(averages)
    }

    /// Average for a single channel.
    pub const fn get(&self, channel: Channel) -> i32 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// The channel whose average is strictly greater than both others.
    ///
    /// Returns `None` when the top two averages tie.
    pub fn dominant(&self) -> Option<Channel> {
        let Self { red, green, blue } = *self;
        if red > green && red > blue {
            Some(Channel::Red)
        } else if green > red && green > blue {
            Some(Channel::Green)
        } else if blue > green && blue > red {
            Some(Channel::Blue)
        } else {
            None
        }
    }
}
