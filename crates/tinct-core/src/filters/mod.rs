//! Filter library — the fixed set of per-pixel color operations.
//!
//! Every filter consumes a [`Raster`] and returns the transformed raster.
//! Channel math runs in `i32` and is narrowed back to `u8` through
//! [`clamp_channel`]. Alpha is never touched.

pub mod contrast;
pub mod saturate;
pub mod stats;
pub mod tone;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::raster::Raster;

pub use contrast::high_contrast;
pub use saturate::saturate;
pub use stats::{Channel, ChannelAverages};
pub use tone::{darken, double_brightness, greyscale};

/// Amount subtracted from each channel by [`darken`].
pub const DARKEN_AMOUNT: i32 = 50;
/// Multiplier applied to each channel by [`double_brightness`].
pub const BRIGHTNESS_FACTOR: i32 = 2;
/// Distance multiplier from the channel average used by [`high_contrast`].
pub const CONTRAST_FACTOR: i32 = 2;
/// Boost/cut applied by [`saturate`].
pub const SATURATION_STEP: i32 = 30;

/// Clamp a widened channel value into `[0, 255]` and narrow it.
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Identifies one of the built-in filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Channel mean per pixel, written to R, G and B.
    Greyscale,
    /// Doubles every color channel.
    DoubleBrightness,
    /// Subtracts a fixed amount from every color channel.
    Darken,
    /// Doubles each channel's distance from the image-wide average.
    HighContrast,
    /// Boosts the image's dominant channel and cuts the runner-up.
    Saturate,
}

impl FilterKind {
    /// Human-readable label for logs and CLI help.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Greyscale => "Greyscale",
            Self::DoubleBrightness => "DoubleBrightness",
            Self::Darken => "Darken",
            Self::HighContrast => "HighContrast",
            Self::Saturate => "Saturate",
        }
    }

    /// Every filter, in declaration order.
    pub fn all() -> &'static [Self] {
        const ALL: [FilterKind; 5] = [
            FilterKind::Greyscale,
            FilterKind::DoubleBrightness,
            FilterKind::Darken,
            FilterKind::HighContrast,
            FilterKind::Saturate,
        ];
        &ALL
    }

    /// Whether the filter needs [`ChannelAverages`] of its input.
    pub const fn needs_averages(&self) -> bool {
        matches!(self, Self::HighContrast | Self::Saturate)
    }

    /// Run this filter over `raster`.
    ///
    /// Only the average-based filters can fail, with
    /// [`FilterError::DivisionUndefined`] on a zero-pixel raster.
    pub fn apply(self, raster: Raster) -> Result<Raster, FilterError> {
        match self {
            Self::Greyscale => Ok(greyscale(raster)),
            Self::DoubleBrightness => Ok(double_brightness(raster)),
            Self::Darken => Ok(darken(raster)),
            Self::HighContrast => high_contrast(raster),
            Self::Saturate => saturate(raster),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Accepts labels and snake/kebab-case names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "greyscale" | "grayscale" => Ok(Self::Greyscale),
            "doublebrightness" => Ok(Self::DoubleBrightness),
            "darken" => Ok(Self::Darken),
            "highcontrast" => Ok(Self::HighContrast),
            "saturate" => Ok(Self::Saturate),
            _ => Err(FilterError::UnknownFilter(s.trim().to_string())),
        }
    }
}
