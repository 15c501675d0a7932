//! Dominant-channel saturation boost.
//!
//! The dominant channel is chosen once from the image-wide averages, so every
//! pixel receives the same boost/cut pair regardless of its own colors.
//!
//! Two quirks are kept as-is because existing output depends on them:
//! - when blue dominates, the boosted blue value is derived from the pixel's
//!   **red** channel (`blue = clamp(red + 30)`);
//! - the runner-up comparison is strict, so when the two non-dominant
//!   averages tie the cut lands on the second candidate listed in
//!   [`SaturationPlan::from_averages`].

use super::{SATURATION_STEP, clamp_channel};
use crate::error::FilterError;
use crate::filters::stats::{Channel, ChannelAverages};
use crate::raster::Raster;

/// Per-image decision of which channels to boost and cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaturationPlan {
    /// Channel written with the boosted value.
    pub boost: Channel,
    /// Channel the boosted value is computed from.
    pub boost_source: Channel,
    /// Channel reduced by the saturation step.
    pub cut: Channel,
}

impl SaturationPlan {
    /// Derive the plan from image averages. `None` when no channel strictly
    /// dominates, in which case the image is left unchanged.
    pub fn from_averages(avg: &ChannelAverages) -> Option<Self> {
        let plan = match avg.dominant()? {
            Channel::Red => Self {
                boost: Channel::Red,
                boost_source: Channel::Red,
                cut: if avg.green > avg.blue { Channel::Green } else { Channel::Blue },
            },
            Channel::Green => Self {
                boost: Channel::Green,
                boost_source: Channel::Green,
                cut: if avg.red > avg.blue { Channel::Red } else { Channel::Blue },
            },
            Channel::Blue => Self {
                boost: Channel::Blue,
                boost_source: Channel::Red,
                cut: if avg.green > avg.red { Channel::Green } else { Channel::Red },
            },
        };
        Some(plan)
    }
}

/// Boost the image's dominant channel by 30 and cut the runner-up by 30.
///
/// See the module docs for the blue-dominant and tie-break behavior.
pub fn saturate(raster: Raster) -> Result<Raster, FilterError> {
    let avg = ChannelAverages::compute(&raster)?;
    let Some(plan) = SaturationPlan::from_averages(&avg) else {
        tracing::debug!(?avg, "saturate: no dominant channel, image unchanged");
        return Ok(raster);
    };
    tracing::debug!(?avg, ?plan, "saturate");

    let boost = plan.boost.index();
    let boost_source = plan.boost_source.index();
    let cut = plan.cut.index();

    Ok(raster.map_pixels(|px| {
        let src = px.rgb();
        let mut out = src;
        out[boost] = clamp_channel(i32::from(src[boost_source]) + SATURATION_STEP);
        out[cut] = clamp_channel(i32::from(src[cut]) - SATURATION_STEP);
        px.with_rgb(out)
    }))
}
