//! Raster representation for the filter pipeline.

use std::fmt;
use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// A single 8-bit RGBA pixel.
///
/// Laid out as four consecutive bytes so a pixel buffer can be viewed as
/// packed RGBA8 data.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Color channels as `[R, G, B]`.
    pub const fn rgb(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Replace the color channels, keeping alpha.
    pub const fn with_rgb(self, rgb: [u8; 3]) -> Self {
        Self {
            red: rgb[0],
            green: rgb[1],
            blue: rgb[2],
            alpha: self.alpha,
        }
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.red, self.green, self.blue, self.alpha)
    }
}

/// Owned grid of RGBA pixels, stored row-major (`index = y * width + x`).
///
/// The pixel buffer always holds exactly `width * height` entries; every
/// constructor rejects buffers that don't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Raster {
    /// Build a raster from a row-major pixel buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, FilterError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(FilterError::InvalidRaster {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// Build a raster where every pixel has the same value.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self, FilterError> {
        let count = pixel_count(width, height)?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| FilterError::RasterTooLarge { width, height })?;
        pixels.resize(count, pixel);
        Ok(Self { width, height, pixels })
    }

    /// Build a raster from packed RGBA8 bytes (4 bytes per pixel, row-major).
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, FilterError> {
        let expected = pixel_count(width, height)?;
        let expected_bytes = expected
            .checked_mul(size_of::<Pixel>())
            .ok_or(FilterError::RasterTooLarge { width, height })?;
        if bytes.len() != expected_bytes {
            return Err(FilterError::InvalidRaster {
                width,
                height,
                expected,
                actual: bytes.len() / 4,
            });
        }
        let pixels: &[Pixel] = bytemuck::cast_slice(bytes);
        Ok(Self {
            width,
            height,
            pixels: pixels.to_vec(),
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel count.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable pixel slice. The length is fixed, so the size invariant holds.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Packed RGBA8 view of the pixel buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Checked read access. Returns `None` outside `[0, width) x [0, height)`.
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.linear(x, y)])
        } else {
            None
        }
    }

    /// Linear buffer index of `(x, y)`.
    ///
    /// # Panics
    /// If the coordinate lies outside the raster.
    pub fn pixel_index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} raster",
            self.width,
            self.height
        );
        self.linear(x, y)
    }

    /// Consume the raster, replacing every pixel with `f(pixel)`.
    ///
    /// Each pixel is visited exactly once.
    pub fn map_pixels(mut self, mut f: impl FnMut(Pixel) -> Pixel) -> Self {
        for px in &mut self.pixels {
            *px = f(*px);
        }
        self
    }

    fn linear(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Index<(u32, u32)> for Raster {
    type Output = Pixel;

    fn index(&self, (x, y): (u32, u32)) -> &Pixel {
        &self.pixels[self.pixel_index(x, y)]
    }
}

impl IndexMut<(u32, u32)> for Raster {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Pixel {
        let idx = self.pixel_index(x, y);
        &mut self.pixels[idx]
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize, FilterError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(FilterError::RasterTooLarge { width, height })
}
