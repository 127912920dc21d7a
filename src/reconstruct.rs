use std::path::Path;

use image::{GenericImageView, ImageFormat, Rgba, RgbaImage};
use log::debug;

use crate::config::Dimensions;
use crate::error::{Error, Result};
use crate::hex::HexPixel;
use crate::pixel::Pixel;
use crate::scan::ScanOrder;

/// A pixel grid rebuilt from a hex array. Every pixel is fully opaque because the array format
/// has no alpha channel.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HexImage {
    order: ScanOrder,
    pixels: Vec<Pixel>,
}

impl HexImage {
    /// Lays `entries` out on a `dimensions` grid in [`ScanOrder`]. The number of entries has to
    /// match the grid exactly, and a single malformed entry fails the whole image.
    pub fn from_hex<S: AsRef<str>>(dimensions: Dimensions, entries: &[S]) -> Result<Self> {
        let order = ScanOrder::new(dimensions.width(), dimensions.height());

        if entries.len() as u64 != order.len() {
            return Err(Error::PixelCount {
                expected: order.len(),
                actual: entries.len(),
            });
        }

        let pixels = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .as_ref()
                    .parse::<HexPixel>()
                    .map(HexPixel::to_pixel)
                    .map_err(|source| Error::Hex { index, source })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Rebuilt {}x{} image from {} hex pixels",
            order.width(),
            order.height(),
            pixels.len()
        );

        Ok(Self { order, pixels })
    }

    pub const fn width(&self) -> u32 {
        self.order.width()
    }

    pub const fn height(&self) -> u32 {
        self.order.height()
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Color at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        self.order
            .index_of(x, y)
            .and_then(|i| self.pixels.get(i))
            .copied()
    }

    /// Copies the grid into an owned `image` buffer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            GenericImageView::get_pixel(self, x, y)
        })
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.to_rgba_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| Error::SavePng {
                path: path.to_owned(),
                source,
            })?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// Lets the grid go anywhere the `image` crate takes a decoded image, encoders included.
impl GenericImageView for HexImage {
    type Pixel = Rgba<u8>;

    fn dimensions(&self) -> (u32, u32) {
        HexImage::dimensions(self)
    }

    /// Panics outside the grid, like `ImageBuffer::get_pixel`.
    fn get_pixel(&self, x: u32, y: u32) -> Self::Pixel {
        match self.pixel(x, y) {
            Some(pixel) => pixel.into(),
            None => panic!(
                "pixel ({}, {}) is outside the {}x{} image",
                x,
                y,
                self.width(),
                self.height()
            ),
        }
    }
}

impl From<&HexImage> for RgbaImage {
    fn from(image: &HexImage) -> Self {
        image.to_rgba_image()
    }
}
