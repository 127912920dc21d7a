pub mod array;
pub mod config;
pub mod encode;
pub mod error;
pub mod hex;
pub mod logging;
pub mod pixel;
pub mod reconstruct;
pub mod scan;
pub mod source;

use std::path::Path;

use log::{debug, info};

pub use config::{Config, Dimensions, Filter};
pub use error::{Error, Result};
pub use hex::HexPixel;
pub use pixel::Pixel;
pub use reconstruct::HexImage;
pub use scan::ScanOrder;

/// Runs the whole image to hex conversion described by `config`: decode, resize, convert and
/// write the array literal. Returns the hex pixels that were written.
pub fn convert(config: &Config) -> Result<Vec<HexPixel>> {
    let (image, _format) = source::open(config.image())?;
    let image = source::resize(
        &image,
        config.dimensions(),
        config.filter(),
        config.snapshot_dir(),
    )?;

    let pixels = encode::hex_pixels(&image, config.background());
    let entries: Vec<String> = pixels.iter().map(ToString::to_string).collect();
    array::write(&entries, config.output())?;

    info!(
        "Wrote {} pixels ({}x{}) to {}",
        pixels.len(),
        config.dimensions().width(),
        config.dimensions().height(),
        config.output().display()
    );
    Ok(pixels)
}

/// The inverse of [`convert`]: reads the array literal at `input`, lays it out on a `dimensions`
/// grid and saves that grid as a PNG at `output`.
pub fn restore(dimensions: Dimensions, input: &Path, output: &Path) -> Result<HexImage> {
    let entries = array::read(input)?;
    debug!("Read {} entries from {}", entries.len(), input.display());

    let image = HexImage::from_hex(dimensions, &entries)?;
    image.save_png(output)?;

    info!(
        "Rebuilt {}x{} image into {}",
        image.width(),
        image.height(),
        output.display()
    );
    Ok(image)
}
