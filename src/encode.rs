use image::DynamicImage;
use log::debug;

use crate::hex::HexPixel;
use crate::pixel::Pixel;
use crate::scan::ScanOrder;

/// Converts every pixel of `image` to its hex form, in [`ScanOrder`]. Each pixel is blended over
/// `background` according to its alpha first; [`Pixel::BLACK`] leaves transparent areas dark.
pub fn hex_pixels(image: &DynamicImage, background: Pixel) -> Vec<HexPixel> {
    let rgba = image.to_rgba16();
    let order = ScanOrder::new(rgba.width(), rgba.height());

    let pixels: Vec<HexPixel> = order
        .coords()
        .map(|(x, y)| Pixel::from_rgba16(*rgba.get_pixel(x, y), background))
        .map(HexPixel::from)
        .collect();

    debug!("Converted {} pixels to hex", pixels.len());
    pixels
}

/// Same as [`hex_pixels`], rendered to `0xRRGGBB` strings.
pub fn hex_strings(image: &DynamicImage, background: Pixel) -> Vec<String> {
    hex_pixels(image, background)
        .iter()
        .map(ToString::to_string)
        .collect()
}
