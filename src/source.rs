use std::path::{Path, PathBuf};

use image::error::{ImageError, ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use log::debug;

use crate::config::{Dimensions, Filter};
use crate::error::{Error, Result};

pub const BEFORE_RESIZE: &str = "before_resize.png";
pub const AFTER_RESIZE: &str = "after_resize.png";

/// Opens the image at `path` and decodes it. The format is sniffed from the file contents rather
/// than trusted from the extension; any format the `image` crate was built with (PNG and JPEG
/// here) is accepted.
pub fn open(path: &Path) -> Result<(DynamicImage, ImageFormat)> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| Error::Open {
            path: path.to_owned(),
            source,
        })?;

    let format = reader.format().ok_or_else(|| Error::Decode {
        path: path.to_owned(),
        source: ImageError::Unsupported(UnsupportedError::from_format_and_kind(
            ImageFormatHint::Unknown,
            UnsupportedErrorKind::Format(ImageFormatHint::Unknown),
        )),
    })?;
    debug!("Image format detected: {:?}", format);

    let image = reader.decode().map_err(|source| Error::Decode {
        path: path.to_owned(),
        source,
    })?;

    Ok((image, format))
}

/// Scales `image` to exactly `dimensions`, ignoring its aspect ratio. When `snapshot_dir` is set
/// the image is written there as a PNG both before and after scaling.
pub fn resize(
    image: &DynamicImage,
    dimensions: Dimensions,
    filter: Filter,
    snapshot_dir: Option<&Path>,
) -> Result<DynamicImage> {
    if let Some(dir) = snapshot_dir {
        snapshot(image, &dir.join(BEFORE_RESIZE))?;
    }

    debug!(
        "Resizing {}x{} to {}x{} with {:?}",
        image.width(),
        image.height(),
        dimensions.width(),
        dimensions.height(),
        filter
    );

    let resized = image.resize_exact(dimensions.width(), dimensions.height(), filter.into());

    if let Some(dir) = snapshot_dir {
        snapshot(&resized, &dir.join(AFTER_RESIZE))?;
    }

    Ok(resized)
}

fn snapshot(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Snapshot {
            path: PathBuf::from(path),
            source,
        })?;
    debug!("Wrote snapshot {}", path.display());
    Ok(())
}
