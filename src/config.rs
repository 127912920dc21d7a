use std::env;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::imageops::FilterType;

use crate::error::{Error, Result};
use crate::pixel::Pixel;

pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_HEIGHT: u32 = 72;
pub const DEFAULT_OUTPUT: &str = "./output.txt";
pub const DEFAULT_HEX_INPUT: &str = "output.txt";
pub const DEFAULT_PNG_OUTPUT: &str = "from-hex.png";
pub const DEBUG_MODE_VAR: &str = "DEBUG_MODE";

/// Everything one image to hex conversion needs. Built once at startup and only read afterwards.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    pub(crate) dimensions: Dimensions,
    pub(crate) image: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) calculate_opacity: bool,
    pub(crate) background: Pixel,
    pub(crate) filter: Filter,
    pub(crate) snapshot_dir: Option<PathBuf>,
}

impl Config {
    pub fn new<P, Q>(width: u32, height: u32, image: P, output: Q) -> Result<Self>
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        Ok(Self {
            dimensions: Dimensions::new(width, height)?,
            image: image.into(),
            output: output.into(),
            calculate_opacity: false,
            background: Pixel::BLACK,
            filter: Filter::default(),
            snapshot_dir: None,
        })
    }

    pub fn with_opacity(mut self, calculate_opacity: bool) -> Self {
        self.calculate_opacity = calculate_opacity;
        self
    }

    /// Color that translucent pixels are blended towards when opacity is calculated.
    pub fn with_background(mut self, background: Pixel) -> Self {
        self.background = background;
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Directory that receives `before_resize.png` and `after_resize.png`. No snapshots are
    /// written when this is `None`.
    pub fn with_snapshot_dir<P: Into<PathBuf>>(mut self, dir: Option<P>) -> Self {
        self.snapshot_dir = dir.map(Into::into);
        self
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn image(&self) -> &Path {
        &self.image
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub const fn calculate_opacity(&self) -> bool {
        self.calculate_opacity
    }

    /// Background the encoder composites over. Without opacity calculation transparent pixels
    /// are simply premultiplied, i.e. blended towards black, whatever background was set.
    pub const fn background(&self) -> Pixel {
        if self.calculate_opacity {
            self.background
        } else {
            Pixel::BLACK
        }
    }

    pub const fn filter(&self) -> Filter {
        self.filter
    }

    pub fn snapshot_dir(&self) -> Option<&Path> {
        self.snapshot_dir.as_deref()
    }
}

/// Size of the LED grid: `width` slices of `height` LEDs each. Both are non-zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Resampling kernel used when scaling the source image to the LED grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Checks that an input image was given at all. An empty path counts as missing.
pub fn require_image(image: Option<PathBuf>) -> Result<PathBuf> {
    image
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or(Error::MissingImage)
}

/// Loads a `.env` file from the working directory into the environment, if there is one.
pub fn load_dotenv() {
    // A missing .env file is fine, the environment is still read
    dotenvy::dotenv().ok();
}

/// Reads `DEBUG_MODE` from the environment. Unset or unparsable values count as off.
pub fn debug_mode() -> bool {
    env::var(DEBUG_MODE_VAR)
        .ok()
        .and_then(|value| parse_bool(&value))
        .unwrap_or(false)
}

/// Accepts the usual spellings of a boolean flag: `1`, `t`, `true` and friends.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Config::new(0, 72, "in.png", DEFAULT_OUTPUT),
            Err(Error::InvalidDimensions { width: 0, height: 72 })
        ));
        assert!(matches!(
            Config::new(300, 0, "in.png", DEFAULT_OUTPUT),
            Err(Error::InvalidDimensions { width: 300, height: 0 })
        ));
        assert!(Config::new(1, 1, "in.png", DEFAULT_OUTPUT).is_ok());
    }

    #[test]
    fn builder_defaults() {
        let config = Config::new(300, 72, "in.png", DEFAULT_OUTPUT).unwrap();
        assert_eq!(config.dimensions(), Dimensions::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap());
        assert_eq!(config.filter(), Filter::Lanczos3);
        assert!(!config.calculate_opacity());
        assert_eq!(config.background(), Pixel::BLACK);
        assert_eq!(config.snapshot_dir(), None);
        assert_eq!(config.output(), Path::new("./output.txt"));

        let config = config
            .with_opacity(true)
            .with_filter(Filter::Nearest)
            .with_snapshot_dir(Some("."));
        assert!(config.calculate_opacity());
        assert_eq!(config.filter(), Filter::Nearest);
        assert_eq!(config.snapshot_dir(), Some(Path::new(".")));
    }

    #[test]
    fn background_only_applies_with_opacity() {
        let blue = Pixel::opaque(0, 0, 0xff);
        let config = Config::new(1, 1, "in.png", DEFAULT_OUTPUT).unwrap().with_background(blue);
        assert_eq!(config.background(), Pixel::BLACK);
        assert_eq!(config.with_opacity(true).background(), blue);
    }

    #[test]
    fn image_path_is_required() {
        assert!(matches!(require_image(None), Err(Error::MissingImage)));
        assert!(matches!(require_image(Some(PathBuf::new())), Err(Error::MissingImage)));
        assert_eq!(
            require_image(Some(PathBuf::from("in.png"))).unwrap(),
            PathBuf::from("in.png")
        );
    }

    #[test]
    fn boolean_grammar() {
        for yes in ["1", "t", "T", "TRUE", "true", "True", " true "] {
            assert_eq!(parse_bool(yes), Some(true), "{yes:?}");
        }
        for no in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(no), Some(false), "{no:?}");
        }
        for junk in ["", "yes", "on", "tRuE", "2"] {
            assert_eq!(parse_bool(junk), None, "{junk:?}");
        }
    }

    #[test]
    fn filters_map_onto_image_kernels() {
        assert!(matches!(FilterType::from(Filter::default()), FilterType::Lanczos3));
        assert!(matches!(FilterType::from(Filter::Nearest), FilterType::Nearest));
        assert_eq!(Filter::from_str("catmull-rom", true), Ok(Filter::CatmullRom));
    }
}
