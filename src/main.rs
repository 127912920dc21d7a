use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use poi_hex::config::{self, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_WIDTH};
use poi_hex::{logging, Config, Filter, HexPixel};

/// Converts an image into a C array of hex colors for a Poi LED display.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output width (number of image slices)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Output height (number of LEDs on the Poi)
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// The image file to convert
    #[arg(long)]
    image: Option<PathBuf>,

    /// Where to write the hex array
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Blend translucent pixels over --background instead of over black
    #[arg(long)]
    calculate_opacity: bool,

    /// Background color for --calculate-opacity, as 0xRRGGBB
    #[arg(long, default_value = "0x000000")]
    background: HexPixel,

    /// Resampling filter used to scale the image
    #[arg(long, value_enum, default_value_t)]
    filter: Filter,
}

impl Args {
    /// Checks the flags and turns them into a [`Config`]. A missing image is reported before bad
    /// dimensions.
    fn into_config(self, debug_mode: bool) -> poi_hex::Result<Config> {
        let image = config::require_image(self.image)?;

        debug!(
            "Flags set: width={} height={} image={} output={} calculate_opacity={} background={} filter={:?}",
            self.width,
            self.height,
            image.display(),
            self.output.display(),
            self.calculate_opacity,
            self.background,
            self.filter
        );

        Ok(Config::new(self.width, self.height, image, self.output)?
            .with_opacity(self.calculate_opacity)
            .with_background(self.background.to_pixel())
            .with_filter(self.filter)
            .with_snapshot_dir(debug_mode.then(|| PathBuf::from("."))))
    }
}

fn main() -> ExitCode {
    config::load_dotenv();

    let debug_mode = config::debug_mode();
    logging::init(debug_mode);

    let result = Args::parse()
        .into_config(debug_mode)
        .and_then(|config| poi_hex::convert(&config));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            err.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use poi_hex::{Error, Pixel};

    fn config_from(args: &[&str]) -> poi_hex::Result<Config> {
        let args = Args::try_parse_from(std::iter::once("poi-hex").chain(args.iter().copied()))
            .unwrap();
        args.into_config(false)
    }

    #[test]
    fn image_is_required() {
        let err = config_from(&[]).unwrap_err();
        assert!(matches!(err, Error::MissingImage));
        assert_eq!(err.exit_status(), 1);

        let err = config_from(&["--image", ""]).unwrap_err();
        assert!(matches!(err, Error::MissingImage));
        assert_eq!(err.exit_status(), 1);
    }

    #[test]
    fn missing_image_wins_over_bad_dimensions() {
        let err = config_from(&["--width", "0"]).unwrap_err();
        assert!(matches!(err, Error::MissingImage));
    }

    #[test]
    fn zero_dimensions_exit_with_two() {
        let err = config_from(&["--image", "in.png", "--width", "0"]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { width: 0, height: 72 }));
        assert_eq!(err.exit_status(), 2);

        let err = config_from(&["--image", "in.png", "--height", "0"]).unwrap_err();
        assert_eq!(err.exit_status(), 2);
    }

    #[test]
    fn flags_reach_the_config() {
        let config = config_from(&[
            "--image",
            "in.png",
            "--width",
            "10",
            "--height",
            "4",
            "--calculate-opacity",
            "--background",
            "0x0000FF",
            "--filter",
            "nearest",
        ])
        .unwrap();

        assert_eq!((config.dimensions().width(), config.dimensions().height()), (10, 4));
        assert_eq!(config.image(), std::path::Path::new("in.png"));
        assert_eq!(config.background(), Pixel::opaque(0, 0, 0xff));
        assert_eq!(config.filter(), Filter::Nearest);
        assert_eq!(config.snapshot_dir(), None);
    }

    #[test]
    fn defaults_premultiply_over_black() {
        let config = config_from(&["--image", "in.png"]).unwrap();
        assert!(!config.calculate_opacity());
        assert_eq!(config.background(), Pixel::BLACK);
        assert_eq!(config.output(), std::path::Path::new(DEFAULT_OUTPUT));
    }

    #[test]
    fn bad_background_is_a_parse_error() {
        assert!(Args::try_parse_from(["poi-hex", "--background", "red"]).is_err());
    }

    #[test]
    fn debug_mode_enables_snapshots() {
        let args = Args::try_parse_from(["poi-hex", "--image", "in.png"]).unwrap();
        let config = args.into_config(true).unwrap();
        assert_eq!(config.snapshot_dir(), Some(std::path::Path::new(".")));
    }
}
