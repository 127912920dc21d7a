use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use poi_hex::config::{self, DEFAULT_HEIGHT, DEFAULT_HEX_INPUT, DEFAULT_PNG_OUTPUT, DEFAULT_WIDTH};
use poi_hex::{logging, Dimensions};

/// Renders a hex array written by `poi-hex` back into a PNG.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Width the array was generated with
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Height the array was generated with
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// The hex array to read
    #[arg(long, default_value = DEFAULT_HEX_INPUT)]
    input: PathBuf,

    /// Where to write the PNG
    #[arg(long, default_value = DEFAULT_PNG_OUTPUT)]
    output: PathBuf,
}

fn main() -> ExitCode {
    config::load_dotenv();
    logging::init(config::debug_mode());

    let args = Args::parse();
    debug!("{:?}", args);

    let result = Dimensions::new(args.width, args.height)
        .and_then(|dimensions| poi_hex::restore(dimensions, &args.input, &args.output));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            err.exit_code()
        }
    }
}
