use std::io::Write;

use log::LevelFilter;

/// Sets up `env_logger` for the binaries. Debug mode lowers the default level to `Debug`;
/// `RUST_LOG` still wins when it is set.
pub fn init(debug: bool) {
    env_logger::Builder::new()
        .filter_level(level(debug))
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
