use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::hex::HexError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("An image path must be set. Try --help for more information")]
    MissingImage,

    #[error("invalid dimensions {width}x{height}, width and height must both be at least 1")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("could not open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("could not decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("could not write snapshot {}: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("bad pixel #{index}: {source}")]
    Hex { index: usize, source: HexError },

    #[error("expected {expected} hex pixels, found {actual}")]
    PixelCount { expected: u64, actual: usize },

    #[error("could not save png {}: {source}", .path.display())]
    SavePng {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl Error {
    const MISSING_IMAGE_EXIT: u8 = 1;
    const CONFIG_EXIT: u8 = 2;
    const FAILURE_EXIT: u8 = 1;

    /// Process exit status for this error. Bad dimensions are reported separately from failures
    /// during the actual conversion.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::MissingImage => Self::MISSING_IMAGE_EXIT,
            Self::InvalidDimensions { .. } => Self::CONFIG_EXIT,
            _ => Self::FAILURE_EXIT,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. })
    }
}
