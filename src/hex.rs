use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::pixel::Pixel;

/// The `0xRRGGBB` text form of a pixel. Alpha is not part of the format.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct HexPixel {
    rgb: [u8; 3],
}

impl HexPixel {
    pub const PREFIX: &'static str = "0x";
    /// Length in bytes of every hex pixel string, prefix included.
    pub const LEN: usize = Self::PREFIX.len() + 6;

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    pub const fn to_pixel(self) -> Pixel {
        let [r, g, b] = self.rgb;
        Pixel::opaque(r, g, b)
    }
}

impl From<Pixel> for HexPixel {
    fn from(pixel: Pixel) -> Self {
        Self { rgb: pixel.rgb() }
    }
}

impl fmt::Display for HexPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::PREFIX)?;
        self.rgb
            .iter()
            .copied()
            .map(byte_to_hex)
            .try_for_each(|(h1, h2)| write!(f, "{}{}", h1, h2))
    }
}

impl FromStr for HexPixel {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::LEN {
            return Err(HexError::Length {
                value: s.to_owned(),
                len: s.len(),
            });
        }

        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| HexError::Prefix { value: s.to_owned() })?
            .as_bytes();

        let mut rgb = [0u8; 3];
        for (channel, pair) in rgb.iter_mut().zip(digits.chunks_exact(2)) {
            let hi = hex_to_nibble(pair[0]);
            let lo = hex_to_nibble(pair[1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => *channel = (hi << 4) | lo,
                _ => return Err(HexError::Digit { value: s.to_owned() }),
            }
        }

        Ok(Self { rgb })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("hex pixel {value:?} is {len} bytes long, expected {}", HexPixel::LEN)]
    Length { value: String, len: usize },
    #[error("hex pixel {value:?} does not start with {:?}", HexPixel::PREFIX)]
    Prefix { value: String },
    #[error("hex pixel {value:?} contains a non-hex digit")]
    Digit { value: String },
}

fn byte_to_hex(byte: u8) -> (char, char) {
    (nibble_to_hex(byte >> 4), nibble_to_hex(byte & 0x0F))
}

fn nibble_to_hex(nibble: u8) -> char {
    (nibble
        + match nibble {
            0..=9 => b'0',
            _ => b'a' - 10,
        }) as char
}

fn hex_to_nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
