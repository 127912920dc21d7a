use image::Rgba;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Self = Self::new(0, 0, 0, u8::MAX);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque pixel. Hex pixels never carry alpha, so this is the only way they
    /// come back out of the array format.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Reduces a 16-bit-per-channel color to 8 bits per channel. The color is first composited
    /// over the opaque `background` using its alpha, so a fully transparent pixel becomes the
    /// background and a half transparent one lands halfway to it. With a black background this is
    /// plain alpha premultiplication, which is what an LED that is switched off looks like.
    ///
    /// Each channel keeps its high byte (`c >> 8`), not the low byte. Both agree for 8-bit
    /// sources, where every channel is stored as `v * 257`; for 16-bit sources the low byte would
    /// be noise.
    pub fn from_rgba16(color: Rgba<u16>, background: Pixel) -> Self {
        let [r, g, b, a] = color.0;

        Self::new(
            high_byte(over(r, widen(background.r), a)),
            high_byte(over(g, widen(background.g), a)),
            high_byte(over(b, widen(background.b), a)),
            high_byte(a),
        )
    }

    #[inline]
    pub const fn rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Pixel> for Rgba<u8> {
    fn from(pixel: Pixel) -> Self {
        Rgba(pixel.rgba())
    }
}

#[inline]
fn over(channel: u16, background: u16, alpha: u16) -> u16 {
    let max = u16::MAX as u32;
    let alpha = alpha as u32;
    // Both products fit in a u32 and their sum is at most `max * max`, so dividing by `max`
    // brings it back into range
    ((channel as u32 * alpha + background as u32 * (max - alpha)) / max) as u16
}

#[inline]
fn widen(channel: u8) -> u16 {
    channel as u16 * 257
}

#[inline]
fn high_byte(channel: u16) -> u8 {
    (channel >> 8) as u8
}
