// palette.rs - Theme colors shared by every front-end

/// An opaque sRGB color, independent of any drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

pub const WHITE: Rgb = Rgb::from_hex(0xd1d0c5);
pub const GRAY40: Rgb = Rgb::from_hex(0x646669);
pub const GRAY60: Rgb = Rgb::from_hex(0x323437);
pub const GRAY80: Rgb = Rgb::from_hex(0x2c2e31);
pub const BLACK: Rgb = Rgb::from_hex(0x232427);
pub const ORANGE: Rgb = Rgb::from_hex(0xe2b514);
pub const DARK_ORANGE: Rgb = Rgb::from_hex(0xbc9710);
