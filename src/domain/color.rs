use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// Flat RGB color with one byte per channel
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Accepts `#rrggbb` or bare `rrggbb`, either case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(ColorError::Length(s.to_string()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(s.to_string()));
        }
        let bytes = u32::from_str_radix(hex, 16).map_err(|_| ColorError::Digit(s.to_string()))?;
        let [_, r, g, b] = bytes.to_be_bytes();
        Ok(Self::new(r, g, b))
    }
}

/// Mix parent colors for a newborn cell.
///
/// Every channel is summed and floor-divided on its own; the packed
/// 24-bit value is never averaged.
///
/// Panics on an empty slice: birth always has exactly three parents.
pub fn average(colors: &[Rgb]) -> Rgb {
    assert!(!colors.is_empty(), "cannot average an empty color set");

    let sums = colors.iter().fold([0u32; 3], |mut acc, color| {
        for (sum, channel) in acc.iter_mut().zip(color.channels()) {
            *sum += u32::from(channel);
        }
        acc
    });
    let count = colors.len() as u32;
    let [r, g, b] = sums.map(|sum| (sum / count) as u8);
    Rgb::new(r, g, b)
}
