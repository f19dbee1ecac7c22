pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` at compile time.
    ///
    /// Only used for the fixed theme catalog, so malformed input is a programming error and
    /// fails const evaluation.
    pub const fn from_hex(s: &str) -> Self {
        const fn nibble(c: u8) -> u8 {
            match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => panic!("invalid hex digit"),
            }
        }
        const fn byte(b: &[u8], i: usize) -> u8 {
            nibble(b[i]) * 16 + nibble(b[i + 1])
        }

        let b = s.as_bytes();
        assert!(b[0] == b'#', "hex color must start with '#'");
        match b.len() {
            7 => Self::rgb(byte(b, 1), byte(b, 3), byte(b, 5)),
            9 => Self {
                r: byte(b, 1),
                g: byte(b, 3),
                b: byte(b, 5),
                a: byte(b, 7),
            },
            _ => panic!("hex color must be #RRGGBB or #RRGGBBAA"),
        }
    }

    /// Multiply the alpha channel by `opacity` (clamped to `0..=1`).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let op = opacity.clamp(0.0, 1.0);
        Self {
            a: (f64::from(self.a) * op).round() as u8,
            ..self
        }
    }

    /// Lowercase `#rrggbb` form (alpha omitted when opaque).
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
