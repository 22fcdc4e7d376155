use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// CSS colour string usable as a canvas fill style.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }

    /// Source-over composition of `self` on top of `dst`.
    pub fn over(self, dst: Color) -> Color {
        let a = self.a as u32;
        if a == 255 {
            return self;
        }
        let inv = 255 - a;
        let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: (a + (dst.a as u32 * inv + 127) / 255) as u8,
        }
    }
}

/// A 2D drawing target in pixel units.
pub trait Surface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);

    fn fill_round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color);

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#ff4757"), Some(Color::rgb(0xff, 0x47, 0x57)));
        assert_eq!(Color::from_hex("#ffffff80"), Some(Color::rgba(255, 255, 255, 0x80)));
        assert_eq!(Color::from_hex("ff4757"), None);
        assert_eq!(Color::from_hex("#ff47"), None);
        assert_eq!(Color::from_hex("#gg4757"), None);
    }

    #[test]
    fn css_strings() {
        assert_eq!(Color::rgb(10, 10, 12).to_css(), "#0a0a0c");
        assert_eq!(Color::rgba(255, 255, 255, 0).to_css(), "rgba(255,255,255,0.000)");
    }

    #[test]
    fn half_white_over_black() {
        let out = Color::rgba(255, 255, 255, 128).over(Color::rgb(0, 0, 0));
        assert_eq!(out, Color::rgb(128, 128, 128));
    }
}
