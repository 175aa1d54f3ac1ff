use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Linear RGB color, each channel in 0.0..=1.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    /// Unpack a `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b }
    }

    /// Multiply every channel by `k` (used to pre-scale light colors by intensity).
    pub fn scaled(self, k: f32) -> Self {
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_channels() {
        let c = Color::from_hex(0xffd45d);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 212.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 93.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn extremes_map_to_black_and_white() {
        assert_eq!(Color::from_hex(0x000000), Color::BLACK);
        assert_eq!(Color::from_hex(0xffffff), Color::WHITE);
    }

    #[test]
    fn scaled_multiplies_all_channels() {
        let c = Color::WHITE.scaled(0.08);
        assert_eq!(c.to_array(), [0.08, 0.08, 0.08]);
    }
}
