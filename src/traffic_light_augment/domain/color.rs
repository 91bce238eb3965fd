use image::Rgb;

/// Hue/saturation/value view of one pixel.
///
/// `h` is in degrees `[0, 360)`, `s` in `[0, 1]` and `v` keeps the 8-bit scale `[0, 255]`
/// so that the value channel can be scaled and truncated like a byte channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn from_rgb(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0.map(f32::from);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max > 0.0 { delta / max } else { 0.0 };
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let h = if h < 0.0 { h + 360.0 } else { h };

        Self { h, s, v: max }
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        let chroma = self.v * self.s;
        let sector = self.h / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = self.v - chroma;

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let to_byte = |c: f32| (c + m).round().clamp(0.0, 255.0) as u8;
        Rgb([to_byte(r), to_byte(g), to_byte(b)])
    }

    /// Multiplies the value channel, truncating toward zero as a byte channel would.
    pub fn scale_value(self, factor: f32) -> Self {
        Self {
            v: (self.v * factor).trunc().clamp(0.0, 255.0),
            ..self
        }
    }
}
