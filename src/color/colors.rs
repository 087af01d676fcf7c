use crate::color::Rgb;

/// RGB triple assigned to a glass
///
/// Channels are stored exactly as given. Nothing here clamps or normalizes,
/// so out-of-range and negative values survive until [`Colors::to_rgb`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Colors {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Colors {
    /// All channels off
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Replace all three channels at once
    pub const fn set(&mut self, red: i32, green: i32, blue: i32) {
        self.red = red;
        self.green = green;
        self.blue = blue;
    }

    /// Convert to an LED color, saturating each channel into `0..=255`
    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: saturate8(self.red),
            g: saturate8(self.green),
            b: saturate8(self.blue),
        }
    }
}

impl From<Rgb> for Colors {
    fn from(rgb: Rgb) -> Self {
        Self::new(i32::from(rgb.r), i32::from(rgb.g), i32::from(rgb.b))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn saturate8(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        u8::MAX
    } else {
        value as u8
    }
}
