use serde::{Deserialize, Serialize};

/// An immutable RGBA colour. Each channel is in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Colour {
    pub const BLACK: Colour = Colour {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    pub const WHITE: Colour = Colour {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    /// Fixed fallback for callers that need a colour even when random
    /// generation fails.
    pub const MID_GREY: Colour = Colour {
        red: 0.5,
        green: 0.5,
        blue: 0.5,
        alpha: 1.0,
    };

    /// Out-of-range channels are clamped into [0.0, 1.0].
    pub fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Colour {
        Colour {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
            alpha: clamp_channel(alpha),
        }
    }

    /// A fully opaque colour; alpha is always exactly 1.0.
    pub fn opaque(red: f32, green: f32, blue: f32) -> Colour {
        Colour::rgba(red, green, blue, 1.0)
    }

    /// An opaque colour from 8-bit channels.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Colour {
        Colour::opaque(
            red as f32 / 255.0,
            green as f32 / 255.0,
            blue as f32 / 255.0,
        )
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
            (self.alpha * 255.0).round() as u8,
        ]
    }

    /// The colour channels in `#RRGGBB` form. Alpha is not encoded.
    pub fn to_hex(&self) -> String {
        let [red, green, blue, _] = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}", red, green, blue)
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha == 1.0
    }
}

fn clamp_channel(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

impl log::kv::ToValue for Colour {
    fn to_value(&self) -> log::kv::Value<'_> {
        log::kv::Value::from_debug(self)
    }
}
