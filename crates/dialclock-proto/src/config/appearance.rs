use hex_color::HexColor;
use iced::Color;
use serde::Deserialize;

/// Colors and stroke settings of the clock face.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Appearance {
    #[serde(default = "default_background_color")]
    pub background_color: HexColor,
    #[serde(default = "default_face_color")]
    pub face_color: HexColor,
    #[serde(
        deserialize_with = "stroke_width_deserializer",
        default = "default_face_stroke_width"
    )]
    pub face_stroke_width: f32,
    #[serde(default = "default_hour_hand_color")]
    pub hour_hand_color: HexColor,
    #[serde(default = "default_minute_hand_color")]
    pub minute_hand_color: HexColor,
    #[serde(default = "default_second_hand_color")]
    pub second_hand_color: HexColor,
}

impl Appearance {
    pub fn background(&self) -> Color {
        to_color(self.background_color)
    }

    pub fn face(&self) -> Color {
        to_color(self.face_color)
    }

    pub fn hour_hand(&self) -> Color {
        to_color(self.hour_hand_color)
    }

    pub fn minute_hand(&self) -> Color {
        to_color(self.minute_hand_color)
    }

    pub fn second_hand(&self) -> Color {
        to_color(self.second_hand_color)
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            face_color: default_face_color(),
            face_stroke_width: default_face_stroke_width(),
            hour_hand_color: default_hour_hand_color(),
            minute_hand_color: default_minute_hand_color(),
            second_hand_color: default_second_hand_color(),
        }
    }
}

fn to_color(color: HexColor) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, f32::from(color.a) / 255.)
}

fn stroke_width_deserializer<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = f32::deserialize(deserializer)?;

    if v <= 0.0 {
        return Err(serde::de::Error::custom(
            "Stroke width must be greater than 0.0",
        ));
    }

    Ok(v)
}

fn default_background_color() -> HexColor {
    HexColor::rgb(255, 255, 255)
}

fn default_face_color() -> HexColor {
    HexColor::rgb(0x6F, 0x58, 0x8D)
}

fn default_face_stroke_width() -> f32 {
    5.
}

fn default_hour_hand_color() -> HexColor {
    HexColor::rgb(0x6F, 0x3B, 0x8D)
}

fn default_minute_hand_color() -> HexColor {
    HexColor::rgb(0x50, 0x61, 0x98)
}

fn default_second_hand_color() -> HexColor {
    HexColor::rgb(0xDE, 0x31, 0x31)
}
