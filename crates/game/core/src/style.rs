//! Colours and text styles shared by rooms, the overlay and clickables.

use std::fmt;
use std::str::FromStr;

/// 24-bit colour, written as `#rrggbb` in data files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);

    /// Scales every channel by `level / 255`, the way a grey tint darkens
    /// an image.
    pub fn tinted(self, level: u8) -> Rgb {
        let scale = |c: u8| ((c as u16 * level as u16) / 255) as u8;
        Rgb(scale(self.0), scale(self.1), scale(self.2))
    }
}

/// Error returned when a colour string is not `#rrggbb`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour '{0}': expected #rrggbb")]
pub struct ParseColorError(pub String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font, size and colour of a piece of text.
///
/// The font is a name only; the front end decides what to do with it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextStyle {
    pub font: String,
    pub size: u16,
    pub color: Rgb,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(font: impl Into<String>, size: u16, color: Rgb) -> Self {
        Self {
            font: font.into(),
            size,
            color,
            align: TextAlign::Left,
        }
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new("Katrinus", 30, Rgb(0x69, 0x42, 0x05)).aligned(TextAlign::Center)
    }
}

/// Fill colours of a clickable in its three visual states.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButtonStyle {
    pub fill: Rgb,
    pub hover_fill: Rgb,
    pub hover_tint: Rgb,
    pub pressed_fill: Rgb,
    pub text: Rgb,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            fill: Rgb(0xAA, 0xAA, 0xAA),
            hover_fill: Rgb(0xAA, 0x33, 0xAA),
            hover_tint: Rgb(0xFF, 0x00, 0x00),
            pressed_fill: Rgb(0x66, 0x11, 0x66),
            text: Rgb::BLACK,
        }
    }
}
