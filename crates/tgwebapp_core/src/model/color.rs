//! Color values exchanged with the host.
//!
//! # Invariants
//! - `HexColor` always holds `#` followed by six hex digits, lowercased.
//! - Header color accepts keywords only; background color accepts a keyword
//!   or a hex value.

use super::literal::closed_literal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

closed_literal! {
    /// Color scheme currently used in the Telegram app.
    pub enum ColorScheme {
        Light => "light",
        Dark => "dark",
    }
}

closed_literal! {
    /// Theme slot keywords accepted by `setHeaderColor` and
    /// `setBackgroundColor`.
    pub enum ColorKeyword {
        BgColor => "bg_color",
        SecondaryBgColor => "secondary_bg_color",
    }
}

/// `#RRGGBB` color as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    text: String,
    channels: [u8; 3],
}

impl HexColor {
    /// Parses `#RRGGBB` (either case).
    pub fn parse(value: &str) -> Result<Self, HexColorError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| HexColorError::MissingHash(value.to_string()))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HexColorError::InvalidDigits(value.to_string()));
        }

        let mut channels = [0_u8; 3];
        for (index, channel) in channels.iter_mut().enumerate() {
            let pair = &digits[index * 2..index * 2 + 2];
            *channel = u8::from_str_radix(pair, 16)
                .map_err(|_| HexColorError::InvalidDigits(value.to_string()))?;
        }

        Ok(Self {
            text: format!("#{}", digits.to_ascii_lowercase()),
            channels,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `(r, g, b)` channel values.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let [r, g, b] = self.channels;
        (r, g, b)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Hex color parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    MissingHash(String),
    InvalidDigits(String),
}

impl Display for HexColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHash(value) => write!(f, "color must start with `#`: {value}"),
            Self::InvalidDigits(value) => {
                write!(f, "color must be `#RRGGBB` hex digits: {value}")
            }
        }
    }
}

impl Error for HexColorError {}

/// Argument of `setBackgroundColor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundColor {
    Keyword(ColorKeyword),
    Hex(HexColor),
}

impl BackgroundColor {
    /// Host-facing argument string.
    pub fn as_js_str(&self) -> &str {
        use super::literal::JsLiteral;

        match self {
            Self::Keyword(keyword) => keyword.as_js_str(),
            Self::Hex(color) => color.as_str(),
        }
    }
}

impl From<ColorKeyword> for BackgroundColor {
    fn from(keyword: ColorKeyword) -> Self {
        Self::Keyword(keyword)
    }
}

impl From<HexColor> for BackgroundColor {
    fn from(color: HexColor) -> Self {
        Self::Hex(color)
    }
}
