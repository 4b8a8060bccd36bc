//! Colors and the fixed editor palette.

use serde::{Deserialize, Serialize};

/// 8-bit sRGB color with alpha.
///
/// Serialized as a hex string (`"#f4eadd"`, or `"#f4eadd80"` when
/// translucent) so configuration files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black, the fallback for unset colors.
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength);
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex);
        }
        let mut channels = [u8::MAX; 4];
        for (slot, pair) in channels.iter_mut().zip(digits.as_bytes().chunks(2)) {
            *slot = pair.iter().fold(0, |acc, &d| acc * 16 + hex_value(d));
        }
        let [r, g, b, a] = channels;
        Ok(Self { r, g, b, a })
    }

    /// `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels in RGBA order, as image buffers store them.
    #[must_use]
    pub const fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }
}

const fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        if color.is_opaque() {
            color.to_hex()
        } else {
            format!("{}{:02x}", color.to_hex(), color.a)
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from(*self))
    }
}

/// Why a hex color string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// A character outside `0-9a-f`.
    InvalidHex,
    /// Neither 6 nor 8 digits.
    InvalidLength,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => f.write_str("color contains a non-hex digit"),
            Self::InvalidLength => f.write_str("color must have 6 or 8 hex digits"),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Colors used by the live editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Model color of an active cell.
    pub active: Color,
    /// Model color of an inactive cell.
    pub inactive: Color,
    /// Fill used when drawing inactive cells on screen.
    pub inactive_display: Color,
    /// Fill of the hovered cell.
    pub hover: Color,
    /// Stroke of the circular brush indicator.
    pub brush: Color,
}

impl Palette {
    /// `#F4EADD`
    pub const ACTIVE: Color = Color::from_rgb8(0xF4, 0xEA, 0xDD);
    /// `#3B3B3B`
    pub const INACTIVE: Color = Color::from_rgb8(0x3B, 0x3B, 0x3B);
    /// `#2A2A2A`
    pub const INACTIVE_DISPLAY: Color = Color::from_rgb8(0x2A, 0x2A, 0x2A);
    /// `#787878`
    pub const HOVER: Color = Color::from_rgb8(0x78, 0x78, 0x78);
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active: Self::ACTIVE,
            inactive: Self::INACTIVE,
            inactive_display: Self::INACTIVE_DISPLAY,
            hover: Self::HOVER,
            brush: Self::ACTIVE,
        }
    }
}
