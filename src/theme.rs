//! Chrome colors
//!
//! Colors are written as `"#RRGGBB"` or `"#RRGGBBAA"` in the config file and
//! converted to `0xAARRGGBB` words for the frame.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        let byte = |i: usize| {
            hex.get(i..i + 2)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|h| u8::from_str_radix(h, 16).map_err(|e| e.to_string()))
        };
        match hex.len() {
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Colors for the window chrome and the empty content area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeTheme {
    /// Behind the page inside the viewport
    pub background: Color,
    /// Content fill when no page is shown
    pub empty_fill: Color,
    pub status_text: Color,
    pub title_bar: Color,
    pub title_bar_inactive: Color,
    pub title_text: Color,
    pub border: Color,
    pub close_button: Color,
    pub menu_bar: Color,
    pub menu_text: Color,
    pub menu_highlight: Color,
    pub dropdown_background: Color,
    pub dropdown_border: Color,
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl Default for ChromeTheme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x00, 0x00, 0x00),
            empty_fill: Color::rgb(0x3C, 0x3C, 0x3C),
            status_text: Color::rgb(0xE0, 0xE0, 0xE0),
            title_bar: Color::rgb(0x2B, 0x2D, 0x30),
            title_bar_inactive: Color::rgb(0x45, 0x47, 0x4A),
            title_text: Color::rgb(0xF0, 0xF0, 0xF0),
            border: Color::rgb(0x1E, 0x1F, 0x22),
            close_button: Color::rgb(0xC7, 0x4E, 0x39),
            menu_bar: Color::rgb(0xDD, 0xDD, 0xDD),
            menu_text: Color::rgb(0x1A, 0x1A, 0x1A),
            menu_highlight: Color::rgb(0x9C, 0xC0, 0xE7),
            dropdown_background: Color::rgb(0xF4, 0xF4, 0xF4),
            dropdown_border: Color::rgb(0x80, 0x80, 0x80),
            overlay_background: Color::rgba(0x10, 0x10, 0x10, 0xE6),
            overlay_text: Color::rgb(0xF5, 0xF5, 0xF5),
        }
    }
}
