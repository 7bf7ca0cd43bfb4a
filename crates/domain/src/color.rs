// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift colors and the translucent overlay values painted on grid cells.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Opacity of the overlay painted over reserved cells.
pub const OVERLAY_ALPHA: f32 = 0.35;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` hex string.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not exactly `#` followed by six hex digits.
    pub fn from_hex(value: &str) -> Result<Self, DomainError> {
        let digits: &str = value
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| DomainError::InvalidColor(value.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| DomainError::InvalidColor(value.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Palette color for a named shift. Unknown names get the neutral color.
    #[must_use]
    pub fn for_shift(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "morning" => Self::new(0x4c, 0xaf, 0x50),
            "afternoon" => Self::new(0xff, 0x98, 0x00),
            "night" => Self::new(0x3f, 0x51, 0xb5),
            "split" => Self::new(0x9c, 0x27, 0xb0),
            "on-call" | "oncall" => Self::new(0xf4, 0x43, 0x36),
            _ => Self::new(0x60, 0x7d, 0x8b),
        }
    }

    /// Formats the color as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Formats the translucent overlay value painted on reserved cells.
    #[must_use]
    pub fn overlay(self) -> String {
        format!("rgba({}, {}, {}, {OVERLAY_ALPHA})", self.r, self.g, self.b)
    }
}
