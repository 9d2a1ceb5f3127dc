use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// RGBA color with 8-bit channels and an alpha in `0..=1`.
///
/// Serializes as the CSS string `rgba(r,g,b,a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const LIME: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const ORANGE: Self = Self::rgb(255, 165, 0);
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Self = Self::rgb(211, 211, 211);
    pub const TRANSPARENT: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0.0,
    };

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> ChartResult<Self> {
        Self::rgb(red, green, blue).with_alpha(alpha)
    }

    /// Returns a copy with a new alpha, rejecting values outside `0..=1`.
    pub fn with_alpha(self, alpha: f64) -> ChartResult<Self> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(ChartError::InvalidInput(format!(
                "color alpha must be finite and in [0, 1], got {alpha}"
            )));
        }
        Ok(Self { alpha, ..self })
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(invalid_hex(hex));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid_hex(hex))
        };
        match digits.len() {
            3 => {
                let short = |index: usize| channel(index..index + 1).map(|v| v * 17);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => {
                let alpha = f64::from(channel(6..8)?) / 255.0;
                Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?).with_alpha(alpha)
            }
            _ => Err(invalid_hex(hex)),
        }
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        self.red
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        self.green
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        self.blue
    }

    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }
}

fn invalid_hex(hex: &str) -> ChartError {
    ChartError::InvalidInput(format!("`{hex}` is not a hex color"))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn css_form_uses_shortest_alpha() {
        assert_eq!(Color::RED.to_string(), "rgba(255,0,0,1)");
        let faded = Color::BLUE.with_alpha(0.5).expect("alpha");
        assert_eq!(faded.to_string(), "rgba(0,0,255,0.5)");
    }

    #[test]
    fn alpha_outside_unit_range_is_rejected() {
        assert!(Color::rgba(1, 2, 3, 1.5).is_err());
        assert!(Color::rgba(1, 2, 3, f64::NAN).is_err());
    }

    #[test]
    fn hex_forms_are_parsed() {
        assert_eq!(Color::from_hex("#f00").expect("short"), Color::RED);
        assert_eq!(Color::from_hex("00ffff").expect("long"), Color::CYAN);
        let with_alpha = Color::from_hex("#000000ff").expect("alpha");
        assert_eq!(with_alpha, Color::BLACK);
        assert!(Color::from_hex("#12").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
    }
}
