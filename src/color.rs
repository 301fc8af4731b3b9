// Color tokens handed to the rendering layer

use anyhow::{anyhow, Context, Result};
use plotters::style::RGBColor;
use std::fmt;

/// A `#RRGGBB`-style color token.
///
/// Construction does not validate the token: explicit overrides may carry
/// any string the caller chooses. Use [`Color::to_rgb`] when a concrete RGB
/// value is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn new(token: impl Into<String>) -> Self {
        Color(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the token is a seven character `#RRGGBB` hex string
    pub fn is_hex_token(&self) -> bool {
        self.to_rgb().is_ok()
    }

    /// Parse the token into the plotting backend's RGB type
    pub fn to_rgb(&self) -> Result<RGBColor> {
        let digits = self
            .0
            .strip_prefix('#')
            .ok_or_else(|| anyhow!("Color '{}' must start with '#'", self.0))?;

        if digits.chars().count() != 6 {
            return Err(anyhow!(
                "Color '{}' must have exactly 6 hex digits after '#'",
                self.0
            ));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow!("Invalid hex digits in color '{}'", self.0));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .with_context(|| format!("Invalid hex digits in color '{}'", self.0))
        };

        Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Color::new(token)
    }
}

impl From<String> for Color {
    fn from(token: String) -> Self {
        Color(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb_uppercase() {
        let rgb = Color::new("#E6194B").to_rgb().unwrap();
        assert_eq!(rgb, RGBColor(0xE6, 0x19, 0x4B));
    }

    #[test]
    fn test_to_rgb_lowercase() {
        let rgb = Color::new("#3cb44b").to_rgb().unwrap();
        assert_eq!(rgb, RGBColor(0x3C, 0xB4, 0x4B));
    }

    #[test]
    fn test_to_rgb_missing_hash() {
        let result = Color::new("E6194B").to_rgb();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must start with '#'"));
    }

    #[test]
    fn test_to_rgb_wrong_length() {
        let result = Color::new("#FFF").to_rgb();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exactly 6 hex digits"));
    }

    #[test]
    fn test_to_rgb_non_hex() {
        let result = Color::new("#GG0000").to_rgb();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid hex digits"));
    }

    #[test]
    fn test_to_rgb_sign_rejected() {
        assert!(!Color::new("#+F+F+F").is_hex_token());
    }

    #[test]
    fn test_unvalidated_construction() {
        let color = Color::from("not a color");
        assert_eq!(color.as_str(), "not a color");
        assert!(!color.is_hex_token());
        assert_eq!(color.to_string(), "not a color");
    }
}
