//! Resolved color values.
//!
//! A [`ThemeColor`] is what every theme slot holds once palette references are
//! gone: no color at all, one fixed RGB value, or an adaptive dark/light pair.
//! Choosing between the halves of an adaptive pair is deferred until render
//! time, when the terminal's [`ColorMode`] is known.
//!
//! Hex colors are accepted in 3- or 6-digit form:
//!
//! ```rust
//! use arcade_theme::Rgb;
//!
//! assert_eq!(Rgb::parse_hex("#ff6b35").unwrap(), Rgb(255, 107, 53));
//! assert_eq!(Rgb::parse_hex("#f80").unwrap(), Rgb(255, 136, 0));
//! ```

use std::fmt;

use console::Color;

use crate::theme::ColorMode;

/// A true-color RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a `#rgb` or `#rrggbb` color (case-insensitive).
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("Hex color must start with '#': {}", s))?;

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex: {}", hex));
        }

        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => {
                let digit = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| format!("Invalid hex: {}", hex))
                };
                Ok(Rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let pair = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 2], 16)
                        .map_err(|_| format!("Invalid hex: {}", hex))
                };
                Ok(Rgb(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    /// Converts to the nearest `console::Color` in the 256-color palette.
    pub fn to_console_color(self) -> Color {
        Color::Color256(self.to_ansi256())
    }

    /// Maps to the nearest index in the xterm 256-color palette.
    ///
    /// Grays go to the 24-step grayscale ramp, everything else to the 6x6x6 cube.
    pub fn to_ansi256(self) -> u8 {
        let Rgb(r, g, b) = self;
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let cube = |c: u8| (c as u16 * 5 / 255) as u8;
            16 + 36 * cube(r) + 6 * cube(g) + cube(b)
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// A fully resolved slot color.
///
/// Themes never hold palette references; by the time a value becomes a
/// `ThemeColor` it is one of these three shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeColor {
    /// No color: the slot renders without a foreground/background override.
    #[default]
    None,
    /// The same color in every mode.
    Fixed(Rgb),
    /// Separate colors for dark and light terminal backgrounds.
    Adaptive { dark: Rgb, light: Rgb },
}

impl ThemeColor {
    /// Shorthand for a fixed color from a hex literal known to be valid.
    ///
    /// Used for the built-in tables; malformed input yields [`ThemeColor::None`].
    pub(crate) fn hex(s: &str) -> Self {
        Rgb::parse_hex(s)
            .map(ThemeColor::Fixed)
            .unwrap_or(ThemeColor::None)
    }

    /// Shorthand for an adaptive color from two hex literals.
    pub(crate) fn adaptive(light: &str, dark: &str) -> Self {
        match (Rgb::parse_hex(dark), Rgb::parse_hex(light)) {
            (Ok(dark), Ok(light)) => ThemeColor::Adaptive { dark, light },
            _ => ThemeColor::None,
        }
    }

    /// Returns true for the "no color" value.
    pub fn is_none(&self) -> bool {
        matches!(self, ThemeColor::None)
    }

    /// Picks the concrete color for a terminal background mode.
    ///
    /// Adaptive colors use the dark half when the mode is unknown.
    pub fn for_mode(&self, mode: Option<ColorMode>) -> Option<Rgb> {
        match self {
            ThemeColor::None => None,
            ThemeColor::Fixed(rgb) => Some(*rgb),
            ThemeColor::Adaptive { dark, light } => match mode {
                Some(ColorMode::Light) => Some(*light),
                Some(ColorMode::Dark) | None => Some(*dark),
            },
        }
    }

    /// Converts to a `console::Color` for the given mode.
    pub fn to_console_color(&self, mode: Option<ColorMode>) -> Option<Color> {
        self.for_mode(mode).map(Rgb::to_console_color)
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeColor::None => write!(f, "none"),
            ThemeColor::Fixed(rgb) => write!(f, "{}", rgb),
            ThemeColor::Adaptive { dark, light } => write!(f, "dark:{} light:{}", dark, light),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Hex parsing
    // =========================================================================

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(Rgb::parse_hex("#ff6b35").unwrap(), Rgb(255, 107, 53));
        assert_eq!(Rgb::parse_hex("#000000").unwrap(), Rgb(0, 0, 0));
        assert_eq!(Rgb::parse_hex("#ffffff").unwrap(), Rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(Rgb::parse_hex("#fff").unwrap(), Rgb(255, 255, 255));
        assert_eq!(Rgb::parse_hex("#f80").unwrap(), Rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_hex_case_insensitive() {
        assert_eq!(Rgb::parse_hex("#FF6B35").unwrap(), Rgb(255, 107, 53));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(Rgb::parse_hex("#ff").is_err());
        assert!(Rgb::parse_hex("#ffff").is_err());
        assert!(Rgb::parse_hex("#gggggg").is_err());
        assert!(Rgb::parse_hex("ffffff").is_err());
        // Multi-byte characters must not panic on slicing
        assert!(Rgb::parse_hex("#ééé").is_err());
    }

    #[test]
    fn test_to_ansi256_grayscale() {
        assert_eq!(Rgb(0, 0, 0).to_ansi256(), 16);
        assert_eq!(Rgb(255, 255, 255).to_ansi256(), 231);
        assert!((232..=255).contains(&Rgb(128, 128, 128).to_ansi256()));
    }

    #[test]
    fn test_to_ansi256_color_cube() {
        assert_eq!(Rgb(255, 0, 0).to_ansi256(), 196);
        assert_eq!(Rgb(0, 255, 0).to_ansi256(), 46);
        assert_eq!(Rgb(0, 0, 255).to_ansi256(), 21);
    }

    #[test]
    fn test_rgb_display_roundtrips_to_lowercase_hex() {
        assert_eq!(Rgb(0, 102, 204).to_string(), "#0066cc");
    }

    // =========================================================================
    // Mode selection
    // =========================================================================

    #[test]
    fn test_adaptive_defaults_to_dark() {
        let c = ThemeColor::adaptive("#111111", "#eeeeee");
        assert_eq!(c.for_mode(None), Some(Rgb(0xee, 0xee, 0xee)));
        assert_eq!(c.for_mode(Some(ColorMode::Dark)), Some(Rgb(0xee, 0xee, 0xee)));
        assert_eq!(c.for_mode(Some(ColorMode::Light)), Some(Rgb(0x11, 0x11, 0x11)));
    }

    #[test]
    fn test_none_has_no_console_color() {
        assert_eq!(ThemeColor::None.to_console_color(None), None);
        assert!(ThemeColor::None.is_none());
    }

    #[test]
    fn test_fixed_ignores_mode() {
        let c = ThemeColor::hex("#0066cc");
        assert_eq!(c.for_mode(Some(ColorMode::Light)), Some(Rgb(0, 102, 204)));
        assert_eq!(c.for_mode(Some(ColorMode::Dark)), Some(Rgb(0, 102, 204)));
    }

    #[test]
    fn test_to_console_color_is_256() {
        let c = ThemeColor::hex("#ff6b35");
        assert!(matches!(c.to_console_color(None), Some(Color::Color256(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(ThemeColor::None.to_string(), "none");
        assert_eq!(ThemeColor::hex("#abc").to_string(), "#aabbcc");
        assert_eq!(
            ThemeColor::adaptive("#000000", "#ffffff").to_string(),
            "dark:#ffffff light:#000000"
        );
    }
}
