//! Theme configuration and sidebar theme derivation
//!
//! Themes are plain data passed explicitly down the component tree: the parent
//! container resolves its active theme once and hands the derived sidebar
//! theme to the sidebar subtree. No ambient lookup.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

/// An RGB color, hex-encoded (`#rrggbb`) in config form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(value: &str) -> Result<Self> {
        let hex = value
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.is_ascii())
            .ok_or_else(|| AppError::InvalidColor(value.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| AppError::InvalidColor(value.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Color::from_hex(&value).map_err(D::Error::custom)
    }
}

/// Visual theme for one subtree of the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
    pub background_color: Color,
    pub secondary_background_color: Color,
    pub text_color: Color,
    /// Marks a theme derived for sidebar use.
    #[serde(default)]
    pub in_sidebar: bool,
}

impl ThemeConfig {
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            background_color: Color::rgb(0xff, 0xff, 0xff),
            secondary_background_color: Color::rgb(0xf0, 0xf2, 0xf6),
            text_color: Color::rgb(0x31, 0x33, 0x3f),
            in_sidebar: false,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            background_color: Color::rgb(0x0e, 0x11, 0x17),
            secondary_background_color: Color::rgb(0x26, 0x27, 0x30),
            text_color: Color::rgb(0xfa, 0xfa, 0xfa),
            in_sidebar: false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Derive the sidebar theme from an ambient theme: background and secondary
/// background swap places so the sidebar stands out against the page, and the
/// result is marked for sidebar use.
pub fn create_sidebar_theme(theme: &ThemeConfig) -> ThemeConfig {
    logging::log_sidebar_theme(&theme.name);

    ThemeConfig {
        name: "Sidebar".to_string(),
        background_color: theme.secondary_background_color,
        secondary_background_color: theme.background_color,
        text_color: theme.text_color,
        in_sidebar: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_parses_channels() {
        let color = Color::from_hex("#f0a102").unwrap();
        assert_eq!(color, Color::rgb(0xf0, 0xa1, 0x02));
    }

    #[test]
    fn test_from_hex_rejects_missing_prefix() {
        assert!(matches!(
            Color::from_hex("f0a102"),
            Err(AppError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#f0a1023").is_err());
    }

    #[test]
    fn test_from_hex_rejects_non_hex_digits() {
        assert!(Color::from_hex("#f0a1zz").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Color::rgb(0x0e, 0x11, 0x17);
        assert_eq!(Color::from_hex(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn test_sidebar_theme_swaps_backgrounds() {
        let base = ThemeConfig::light();
        let sidebar = create_sidebar_theme(&base);

        assert_eq!(sidebar.background_color, base.secondary_background_color);
        assert_eq!(sidebar.secondary_background_color, base.background_color);
        assert_eq!(sidebar.text_color, base.text_color);
    }

    #[test]
    fn test_sidebar_theme_is_marked() {
        let sidebar = create_sidebar_theme(&ThemeConfig::dark());
        assert!(sidebar.in_sidebar);
        assert_eq!(sidebar.name, "Sidebar");
    }

    #[test]
    fn test_sidebar_derivation_restores_colors_when_applied_twice() {
        let base = ThemeConfig::dark();
        let twice = create_sidebar_theme(&create_sidebar_theme(&base));

        assert_eq!(twice.background_color, base.background_color);
        assert_eq!(
            twice.secondary_background_color,
            base.secondary_background_color
        );
    }

    #[test]
    fn test_from_json() {
        let theme = ThemeConfig::from_json(
            r##"{
                "name": "Custom",
                "background_color": "#101418",
                "secondary_background_color": "#202830",
                "text_color": "#e0e0e0"
            }"##,
        )
        .unwrap();

        assert_eq!(theme.background_color, Color::rgb(0x10, 0x14, 0x18));
        assert!(!theme.in_sidebar);
    }

    #[test]
    fn test_from_json_rejects_malformed_color() {
        let result = ThemeConfig::from_json(
            r##"{
                "name": "Broken",
                "background_color": "not-a-color",
                "secondary_background_color": "#202830",
                "text_color": "#e0e0e0"
            }"##,
        );
        assert!(matches!(result, Err(AppError::ThemeConfig(_))));
    }
}
