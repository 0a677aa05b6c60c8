// TOML theme format parser
//
// Each theme explicitly defines every semantic color used by the boards,
// the chart and the surrounding chrome.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub board: BoardColors,
    pub chart: ChartColors,
    pub logs: LogColors,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[allow(dead_code)] // For future schema evolution
    pub version: u32,
    #[serde(default)]
    #[allow(dead_code)] // Metadata for theme attribution
    pub author: Option<String>,
}

/// Base UI chrome colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub status_bar: String,
    pub selection_bg: String,
    pub selection_fg: String,
    /// Optional muted/secondary text color (falls back to border)
    pub muted: Option<String>,
    /// Optional border style: "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

/// Array board cell colors
#[derive(Debug, Clone, Deserialize)]
pub struct BoardColors {
    pub cell: String,
    /// Cell under inspection
    pub current: String,
    /// Cell holding the target; drawn over `current`
    pub found: String,
    pub readout: String,
}

/// Comparison chart colors
#[derive(Debug, Clone, Deserialize)]
pub struct ChartColors {
    pub linear: String,
    pub binary: String,
    pub axis: String,
}

/// Log level colors for the logs panel
#[derive(Debug, Clone, Deserialize)]
pub struct LogColors {
    pub error: String,
    pub warn: String,
    pub info: String,
    pub debug: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    /// Supports:
    /// - Hex format: #RRGGBB
    /// - ANSI format: ansi:0-15, ansi:fg, ansi:bg (for terminal-native colors)
    pub fn parse_color(value: &str) -> Color {
        // Handle ANSI color codes (for Terminal theme - inherits terminal colors)
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" | "bg" => Color::Reset, // terminal defaults
                _ => Color::White,
            };
        }

        let hex = value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::White; // fallback
        }
        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        Color::Rgb(channel(0..2), channel(2..4), channel(4..6))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(TomlTheme::parse_color("#28292d"), Color::Rgb(0x28, 0x29, 0x2d));
        assert_eq!(TomlTheme::parse_color("c9a66b"), Color::Rgb(0xc9, 0xa6, 0x6b));
    }

    #[test]
    fn parses_ansi_colors() {
        assert_eq!(TomlTheme::parse_color("ansi:3"), Color::Yellow);
        assert_eq!(TomlTheme::parse_color("ansi:bg"), Color::Reset);
        assert_eq!(TomlTheme::parse_color("ansi:99"), Color::White);
    }

    #[test]
    fn malformed_colors_fall_back() {
        assert_eq!(TomlTheme::parse_color("#abc"), Color::White);
        assert_eq!(TomlTheme::parse_color("#zzzzzz"), Color::Rgb(255, 255, 255));
        assert_eq!(TomlTheme::parse_color("#ééé"), Color::White);
    }

    #[test]
    fn missing_section_is_an_error() {
        let result = TomlTheme::parse(
            r##"
[meta]
name = "Broken"
version = 1
"##,
        );
        assert!(result.is_err());
    }
}
