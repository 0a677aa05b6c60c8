//! Bundled TOML themes (compiled into binary)
//!
//! Each theme lives in its own module file for easy editing. Users can drop
//! their own `*.toml` files into ~/.config/searchlight/themes/ to override
//! or extend these.

mod spy_dark;
mod spy_light;
mod terminal;

/// A theme compiled into the binary
pub struct BundledTheme {
    /// File name the theme is matched against ("Spy Dark" -> spy_dark.toml)
    pub filename: &'static str,
    /// Display name, as written in the theme's [meta] section
    pub name: &'static str,
    pub content: &'static str,
}

pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "spy_dark.toml",
        name: "Spy Dark",
        content: spy_dark::THEME,
    },
    BundledTheme {
        filename: "spy_light.toml",
        name: "Spy Light",
        content: spy_light::THEME,
    },
    BundledTheme {
        filename: "terminal.toml",
        name: "Terminal",
        content: terminal::THEME,
    },
];

/// Display names of all bundled themes
pub fn list_bundled_themes() -> impl Iterator<Item = &'static str> {
    BUNDLED_THEMES.iter().map(|t| t.name)
}
