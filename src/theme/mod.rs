// Theme system for the TUI
//
// - TomlTheme: Native format with explicit semantic color definitions
// - Theme: Final resolved theme with all colors ready for use
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/searchlight/themes/*.toml
// 2. Bundled themes (compiled into the binary)
// 3. Fallback to hardcoded default

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── UI Element Colors ───────────────────────────────────
    pub status_bar: Color,
    pub title: Color,
    pub border: Color,
    pub highlight: Color, // Maps to border_focused

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Secondary/Muted Text ────────────────────────────────
    pub muted: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,

    // ─── Board Colors ────────────────────────────────────────
    pub cell: Color,
    pub cell_current: Color,
    pub cell_found: Color,
    pub readout: Color,

    // ─── Chart Colors ────────────────────────────────────────
    pub bar_linear: Color,
    pub bar_binary: Color,
    pub chart_axis: Color,

    // ─── Log Level Colors ────────────────────────────────────
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

/// Name used when the configured theme cannot be found
pub const DEFAULT_THEME: &str = "Spy Dark";

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        if let Some(theme) = Self::load_external(name) {
            return theme;
        }

        if let Some(theme) = Self::load_bundled(name) {
            return theme;
        }

        if name != DEFAULT_THEME {
            tracing::warn!("Unknown theme {:?}; using {}", name, DEFAULT_THEME);
            if let Some(theme) = Self::load_bundled(DEFAULT_THEME) {
                return theme;
            }
        }

        // Ultimate fallback: hardcoded default
        Self::hardcoded_default()
    }

    /// Load from a user TOML file, trying the name as given and with spaces
    /// replaced by underscores
    fn load_external(name: &str) -> Option<Self> {
        let dir = Self::themes_dir()?;
        let normalized = name.replace(' ', "_");

        [name.to_string(), normalized]
            .iter()
            .map(|stem| dir.join(format!("{}.toml", stem)))
            .filter(|path| path.exists())
            .find_map(|path| {
                let contents = std::fs::read_to_string(&path).ok()?;
                match TomlTheme::parse(&contents) {
                    Ok(toml) => Some(Self::from_toml(toml)),
                    Err(e) => {
                        tracing::warn!("Ignoring theme {}: {}", path.display(), e);
                        None
                    }
                }
            })
    }

    fn load_bundled(name: &str) -> Option<Self> {
        let filename = format!("{}.toml", name.replace(' ', "_"));
        bundled::BUNDLED_THEMES
            .iter()
            .find(|t| {
                t.name.eq_ignore_ascii_case(name) || t.filename.eq_ignore_ascii_case(&filename)
            })
            .and_then(|t| TomlTheme::parse(t.content).ok())
            .map(Self::from_toml)
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("searchlight").join("themes"))
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&str>) -> BorderType {
        match value {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme) -> Self {
        let parse = TomlTheme::parse_color;

        Self {
            name: toml.meta.name.clone(),

            // UI chrome
            status_bar: parse(&toml.ui.status_bar),
            title: parse(&toml.ui.title),
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),

            // Terminal
            background: parse(&toml.ui.background),
            foreground: parse(&toml.ui.foreground),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),

            // Muted text (explicit or fallback to border)
            muted: toml
                .ui
                .muted
                .as_deref()
                .map(parse)
                .unwrap_or_else(|| parse(&toml.ui.border)),

            border_type: Self::parse_border_type(toml.ui.border_type.as_deref()),

            // Board
            cell: parse(&toml.board.cell),
            cell_current: parse(&toml.board.current),
            cell_found: parse(&toml.board.found),
            readout: parse(&toml.board.readout),

            // Chart
            bar_linear: parse(&toml.chart.linear),
            bar_binary: parse(&toml.chart.binary),
            chart_axis: parse(&toml.chart.axis),

            // Logs
            log_error: parse(&toml.logs.error),
            log_warn: parse(&toml.logs.warn),
            log_info: parse(&toml.logs.info),
            log_debug: parse(&toml.logs.debug),
        }
    }

    /// Hardcoded fallback when no themes can be loaded
    fn hardcoded_default() -> Self {
        Self {
            name: "Fallback".to_string(),

            status_bar: Color::Yellow,
            title: Color::Cyan,
            border: Color::Gray,
            highlight: Color::Yellow,

            background: Color::Reset,
            foreground: Color::Reset,
            selection: Color::DarkGray,
            selection_fg: Color::White,

            muted: Color::DarkGray,
            border_type: BorderType::Plain,

            cell: Color::Reset,
            cell_current: Color::Yellow,
            cell_found: Color::Green,
            readout: Color::Reset,

            bar_linear: Color::Blue,
            bar_binary: Color::Cyan,
            chart_axis: Color::DarkGray,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Reset,
            log_debug: Color::DarkGray,
        }
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes: Vec<String> = bundled::list_bundled_themes()
            .map(str::to_string)
            .collect();

        if let Some(dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|e| e == "toml") {
                        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                            let name = stem.replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&name)) {
                                themes.push(name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}
