//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are the four Catppuccin flavours; custom themes are TOML
//! files with the same shape.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha` (default)
//! - `catppuccin-latte`
//! - `catppuccin-frappe`
//! - `catppuccin-macchiato`
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! tab_active_fg = "#1e1e2e"
//! tab_active_bg = "#89b4fa"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! focus_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! section_title_fg = "#89b4fa"
//! badge_fg = "#a6e3a1"
//! danger_fg = "#f38ba8"
//! ```
//!
//! # Example
//!
//! ```rust
//! use rozgarhub::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert_eq!(Theme::fg(&theme.colors.danger_fg), "\u{1b}[38;2;210;15;57m");
//! ```

use crate::domain::error::{Result, RozgarError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Active screen tab.
    pub tab_active_fg: String,
    pub tab_active_bg: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, secondary lines and empty states.
    pub text_dim: String,

    pub border: String,
    /// Border of the focused search box or form field.
    pub focus_border: String,

    /// Search hit highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Home screen section titles and the form title.
    pub section_title_fg: String,
    /// Job type badge.
    pub badge_fg: String,
    /// Delete confirmation prompt.
    pub danger_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RozgarError::Io`] if the file cannot be read and
    /// [`RozgarError::Config`] if its contents are not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| RozgarError::Config(format!("invalid theme file: {e}")))
    }

    /// Converts a hex color to RGB. Malformed colors render as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the Catppuccin Mocha theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn test_malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#zz"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
    }

    #[test]
    fn test_theme_file_round_trip_and_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = toml::to_string(&Theme::default()).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        assert_eq!(Theme::from_file(file.path()).unwrap(), Theme::default());

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        broken.write_all(b"name = 3").unwrap();
        assert!(matches!(
            Theme::from_file(broken.path()),
            Err(RozgarError::Config(_))
        ));
    }
}
