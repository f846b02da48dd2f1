//! Page theming.
//!
//! A theme fixes how each [`NotificationKind`] looks: its background, its
//! icon glyph, and the text color and shadow shared by all kinds. It also
//! carries the colors of invalid form fields and the easing of hover
//! effects. Themes are built in or loaded from TOML files.
//!
//! # Built-in Themes
//!
//! - `aurora`: Gradient backgrounds with unicode glyphs (default)
//! - `monochrome`: Flat dark backgrounds with ASCII glyphs
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! hover_transition = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)"
//!
//! [colors]
//! info_background = "linear-gradient(135deg, #6366f1, #8b5cf6)"
//! success_background = "#16a34a"
//! error_background = "#dc2626"
//! text = "white"
//! shadow = "0 4px 12px rgba(0, 0, 0, 0.3)"
//! error_border = "#ef4444"
//! error_glow = "0 0 0 3px rgba(239, 68, 68, 0.1)"
//! error_text = "#ef4444"
//!
//! [icons]
//! info = "ℹ"
//! success = "✓"
//! error = "✕"
//! ```
//!
//! # Example
//!
//! ```rust
//! use portfolio_ui::domain::NotificationKind;
//! use portfolio_ui::ui::Theme;
//!
//! let theme = Theme::from_name("aurora").unwrap();
//! assert_eq!(theme.icon(NotificationKind::Success), "✓");
//! ```

use crate::domain::{NotificationKind, PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Notification color scheme, glyphs and form error colors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// `transition` of every hover-group element that is not revealed on scroll.
    pub hover_transition: String,
    pub colors: ThemeColors,
    pub icons: ThemeIcons,
}

/// CSS values used by notifications and invalid form fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub info_background: String,
    pub success_background: String,
    pub error_background: String,

    /// Text color for every kind.
    pub text: String,

    /// Box shadow for every kind.
    pub shadow: String,

    /// `border-color` of an invalid input.
    pub error_border: String,
    /// `box-shadow` of an invalid input.
    pub error_glow: String,
    /// Text color of field error messages.
    pub error_text: String,
}

/// Glyph prefixed to the message of each kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeIcons {
    pub info: String,
    pub success: String,
    pub error: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `aurora`, `monochrome`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "aurora" => include_str!("../../themes/aurora.toml"),
            "monochrome" => include_str!("../../themes/monochrome.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Io`] if the file cannot be read and
    /// [`PortfolioError::Theme`] if its content is not a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| PortfolioError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Background for notifications of `kind`.
    #[must_use]
    pub fn background(&self, kind: NotificationKind) -> &str {
        match kind {
            NotificationKind::Info => &self.colors.info_background,
            NotificationKind::Success => &self.colors.success_background,
            NotificationKind::Error => &self.colors.error_background,
        }
    }

    /// Icon glyph for notifications of `kind`.
    #[must_use]
    pub fn icon(&self, kind: NotificationKind) -> &str {
        match kind {
            NotificationKind::Info => &self.icons.info,
            NotificationKind::Success => &self.icons.success,
            NotificationKind::Error => &self.icons.error,
        }
    }
}

impl Default for Theme {
    /// Returns the `aurora` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("aurora").expect("Built-in aurora theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::from_name("aurora").unwrap().name, "aurora");
        assert_eq!(Theme::from_name("monochrome").unwrap().name, "monochrome");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_kind_colors() {
        let theme = Theme::default();
        assert_eq!(
            theme.background(NotificationKind::Info),
            "linear-gradient(135deg, #6366f1, #8b5cf6)"
        );
        assert_eq!(
            theme.background(NotificationKind::Success),
            "linear-gradient(135deg, #22c55e, #16a34a)"
        );
        assert_eq!(
            theme.background(NotificationKind::Error),
            "linear-gradient(135deg, #ef4444, #dc2626)"
        );
        assert_eq!(theme.icon(NotificationKind::Error), "✕");
        assert_eq!(theme.icon(NotificationKind::Info), "ℹ");
    }

    #[test]
    fn default_form_and_hover_values() {
        let theme = Theme::default();
        assert_eq!(theme.colors.error_border, "#ef4444");
        assert_eq!(theme.colors.error_glow, "0 0 0 3px rgba(239, 68, 68, 0.1)");
        assert_eq!(theme.colors.error_text, "#ef4444");
        assert_eq!(theme.hover_transition, "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)");
    }

    #[test]
    fn from_file_round_trips_a_built_in() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&Theme::from_name("monochrome").unwrap()).unwrap().as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme, Theme::from_name("monochrome").unwrap());
    }

    #[test]
    fn from_file_rejects_incomplete_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"half\"").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PortfolioError::Theme(_)));
    }
}
