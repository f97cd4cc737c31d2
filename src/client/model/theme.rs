//! Design tokens for the site.
//!
//! The theme is loaded once when the app starts and shared with the component
//! tree through [`ThemeProvider`](crate::client::component::ThemeProvider).
//! Tokens are exposed to utility classes as CSS custom properties, so a class
//! like `text-[var(--nn-muted)]` picks up whatever the loaded theme says.

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::client::model::error::ThemeError;

/// Theme document bundled with the binary.
const BUNDLED_THEME: &str = include_str!("../../../theme.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeColors {
    pub nn_bg: String,
    pub nn_surface: String,
    pub nn_cyan: String,
    pub nn_purple: String,
    pub nn_warm: String,
    pub nn_muted: String,
}

impl ThemeColors {
    /// Token name and value pairs in declaration order.
    pub fn tokens(&self) -> [(&'static str, &str); 6] {
        [
            ("nn-bg", self.nn_bg.as_str()),
            ("nn-surface", self.nn_surface.as_str()),
            ("nn-cyan", self.nn_cyan.as_str()),
            ("nn-purple", self.nn_purple.as_str()),
            ("nn-warm", self.nn_warm.as_str()),
            ("nn-muted", self.nn_muted.as_str()),
        ]
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            nn_bg: "#0B1220".to_string(),
            nn_surface: "#0F1724".to_string(),
            nn_cyan: "#00B5D8".to_string(),
            nn_purple: "#7C3AED".to_string(),
            nn_warm: "#FFB86B".to_string(),
            nn_muted: "#B9C6D8".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeConfig {
    pub colors: ThemeColors,
    pub font_sans: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            colors: ThemeColors::default(),
            font_sans: vec![
                "Inter".to_string(),
                "ui-sans-serif".to_string(),
                "system-ui".to_string(),
            ],
        }
    }
}

impl ThemeConfig {
    /// Parses and validates a theme document.
    ///
    /// # Returns
    /// - `Ok(ThemeConfig)` - Every color is a hex value and the font stack is non-empty
    /// - `Err(ThemeError::Parse)` - The document is malformed or missing a token
    /// - `Err(ThemeError::InvalidColor)` - A token is not `#RGB` or `#RRGGBB`
    /// - `Err(ThemeError::EmptyFontStack)` - `font-sans` is empty or names a blank family
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let theme: ThemeConfig = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Loads the bundled theme, falling back to the default tokens if it is invalid.
    pub fn load() -> Self {
        match Self::from_json(BUNDLED_THEME) {
            Ok(theme) => {
                tracing::debug!("Loaded bundled theme");
                theme
            }
            Err(e) => {
                tracing::warn!("Bundled theme rejected, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ThemeError> {
        for (token, value) in self.colors.tokens() {
            if !is_hex_color(value) {
                return Err(ThemeError::InvalidColor {
                    token,
                    value: value.to_string(),
                });
            }
        }

        let blank_family = self.font_sans.iter().any(|family| family.trim().is_empty());
        if self.font_sans.is_empty() || blank_family {
            return Err(ThemeError::EmptyFontStack);
        }

        Ok(())
    }

    /// CSS `font-family` value for the sans stack.
    ///
    /// Families containing spaces are quoted.
    pub fn font_family(&self) -> String {
        self.font_sans
            .iter()
            .map(|family| {
                if family.contains(' ') {
                    format!("\"{}\"", family)
                } else {
                    family.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Inline style declaring every token as a custom property on the root element.
    pub fn root_style(&self) -> String {
        let mut style = String::new();
        for (token, value) in self.colors.tokens() {
            style.push_str(&format!("--{}: {}; ", token, value));
        }
        style.push_str(&format!("font-family: {}; ", self.font_family()));
        style.push_str("background-color: var(--nn-bg);");
        style
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
