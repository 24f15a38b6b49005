//! Icon service for managing different icon themes
//!
//! Sort indicators, toast markers and menu entries come from here so the whole UI
//! can fall back to plain ASCII on terminals without good Unicode support.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Resolves icons for the active theme
#[derive(Debug, Clone, Copy, Default)]
pub struct IconService {
    theme: IconTheme,
}

impl IconService {
    pub fn new(theme: IconTheme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> IconTheme {
        self.theme
    }

    fn pick(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        match self.theme {
            IconTheme::Unicode => unicode,
            IconTheme::Ascii => ascii,
        }
    }

    pub fn sort_ascending(&self) -> &'static str {
        self.pick("↑", "^")
    }

    pub fn sort_descending(&self) -> &'static str {
        self.pick("↓", "v")
    }

    pub fn success(&self) -> &'static str {
        self.pick("✓", "+")
    }

    pub fn error(&self) -> &'static str {
        self.pick("✗", "x")
    }

    pub fn info(&self) -> &'static str {
        self.pick("ℹ", "i")
    }

    pub fn warning(&self) -> &'static str {
        self.pick("⚠", "!")
    }

    pub fn dashboard(&self) -> &'static str {
        self.pick("▦", "#")
    }

    pub fn products(&self) -> &'static str {
        self.pick("▤", "=")
    }

    pub fn login(&self) -> &'static str {
        self.pick("→", ">")
    }

    pub fn logout(&self) -> &'static str {
        self.pick("←", "<")
    }

    pub fn spinner(&self) -> &'static str {
        self.pick("⟳", "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_theme_uses_ascii_only() {
        let icons = IconService::new(IconTheme::Ascii);
        for icon in [
            icons.sort_ascending(),
            icons.sort_descending(),
            icons.success(),
            icons.error(),
            icons.warning(),
            icons.spinner(),
        ] {
            assert!(icon.is_ascii(), "{icon} is not ascii");
        }
    }

    #[test]
    fn theme_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: IconTheme,
        }
        let parsed: Wrapper = toml::from_str("theme = \"ascii\"").unwrap();
        assert_eq!(parsed.theme, IconTheme::Ascii);
    }
}
