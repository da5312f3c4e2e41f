//! System theme information.

use serde::{Deserialize, Serialize};

/// Color and contrast preferences reported by the operating system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SystemThemeInfo {
    /// Whether the OS prefers a dark color scheme
    pub should_use_dark_colors: bool,
    /// Whether the OS prefers high-contrast colors
    pub should_use_high_contrast_colors: bool,
    /// Whether the OS prefers an inverted color scheme
    pub should_use_inverted_color_scheme: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_wire_names() {
        let info = SystemThemeInfo { should_use_dark_colors: true, ..Default::default() };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"shouldUseDarkColors\":true"));
        assert!(json.contains("\"shouldUseHighContrastColors\":false"));
        assert!(json.contains("\"shouldUseInvertedColorScheme\":false"));
    }
}
