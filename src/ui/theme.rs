use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

pub const DEFAULT_THEME: &str = "midnight";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub heading: String,
    pub body: String,
    pub muted: String,
    pub accent: String,
    pub accent_dim: String,
    pub greeting: String,
    pub nav_active: String,
    pub nav_active_line: String,
    pub nav_inactive: String,
    pub nav_inactive_line: String,
    pub focus_bg: String,
    pub border: String,
    pub footer_bg: String,
    pub footer_fg: String,
    pub warning: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("folio")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#0b1120".to_string(),
            fg: "#f9fafb".to_string(),
            heading: "#ffffff".to_string(),
            body: "#d1d5db".to_string(),
            muted: "#6b7280".to_string(),
            accent: "#60a5fa".to_string(),
            accent_dim: "#1e3a8a".to_string(),
            greeting: "#7dd3fc".to_string(),
            nav_active: "#60a5fa".to_string(),
            nav_active_line: "#3b82f6".to_string(),
            nav_inactive: "#9ca3af".to_string(),
            nav_inactive_line: "#6b7280".to_string(),
            focus_bg: "#1f2937".to_string(),
            border: "#3f3f46".to_string(),
            footer_bg: "#111827".to_string(),
            footer_fg: "#9ca3af".to_string(),
            warning: "#facc15".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn heading(&self) -> Color { Self::parse_color(&self.heading) }
    pub fn body(&self) -> Color { Self::parse_color(&self.body) }
    pub fn muted(&self) -> Color { Self::parse_color(&self.muted) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn accent_dim(&self) -> Color { Self::parse_color(&self.accent_dim) }
    pub fn greeting(&self) -> Color { Self::parse_color(&self.greeting) }
    pub fn nav_active(&self) -> Color { Self::parse_color(&self.nav_active) }
    pub fn nav_active_line(&self) -> Color { Self::parse_color(&self.nav_active_line) }
    pub fn nav_inactive(&self) -> Color { Self::parse_color(&self.nav_inactive) }
    pub fn nav_inactive_line(&self) -> Color { Self::parse_color(&self.nav_inactive_line) }
    pub fn focus_bg(&self) -> Color { Self::parse_color(&self.focus_bg) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn footer_bg(&self) -> Color { Self::parse_color(&self.footer_bg) }
    pub fn footer_fg(&self) -> Color { Self::parse_color(&self.footer_fg) }
    pub fn warning(&self) -> Color { Self::parse_color(&self.warning) }
}
