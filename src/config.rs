use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::nav::tracker::DEFAULT_THRESHOLD;
use crate::nav::{TieBreak, TrackerOptions};
use crate::ui::theme::DEFAULT_THEME;
use crate::viewport::scroller::DEFAULT_DIVISOR;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_smooth_scroll")]
    pub smooth_scroll: bool,
    #[serde(default = "default_scroll_divisor")]
    pub scroll_divisor: u16,
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f32,
    #[serde(default)]
    pub tie_break: TieBreak,
    #[serde(default = "default_track_visibility")]
    pub track_visibility: bool,
    #[serde(default)]
    pub content_path: Option<String>,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}
fn default_tick_rate_ms() -> u64 {
    33
}
fn default_smooth_scroll() -> bool {
    true
}
fn default_scroll_divisor() -> u16 {
    DEFAULT_DIVISOR
}
fn default_visibility_threshold() -> f32 {
    DEFAULT_THRESHOLD
}
fn default_track_visibility() -> bool {
    true
}
fn default_log_dir() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_rate_ms: default_tick_rate_ms(),
            smooth_scroll: default_smooth_scroll(),
            scroll_divisor: default_scroll_divisor(),
            visibility_threshold: default_visibility_threshold(),
            tie_break: TieBreak::default(),
            track_visibility: default_track_visibility(),
            content_path: None,
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("config.toml")
    }

    /// Reset out-of-range values left by hand-edited configs.
    pub fn normalize(&mut self) {
        if !(self.visibility_threshold > 0.0 && self.visibility_threshold <= 1.0) {
            self.visibility_threshold = default_visibility_threshold();
        }
        if self.scroll_divisor == 0 {
            self.scroll_divisor = default_scroll_divisor();
        }
        if self.tick_rate_ms == 0 {
            self.tick_rate_ms = default_tick_rate_ms();
        }
    }

    pub fn tracker_options(&self) -> TrackerOptions {
        TrackerOptions {
            threshold: self.visibility_threshold,
            tie_break: self.tie_break,
        }
    }

    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.log_dir).join("folio.log")
    }
}
