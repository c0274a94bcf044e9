//! Configuration loading and parsing.
//!
//! Parses `gapvi.toml` (or an override path provided by the binary). Every
//! field has a default so a missing file, a missing section or a malformed
//! file all yield a usable `Config`. Unknown fields are ignored.
//!
//! The status-line padding is clamped against the terminal width in
//! `Config::apply_viewport`; the raw parsed value is kept so a later resize can
//! re-clamp.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

/// Startup text shown when neither the CLI nor the config supplies one.
pub const DEFAULT_INITIAL_TEXT: &str = "Focus on the donut, not the hole";

/// Width of the widest mode label (`[NORMAL]`, `[INSERT]`, `[VISUAL]`).
pub const MODE_LABEL_WIDTH: u16 = 8;

/// Which document store backs the session.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Gap,
    Rope,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Gap => "gap",
            StoreKind::Rope => "rope",
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_initial_text")]
    pub initial_text: String,
    #[serde(default)]
    pub store: StoreKind,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_text: Self::default_initial_text(),
            store: StoreKind::default(),
        }
    }
}

impl EditorConfig {
    fn default_initial_text() -> String {
        DEFAULT_INITIAL_TEXT.to_string()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    #[serde(default = "StatusConfig::default_pad")]
    pub pad: u16,
    #[serde(default = "StatusConfig::default_show_info")]
    pub show_info: bool,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            pad: Self::default_pad(),
            show_info: Self::default_show_info(),
        }
    }
}

impl StatusConfig {
    const fn default_pad() -> u16 {
        2
    }
    const fn default_show_info() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub status: StatusConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub raw: Option<String>, // file contents as read (optional)
    pub file: ConfigFile,    // parsed (or default) data
    pub effective_pad: u16,  // clamped to viewport width
}

impl Default for Config {
    fn default() -> Self {
        let file = ConfigFile::default();
        Self {
            raw: None,
            effective_pad: file.status.pad,
            file,
        }
    }
}

/// Local `gapvi.toml` first, then the platform config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from("gapvi.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("gapvi").join("gapvi.toml");
    }
    PathBuf::from("gapvi.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), store = file.editor.store.as_str(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                effective_pad: file.status.pad,
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Clamp the status padding so both pads plus a mode label fit in `cols`.
    /// Returns the effective (possibly clamped) value.
    pub fn apply_viewport(&mut self, cols: u16) -> u16 {
        let raw = self.file.status.pad;
        let max = cols.saturating_sub(MODE_LABEL_WIDTH) / 2;
        let clamped = raw.min(max);
        if clamped != raw {
            info!(target: "config", raw, clamped, max, cols, "status_pad_clamped");
        }
        self.effective_pad = clamped;
        clamped
    }

    /// Re-clamp after a resize. `Some(new_pad)` when the effective value changed.
    pub fn recompute_after_resize(&mut self, cols: u16) -> Option<u16> {
        let prev = self.effective_pad;
        let current = self.apply_viewport(cols);
        if current != prev { Some(current) } else { None }
    }

    pub fn initial_text(&self) -> &str {
        &self.file.editor.initial_text
    }

    pub fn store(&self) -> StoreKind {
        self.file.editor.store
    }

    pub fn show_info(&self) -> bool {
        self.file.status.show_info
    }
}
