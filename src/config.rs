//! Viewer configuration
//!
//! Read from `~/.config/pageview/config.yaml`. Every field is optional;
//! command-line flags override what is loaded here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::ChromeMetrics;
use crate::theme::ChromeTheme;

/// Viewport size used when neither config nor CLI give one
pub const DEFAULT_VIEWPORT_SIZE: u32 = 512;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Initial viewport width in pixels
    pub width: u32,
    /// Initial viewport height in pixels
    pub height: u32,
    /// Resolution in DPI; when set, pages only shrink to fit
    pub resolution: Option<f32>,
    /// Rotation in degrees
    pub rotation: f32,
    /// Stretch pages to the viewport instead of keeping the aspect ratio
    pub fit: bool,
    pub show_chrome: bool,
    /// TTF/OTF used for chrome text
    pub font_path: Option<PathBuf>,
    /// External picker, argv form; prints the chosen path on stdout
    pub picker_command: Option<Vec<String>>,
    /// Directory containing the PDFium shared library
    pub pdfium_library_path: Option<PathBuf>,
    pub chrome: ChromeMetrics,
    pub colors: ChromeTheme,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_SIZE,
            height: DEFAULT_VIEWPORT_SIZE,
            resolution: None,
            rotation: 0.0,
            fit: false,
            show_chrome: true,
            font_path: None,
            picker_command: None,
            pdfium_library_path: None,
            chrome: ChromeMetrics::default(),
            colors: ChromeTheme::default(),
        }
    }
}

impl ViewerConfig {
    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`; missing or malformed files give defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
