use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use recrop_core::geometry::{ScreenGeometry, Size};

/// Application configuration, read from `recrop.toml` when present.
///
/// Supplies the screen geometry explicitly at startup; nothing queries
/// display state at arbitrary points later.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the source image asset.
    pub asset: PathBuf,
    /// Logical screen geometry the display factor is derived from.
    pub screen: ScreenGeometry,
    /// Fixed crop window size, in logical display units.
    pub crop_window: Size,
    /// Upper zoom bound.
    pub max_scale: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset: PathBuf::from("assets/sample.jpg"),
            screen: ScreenGeometry {
                width: 390.0,
                height: 844.0,
            },
            crop_window: Size::new(300.0, 225.0),
            max_scale: 5.0,
        }
    }
}

impl AppConfig {
    /// Load from the given path, falling back to defaults when absent.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }
}
