/// Portfolio configuration
///
/// Every tunable of the page in one serde struct: star layer densities,
/// gallery bounds, slideshow catalog and timing, tilt geometry and the
/// external portfolio link. Defaults reproduce the published page; an
/// optional `portfolio.json` next to the working directory overrides
/// individual fields.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::PortfolioError;
use crate::state::starfield::LayerSpec;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PortfolioConfig {
    // ========== Starfield ==========
    /// Star count and fall probability per backdrop layer, shallowest first
    pub star_layers: Vec<LayerSpec>,

    // ========== Gallery ==========
    /// Total rows the gallery markup provides
    pub gallery_rows: usize,
    /// Upper bound on revealed rows before the trigger goes external
    pub max_visible_rows: usize,
    /// Photo cards per gallery row
    pub cards_per_row: usize,

    // ========== Slideshow ==========
    /// Number of slideshow cells in the about section
    pub slideshow_cells: usize,
    /// Size of the photo catalog (photo1.jpg .. photoN.jpg)
    pub catalog_size: usize,
    /// Directory the catalog photos live in
    pub photo_dir: PathBuf,
    /// Delay between fade-out and the photo swap, milliseconds
    pub swap_delay_ms: u64,
    /// Interval between slideshow cycles, milliseconds
    pub cycle_interval_ms: u64,
    /// Duration of the fade-in transition, milliseconds
    pub fade_ms: u64,

    // ========== Tilt ==========
    /// Maximum tilt rotation at the card edge, degrees
    pub max_tilt_deg: f32,
    /// Perspective distance of the tilt transform, logical pixels
    pub perspective_px: f32,

    // ========== External ==========
    /// Opened when the gallery is fully revealed
    pub portfolio_url: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        PortfolioConfig {
            star_layers: vec![
                LayerSpec { count: 120, fall_chance: 0.05 },
                LayerSpec { count: 100, fall_chance: 0.10 },
                LayerSpec { count: 80, fall_chance: 0.15 },
            ],
            gallery_rows: 4,
            max_visible_rows: 4,
            cards_per_row: 3,
            slideshow_cells: 4,
            catalog_size: 20,
            photo_dir: PathBuf::from("photos"),
            swap_delay_ms: 500,
            cycle_interval_ms: 5000,
            fade_ms: 300,
            max_tilt_deg: 10.0,
            perspective_px: 1000.0,
            portfolio_url: "https://www.behance.net/japrein".to_owned(),
        }
    }
}

impl PortfolioConfig {
    /// Read a configuration file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, PortfolioError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PortfolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&raw)?)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults.
    /// A file that exists but does not parse is reported and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                println!("⚙️  Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("⚠️  Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The immutable slideshow catalog: photo1.jpg .. photoN.jpg
    pub fn catalog(&self) -> Vec<String> {
        (1..=self.catalog_size)
            .map(|n| format!("photo{n}.jpg"))
            .collect()
    }

    /// Full path of one catalog photo
    pub fn photo_path(&self, name: &str) -> PathBuf {
        self.photo_dir.join(name)
    }

    pub fn swap_delay(&self) -> Duration {
        Duration::from_millis(self.swap_delay_ms)
    }

    pub fn cycle_interval(&self) -> Duration {
        Duration::from_millis(self.cycle_interval_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_published_page() {
        let config = PortfolioConfig::default();

        assert_eq!(config.star_layers.len(), 3);
        assert_eq!(config.star_layers[0].count, 120);
        assert_eq!(config.star_layers[0].fall_chance, 0.05);
        assert_eq!(config.max_visible_rows, 4);
        assert_eq!(config.catalog_size, 20);
        assert_eq!(config.swap_delay_ms, 500);
        assert_eq!(config.cycle_interval_ms, 5000);
        assert_eq!(config.max_tilt_deg, 10.0);
        assert_eq!(config.perspective_px, 1000.0);
    }

    #[test]
    fn serialization_round_trips() {
        let mut config = PortfolioConfig::default();
        config.catalog_size = 8;
        config.cycle_interval_ms = 2500;

        let json = config.to_json().unwrap();
        let restored = PortfolioConfig::from_json(&json).unwrap();

        assert_eq!(config, restored);
    }

    #[test]
    fn partial_json_keeps_defaults_for_the_rest() {
        let config = PortfolioConfig::from_json(r#"{ "catalog_size": 5 }"#).unwrap();

        assert_eq!(config.catalog_size, 5);
        assert_eq!(config.cycle_interval_ms, 5000);
        assert_eq!(config.star_layers.len(), 3);
    }

    #[test]
    fn catalog_names_follow_the_pattern() {
        let config = PortfolioConfig::default();
        let catalog = config.catalog();

        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog[0], "photo1.jpg");
        assert_eq!(catalog[19], "photo20.jpg");
    }
}
