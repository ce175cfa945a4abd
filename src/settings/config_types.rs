use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config_defaults::{
    MIN_WINDOW_EDGE, clamp_fraction, clamp_non_negative, default_active_border_width,
    default_container_bottom_inset, default_container_side_inset, default_container_top_inset,
    default_drop_zone_height_fraction, default_drop_zone_spacing_multiple, default_image_fraction,
    default_image_name, default_image_side_offset, default_image_top_offset,
    default_inner_size, default_min_inner_size, default_resting_border_width,
    default_system_spacing, default_true,
};

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to create the settings directory.
    #[error("Unable to create settings directory {path}: {source}")]
    CreateDir {
        /// Directory path that failed to create.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to read the settings file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to write the settings file.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for [`AppSettings`].
    #[error("Invalid settings at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// Failed to serialize settings to TOML.
    #[error("Failed to serialize settings to TOML at {path}: {source}")]
    SerializeToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML serialization error.
        source: toml::ser::Error,
    },
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Root of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub window: WindowOptions,
    #[serde(default)]
    pub layout: LayoutOptions,
    #[serde(default)]
    pub highlight: HighlightOptions,
    #[serde(default)]
    pub assets: AssetOptions,
}

impl AppSettings {
    /// Clamp out-of-range values read from disk.
    pub fn normalized(mut self) -> Self {
        self.window = self.window.normalized();
        self.layout = self.layout.normalized();
        self.highlight = self.highlight.normalized();
        self
    }
}

/// Native window sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowOptions {
    #[serde(default = "default_inner_size")]
    pub inner_size: [f32; 2],
    #[serde(default = "default_min_inner_size")]
    pub min_inner_size: [f32; 2],
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            inner_size: default_inner_size(),
            min_inner_size: default_min_inner_size(),
        }
    }
}

impl WindowOptions {
    fn normalized(self) -> Self {
        let min = self.min_inner_size.map(|edge| clamp_non_negative(edge).max(MIN_WINDOW_EDGE));
        let inner = [
            clamp_non_negative(self.inner_size[0]).max(min[0]),
            clamp_non_negative(self.inner_size[1]).max(min[1]),
        ];
        Self {
            inner_size: inner,
            min_inner_size: min,
        }
    }
}

/// Proportional constraints for the scene.
///
/// Offsets are in points; fractions are relative to the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    #[serde(default = "default_container_top_inset")]
    pub container_top_inset: f32,
    #[serde(default = "default_container_side_inset")]
    pub container_side_inset: f32,
    /// Extra scrollable space below the container.
    #[serde(default = "default_container_bottom_inset")]
    pub container_bottom_inset: f32,
    #[serde(default = "default_image_top_offset")]
    pub image_top_offset: f32,
    #[serde(default = "default_image_side_offset")]
    pub image_side_offset: f32,
    #[serde(default = "default_image_fraction")]
    pub image_width_fraction: f32,
    #[serde(default = "default_image_fraction")]
    pub image_height_fraction: f32,
    #[serde(default = "default_system_spacing")]
    pub system_spacing: f32,
    /// Gap between the images and the drop zone, in multiples of `system_spacing`.
    #[serde(default = "default_drop_zone_spacing_multiple")]
    pub drop_zone_spacing_multiple: f32,
    #[serde(default = "default_drop_zone_height_fraction")]
    pub drop_zone_height_fraction: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            container_top_inset: default_container_top_inset(),
            container_side_inset: default_container_side_inset(),
            container_bottom_inset: default_container_bottom_inset(),
            image_top_offset: default_image_top_offset(),
            image_side_offset: default_image_side_offset(),
            image_width_fraction: default_image_fraction(),
            image_height_fraction: default_image_fraction(),
            system_spacing: default_system_spacing(),
            drop_zone_spacing_multiple: default_drop_zone_spacing_multiple(),
            drop_zone_height_fraction: default_drop_zone_height_fraction(),
        }
    }
}

impl LayoutOptions {
    fn normalized(self) -> Self {
        Self {
            container_top_inset: clamp_non_negative(self.container_top_inset),
            container_side_inset: clamp_non_negative(self.container_side_inset),
            container_bottom_inset: clamp_non_negative(self.container_bottom_inset),
            image_top_offset: clamp_non_negative(self.image_top_offset),
            image_side_offset: clamp_non_negative(self.image_side_offset),
            image_width_fraction: clamp_fraction(self.image_width_fraction),
            image_height_fraction: clamp_fraction(self.image_height_fraction),
            system_spacing: clamp_non_negative(self.system_spacing),
            drop_zone_spacing_multiple: clamp_non_negative(self.drop_zone_spacing_multiple),
            drop_zone_height_fraction: clamp_fraction(self.drop_zone_height_fraction),
        }
    }

    /// Vertical gap between the bottom of the images and the drop zone.
    pub fn drop_zone_gap(&self) -> f32 {
        self.system_spacing * self.drop_zone_spacing_multiple
    }
}

/// Border widths for the drop zone highlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightOptions {
    #[serde(default = "default_resting_border_width")]
    pub resting_border_width: f32,
    #[serde(default = "default_active_border_width")]
    pub active_border_width: f32,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            resting_border_width: default_resting_border_width(),
            active_border_width: default_active_border_width(),
        }
    }
}

impl HighlightOptions {
    fn normalized(self) -> Self {
        let resting = clamp_non_negative(self.resting_border_width);
        // The active outline must stay distinguishable from the resting one.
        let active = clamp_non_negative(self.active_border_width).max(resting + 1.0);
        Self {
            resting_border_width: resting,
            active_border_width: active,
        }
    }
}

/// Where draggable images come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetOptions {
    /// Asset directory; defaults to the bundled `assets/` folder.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Asset name (without extension) shown in both image slots.
    #[serde(default = "default_image_name")]
    pub image_name: String,
    /// Generate a placeholder when the asset cannot be loaded.
    #[serde(default = "default_true")]
    pub placeholder_on_missing: bool,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            dir: None,
            image_name: default_image_name(),
            placeholder_on_missing: default_true(),
        }
    }
}
