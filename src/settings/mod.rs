//! Persisted demo settings.
//!
//! Settings live in `settings.toml` under the `.dragdrop` directory. Every key
//! is optional; missing keys fall back to the reference layout and highlight
//! styles.

mod config_defaults;
mod config_io;
mod config_types;


pub use config_io::{SETTINGS_FILE_NAME, load_from, load_or_default, save, save_to_path, settings_path};
pub use config_types::{
    AppSettings, AssetOptions, HighlightOptions, LayoutOptions, SettingsError, WindowOptions,
};
