//! Library exports for the drag and drop scene, shared by the binary and tests.
/// Application directory resolution.
pub mod app_dirs;
/// Named image assets.
pub mod assets;
/// egui state, controller and renderer.
pub mod egui_app;
/// Tracing setup with rotating log files.
pub mod logging;
/// Persisted TOML settings.
pub mod settings;
