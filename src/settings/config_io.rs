use std::io::Write;
use std::path::{Path, PathBuf};

use rand::TryRngCore;
use tracing::{debug, warn};

use crate::app_dirs;

use super::config_types::{AppSettings, SettingsError};

/// Filename of the settings file inside the app directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

const TEMP_ATTEMPTS: usize = 5;

/// Resolve the settings file path, ensuring the app directory exists.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(SETTINGS_FILE_NAME))
}

/// Load settings from the app directory, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppSettings, SettingsError> {
    load_from(&settings_path()?)
}

/// Load settings from `path`, returning defaults if the file is missing.
pub fn load_from(path: &Path) -> Result<AppSettings, SettingsError> {
    if !path.exists() {
        debug!("No settings at {}; using defaults", path.display());
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: AppSettings = toml::from_str(&text).map_err(|source| SettingsError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    let normalized = settings.clone().normalized();
    if normalized != settings {
        warn!("Clamped out-of-range values in {}", path.display());
    }
    Ok(normalized)
}

/// Persist settings to the app directory.
pub fn save(settings: &AppSettings) -> Result<(), SettingsError> {
    save_to_path(settings, &settings_path()?)
}

/// Save settings to `path`, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| SettingsError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, data.as_bytes())
}

/// Write through a sibling temp file and rename so a crash never leaves a
/// truncated settings file.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), SettingsError> {
    let write_err = |path: &Path, source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };
    let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Err(write_err(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "settings path has no parent"),
        ));
    };

    for _ in 0..TEMP_ATTEMPTS {
        let mut suffix = [0u8; 6];
        rand::rngs::OsRng
            .try_fill_bytes(&mut suffix)
            .map_err(|err| write_err(path, std::io::Error::other(err.to_string())))?;
        let suffix: String = suffix.iter().map(|b| format!("{b:02x}")).collect();
        let tmp_path = dir.join(format!("{}.tmp-{suffix}", file_name.to_string_lossy()));

        let mut file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(write_err(&tmp_path, err)),
        };

        let written = file.write_all(data).and_then(|()| file.sync_all());
        drop(file);
        if let Err(err) = written.and_then(|()| std::fs::rename(&tmp_path, path)) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(write_err(path, err));
        }
        return Ok(());
    }

    Err(write_err(
        path,
        std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "could not create a unique temporary settings file",
        ),
    ))
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> SettingsError {
    match error {
        app_dirs::AppDirError::NoBaseDir => SettingsError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            SettingsError::CreateDir { path, source }
        }
    }
}
