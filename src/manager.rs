use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Returns the base data directory for PassClock files, creating it if needed.
pub fn data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "PassClock", "PassClock") {
        let dir = proj_dirs.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::warn!("could not create {}: {}", dir.display(), e);
        }
        dir.to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

/// Full path of the settings file.
pub fn settings_file_path() -> PathBuf {
    data_dir().join("settings.json")
}
