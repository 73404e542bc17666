//! Platform-specific config location.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "mafia-assistant";
const APPLICATION: &str = "mafia-page";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/mafia-page` or `~/.config/mafia-page`
/// - macOS: `~/Library/Application Support/dev.mafia-assistant.mafia-page`
/// - Windows: `C:\Users\<User>\AppData\Roaming\mafia-assistant\mafia-page\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the page config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}
