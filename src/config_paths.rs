//! Where maskedit keeps its named masks and logs
//!
//! `config.yaml` holds the field defaults, custom classes and named masks read
//! by [`MaskConfig::load`](crate::config::MaskConfig::load). `logs/` receives
//! the daily debug log written by [`tracing::init`](crate::tracing::init).
//!
//! - Unix/macOS: `$XDG_CONFIG_HOME/maskedit/`, else `~/.config/maskedit/`
//! - Windows: `%APPDATA%\maskedit\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::error::MaskError;

const APP_DIR: &str = "maskedit";

/// Base config directory, or `None` when neither the platform variable nor a
/// home directory is available (the CLI then runs on defaults).
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        resolve_config_dir(env::var_os("XDG_CONFIG_HOME").map(PathBuf::from), dirs::home_dir())
    }
}

/// XDG lookup: an empty or relative `XDG_CONFIG_HOME` is ignored in favour
/// of `~/.config`.
#[cfg_attr(target_os = "windows", allow(dead_code))]
fn resolve_config_dir(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|dir| dir.is_absolute())
        .or_else(|| home.map(|h| h.join(".config")))
        .map(|config| config.join(APP_DIR))
}

/// Named masks and field defaults
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Daily `maskedit.log` files
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), MaskError> {
    fs::create_dir_all(path).map_err(|e| MaskError::io(path, e))
}

/// Create the config dir if needed, e.g. before [`MaskConfig::save`](crate::config::MaskConfig::save)
pub fn ensure_config_dir() -> Result<PathBuf, MaskError> {
    let dir = config_dir().ok_or(MaskError::NoConfigDir)?;
    ensure_dir(&dir)?;
    Ok(dir)
}

pub fn ensure_logs_dir() -> Result<PathBuf, MaskError> {
    let logs = ensure_config_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
