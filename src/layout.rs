use crate::config::Config;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Linux binaries produced by a full build, in the order they are stripped.
pub const LINUX_BINARIES: &[&str] = &[
    "chrome-sandbox",
    "chrome_crashpad_handler",
    "electron",
    "libEGL.so",
    "libGLESv2.so",
    "libffmpeg.so",
    "libvk_swiftshader.so",
];

/// Build types probed under `<src>/out/` when no out dir is configured.
pub const PRESET_OUT_DIRS: &[&str] = &["Testing", "Release", "Default", "Debug"];

/// The checkout sits one level below the source root.
pub fn default_src_dir() -> std::io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(cwd.parent().map(Path::to_path_buf).unwrap_or(cwd))
}

pub fn resolve_out_dir(config: &Config, src_dir: &Path) -> Result<PathBuf, ConfigError> {
    let out_root = src_dir.join("out");
    let configured = config.env_var("OUT_DIR");
    if !configured.is_empty() {
        let out_path = out_root.join(&configured);
        if out_path.is_dir() {
            tracing::debug!(out_dir = %out_path.display(), "using configured out dir");
            return Ok(out_path);
        }
        return Err(ConfigError::OutDirNotConfigured(configured));
    }
    for build_type in PRESET_OUT_DIRS {
        let out_path = out_root.join(build_type);
        if out_path.is_dir() {
            tracing::debug!(out_dir = %out_path.display(), "using preset out dir");
            return Ok(out_path);
        }
    }
    Err(ConfigError::NoOutDir { presets: PRESET_OUT_DIRS.join(",") })
}
