use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported host platform '{0}'")]
    UnsupportedPlatform(String),
    #[error("{0} directory not configured on your machine")]
    OutDirNotConfigured(String),
    #[error("no valid out directory found; use one of {presets} or set $ELECTRON_OUT_DIR")]
    NoOutDir { presets: String },
}

/// Failure of the external strip executable. Never retried.
#[derive(Debug, Error)]
pub enum ExternalToolError {
    #[error("{tool} not found on PATH")]
    NotFound { tool: String },
    #[error("failed to spawn {tool}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
    #[error("{tool} failed on {} ({}){}", path.display(), exit_label(*code), stderr_suffix(stderr))]
    Failed {
        tool: String,
        path: PathBuf,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}
