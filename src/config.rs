//! Platform, architecture and environment lookups shared by the build scripts.
//!
//! Everything here reads from an [`EnvSnapshot`] rather than the live process
//! environment, so callers (and tests) decide what environment is in effect.

use crate::error::ConfigError;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

pub const PRIMARY_PREFIX: &str = "ELECTRON_";
pub const LEGACY_PREFIX: &str = "ATOM_SHELL_";
pub const MAS_BUILD_VAR: &str = "MAS_BUILD";
pub const TARGET_ARCH_VAR: &str = "TARGET_ARCH";
pub const DEFAULT_ARCH: &str = "x64";

static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Win32,
    Darwin,
    Linux,
    Mas,
}

impl Platform {
    /// Maps a host identifier (`cygwin`, `msys`, `darwin`, `linux`, `linux2`, `win32`).
    pub fn from_host(host: &str) -> Result<Self, ConfigError> {
        match host {
            "cygwin" | "msys" | "win32" => Ok(Platform::Win32),
            "darwin" => Ok(Platform::Darwin),
            "linux" | "linux2" => Ok(Platform::Linux),
            other => Err(ConfigError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Win32 => "win32",
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
            Platform::Mas => "mas",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of the running host, in the vocabulary [`Platform::from_host`] accepts.
pub fn host_identifier() -> &'static str {
    #[cfg(target_os = "windows")]
    {
        "win32"
    }
    #[cfg(target_os = "macos")]
    {
        "darwin"
    }
    #[cfg(target_os = "linux")]
    {
        "linux"
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        std::env::consts::OS
    }
}

/// Owned copy of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .map(|(k, v)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned()))
            .collect();
        Self { vars }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}

/// Result of a prefixed lookup. `deprecation` is set when the legacy name supplied the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvValue {
    pub value: String,
    pub deprecation: Option<String>,
}

pub fn lookup_env_var(env: &EnvSnapshot, name: &str) -> EnvValue {
    let primary = format!("{PRIMARY_PREFIX}{name}");
    if let Some(v) = env.get(&primary).filter(|v| !v.is_empty()) {
        return EnvValue { value: v.to_string(), deprecation: None };
    }
    let legacy = format!("{LEGACY_PREFIX}{name}");
    let value = env.get(&legacy).unwrap_or_default().to_string();
    let deprecation = if value.is_empty() {
        None
    } else {
        Some(format!("Warning: Use ${primary} instead of ${legacy}"))
    };
    EnvValue { value, deprecation }
}

pub fn enable_verbose_mode() {
    println!("Running in verbose mode");
    VERBOSE_MODE.store(true, Ordering::SeqCst);
}

pub fn is_verbose_mode() -> bool {
    VERBOSE_MODE.load(Ordering::SeqCst)
}

#[derive(Debug, Clone)]
pub struct Config {
    env: EnvSnapshot,
    host: String,
}

impl Config {
    pub fn new(env: EnvSnapshot, host: impl Into<String>) -> Self {
        Self { env, host: host.into() }
    }

    pub fn from_process() -> Self {
        Self::new(EnvSnapshot::from_process(), host_identifier())
    }

    pub fn platform_key(&self) -> Result<Platform, ConfigError> {
        if self.env.contains(MAS_BUILD_VAR) {
            return Ok(Platform::Mas);
        }
        Platform::from_host(&self.host)
    }

    pub fn target_arch(&self) -> String {
        match self.env.get(TARGET_ARCH_VAR) {
            Some(arch) if !arch.is_empty() => arch.to_string(),
            _ => DEFAULT_ARCH.to_string(),
        }
    }

    /// `ELECTRON_<name>`, falling back to `ATOM_SHELL_<name>` with a warning on stdout.
    pub fn env_var(&self, name: &str) -> String {
        let EnvValue { value, deprecation } = lookup_env_var(&self.env, name);
        if let Some(warning) = deprecation {
            println!("{warning}");
        }
        value
    }

    pub fn zip_name(
        &self,
        name: &str,
        version: &str,
        suffix: Option<&str>,
    ) -> Result<String, ConfigError> {
        let mut arch = self.target_arch();
        if arch == "arm" {
            arch.push_str("v7l");
        }
        let mut zip = format!("{name}-{version}-{}-{arch}", self.platform_key()?);
        if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
            zip.push('-');
            zip.push_str(suffix);
        }
        zip.push_str(".zip");
        Ok(zip)
    }
}
