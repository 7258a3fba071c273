use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5342;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_MAX_UPLOAD_MB: u64 = 500;

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub server: Option<ServerSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub allowed_origin: Option<String>,
    pub max_upload_mb: Option<u64>,
}

/// Fully resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The single browser origin allowed to call `/api/*`.
    pub allowed_origin: String,
    pub max_upload_mb: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
        }
    }
}

impl ServerConfig {
    /// Fill unset fields of a config file from the defaults.
    pub fn from_file(file: &ConfigFile) -> Self {
        let defaults = Self::default();
        let Some(server) = file.server.as_ref() else {
            return defaults;
        };
        Self {
            host: server.host.clone().unwrap_or(defaults.host),
            port: server.port.unwrap_or(defaults.port),
            allowed_origin: server
                .allowed_origin
                .clone()
                .unwrap_or(defaults.allowed_origin),
            max_upload_mb: server.max_upload_mb.unwrap_or(defaults.max_upload_mb),
        }
    }

    /// Apply `PDFPARSE_*` overrides read through `lookup`.
    ///
    /// Takes a lookup function rather than reading the process environment
    /// directly so callers (and tests) control the source.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("PDFPARSE_HOST") {
            self.host = host;
        }
        if let Some(raw) = lookup("PDFPARSE_PORT") {
            match raw.parse() {
                Ok(port) => self.port = port,
                Err(e) => tracing::warn!(value = %raw, error = %e, "ignoring invalid PDFPARSE_PORT"),
            }
        }
        if let Some(origin) = lookup("PDFPARSE_ALLOWED_ORIGIN") {
            self.allowed_origin = origin;
        }
        if let Some(raw) = lookup("PDFPARSE_MAX_UPLOAD_MB") {
            match raw.parse() {
                Ok(mb) => self.max_upload_mb = mb,
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "ignoring invalid PDFPARSE_MAX_UPLOAD_MB")
                }
            }
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        usize::try_from(self.max_upload_mb.saturating_mul(1024 * 1024)).unwrap_or(usize::MAX)
    }
}

/// Platform config directory path: `<config_dir>/pdfparse/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pdfparse").join("config.toml"))
}

/// Load config by cascading CWD `.pdfparse.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".pdfparse.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base = base.server.unwrap_or_default();
    let overlay = overlay.server.unwrap_or_default();
    ConfigFile {
        server: Some(ServerSection {
            host: overlay.host.or(base.host),
            port: overlay.port.or(base.port),
            allowed_origin: overlay.allowed_origin.or(base.allowed_origin),
            max_upload_mb: overlay.max_upload_mb.or(base.max_upload_mb),
        }),
    }
}
