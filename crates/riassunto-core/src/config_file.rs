use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub api: Option<ApiConfig>,
    pub server: Option<ServerFileConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub key: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerFileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_upload_mb: Option<usize>,
}

/// Platform config directory path: `<config_dir>/riassunto/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("riassunto").join("config.toml"))
}

/// Load config by cascading CWD `.riassunto.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".riassunto.toml"));

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
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparseable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base_api = base.api.unwrap_or_default();
    let over_api = overlay.api.unwrap_or_default();
    let base_server = base.server.unwrap_or_default();
    let over_server = overlay.server.unwrap_or_default();

    ConfigFile {
        api: Some(ApiConfig {
            key: over_api.key.or(base_api.key),
            endpoint: over_api.endpoint.or(base_api.endpoint),
            model: over_api.model.or(base_api.model),
            max_tokens: over_api.max_tokens.or(base_api.max_tokens),
            temperature: over_api.temperature.or(base_api.temperature),
            timeout_secs: over_api.timeout_secs.or(base_api.timeout_secs),
        }),
        server: Some(ServerFileConfig {
            host: over_server.host.or(base_server.host),
            port: over_server.port.or(base_server.port),
            max_upload_mb: over_server.max_upload_mb.or(base_server.max_upload_mb),
        }),
    }
}
