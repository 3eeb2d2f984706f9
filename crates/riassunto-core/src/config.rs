//! Process-wide configuration, resolved once at startup.
//!
//! Precedence: environment variables > TOML config file > defaults.
//! Front-ends may apply their own flags on top of the resolved value.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::config_file::{self, ConfigFile};

pub const DEFAULT_ENDPOINT: &str = "https://api.cerebras.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama3.1-8b";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_UPLOAD_MB: usize = 50;

/// Settings for the chat-completion endpoint.
#[derive(Clone)]
pub struct SummarizerConfig {
    /// Bearer credential. Not validated: a missing key surfaces as the
    /// remote API's authentication failure.
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// `None` means the outbound call may block indefinitely.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
        }
    }
}

/// Settings for the HTTP front-end.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub summarizer: SummarizerConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Resolve from the process environment and the on-disk config files.
    pub fn load() -> Self {
        Self::resolve(&config_file::load_config(), |key| std::env::var(key).ok())
    }

    /// Resolve from a parsed config file and an environment lookup.
    ///
    /// Unparseable numeric values are ignored and the next layer is used.
    pub fn resolve(file: &ConfigFile, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let api = file.api.clone().unwrap_or_default();
        let server_file = file.server.clone().unwrap_or_default();

        let env_parsed = |key: &str| env(key).and_then(|v| v.trim().parse::<u64>().ok());

        let summarizer = SummarizerConfig {
            api_key: env("CEREBRAS_API_KEY")
                .filter(|k| !k.is_empty())
                .or(api.key),
            endpoint: env("CEREBRAS_ENDPOINT")
                .or(api.endpoint)
                .unwrap_or(defaults.summarizer.endpoint),
            model: env("CEREBRAS_MODEL")
                .or(api.model)
                .unwrap_or(defaults.summarizer.model),
            max_tokens: api.max_tokens.unwrap_or(defaults.summarizer.max_tokens),
            temperature: api.temperature.unwrap_or(defaults.summarizer.temperature),
            timeout: env_parsed("SUMMARY_TIMEOUT_SECS")
                .or(api.timeout_secs)
                .filter(|&secs| secs > 0)
                .map(Duration::from_secs),
        };

        let server = ServerConfig {
            host: env("RIASSUNTO_HOST")
                .and_then(|h| h.trim().parse::<IpAddr>().ok())
                .or_else(|| server_file.host.as_deref().and_then(|h| h.parse::<IpAddr>().ok()))
                .unwrap_or(defaults.server.host),
            port: env_parsed("RIASSUNTO_PORT")
                .and_then(|p| u16::try_from(p).ok())
                .or(server_file.port)
                .unwrap_or(defaults.server.port),
            max_upload_mb: env_parsed("RIASSUNTO_MAX_UPLOAD_MB")
                .map(|mb| mb as usize)
                .or(server_file.max_upload_mb)
                .unwrap_or(defaults.server.max_upload_mb),
        };

        Config { summarizer, server }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_file::{ApiConfig, ServerFileConfig};
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env_or_file() {
        let config = Config::resolve(&ConfigFile::default(), env_of(&[]));
        assert_eq!(config.summarizer.api_key, None);
        assert_eq!(config.summarizer.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.summarizer.model, "llama3.1-8b");
        assert_eq!(config.summarizer.max_tokens, 500);
        assert!((config.summarizer.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.summarizer.timeout, None);
        assert_eq!(config.server.addr(), "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.server.max_upload_bytes(), 50 * 1024 * 1024);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = ConfigFile {
            api: Some(ApiConfig {
                key: Some("file-key".into()),
                model: Some("file-model".into()),
                timeout_secs: Some(30),
                ..Default::default()
            }),
            server: Some(ServerFileConfig {
                port: Some(9000),
                ..Default::default()
            }),
        };
        let config = Config::resolve(
            &file,
            env_of(&[
                ("CEREBRAS_API_KEY", "env-key"),
                ("RIASSUNTO_PORT", "8080"),
            ]),
        );
        assert_eq!(config.summarizer.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.summarizer.model, "file-model");
        assert_eq!(config.summarizer.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_unparseable_env_falls_through() {
        let file = ConfigFile {
            server: Some(ServerFileConfig {
                port: Some(9000),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = Config::resolve(&file, env_of(&[("RIASSUNTO_PORT", "not-a-port")]));
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = Config::resolve(
            &ConfigFile::default(),
            env_of(&[("SUMMARY_TIMEOUT_SECS", "0")]),
        );
        assert_eq!(config.summarizer.timeout, None);
    }

    #[test]
    fn test_huge_upload_limit_saturates() {
        let config = Config::resolve(
            &ConfigFile::default(),
            env_of(&[("RIASSUNTO_MAX_UPLOAD_MB", &u64::MAX.to_string())]),
        );
        assert_eq!(config.server.max_upload_bytes(), usize::MAX);
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = Config::resolve(
            &ConfigFile::default(),
            env_of(&[("CEREBRAS_API_KEY", "sk-secret")]),
        );
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("***"));
    }
}
