// Configuration loading (config/marketmind.toml plus environment overrides).

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Credential used when `GEMINI_API_KEY` is not set. Upstream calls made with
/// it are rejected by the API at call time, not at start-up.
pub const PLACEHOLDER_API_KEY: &str = "your-gemini-api-key-here";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

const CONFIG_FILE: &str = "marketmind.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub credentials: CredentialsConfig,
}

/// Raw deserialization target for marketmind.toml. Credentials are never
/// read from the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    server: ServerConfig,
    llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Resolve `host:port` into a bindable socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|e| ConfigError::ValidationError {
            field: "server.host".into(),
            message: format!("`{}` is not a valid IP address: {e}", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    pub api_base: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CredentialsConfig {
    pub gemini_api_key: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: PLACEHOLDER_API_KEY.to_string(),
        }
    }
}

impl CredentialsConfig {
    /// True when no real credential was supplied: the variable was unset
    /// (placeholder) or set to an empty string.
    pub fn is_placeholder(&self) -> bool {
        self.gemini_api_key.is_empty() || self.gemini_api_key == PLACEHOLDER_API_KEY
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/marketmind.toml` under `base_dir` (if the
/// file exists) and apply overrides from `env`.
///
/// `env` is a variable lookup so tests can supply a fixed environment
/// instead of mutating the process one.
pub fn load_config_from<F>(base_dir: &Path, env: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let path = base_dir.join("config").join(CONFIG_FILE);
    let file = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        toml::from_str::<ConfigFile>(&text).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?
    } else {
        tracing::debug!("no config file at {}, using defaults", path.display());
        ConfigFile::default()
    };

    let mut config = Config {
        server: file.server,
        llm: file.llm,
        credentials: CredentialsConfig::default(),
    };

    apply_env(&mut config, env)?;
    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working
/// directory, with overrides from the process environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config_from(&cwd, |key| std::env::var(key).ok())
}

// ---------------------------------------------------------------------------
// Environment overrides
// ---------------------------------------------------------------------------

fn apply_env<F>(config: &mut Config, env: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = env("HOST") {
        config.server.host = host;
    }
    if let Some(port) = env("PORT") {
        config.server.port = port.trim().parse().map_err(|_| ConfigError::ValidationError {
            field: "PORT".into(),
            message: format!("expected a port number, got `{port}`"),
        })?;
    }
    if let Some(model) = env("GEMINI_MODEL") {
        config.llm.model = model;
    }
    if let Some(api_base) = env("GEMINI_API_BASE") {
        config.llm.api_base = api_base;
    }
    if let Some(key) = env("GEMINI_API_KEY") {
        config.credentials.gemini_api_key = key;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.llm.model.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "llm.model".into(),
            message: "must not be empty".into(),
        });
    }

    let base = &config.llm.api_base;
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(ConfigError::ValidationError {
            field: "llm.api_base".into(),
            message: format!("must be an http(s) URL, got `{base}`"),
        });
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError {
            field: "server.max_body_bytes".into(),
            message: "must be greater than 0".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    /// Fresh scratch directory with an empty `config/` inside.
    fn scratch_dir(name: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        tmp
    }

    #[test]
    fn shipped_config_file_matches_defaults() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        assert!(root.join("config/marketmind.toml").exists());

        let config = load_config_from(&root, no_env).expect("shipped config should load");
        assert_eq!(config.server.host, ServerConfig::default().host);
        assert_eq!(config.server.port, ServerConfig::default().port);
        assert_eq!(config.server.max_body_bytes, ServerConfig::default().max_body_bytes);
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert_eq!(config.llm.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let tmp = scratch_dir("marketmind_config_defaults");

        let config = load_config_from(&tmp, no_env).expect("defaults should load");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.max_body_bytes, 1024 * 1024);
        assert_eq!(config.llm.model, "gemini-1.5-flash");
        assert_eq!(config.llm.api_base, DEFAULT_API_BASE);
        assert!(config.credentials.is_placeholder());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn partial_config_file_keeps_other_defaults() {
        let tmp = scratch_dir("marketmind_config_partial");
        fs::write(
            tmp.join("config/marketmind.toml"),
            "[server]\nport = 9090\n",
        )
        .unwrap();

        let config = load_config_from(&tmp, no_env).expect("should load");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.llm.model, DEFAULT_MODEL);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn env_overrides_file_values() {
        let tmp = scratch_dir("marketmind_config_env");
        fs::write(
            tmp.join("config/marketmind.toml"),
            "[server]\nport = 9090\n\n[llm]\nmodel = \"gemini-1.5-pro\"\n",
        )
        .unwrap();

        let env = env_from(&[
            ("PORT", "7000"),
            ("HOST", "127.0.0.1"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_API_KEY", "real-key"),
        ]);
        let config = load_config_from(&tmp, env).expect("should load");
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.credentials.gemini_api_key, "real-key");
        assert!(!config.credentials.is_placeholder());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn empty_api_key_is_passed_through_and_flagged() {
        let tmp = scratch_dir("marketmind_config_empty_key");

        let config = load_config_from(&tmp, env_from(&[("GEMINI_API_KEY", "")])).unwrap();
        assert_eq!(config.credentials.gemini_api_key, "");
        assert!(config.credentials.is_placeholder());

        let config = load_config_from(&tmp, no_env).unwrap();
        assert_eq!(config.credentials.gemini_api_key, PLACEHOLDER_API_KEY);
        assert!(config.credentials.is_placeholder());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_unparsable_port() {
        let tmp = scratch_dir("marketmind_config_bad_port");

        let err = load_config_from(&tmp, env_from(&[("PORT", "eighty")])).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "PORT"),
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_model() {
        let tmp = scratch_dir("marketmind_config_empty_model");
        fs::write(tmp.join("config/marketmind.toml"), "[llm]\nmodel = \"  \"\n").unwrap();

        let err = load_config_from(&tmp, no_env).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "llm.model"),
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_non_http_api_base() {
        let tmp = scratch_dir("marketmind_config_bad_base");

        let env = env_from(&[("GEMINI_API_BASE", "generativelanguage.googleapis.com")]);
        let err = load_config_from(&tmp, env).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "llm.api_base"),
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_zero_body_limit() {
        let tmp = scratch_dir("marketmind_config_zero_body");
        fs::write(
            tmp.join("config/marketmind.toml"),
            "[server]\nmax_body_bytes = 0\n",
        )
        .unwrap();

        let err = load_config_from(&tmp, no_env).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "server.max_body_bytes")
            }
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = scratch_dir("marketmind_config_invalid_toml");
        fs::write(tmp.join("config/marketmind.toml"), "this is not valid [[[ toml").unwrap();

        let err = load_config_from(&tmp, no_env).unwrap_err();
        match &err {
            ConfigError::ParseError { path, .. } => {
                assert!(path.ends_with("marketmind.toml"));
            }
            other => panic!("expected ParseError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn socket_addr_resolves_host_and_port() {
        let server = ServerConfig {
            host: "127.0.0.1".into(),
            port: 8123,
            max_body_bytes: 1,
        };
        let addr = server.socket_addr().unwrap();
        assert_eq!(addr.port(), 8123);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn socket_addr_rejects_hostname() {
        let server = ServerConfig {
            host: "localhost".into(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            server.socket_addr(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
