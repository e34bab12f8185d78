use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// On-disk shape of `config.toml`; every key is optional.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub server_url: Option<String>,
    pub api_key: Option<String>,
}

/// Resolved transport credentials, read once per invocation and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: String,
    pub api_key: String,
}

impl Config {
    pub fn create() -> Self {
        // 1) Load config file if present
        let file_cfg = load_file_config();

        // 2) Resolve precedence: env > config file > default
        let server_url = env::var("VAULTPASS_SERVER_URL")
            .ok()
            .or(file_cfg.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let api_key = env::var("VAULTPASS_API_KEY")
            .ok()
            .or(file_cfg.api_key)
            .unwrap_or_default();

        Config {
            server_url,
            api_key,
        }
    }
}

fn load_file_config() -> FileConfig {
    let (_, cfg) = load_file_config_with_path();
    cfg
}

pub fn load_file_config_with_path() -> (PathBuf, FileConfig) {
    // Allow tests/users to override config dir via VAULTPASS_CONFIG_DIR; else use platform default
    let cfg_dir = if let Ok(p) = env::var("VAULTPASS_CONFIG_DIR") {
        PathBuf::from(p)
    } else {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    };
    let path = cfg_dir.join("vaultpass").join("config.toml");
    let cfg = if let Ok(bytes) = std::fs::read(&path) {
        if let Ok(s) = String::from_utf8(bytes) {
            toml::from_str::<FileConfig>(&s).unwrap_or_default()
        } else {
            FileConfig::default()
        }
    } else {
        FileConfig::default()
    };
    (path, cfg)
}

pub fn save_file_config(path: &PathBuf, cfg: &FileConfig) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let s = toml::to_string_pretty(cfg)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    std::fs::write(path, s)
}
