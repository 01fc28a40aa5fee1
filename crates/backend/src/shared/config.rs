use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    /// Каталог со сборкой фронтенда
    pub dir: String,
    /// Точка входа SPA внутри `dir`
    pub index: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[static_files]
dir = "dist"
index = "index.html"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolve `[server] host/port` to a bindable address
///
/// Host names such as `localhost` go through the system resolver.
pub async fn resolve_addr(config: &Config) -> anyhow::Result<SocketAddr> {
    let host = config.server.host.as_str();
    tokio::net::lookup_host((host, config.server.port))
        .await
        .map_err(|e| anyhow::anyhow!("cannot resolve server host '{}': {e}", host))?
        .next()
        .ok_or_else(|| anyhow::anyhow!("server host '{}' resolved to no addresses", host))
}

/// Get the static files directory from configuration
///
/// Relative paths are tried against the working directory first (`cargo run`
/// from the workspace root), then against the executable directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.static_files.dir);

    if dir.is_absolute() || dir.exists() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dir, "dist");
        assert_eq!(config.static_files.index, "index.html");
    }

    #[tokio::test]
    async fn test_resolve_ip_host() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(resolve_addr(&config).await.unwrap().to_string(), "0.0.0.0:3000");
    }

    #[tokio::test]
    async fn test_resolve_localhost() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.server.host = "localhost".to_string();
        config.server.port = 8080;
        let addr = resolve_addr(&config).await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_missing_section_is_rejected() {
        assert!(parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").is_err());
    }

    #[test]
    fn test_absolute_static_dir_is_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let dir = std::env::temp_dir().join("landing-dist");
        config.static_files.dir = dir.to_string_lossy().into_owned();
        assert_eq!(get_static_dir(&config), dir);
    }
}
