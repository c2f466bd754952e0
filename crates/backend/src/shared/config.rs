use contracts::config::CacheConfigDto;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cache: CacheSettings,
    pub cluster: ClusterConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub listen: String,
    /// Directory with the compiled frontend assets, served at `/`.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheSettings {
    pub max_memory: u64,
    pub default_ttl: u64,
    pub frequency_threshold: u64,
    pub replication_factor: u32,
    pub transaction_timeout: u64,
    pub enable_transactions: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClusterConfig {
    pub nodes: Vec<String>,
}

impl CacheSettings {
    pub fn to_dto(&self) -> CacheConfigDto {
        CacheConfigDto {
            max_memory: self.max_memory,
            default_ttl: self.default_ttl,
            frequency_threshold: self.frequency_threshold,
            replication_factor: self.replication_factor,
            enable_transactions: self.enable_transactions,
            transaction_timeout: self.transaction_timeout,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
listen = "0.0.0.0:9898"
static_dir = "crates/frontend/dist"

[cache]
max_memory = 104857600
default_ttl = 3600
frequency_threshold = 1
replication_factor = 2
transaction_timeout = 30
enable_transactions = true

[cluster]
nodes = ["node1:50051", "node2:50051"]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the static assets directory; relative paths are taken from the
/// executable directory first, then from the working directory.
pub fn resolve_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.listen, "0.0.0.0:9898");
        assert_eq!(config.cache.max_memory, 104857600);
        assert_eq!(config.cluster.nodes.len(), 2);
    }

    #[test]
    fn test_cache_settings_to_dto() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let dto = config.cache.to_dto();
        assert_eq!(dto.default_ttl, 3600);
        assert!(dto.enable_transactions);
    }
}
