use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Optional settings read from `dictionary.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DictionaryConfig {
    pub database: Option<String>,
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
}

/// Fully resolved settings for the HTTP listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Merge CLI flags over the config file over built-in defaults
    pub fn resolve(
        file: Option<&DictionaryConfig>,
        database: Option<PathBuf>,
        host: Option<IpAddr>,
        port: Option<u16>,
    ) -> Self {
        let file = file.cloned().unwrap_or_default();
        Self {
            database: database
                .or_else(|| file.database.map(PathBuf::from))
                .unwrap_or_else(default_database_path),
            host: host.or(file.host).unwrap_or(DEFAULT_HOST),
            port: port.or(file.port).unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("dictionary.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("./dictionaryDatabase.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<DictionaryConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: DictionaryConfig = toml::from_str(&contents)
        .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}
