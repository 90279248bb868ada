//! API Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use anyhow::Context;
use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_INDEX_FILE: &str = "views/index.html";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen address (`HOST`, `PORT`)
    pub addr: SocketAddr,
    /// CORS allowlist (`FRONTEND_ORIGINS`); `None` allows any origin
    pub allowed_origins: Option<Vec<HeaderValue>>,
    /// Static assets served under `/public` (`PUBLIC_DIR`)
    pub public_dir: PathBuf,
    /// Home page served at `/` (`INDEX_FILE`)
    pub index_file: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            allowed_origins: None,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
        }
    }
}

impl ApiConfig {
    /// Load from process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: IpAddr = lookup("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse()
            .context("HOST must be an IP address")?;

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = lookup("FRONTEND_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .transpose()?;

        Ok(Self {
            addr: SocketAddr::new(host, port),
            allowed_origins,
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            index_file: lookup("INDEX_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_FILE)),
        })
    }
}

fn parse_origins(origins: &str) -> anyhow::Result<Vec<HeaderValue>> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid origin in FRONTEND_ORIGINS: {origin:?}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert!(config.allowed_origins.is_none());
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.index_file, PathBuf::from("views/index.html"));
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("FRONTEND_ORIGINS", "http://localhost:5173, http://127.0.0.1:5173,"),
            ("PUBLIC_DIR", "/srv/public"),
        ]))
        .unwrap();

        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.allowed_origins.unwrap().len(), 2);
        assert_eq!(config.public_dir, PathBuf::from("/srv/public"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(ApiConfig::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
        assert!(ApiConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
        assert!(ApiConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).is_err());
    }
}
