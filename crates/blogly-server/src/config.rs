use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use blogly_types::models::DEFAULT_IMAGE_URL;

/// Server settings, read from the environment after `.env` is loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub default_image_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let db_path = lookup("BLOGLY_DB_PATH").unwrap_or_else(|| "blogly.db".into());
        let host = lookup("BLOGLY_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = lookup("BLOGLY_PORT")
            .unwrap_or_else(|| "5000".into())
            .parse()
            .context("BLOGLY_PORT must be a port number")?;
        let default_image_url = lookup("BLOGLY_DEFAULT_IMAGE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.into());

        Ok(Self {
            db_path: db_path.into(),
            host,
            port,
            default_image_url,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
