use std::{
    env,
    net::{IpAddr, SocketAddr},
};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub body_limit: usize,
    pub concurrency_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            body_limit: 1024 * 1024,
            concurrency_limit: 100,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = env::var("APP_HOST").unwrap_or(defaults.host);
        let port = parse_var("APP_PORT").unwrap_or(defaults.port);
        let body_limit = parse_var("APP_BODY_LIMIT").unwrap_or(defaults.body_limit);
        let concurrency_limit = parse_var::<usize>("APP_CONCURRENCY_LIMIT")
            .filter(|n| *n > 0)
            .unwrap_or(defaults.concurrency_limit);
        Ok(Self {
            host,
            port,
            body_limit,
            concurrency_limit,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .with_context(|| format!("APP_HOST is not an IP address: {}", self.host))?;
        Ok(SocketAddr::from((ip, self.port)))
    }
}
