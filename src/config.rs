use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!(%value, "ignoring invalid PORT");
                defaults.port
            }),
            None => defaults.port,
        };

        let host = match lookup("HOST") {
            Some(value) => value.trim().parse::<IpAddr>().unwrap_or_else(|_| {
                warn!(%value, "ignoring invalid HOST");
                defaults.host
            }),
            None => defaults.host,
        };

        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
