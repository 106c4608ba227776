use std::{env, net::IpAddr, net::Ipv4Addr, net::SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Reads `HOST` and `PORT`, keeping the default for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: host
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.host),
            port: port
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        assert_eq!(AppConfig::from_vars(None, None), AppConfig::default());
        assert_eq!(
            AppConfig::from_vars(Some("nope".into()), Some("99999".into())),
            AppConfig::default()
        );
    }

    #[test]
    fn reads_host_and_port() {
        let config = AppConfig::from_vars(Some("127.0.0.1".into()), Some("3000".into()));
        assert_eq!(config.addr(), "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
    }
}
