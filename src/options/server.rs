use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Where the asset host listens and which directory it serves.
pub struct ServerOptions {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Directory whose files are served under `/`.
    pub root: PathBuf,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            root: PathBuf::from("static"),
        }
    }
}

impl ServerOptions {
    /// `host:port` string suitable for binding. IPv6 hosts are bracketed.
    #[must_use]
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;

    fn address(host: &str) -> String {
        ServerOptions {
            host: host.into(),
            port: 3000,
            ..ServerOptions::default()
        }
        .address()
    }

    #[test]
    fn ipv4_and_names_are_joined_with_port() {
        assert_eq!(address("0.0.0.0"), "0.0.0.0:3000");
        assert_eq!(address("localhost"), "localhost:3000");
    }

    #[test]
    fn ipv6_hosts_are_bracketed() {
        assert_eq!(address("::1"), "[::1]:3000");
        assert_eq!(address("[::1]"), "[::1]:3000");
        let parsed: SocketAddr = address("::").parse().unwrap();
        assert!(parsed.is_ipv6());
        assert_eq!(parsed.port(), 3000);
    }
}
