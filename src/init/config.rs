use std::net::{IpAddr, SocketAddr};

use anyhow::anyhow;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 8989;

pub struct ServerConfig {
    bind_addr: IpAddr,
    bind_port: u16,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(addr) => addr
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| anyhow!("BIND_ADDR is not a valid IP address"))?,
            Err(_) => DEFAULT_BIND_ADDR.parse::<IpAddr>()?,
        };

        let bind_port = match std::env::var("BIND_PORT") {
            Ok(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| anyhow!("BIND_PORT is not a valid port number"))?,
            Err(_) => DEFAULT_BIND_PORT,
        };

        Ok(ServerConfig {
            bind_addr,
            bind_port,
        })
    }

    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.bind_port)
    }
}
