use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8080;

/// Listener configuration consumed by the server before binding.
///
/// The process always serves on `0.0.0.0:8080`; the builder exists for embedding and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Returns a builder for programmatic overrides.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

impl Default for ServerConfig {
    /// Binds to `0.0.0.0:8080`.
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
        }
    }
}

/// Builder type for [`ServerConfig`].
#[derive(Default, Clone, Debug)]
pub struct ServerConfigBuilder {
    bind_addr: Option<SocketAddr>,
    ip: Option<IpAddr>,
    port: Option<u16>,
}

impl ServerConfigBuilder {
    /// Sets the full listener address. Takes precedence over [`ip`](Self::ip) and [`port`](Self::port).
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    pub fn ip(mut self, ip: IpAddr) -> Self {
        self.ip = Some(ip);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn build(self) -> ServerConfig {
        let bind_addr = self.bind_addr.unwrap_or_else(|| {
            SocketAddr::new(
                self.ip.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
                self.port.unwrap_or(DEFAULT_PORT),
            )
        });

        ServerConfig { bind_addr }
    }
}
