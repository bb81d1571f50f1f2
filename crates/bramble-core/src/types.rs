use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Where the decoy listener binds. Fixed at startup; the production
/// deployment always uses [`ListenerConfig::default`], tests bind
/// ephemeral ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerConfig {
    pub addr: SocketAddr,
}

impl ListenerConfig {
    pub const DEFAULT_PORT: u16 = 8001;

    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Loopback bind on an OS-assigned port, for tests.
    pub fn ephemeral() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), Self::DEFAULT_PORT),
        }
    }
}
