//! DNS override for the `-i` flag

use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use std::net::{IpAddr, SocketAddr};
use tracing::trace;

/// Resolves every host name to a single fixed address.
///
/// The port is left as 0 so the connector fills in the request URL's port.
#[derive(Debug, Clone, Copy)]
pub struct PinnedResolver {
    ip: IpAddr,
}

impl PinnedResolver {
    pub fn new(ip: IpAddr) -> Self {
        Self { ip }
    }
}

impl Resolve for PinnedResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let addr = SocketAddr::new(self.ip, 0);
        trace!(host = name.as_str(), %addr, "pinned resolution");
        Box::pin(async move {
            let addrs: Addrs = Box::new(std::iter::once(addr));
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(addrs)
        })
    }
}
