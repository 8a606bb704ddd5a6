use std::net::IpAddr;

pub fn local_url(port: u16) -> String {
    format!("http://localhost:{port}")
}

/// URLs reachable from the LAN: one per non-loopback IPv4 address.
pub fn network_urls(addresses: impl IntoIterator<Item = IpAddr>, port: u16) -> Vec<String> {
    addresses
        .into_iter()
        .filter_map(|address| match address {
            IpAddr::V4(ip) if !ip.is_loopback() => Some(format!("http://{ip}:{port}")),
            _ => None,
        })
        .collect()
}

/// Addresses of the host's network interfaces. Lookup failures only cost the
/// startup banner, so they are logged and yield nothing.
pub(crate) fn interface_addresses() -> Vec<IpAddr> {
    match if_addrs::get_if_addrs() {
        Ok(interfaces) => interfaces.iter().map(|iface| iface.ip()).collect(),
        Err(err) => {
            tracing::warn!(error = %err, "could not list network interfaces");
            Vec::new()
        }
    }
}
