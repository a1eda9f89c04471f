//! LAN IP discovery
//!
//! The demo frontend renders a QR code so a phone on the same network can
//! open the mobile view; that needs the machine's real LAN address, not
//! localhost.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use tracing::warn;

/// Detect the machine's LAN IP address
///
/// Opens an unconnected UDP socket and "connects" it to a public address.
/// No packet is sent; the OS just picks the outbound interface, whose
/// address we read back. Falls back to 127.0.0.1 on any failure.
pub fn lan_ip() -> IpAddr {
    match detect() {
        Ok(ip) => ip,
        Err(e) => {
            warn!("LAN IP detection failed, falling back to loopback: {}", e);
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
    }
}

fn detect() -> std::io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(("8.8.8.8", 80))?;
    Ok(socket.local_addr()?.ip())
}
