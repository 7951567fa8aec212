use pistats_domain::UNKNOWN_IP;
use std::io;
use std::net::IpAddr;
use tokio::net::UdpSocket;
use tracing::{debug, error};

/// Address of the interface that routes towards `probe_address`.
///
/// Connecting a UDP socket only selects a route, nothing is sent. Failures
/// are logged and reported as [`UNKNOWN_IP`].
pub async fn detect_local_ip(probe_address: &str) -> String {
    match probe(probe_address).await {
        Ok(ip) => {
            debug!(%ip, "Local IP address detected");
            ip.to_string()
        }
        Err(e) => {
            error!(error = %e, probe = probe_address, "Error getting IP address");
            UNKNOWN_IP.to_string()
        }
    }
}

async fn probe(probe_address: &str) -> io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.connect(probe_address).await?;
    Ok(socket.local_addr()?.ip())
}
