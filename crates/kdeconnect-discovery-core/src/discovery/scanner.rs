//! Socket-owning side of a scan.
//!
//! A [`Scanner`] holds one broadcast-capable UDP socket for the lifetime of a
//! single scan. [`Scanner::receive_loop`] consumes it, so the socket is closed
//! however the loop ends, including a panic inside the datagram callback.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::error::ScanError;

/// Create a UDP socket that accepts broadcasts on the wildcard address.
///
/// Address reuse is left off so a second listener on the same port fails to
/// bind instead of splitting the traffic.
pub fn create_broadcast_socket(port: u16) -> Result<std::net::UdpSocket, std::io::Error> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;

    socket.set_broadcast(true)?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    socket.bind(&addr.into())?;

    socket.set_nonblocking(true)?;

    Ok(socket.into())
}

/// Why a receive loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// No datagram arrived within the receive timeout
    TimedOut,
    /// The socket reported an error other than a timeout
    Erred,
}

/// One UDP socket, bound for one scan.
#[derive(Debug)]
pub struct Scanner {
    socket: UdpSocket,
    receive_timeout: Duration,
    buffer_size: usize,
}

impl Scanner {
    /// Bind the discovery port described by `config`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open(config: &ScanConfig) -> Result<Self, ScanError> {
        let port = config.port;
        let bind_error = |source: std::io::Error| ScanError::Bind { port, source };

        let std_socket = create_broadcast_socket(port).map_err(bind_error)?;
        let socket = UdpSocket::from_std(std_socket).map_err(bind_error)?;
        debug!(port, "Listening for KDE Connect announcements");

        Ok(Self {
            socket,
            receive_timeout: config.receive_timeout,
            buffer_size: config.buffer_size,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.socket.local_addr()
    }

    /// Read datagrams until one read times out or the socket fails.
    ///
    /// Each datagram is handed to `on_datagram` as soon as it arrives. The
    /// timeout restarts with every read, so a steady stream of datagrams keeps
    /// the loop going past a single window.
    pub async fn receive_loop<F>(self, mut on_datagram: F) -> LoopExit
    where
        F: FnMut(SocketAddr, &[u8]),
    {
        let mut buf = vec![0u8; self.buffer_size];

        loop {
            match timeout(self.receive_timeout, self.socket.recv_from(&mut buf)).await {
                Ok(Ok((len, addr))) => on_datagram(addr, &buf[..len]),
                Ok(Err(e)) => {
                    warn!(error = %e, "UDP receive error, ending scan early");
                    return LoopExit::Erred;
                }
                Err(_) => {
                    debug!(
                        timeout_ms = self.receive_timeout.as_millis() as u64,
                        "Discovery window elapsed"
                    );
                    return LoopExit::TimedOut;
                }
            }
        }
    }
}
