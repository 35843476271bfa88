//! TCP Server
//!
//! Binds the listening endpoint and runs the serial request/reply loop.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use crate::config::Config;
use crate::error::{GeoQueryError, Result};
use crate::network::Connection;
use crate::service::LookupService;

/// TCP server for geoquery
///
/// Connections are accepted and served one at a time; there is never more
/// than one request in flight. The loop runs until the process is killed.
pub struct Server {
    config: Config,
    service: Arc<LookupService>,
    listener: TcpListener,
}

impl Server {
    /// Bind the listening endpoint
    ///
    /// Bind failure is fatal and happens before any request is served.
    pub fn bind(config: Config, service: Arc<LookupService>) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr).map_err(|e| {
            GeoQueryError::Network(format!("cannot bind {}: {}", config.listen_addr, e))
        })?;

        tracing::info!("Listening on {}", config.listen_addr);

        Ok(Self {
            config,
            service,
            listener,
        })
    }

    /// The address the listener actually bound
    ///
    /// Differs from the configured address when binding port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Run the accept loop (blocking, does not return)
    ///
    /// A failed accept or a connection-level fault is logged and the loop
    /// moves on to the next connection; nothing here terminates the server.
    pub fn run(&self) -> Result<()> {
        loop {
            let (stream, peer) = match self.listener.accept() {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::warn!("Accept failed: {}", e);
                    continue;
                }
            };

            tracing::debug!("Accepted connection from {}", peer);

            let mut connection = match Connection::new(stream, Arc::clone(&self.service)) {
                Ok(conn) => conn,
                Err(e) => {
                    tracing::warn!("Connection setup failed for {}: {}", peer, e);
                    continue;
                }
            };

            if let Err(e) =
                connection.set_timeouts(self.config.read_timeout_ms, self.config.write_timeout_ms)
            {
                tracing::warn!("Timeout setup failed for {}: {}", peer, e);
                continue;
            }

            if let Err(e) = connection.handle() {
                tracing::warn!("Connection error for {}: {}", peer, e);
            }
        }
    }
}
