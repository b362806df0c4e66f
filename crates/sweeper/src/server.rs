//! `SweeperServer` builder and accept loop.
//!
//! This is the entry point for running a sweeper server. It ties the
//! layers together: transport → protocol → session → board.

use std::sync::Arc;

use sweeper_protocol::{Codec, JsonCodec};
use sweeper_session::SessionConfig;
use sweeper_transport::{Connection, Transport, WebSocketTransport};
use tracing::Instrument;

use crate::SweeperError;
use crate::handler::handle_connection;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8081";

/// State shared by every connection task.
///
/// Read-only after startup, so it needs an `Arc` and no lock. Sessions
/// themselves are never shared; each task owns its own.
pub(crate) struct ServerState<K: Codec> {
    pub(crate) session_config: SessionConfig,
    pub(crate) codec: K,
}

/// Builder for configuring and starting a sweeper server.
///
/// # Example
///
/// ```rust,no_run
/// use sweeper::prelude::*;
///
/// # async fn start() -> Result<(), SweeperError> {
/// let server = SweeperServerBuilder::new()
///     .bind("0.0.0.0:8081")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct SweeperServerBuilder {
    bind_addr: String,
    session_config: SessionConfig,
}

impl SweeperServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            session_config: SessionConfig::default(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the configuration every new session starts from.
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Binds the listener. Uses `JsonCodec` and `WebSocketTransport`.
    pub async fn build(self) -> Result<SweeperServer<JsonCodec>, SweeperError> {
        let transport = WebSocketTransport::bind(&self.bind_addr).await?;

        let state = Arc::new(ServerState {
            session_config: self.session_config,
            codec: JsonCodec,
        });

        Ok(SweeperServer { transport, state })
    }
}

impl Default for SweeperServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound sweeper server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct SweeperServer<K: Codec> {
    transport: WebSocketTransport,
    state: Arc<ServerState<K>>,
}

impl SweeperServer<JsonCodec> {
    /// Creates a new builder.
    pub fn builder() -> SweeperServerBuilder {
        SweeperServerBuilder::new()
    }
}

impl<K: Codec> SweeperServer<K> {
    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the accept loop.
    ///
    /// Spawns one task per connection and never returns under normal
    /// operation. A failed accept (for example a client that drops out of
    /// the WebSocket upgrade) is logged and the loop goes on.
    pub async fn run(mut self) -> Result<(), SweeperError> {
        tracing::info!("sweeper server running");

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    let state = Arc::clone(&self.state);
                    let span = tracing::info_span!("connection", conn_id = %conn.id());
                    tokio::spawn(
                        async move {
                            if let Err(e) =
                                handle_connection(conn, &state.session_config, &state.codec).await
                            {
                                tracing::debug!(error = %e, "connection ended with error");
                            }
                        }
                        .instrument(span),
                    );
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
