//! Per-connection handler: the whole life of one player's session.
//!
//! Each accepted connection gets its own Tokio task running
//! [`handle_connection`]. The flow is:
//!   1. Create a session with a fresh default board
//!   2. Send the first snapshot
//!   3. Loop: receive a line → parse → apply → send the snapshot
//!   4. Close the connection once the peer hangs up
//!
//! Nothing but a transport failure or a clean close leaves the loop.
//! Bad input is logged and answered with the unchanged snapshot.

use sweeper_protocol::{Codec, Command};
use sweeper_session::{Session, SessionConfig, SessionError};
use sweeper_transport::{Connection, TransportError};

use crate::SweeperError;

/// Handles a single connection from accept to close.
///
/// The session lives on this task's stack and is dropped when the
/// function returns; there is nothing else to clean up.
pub async fn handle_connection<C, K>(
    conn: C,
    config: &SessionConfig,
    codec: &K,
) -> Result<(), SweeperError>
where
    C: Connection<Error = TransportError>,
    K: Codec,
{
    let conn_id = conn.id();
    let mut session = Session::new(config.clone());
    tracing::info!(%conn_id, "session started");

    send_snapshot(&conn, codec, &session).await?;

    loop {
        let data = match conn.recv().await {
            Ok(Some(data)) => data,
            Ok(None) => {
                tracing::info!(%conn_id, "connection closed cleanly");
                break;
            }
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "recv error");
                return Err(e.into());
            }
        };

        apply_input(&mut session, &data);
        send_snapshot(&conn, codec, &session).await?;
    }

    // The peer has usually closed first.
    if let Err(e) = conn.close().await {
        tracing::debug!(%conn_id, error = %e, "close after clean shutdown failed");
    }
    Ok(())
}

/// Parses and runs one client message. Never fails: every problem is
/// logged and leaves the session as it was.
fn apply_input(session: &mut Session, data: &[u8]) {
    let Ok(text) = std::str::from_utf8(data) else {
        tracing::warn!(len = data.len(), "ignoring non-UTF-8 message");
        return;
    };
    let text = text.trim_end_matches(['\r', '\n']);

    let command = match Command::parse(text) {
        Ok(Some(command)) => command,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed command");
            return;
        }
    };

    tracing::debug!(?command, "received command");
    match session.apply(command) {
        Ok(_) => {}
        Err(SessionError::EmptyUndoHistory) => tracing::info!("cannot undo, history is empty"),
        Err(e) => tracing::debug!(error = %e, ?command, "command rejected"),
    }
}

async fn send_snapshot<C, K>(conn: &C, codec: &K, session: &Session) -> Result<(), SweeperError>
where
    C: Connection<Error = TransportError>,
    K: Codec,
{
    let bytes = codec.encode(&session.snapshot())?;
    conn.send(&bytes).await?;
    Ok(())
}
