//! `sweeper-server`: serves Minesweeper sessions over WebSocket.
//!
//! Logging follows `RUST_LOG` (default `info`), e.g.
//! `RUST_LOG=sweeper=debug,sweeper_session=debug`.

use clap::Parser;
use sweeper::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Turn-based Minesweeper over WebSocket")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    bind: String,

    /// Width of the board each new connection starts with.
    #[arg(long, default_value_t = 10)]
    width: i64,

    /// Height of the board each new connection starts with.
    #[arg(long, default_value_t = 10)]
    height: i64,

    /// Mines on the default board.
    #[arg(long, default_value_t = 10)]
    mines: i64,

    /// Keep at most this many undo steps per session (unbounded if unset).
    #[arg(long)]
    max_undo: Option<usize>,

    /// Seed for mine placement, for reproducible boards.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let session_config = SessionConfig {
        default_board: BoardConfig::new(args.width, args.height, args.mines)?,
        max_undo: args.max_undo,
        seed: args.seed,
    };

    let server = SweeperServerBuilder::new()
        .bind(&args.bind)
        .session_config(session_config)
        .build()
        .await?;
    tracing::info!(addr = %server.local_addr()?, "waiting for client connections");

    server.run().await?;
    Ok(())
}
