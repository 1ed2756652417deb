use anyhow::Context;
use clap::Parser;
use futures::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message;

use peelgrid::board::Board;
use peelgrid::protocol::{ClientEvent, ServerEvent};
use peelgrid::telemetry;

#[derive(Parser)]
#[command(name = "peelbot", version, about = "Headless player: lays out every tile, then peels")]
struct Cli {
    #[arg(long, env = "PEELGRID_URL", default_value = "ws://127.0.0.1:3000/ws")]
    url: String,
    /// Disconnect after sending this many peels.
    #[arg(long, default_value_t = 3)]
    peels: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let (ws, _response) = tokio_tungstenite::connect_async(cli.url.as_str())
        .await
        .with_context(|| format!("connecting to {}", cli.url))?;
    let (mut write, mut read) = ws.split();
    tracing::info!(url = %cli.url, "connected");

    let mut board = Board::new();
    let mut sent = 0u32;

    while let Some(message) = read.next().await {
        let text = match message? {
            Message::Text(text) => text,
            Message::Close(frame) => {
                tracing::info!(?frame, "server closed");
                break;
            }
            _ => continue,
        };
        let event: ServerEvent = match serde_json::from_str(&text) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(%err, %text, "unreadable frame");
                continue;
            }
        };
        board.apply(&event);

        if !board.lay_out_tray()? {
            continue;
        }
        if sent >= cli.peels {
            break;
        }
        write.send(Message::Text(ClientEvent::Peel.to_json())).await?;
        sent += 1;
        tracing::info!(sent, placed = board.placed_count(), size = board.size(), "peel");
    }

    write.close().await.ok();
    tracing::info!(placed = board.placed_count(), size = board.size(), "done");
    Ok(())
}
