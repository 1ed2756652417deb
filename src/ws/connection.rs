//! WebSocket connection lifecycle management.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::{extract::State, response::IntoResponse};
use futures::{SinkExt, StreamExt};

use crate::http::routes::AppState;
use crate::protocol::{ClientEvent, ServerEvent};
use crate::table::Table;

pub async fn ws_handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.table))
}

async fn handle_socket(socket: WebSocket, table: Arc<Table>) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (client, mut events) = table.join();

    // table -> socket
    let forward = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            if ws_tx.send(Message::Text(event.to_json())).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(msg)) = ws_rx.next().await {
        match msg {
            Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                Ok(ClientEvent::Peel) => {
                    table.peel(&client);
                }
                Err(err) => {
                    tracing::debug!(%client, %err, "bad frame");
                    table.send_to(&client, ServerEvent::Error { message: format!("bad message: {err}") });
                }
            },
            Message::Binary(bytes) => {
                tracing::debug!(%client, len = bytes.len(), "binary frame");
                table.send_to(&client, ServerEvent::Error { message: "expected a JSON text frame".into() });
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    table.leave(&client);
    forward.abort();
}
