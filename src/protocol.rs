//! Wire events exchanged over the `/ws` socket.
//!
//! Frames are JSON text, tagged with the event name:
//! `{"event":"new-tile","data":"Q"}`.

use serde::{Deserialize, Serialize};

use crate::letters::Letter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    InitialTiles(Vec<Letter>),
    NewTile(Letter),
    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    Peel,
}

impl ServerEvent {
    pub fn to_json(&self) -> String {
        encode(self)
    }
}

impl ClientEvent {
    pub fn to_json(&self) -> String {
        encode(self)
    }
}

fn encode<T: Serialize + std::fmt::Debug>(event: &T) -> String {
    serde_json::to_string(event).unwrap_or_else(|err| {
        tracing::error!(%err, ?event, "failed to encode event");
        String::new()
    })
}
