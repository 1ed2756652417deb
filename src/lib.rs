//! A shared-table letter tile game: the server deals random letters over a
//! WebSocket, clients lay them out on a growing grid and ask for more.

pub mod board;
pub mod config;
pub mod http;
pub mod letters;
pub mod protocol;
pub mod table;
pub mod telemetry;
pub mod util;
pub mod ws;

pub use http::routes::{router, AppState};
