//! Configuration read from the environment (port, static bundle location).

use std::{env, net::{Ipv4Addr, SocketAddr}};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3000;

/// Where the game server listens: every interface, on `PORT` when it holds a
/// valid port number, otherwise `DEFAULT_PORT`.
pub fn server_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, parse_port(env::var("PORT").ok().as_deref())))
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|v| v.trim().parse::<u16>().ok()).unwrap_or(DEFAULT_PORT)
}

/// Resolve the directory holding the browser bundle.
/// Order:
/// 1) STATIC_DIR env var
/// 2) ./static (running from the repo root or a container)
/// 3) the crate's own static/ directory
pub fn static_dir() -> PathBuf {
    if let Ok(p) = env::var("STATIC_DIR") {
        return PathBuf::from(p);
    }
    let local = Path::new("./static");
    if local.exists() { return local.to_path_buf(); }
    Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
}
