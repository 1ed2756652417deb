use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use futures::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{timeout, Duration};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use peelgrid::board::Board;
use peelgrid::letters::INITIAL_HAND;
use peelgrid::protocol::{ClientEvent, ServerEvent};
use peelgrid::{router, table::Table, AppState};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

async fn spawn_server(seed: u64) -> (SocketAddr, CancellationToken) {
    let app = router(AppState::new(Table::with_seed(seed)), STATIC_DIR);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = CancellationToken::new();
    let stop = shutdown.clone();
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { stop.cancelled().await })
            .await
            .unwrap();
    });
    (addr, shutdown)
}

async fn connect(addr: SocketAddr) -> WsStream {
    let (ws, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();
    ws
}

async fn next_event(ws: &mut WsStream) -> ServerEvent {
    loop {
        let msg = timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("timed out waiting for an event")
            .expect("socket closed")
            .unwrap();
        if let Message::Text(text) = msg {
            return serde_json::from_str(&text).unwrap();
        }
    }
}

async fn initial_hand(ws: &mut WsStream) -> Vec<peelgrid::letters::Letter> {
    match next_event(ws).await {
        ServerEvent::InitialTiles(hand) => hand,
        other => panic!("expected initial-tiles, got {other:?}"),
    }
}

async fn assert_quiet(ws: &mut WsStream) {
    assert!(timeout(Duration::from_millis(150), ws.next()).await.is_err());
}

async fn peel(ws: &mut WsStream) {
    ws.send(Message::Text(ClientEvent::Peel.to_json())).await.unwrap();
}

#[tokio::test]
async fn every_connection_gets_its_own_hand() {
    let (addr, shutdown) = spawn_server(11).await;
    let mut a = connect(addr).await;
    let hand_a = initial_hand(&mut a).await;
    let mut b = connect(addr).await;
    let hand_b = initial_hand(&mut b).await;

    for hand in [&hand_a, &hand_b] {
        assert_eq!(hand.len(), INITIAL_HAND);
        assert!(hand.iter().all(|l| l.as_char().is_ascii_uppercase()));
    }
    // b joining sends nothing to a
    assert_quiet(&mut a).await;
    shutdown.cancel();
}

#[tokio::test]
async fn peel_broadcasts_one_tile_to_everyone() {
    let (addr, shutdown) = spawn_server(12).await;
    let mut a = connect(addr).await;
    let mut b = connect(addr).await;
    initial_hand(&mut a).await;
    initial_hand(&mut b).await;

    peel(&mut a).await;
    let to_a = next_event(&mut a).await;
    let to_b = next_event(&mut b).await;
    assert!(matches!(to_a, ServerEvent::NewTile(_)));
    assert_eq!(to_a, to_b);
    assert_quiet(&mut a).await;
    assert_quiet(&mut b).await;
    shutdown.cancel();
}

#[tokio::test]
async fn laying_out_the_whole_hand_leads_to_a_peel() {
    let (addr, shutdown) = spawn_server(13).await;
    let mut player = connect(addr).await;
    let mut watcher = connect(addr).await;
    initial_hand(&mut watcher).await;

    let mut board = Board::new();
    board.apply(&next_event(&mut player).await);
    assert_eq!(board.tray().len(), INITIAL_HAND);

    assert!(board.lay_out_tray().unwrap());
    assert_eq!(board.placed_count(), INITIAL_HAND);
    peel(&mut player).await;

    let tile = next_event(&mut player).await;
    assert_eq!(next_event(&mut watcher).await, tile);
    board.apply(&tile);
    assert_eq!(board.tray().len(), 1);
    shutdown.cancel();
}

#[tokio::test]
async fn bad_frames_get_an_error_and_keep_the_socket() {
    let (addr, shutdown) = spawn_server(14).await;
    let mut ws = connect(addr).await;
    initial_hand(&mut ws).await;

    ws.send(Message::Text("{\"event\":\"shuffle\"}".into())).await.unwrap();
    assert!(matches!(next_event(&mut ws).await, ServerEvent::Error { .. }));

    peel(&mut ws).await;
    assert!(matches!(next_event(&mut ws).await, ServerEvent::NewTile(_)));
    shutdown.cancel();
}

#[tokio::test]
async fn binary_frames_get_an_error() {
    let (addr, shutdown) = spawn_server(16).await;
    let mut ws = connect(addr).await;
    initial_hand(&mut ws).await;

    ws.send(Message::Binary(vec![1, 2, 3])).await.unwrap();
    assert!(matches!(next_event(&mut ws).await, ServerEvent::Error { .. }));

    peel(&mut ws).await;
    assert!(matches!(next_event(&mut ws).await, ServerEvent::NewTile(_)));
    shutdown.cancel();
}

#[tokio::test]
async fn disconnected_clients_stop_receiving() {
    let (addr, shutdown) = spawn_server(15).await;
    let mut a = connect(addr).await;
    let mut b = connect(addr).await;
    initial_hand(&mut a).await;
    initial_hand(&mut b).await;

    b.close(None).await.unwrap();
    // give the server a moment to see the close frame
    tokio::time::sleep(Duration::from_millis(100)).await;

    peel(&mut a).await;
    assert!(matches!(next_event(&mut a).await, ServerEvent::NewTile(_)));
    shutdown.cancel();
}

#[tokio::test]
async fn root_serves_the_client_bundle() {
    let app = router(AppState::new(Table::with_seed(0)), STATIC_DIR);

    let res = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let res = app
        .clone()
        .oneshot(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
