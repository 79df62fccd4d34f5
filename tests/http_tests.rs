use rfleetlog::models::{Driver, DriverStatus, Event};
use rfleetlog::server::{AppState, Settings, serve_on};
use rfleetlog::store::MemoryStore;
use rfleetlog::utils::time::parse_utc_offset;
use serde_json::Value;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn start(store: MemoryStore) -> SocketAddr {
    let settings = Settings {
        departure_action: "salida".to_string(),
        offset: parse_utc_offset("-05:00").unwrap(),
        audit_log: None,
    };
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve_on(listener, AppState::new(store, settings)));
    addr
}

/// Minimal HTTP/1.1 client: returns status code and JSON body.
async fn send(addr: SocketAddr, method: &str, path: &str, form: &str) -> (u16, Value) {
    let request = format!(
        "{method} {path} HTTP/1.1\r\n\
         Host: localhost\r\n\
         Connection: close\r\n\
         Content-Type: application/x-www-form-urlencoded\r\n\
         Content-Length: {}\r\n\r\n{form}",
        form.len()
    );
    send_raw(addr, &request).await
}

async fn send_raw(addr: SocketAddr, request: &str) -> (u16, Value) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let text = String::from_utf8_lossy(&raw).to_string();

    let status = text
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap();
    let body = text.split_once("\r\n\r\n").map(|(_, b)| b).unwrap_or("");
    let json = serde_json::from_str(body).unwrap_or(Value::Null);
    (status, json)
}

fn seeded() -> MemoryStore {
    MemoryStore::new(
        vec![Driver::new("1", "Juan", DriverStatus::Available)],
        vec![Event {
            name: "Ana".into(),
            time: "07:00:00".into(),
            date: "2024-05-01".into(),
            action: "salida".into(),
            destination: "Ica".into(),
            ..Event::default()
        }],
    )
}

#[tokio::test]
async fn register_returns_created_event_and_index() {
    let addr = start(seeded()).await;

    let (status, body) = send(
        addr,
        "POST",
        "/register",
        "nombre=Juan&accion=salida&destino=Callao",
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["index"], 1);
    assert_eq!(body["event"]["nombre"], "Juan");
    assert_eq!(body["event"]["destino"], "Callao");
    assert_eq!(body["event"]["sustento"], "");
    assert!(body.get("warning").is_none());

    let (_, overview) = send(addr, "GET", "/", "").await;
    assert_eq!(overview["drivers"][0]["estado"], "ocupado");
    assert_eq!(overview["events"][1]["index"], 1);
    assert_eq!(overview["events"][1]["nombre"], "Juan");
}

#[tokio::test]
async fn register_without_action_is_a_client_error() {
    let addr = start(seeded()).await;

    let (status, body) = send(addr, "POST", "/register", "nombre=Juan").await;

    assert_eq!(status, 400);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("accion"));

    let (_, overview) = send(addr, "GET", "/", "").await;
    assert_eq!(overview["drivers"][0]["estado"], "disponible");
    assert_eq!(overview["events"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn register_for_unknown_name_carries_warning() {
    let addr = start(seeded()).await;

    let (status, body) = send(addr, "POST", "/register", "name=Pedro&action=salida").await;

    assert_eq!(status, 201);
    assert!(body["warning"].as_str().unwrap().contains("Pedro"));
}

#[tokio::test]
async fn edit_and_delete_are_guarded() {
    let addr = start(seeded()).await;

    let (status, body) = send(addr, "GET", "/edit/0", "").await;
    assert_eq!(status, 200);
    assert_eq!(body["nombre"], "Ana");

    let (status, _) = send(addr, "GET", "/edit/3", "").await;
    assert_eq!(status, 404);

    let (status, _) = send(
        addr,
        "POST",
        "/edit/3",
        "nombre=Ana&accion=retorno",
    )
    .await;
    assert_eq!(status, 404);

    let (status, body) = send(
        addr,
        "POST",
        "/edit/0",
        "nombre=Ana&accion=salida&hora=07%3A00%3A00&fecha=2024-05-01&destino=Nazca",
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["event"]["destino"], "Nazca");

    let (status, _) = send(addr, "POST", "/delete/1", "").await;
    assert_eq!(status, 404);

    let (status, body) = send(addr, "POST", "/delete/0", "").await;
    assert_eq!(status, 200);
    assert_eq!(body["event"]["destino"], "Nazca");

    let (_, overview) = send(addr, "GET", "/", "").await;
    assert!(overview["events"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_positions_answer_in_json() {
    let addr = start(seeded()).await;

    let (status, body) = send(addr, "POST", "/delete/-1", "").await;
    assert_eq!(status, 404);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("-1"));

    let (status, body) = send(addr, "POST", "/delete/abc", "").await;
    assert_eq!(status, 400);
    assert_eq!(body["status"], "error");

    let (status, body) = send(addr, "GET", "/edit/-3", "").await;
    assert_eq!(status, 404);
    assert_eq!(body["status"], "error");

    let (_, overview) = send(addr, "GET", "/", "").await;
    assert_eq!(overview["events"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn register_without_form_content_type_is_a_json_client_error() {
    let addr = start(seeded()).await;

    let form = "nombre=Juan&accion=salida";
    let request = format!(
        "POST /register HTTP/1.1\r\n\
         Host: localhost\r\n\
         Connection: close\r\n\
         Content-Length: {}\r\n\r\n{form}",
        form.len()
    );
    let (status, body) = send_raw(addr, &request).await;

    assert_eq!(status, 400);
    assert_eq!(body["status"], "error");

    let (_, overview) = send(addr, "GET", "/", "").await;
    assert_eq!(overview["drivers"][0]["estado"], "disponible");
}
