//! Exercises the reqwest adapter against a one-shot local HTTP server.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;
use user_directory::config::DirectoryConfig;
use user_directory::lifecycle::DirectorySystem;
use user_directory::model::sample_users;
use user_directory::source::{fetch_page_or_fallback, HttpPageSource, PageSource, SourceError};

const PAGE_TWO: &str = r#"{"page":2,"per_page":6,"total":12,"total_pages":2,"data":[{"id":7,"email":"michael.lawson@reqres.in","first_name":"Michael","last_name":"Lawson","avatar":"https://reqres.in/img/faces/7-image.jpg"}]}"#;

/// Answers exactly one request with `status_line` and `body`, returning the raw
/// request head.
async fn serve_once(status_line: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_head(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });
    let url = Url::parse(&format!("http://{addr}/api/users")).unwrap();
    (url, handle)
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = socket.read(&mut buf).await.unwrap();
        request.extend_from_slice(&buf[..n]);
        if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&request).into_owned()
}

#[tokio::test]
async fn test_fetches_and_decodes_a_page() {
    let (url, server) = serve_once("200 OK", PAGE_TWO).await;
    let source = HttpPageSource::new(url).unwrap();

    let page = source.fetch_page(2).await.unwrap();
    assert!(!page.is_fallback);
    assert_eq!(page.page_number, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.records[0].last_name, "Lawson");

    let request = server.await.unwrap().to_lowercase();
    assert!(request.starts_with("get /api/users?page=2 http/1.1"), "{request}");
    assert!(request.contains("accept: application/json"), "{request}");
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let (url, server) = serve_once("500 Internal Server Error", r#"{"message":"down"}"#).await;
    let source = HttpPageSource::new(url).unwrap();

    let error = source.fetch_page(1).await.unwrap_err();
    assert_eq!(
        error,
        SourceError::Status {
            status: 500,
            body: r#"{"message":"down"}"#.to_string()
        }
    );
    server.await.unwrap();
}

#[tokio::test]
async fn test_server_error_falls_back_to_sample_page() {
    let (url, _server) = serve_once("500 Internal Server Error", "").await;
    let source = HttpPageSource::new(url).unwrap();

    let page = fetch_page_or_fallback(&source, 1).await;
    assert!(page.is_fallback);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.records, sample_users());
}

#[tokio::test]
async fn test_explicit_error_field_is_a_failure() {
    let (url, _server) = serve_once("200 OK", r#"{"error":"Missing API key"}"#).await;
    let source = HttpPageSource::new(url).unwrap();

    let error = source.fetch_page(1).await.unwrap_err();
    assert_eq!(error, SourceError::Remote("Missing API key".to_string()));
}

#[tokio::test]
async fn test_timeout_maps_to_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        // Hold the connection open without answering.
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });
    let url = Url::parse(&format!("http://{addr}/api/users")).unwrap();
    let source = HttpPageSource::with_timeout(url, Some(Duration::from_millis(200))).unwrap();

    let error = source.fetch_page(1).await.unwrap_err();
    assert!(matches!(error, SourceError::Timeout(_)), "{error}");
}

#[tokio::test]
async fn test_refused_connection_maps_to_transport() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let url = Url::parse(&format!("http://{addr}/api/users")).unwrap();
    let source = HttpPageSource::new(url).unwrap();

    let error = source.fetch_page(1).await.unwrap_err();
    assert!(matches!(error, SourceError::Transport(_)), "{error}");
}

#[tokio::test]
async fn test_system_over_http_shows_banner_on_failure() {
    let (url, _server) = serve_once("503 Service Unavailable", "").await;
    let config = DirectoryConfig::default().with_endpoint(url.as_str());
    let system = DirectorySystem::new(&config).unwrap();

    let view = system.client.loaded().await.unwrap();
    assert!(view.is_fallback);
    assert_eq!(view.displayed.len(), 6);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_sub_second_timeout_falls_back() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });
    let config = DirectoryConfig::default()
        .with_endpoint(format!("http://{addr}/api/users"))
        .with_request_timeout(Duration::from_millis(250));
    assert_eq!(config.request_timeout(), Some(Duration::from_millis(250)));
    let system = DirectorySystem::new(&config).unwrap();

    let started = std::time::Instant::now();
    let view = system.client.loaded().await.unwrap();
    assert!(view.is_fallback);
    assert!(started.elapsed() < Duration::from_secs(5));

    system.shutdown().await.unwrap();
}
