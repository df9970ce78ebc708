//! Serves the API on a real socket and talks to it over HTTP

use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use topicfeed_config::Config;
use topicfeed_web::{serve_on, AppState};

struct Server {
    base: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<std::io::Result<()>>,
}

impl Server {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        let state = Arc::new(AppState::load(Config::default()).unwrap());
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(serve_on(listener, state, async move {
            let _ = rx.await;
        }));

        Self {
            base: format!("http://{addr}"),
            shutdown: Some(tx),
            handle,
        }
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}

/// GET with a few retries while the server comes up
async fn get_with_retry(client: &reqwest::Client, url: &str) -> reqwest::Response {
    let mut retries = 10;
    loop {
        match client.get(url).send().await {
            Ok(response) => return response,
            Err(e) if retries > 0 => {
                retries -= 1;
                eprintln!("waiting for server at {url}: {e}");
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            Err(e) => panic!("server never answered {url}: {e}"),
        }
    }
}

#[tokio::test]
async fn test_end_to_end() {
    let server = Server::start().await;
    let client = reqwest::Client::new();

    let health: Value = get_with_retry(&client, &format!("{}/api", server.base))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(health["message"], "Welcome to backend!");

    let response = get_with_retry(&client, &format!("{}/api/feed?sort=popular&limit=3", server.base)).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    let feed: Value = response.json().await.unwrap();
    assert_eq!(feed["items"][0]["popularity"], 95.0);
    assert_eq!(feed["pagination"]["totalPages"], 2);

    let response = get_with_retry(&client, &format!("{}/api/search", server.base)).await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let response = get_with_retry(&client, &format!("{}/does/not/exist", server.base)).await;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "ROUTE_NOT_FOUND");
    assert_eq!(body["path"], "/does/not/exist");

    drop(client);
    server.stop().await;
}
