//! Integration tests for the greeting service.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use hello_kube::{HttpServer, ServerConfig};

/// Start the server on an ephemeral port and return its address.
async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(ServerConfig::default());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

#[tokio::test]
async fn get_root_returns_greeting() {
    let addr = start_server().await;

    let res = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello World from Kubernetes!");
}

#[tokio::test]
async fn query_string_and_headers_are_ignored() {
    let addr = start_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{addr}/?debug=1&verbose=true"))
        .header("x-custom-header", "anything")
        .header("accept", "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello World from Kubernetes!");
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let addr = start_server().await;

    let res = reqwest::get(format!("http://{addr}/unknown")).await.unwrap();
    assert_eq!(res.status(), 404);

    let res = reqwest::get(format!("http://{addr}/deeply/nested/path"))
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn non_get_method_on_root_returns_404() {
    let addr = start_server().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("http://{addr}/"))
        .body("ignored")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let res = client
        .delete(format!("http://{addr}/"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn second_bind_on_occupied_port_fails() {
    let addr = start_server().await;

    // The port is held by the first instance.
    assert!(TcpListener::bind(addr).await.is_err());

    // And the first instance keeps serving.
    let res = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello World from Kubernetes!");
}
