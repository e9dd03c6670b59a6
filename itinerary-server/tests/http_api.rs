//! End-to-end tests against a real listener.

use std::net::SocketAddr;

use itinerary_server::config::ServerConfig;
use itinerary_server::web::{AppState, create_router};
use serde_json::{Value, json};

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::new(ServerConfig::default()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

async fn post_tickets(addr: SocketAddr, tickets: Value) -> (reqwest::StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/v1/dispatcher/itinerary"))
        .json(&json!({ "tickets": tickets }))
        .send()
        .await
        .unwrap();
    let status = response.status();
    let body = response.json::<Value>().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn reconstructs_over_http() {
    let addr = spawn_server().await;

    let (status, body) = post_tickets(
        addr,
        json!([["A", "B"], ["B", "C"], ["C", "D"], ["D", "E"], ["E", "F"], ["F", "A"], ["A", "G"]]),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(
        body["data"]["linear_path"],
        json!(["A", "B", "C", "D", "E", "F", "A", "G"])
    );
}

#[tokio::test]
async fn large_itinerary() {
    let addr = spawn_server().await;

    let mut tickets: Vec<[String; 2]> = (0..99)
        .map(|i| [format!("CITY{i}"), format!("CITY{}", i + 1)])
        .collect();
    tickets.push(["CITY99".to_string(), "FINAL".to_string()]);

    let (status, body) = post_tickets(addr, json!(tickets)).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(body.get("err").is_none());
    let path = body["data"]["linear_path"].as_array().unwrap();
    assert_eq!(path.len(), 101);
    assert_eq!(path[0], "CITY0");
    assert_eq!(path[100], "FINAL");
}

#[tokio::test]
async fn client_faults_are_bad_requests() {
    let addr = spawn_server().await;

    let (status, body) = post_tickets(addr, json!([["JFK", "SFO"], ["JFK", "SFO"]])).await;
    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(body["err"], "multiple same destination");

    let (status, body) = post_tickets(addr, json!([["SFO", "LAX"], ["LAX", "SFO"]])).await;
    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(body["err"], "different starting points");
}

#[tokio::test]
async fn get_on_itinerary_is_method_not_allowed() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/api/v1/dispatcher/itinerary"))
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
    let body = response.json::<Value>().await.unwrap();
    assert!(body["err"].is_string());
}
