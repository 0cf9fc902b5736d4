mod common;

use common::remote::{spawn_remote, Shared, TOKEN};
use common::server::{spawn_server, TestServer};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tokio::time::sleep;

async fn start(names: &[&str]) -> (TestServer, Shared, Client) {
    let (remote_url, remote) = spawn_remote(names).await;
    let server = spawn_server(&[
        ("HISTORY_API_URL", remote_url),
        ("HISTORY_TIMEOUT_SECS", "2".to_string()),
    ])
    .await;
    (server, remote, Client::new())
}

async fn history(client: &Client, base_url: &str) -> Value {
    client
        .get(format!("{base_url}/api/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn wait_for_history(client: &Client, base_url: &str, done: impl Fn(&Value) -> bool) -> Value {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let current = history(client, base_url).await;
        if done(&current) {
            return current;
        }
        if Instant::now() > deadline {
            panic!("history did not settle: {current}");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn log_in(client: &Client, server: &TestServer) {
    let response = client
        .put(format!("{}/api/history/credential", server.base_url))
        .json(&json!({ "token": TOKEN }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    wait_for_history(client, &server.base_url, |h| h["status"] == "ready").await;
}

fn names(history: &Value) -> Vec<&str> {
    history["names"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_str().unwrap())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn http_blank_credential_is_rejected() {
    let (server, remote, client) = start(&["Ana"]).await;

    let response = client
        .put(format!("{}/api/history/credential", server.base_url))
        .json(&json!({ "token": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let current = wait_for_history(&client, &server.base_url, |h| h["status"] == "load_failed").await;
    assert!(names(&current).is_empty());
    assert!(remote.lock().await.requests.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn http_credential_loads_history() {
    let (server, _remote, client) = start(&["Ana", "Bruno"]).await;

    log_in(&client, &server).await;

    let current = history(&client, &server.base_url).await;
    assert_eq!(names(&current), ["Ana", "Bruno"]);

    let filtered: Value = client
        .get(format!("{}/api/history?q=BRU", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(names(&filtered), ["Bruno"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn http_added_attendee_reaches_history() {
    let (server, remote, client) = start(&["Ana"]).await;
    log_in(&client, &server).await;

    let response = client
        .post(format!("{}/api/attendees", server.base_url))
        .json(&json!({ "name": "  Carla  " }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let current = wait_for_history(&client, &server.base_url, |h| names(h).len() == 2).await;
    assert_eq!(names(&current), ["Ana", "Carla"]);
    assert_eq!(remote.lock().await.names, ["Ana", "Carla"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn http_delete_history_name() {
    let (server, remote, client) = start(&["Ana Paula", "José"]).await;
    log_in(&client, &server).await;

    let response = client
        .delete(format!("{}/api/history/names/Ana%20Paula", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let current = wait_for_history(&client, &server.base_url, |h| names(h).len() == 1).await;
    assert_eq!(names(&current), ["José"]);
    assert!(
        remote
            .lock()
            .await
            .requests
            .contains(&"delete:Ana Paula".to_string())
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn http_history_clear_needs_confirmation() {
    let (server, remote, client) = start(&["Ana", "Bruno"]).await;
    log_in(&client, &server).await;

    let declined: Value = client
        .post(format!("{}/api/history/clear", server.base_url))
        .json(&json!({ "confirm": false }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(declined["cleared"], false);

    sleep(Duration::from_millis(300)).await;
    assert_eq!(names(&history(&client, &server.base_url).await), ["Ana", "Bruno"]);
    {
        let remote = remote.lock().await;
        assert!(!remote.requests.contains(&"clear".to_string()));
        assert_eq!(remote.names, ["Ana", "Bruno"]);
    }

    let confirmed: Value = client
        .post(format!("{}/api/history/clear", server.base_url))
        .json(&json!({ "confirm": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(confirmed["cleared"], true);

    wait_for_history(&client, &server.base_url, |h| names(h).is_empty()).await;
    assert!(remote.lock().await.names.is_empty());
}
