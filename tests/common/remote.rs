use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

pub const TOKEN: &str = "secret-token";

#[derive(Default)]
pub struct Remote {
    pub names: Vec<String>,
    pub failing: bool,
    pub delay: Option<Duration>,
    pub requests: Vec<String>,
}

pub type Shared = Arc<Mutex<Remote>>;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value == format!("Bearer {TOKEN}"))
}

async fn respond(
    remote: &Shared,
    headers: &HeaderMap,
    op: String,
    change: impl FnOnce(&mut Vec<String>),
    with_history: bool,
) -> (StatusCode, Json<Value>) {
    if !authorized(headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "status": false })));
    }

    let delay = remote.lock().await.delay;
    if let Some(delay) = delay {
        sleep(delay).await;
    }

    let mut remote = remote.lock().await;
    remote.requests.push(op);
    if remote.failing {
        return (StatusCode::OK, Json(json!({ "status": false })));
    }

    change(&mut remote.names);
    if with_history {
        (StatusCode::OK, Json(json!({ "status": true, "history": remote.names })))
    } else {
        (StatusCode::OK, Json(json!({ "status": true })))
    }
}

async fn load(State(remote): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    respond(&remote, &headers, "load".to_string(), |_| {}, true).await
}

async fn add(
    State(remote): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let name = body["name"].as_str().unwrap_or_default().to_string();
    let op = format!("add:{name}");
    let change = move |names: &mut Vec<String>| {
        if !names.contains(&name) {
            names.push(name);
        }
    };
    respond(&remote, &headers, op, change, true).await
}

async fn remove(
    State(remote): State<Shared>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> (StatusCode, Json<Value>) {
    let op = format!("delete:{name}");
    let change = move |names: &mut Vec<String>| names.retain(|n| *n != name);
    respond(&remote, &headers, op, change, true).await
}

async fn clear(State(remote): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    respond(&remote, &headers, "clear".to_string(), |names| names.clear(), false).await
}

pub async fn spawn_remote(names: &[&str]) -> (String, Shared) {
    let remote: Shared = Arc::new(Mutex::new(Remote {
        names: names.iter().map(|n| n.to_string()).collect(),
        ..Remote::default()
    }));

    let app = Router::new()
        .route("/api/history", get(load))
        .route("/api/history/add", post(add))
        .route("/api/history/delete/:name", delete(remove))
        .route("/api/history/clear", delete(clear))
        .with_state(Arc::clone(&remote));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake history API");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api/"), remote)
}
