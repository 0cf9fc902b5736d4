use reqwest::{Method, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{mpsc, Mutex, RwLock},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::errors::HistoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    LoadFailed,
}

#[derive(Debug, Default)]
struct HistoryCache {
    status: HistoryStatus,
    names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RemoteHistory {
    status: bool,
    #[serde(default)]
    history: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct AppendBody<'a> {
    name: &'a str,
}

pub fn filter_names(names: &[String], query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    names
        .iter()
        .filter(|name| query.is_empty() || name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[derive(Clone)]
pub struct NameHistoryClient {
    http: reqwest::Client,
    base_url: Option<Arc<str>>,
    credential: Arc<RwLock<Option<String>>>,
    cache: Arc<Mutex<HistoryCache>>,
}

impl NameHistoryClient {
    pub fn new(base_url: Option<&str>, timeout: Duration) -> Result<Self, HistoryError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.map(|url| Arc::from(url.trim_end_matches('/'))),
            credential: Arc::new(RwLock::new(None)),
            cache: Arc::new(Mutex::new(HistoryCache::default())),
        })
    }

    pub async fn set_credential(&self, token: impl Into<String>) {
        *self.credential.write().await = Some(token.into());
    }

    pub async fn status(&self) -> HistoryStatus {
        self.cache.lock().await.status
    }

    pub async fn names(&self) -> Vec<String> {
        self.cache.lock().await.names.clone()
    }

    pub async fn filter(&self, query: &str) -> Vec<String> {
        filter_names(&self.cache.lock().await.names, query)
    }

    pub async fn load(&self) -> Result<(), HistoryError> {
        self.cache.lock().await.status = HistoryStatus::Loading;
        let outcome = self.fetch().await;

        let mut cache = self.cache.lock().await;
        match outcome {
            Ok(names) => {
                info!(count = names.len(), "name history loaded");
                cache.names = names;
                cache.status = HistoryStatus::Ready;
                Ok(())
            }
            Err(err) => {
                cache.status = HistoryStatus::LoadFailed;
                log_failure("load", &err);
                Err(err)
            }
        }
    }

    pub async fn append(&self, name: &str) -> Result<(), HistoryError> {
        let result = self.post_name(name).await;
        self.apply("append", result).await
    }

    pub async fn delete_one(&self, name: &str) -> Result<(), HistoryError> {
        let result = self.delete_name(name).await;
        self.apply("delete", result).await
    }

    pub async fn clear_all(&self, confirm: impl FnOnce(&str) -> bool) -> Result<bool, HistoryError> {
        if !confirm("Erase the whole name history?") {
            return Ok(false);
        }

        match self.delete_all().await {
            Ok(()) => {
                self.cache.lock().await.names.clear();
                info!("name history cleared");
                Ok(true)
            }
            Err(err) => {
                log_failure("clear", &err);
                Err(err)
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<String>, HistoryError> {
        let request = self.request(Method::GET, "/history").await?;
        self.send_for_history(request).await
    }

    async fn post_name(&self, name: &str) -> Result<Vec<String>, HistoryError> {
        let request = self
            .request(Method::POST, "/history/add")
            .await?
            .json(&AppendBody { name });
        self.send_for_history(request).await
    }

    async fn delete_name(&self, name: &str) -> Result<Vec<String>, HistoryError> {
        let path = format!("/history/delete/{}", urlencoding::encode(name));
        let request = self.request(Method::DELETE, &path).await?;
        self.send_for_history(request).await
    }

    async fn delete_all(&self) -> Result<(), HistoryError> {
        let request = self.request(Method::DELETE, "/history/clear").await?;
        self.send(request).await.map(|_| ())
    }

    async fn apply(
        &self,
        op: &'static str,
        result: Result<Vec<String>, HistoryError>,
    ) -> Result<(), HistoryError> {
        match result {
            Ok(names) => {
                debug!(op, count = names.len(), "name history updated");
                self.cache.lock().await.names = names;
                Ok(())
            }
            Err(err) => {
                log_failure(op, &err);
                Err(err)
            }
        }
    }

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, HistoryError> {
        let base = self.base_url.as_deref().ok_or(HistoryError::Disabled)?;
        let token = self
            .credential
            .read()
            .await
            .clone()
            .ok_or(HistoryError::MissingCredential)?;
        Ok(self
            .http
            .request(method, format!("{base}{path}"))
            .bearer_auth(token))
    }

    async fn send(&self, request: RequestBuilder) -> Result<RemoteHistory, HistoryError> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(HistoryError::Status(response.status()));
        }
        let body: RemoteHistory = response.json().await?;
        if !body.status {
            return Err(HistoryError::Rejected);
        }
        Ok(body)
    }

    async fn send_for_history(&self, request: RequestBuilder) -> Result<Vec<String>, HistoryError> {
        self.send(request).await?.history.ok_or(HistoryError::Malformed)
    }
}

fn log_failure(op: &'static str, err: &HistoryError) {
    match err {
        HistoryError::Disabled => debug!(op, "name history disabled"),
        _ => warn!(op, error = %err, "name history request failed"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryCommand {
    Load,
    Append(String),
    Delete(String),
    Clear,
}

// One worker, so responses land in submission order.
#[derive(Clone)]
pub struct HistoryQueue {
    tx: mpsc::UnboundedSender<HistoryCommand>,
}

impl HistoryQueue {
    pub fn spawn(client: NameHistoryClient) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                // Failures are logged by the client and leave the cache intact.
                let _ = match command {
                    HistoryCommand::Load => client.load().await,
                    HistoryCommand::Append(name) => client.append(&name).await,
                    HistoryCommand::Delete(name) => client.delete_one(&name).await,
                    HistoryCommand::Clear => client.clear_all(|_| true).await.map(|_| ()),
                };
            }
            debug!("history queue closed");
        });
        (Self { tx }, worker)
    }

    pub fn submit(&self, command: HistoryCommand) {
        if let Err(err) = self.tx.send(command) {
            warn!(command = ?err.0, "history worker is gone, dropping request");
        }
    }

    pub fn clear_all(&self, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm("Erase the whole name history?") {
            return false;
        }
        self.submit(HistoryCommand::Clear);
        true
    }
}
