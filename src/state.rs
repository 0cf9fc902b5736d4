use crate::history::{HistoryQueue, NameHistoryClient};
use crate::locale::LocaleFormat;
use crate::session::Session;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub history: NameHistoryClient,
    pub history_queue: HistoryQueue,
    pub locale: Arc<dyn LocaleFormat>,
}

impl AppState {
    pub fn new(
        history: NameHistoryClient,
        history_queue: HistoryQueue,
        locale: Arc<dyn LocaleFormat>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            history,
            history_queue,
            locale,
        }
    }
}
