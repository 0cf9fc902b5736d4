pub mod app;
pub mod attendees;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod locale;
pub mod models;
pub mod offerings;
pub mod report;
pub mod session;
pub mod state;
pub mod summary;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use history::{HistoryCommand, HistoryQueue, NameHistoryClient};
pub use session::Session;
pub use state::AppState;
