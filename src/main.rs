use lista_chamada::{
    locale::PtBr, router, AppState, Config, HistoryCommand, HistoryQueue, NameHistoryClient,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;

    let history = NameHistoryClient::new(config.history_url.as_deref(), config.history_timeout)?;
    if let Some(token) = &config.history_token {
        history.set_credential(token.clone()).await;
    }
    let (history_queue, _worker) = HistoryQueue::spawn(history.clone());
    history_queue.submit(HistoryCommand::Load);

    let state = AppState::new(history, history_queue, Arc::new(PtBr));
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            warn!("cannot listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    }
}
