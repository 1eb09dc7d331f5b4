use std::future::Future;
use std::sync::Arc;

use roster_core::Directory;
use tokio::net::TcpListener;

use crate::api::{router, AppState};
use crate::config::{LogFormat, ServerConfig, DEFAULT_LOG_FILTER};
use crate::error::{io_err, ServerError};

/// Start the server and block the current thread until it exits.
pub fn start_blocking(config: ServerConfig) -> Result<(), ServerError> {
    init_tracing(config.log_format);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| io_err("tokio-runtime", e))?;
    runtime.block_on(run(config))
}

/// Load the directory, bind, and serve until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let directory = Arc::new(config.load_directory()?);
    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;
    serve(listener, directory, shutdown_signal()).await
}

/// Serve `directory` on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    directory: Arc<Directory>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .map_err(|e| io_err("listener address", e))?;
    tracing::info!(
        %addr,
        activities = directory.len(),
        "roster server listening"
    );

    axum::serve(listener, router(AppState::new(directory)))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| io_err(format!("serving on {addr}"), e))?;

    tracing::info!("roster server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received ctrl-c, shutting down"),
        Err(err) => tracing::error!(error = %err, "ctrl-c handler failed, shutting down"),
    }
}

fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = fmt().with_env_filter(filter).with_target(false);
    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
