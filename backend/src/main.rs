use a2_backend::{config::Config, create_router};
use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,a2_backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Config::from_env().context("Invalid server configuration")?;
    let index = config.index_file();
    if !index.is_file() {
        tracing::warn!(
            "{} not found, build the frontend with `trunk build --release` first",
            index.display()
        );
    }

    let addr = config.bind_addr();
    tracing::info!(
        "Starting server on {} ({}), serving {}",
        addr,
        config.environment.as_str(),
        config.static_dir.display()
    );
    let app = create_router(config);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("Server terminated with an error")?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                tracing::error!("Failed to register signal handlers, falling back to ctrl-c");
                wait_for_ctrl_c(tokio::signal::ctrl_c()).await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        wait_for_ctrl_c(tokio::signal::ctrl_c()).await;
    }
}

async fn wait_for_ctrl_c<F>(signal: F) -> bool
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Failed to listen for ctrl-c, shutting down: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[tokio::test]
    async fn ctrl_c_failure_is_reported() {
        let failed = async { Err(io::Error::new(io::ErrorKind::Other, "no signal support")) };
        assert!(!wait_for_ctrl_c(failed).await);
        assert!(wait_for_ctrl_c(async { Ok(()) }).await);
    }
}
