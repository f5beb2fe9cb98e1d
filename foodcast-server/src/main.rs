use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use structopt::StructOpt;
use tracing::info;

use foodcast_server::server::router;
use foodcast_server::Store;

/// Serves the online food order prediction form
#[derive(Debug, StructOpt)]
struct ServerOptions {
    /// Address to bind to
    #[structopt(long, env = "FOODCAST_HOST", default_value = "127.0.0.1")]
    host: String,
    /// Start listening on a port
    #[structopt(short = "p", long, env = "FOODCAST_PORT", default_value = "8000")]
    port: u16,
    /// Reference dataset the encoders and scaler are fitted on, plain or gzipped CSV
    #[structopt(
        short = "r",
        long,
        env = "FOODCAST_REFERENCE",
        default_value = "onlinefoods.csv",
        parse(from_os_str)
    )]
    reference: PathBuf,
    /// Classifier coefficients as JSON
    #[structopt(
        short = "m",
        long,
        env = "FOODCAST_MODEL",
        default_value = "model.json",
        parse(from_os_str)
    )]
    model: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let opt = ServerOptions::from_args();
    let store = Store::load(&opt.reference, &opt.model)?;

    let preprocessor = store.preprocessor();
    info!(
        reference = %opt.reference.display(),
        model = %opt.model.display(),
        features = preprocessor.n_features(),
        threshold = store.model().threshold(),
        "fitted encoders and loaded classifier"
    );
    for spec in preprocessor.schema().columns() {
        if let Some(encoder) = preprocessor.encoder(&spec.name) {
            info!(column = %spec.name, classes = encoder.len(), "label encoder");
        }
    }

    let addr: SocketAddr = format!("{}:{}", opt.host, opt.port)
        .parse()
        .with_context(|| format!("invalid address {}:{}", opt.host, opt.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(url = %format!("http://{}", addr), "listening");

    axum::serve(listener, router(Arc::new(store)))
        .with_graceful_shutdown(shutdown())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            tracing::warn!(%err, "cannot listen for ctrl-c, running until killed");
            std::future::pending::<()>().await
        }
    }
}
