mod env;

use std::net::SocketAddr;

use tracing_subscriber::prelude::*;

use blockify_api::AppState;
use blockify_blockifier::Blockifier;

fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env = env::env();
    let config = env::blockifier_config();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let store = blockify_s3::Client::new(&env.s3_config()).await;

            let mut transcriber = blockify_transcribe_assemblyai::Client::builder()
                .api_key(&env.assemblyai_api_key);
            if let Some(api_base) = &env.assemblyai_api_base {
                transcriber = transcriber.api_base(api_base);
            }

            let app = blockify_api::router(AppState::new(Blockifier::new(
                store,
                transcriber.build(),
                config,
            )));

            let addr = SocketAddr::from(([0, 0, 0, 0], env.port));
            tracing::info!(addr = %addr, "server_listening");

            let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .unwrap();
        });

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
    tracing::info!("shutdown_signal_received");
}
