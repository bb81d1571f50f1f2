use bramble_core::ListenerConfig;
use bramble_decoy::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bramble=info".into()),
        )
        .init();

    // no flags, no env: the decoy always binds 0.0.0.0:8001
    if let Err(e) = run().await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let handle = server::start(ListenerConfig::default()).await?;
    handle.wait().await?;
    Ok(())
}
