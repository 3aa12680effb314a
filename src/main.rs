use dream_lotto::utils::{logger, validation::Validate};
use dream_lotto::{server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_server_logger();

    let config = ServerConfig::from_env();
    tracing::info!("Starting dream-lotto server");
    tracing::debug!("Server config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    server::serve(config).await?;
    Ok(())
}
