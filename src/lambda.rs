#[cfg(feature = "lambda")]
use dream_lotto::adapters::gemini::GeminiClient;
#[cfg(feature = "lambda")]
use dream_lotto::utils::logger;
#[cfg(feature = "lambda")]
use dream_lotto::{DreamRequest, RecommendService, RetryPolicy, ServerConfig};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<DreamRequest>) -> Result<serde_json::Value, Error> {
    tracing::info!("Starting recommendation Lambda function");

    let config = ServerConfig::from_env();
    let source = GeminiClient::new(&config.api_base, &config.model);
    let service = RecommendService::new(
        source,
        RetryPolicy::new(config.max_attempts, config.retry_base_delay()),
    );

    let fortune = service
        .recommend(&event.payload.dream)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::info!("Recommendation Lambda function completed successfully");
    Ok(fortune)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
