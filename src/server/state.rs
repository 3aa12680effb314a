use crate::adapters::gemini::GeminiClient;
use crate::config::ServerConfig;
use crate::core::recommend::RecommendService;
use crate::utils::retry::RetryPolicy;
use std::sync::Arc;

/// Shared server state. The service is stateless between requests; only
/// configuration lives here.
pub struct AppState {
    pub service: RecommendService<GeminiClient>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Arc<Self> {
        let source = GeminiClient::new(&config.api_base, &config.model);
        let retry = RetryPolicy::new(config.max_attempts, config.retry_base_delay());

        Arc::new(Self {
            service: RecommendService::new(source, retry),
        })
    }
}
