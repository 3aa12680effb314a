use crate::domain::model::{DreamRequest, ErrorBody, FortuneResult};
use crate::domain::ports::RecommendApi;
use crate::utils::error::{FortuneError, Result, FETCH_FAILURE_MESSAGE};
use async_trait::async_trait;

/// HTTP adapter a front end uses to reach the recommendation endpoint.
#[derive(Debug, Clone)]
pub struct RecommendClient {
    client: reqwest::Client,
    base_url: String,
}

impl RecommendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/recommend", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RecommendApi for RecommendClient {
    async fn recommend(&self, dream: &str) -> Result<FortuneResult> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&DreamRequest {
                dream: dream.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|b| b.error)
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| FETCH_FAILURE_MESSAGE.to_string());
            return Err(FortuneError::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        // Deserializing into FortuneResult is the exactly-six-numbers check.
        let fortune = response.json::<FortuneResult>().await?;
        Ok(fortune)
    }
}
