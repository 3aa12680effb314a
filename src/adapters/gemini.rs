use crate::domain::ports::FortuneSource;
use crate::utils::error::{FortuneError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;

/// Public endpoint of the generative-language service.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Environment variable holding the service credential. Read per request,
/// never cached.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Persona and output contract sent ahead of every dream.
const SYSTEM_INSTRUCTION: &str = "\
너는 신비로운 꿈 해몽가야. 사용자가 입력한 꿈 내용을 바탕으로 다음을 수행해:
1. 긍정적이고 희망적인 해몽을 3문장 이내로 작성해.
2. 연관된 로또 번호 6개(1~45 사이, 중복 없음)를 추천해.
3. 행운의 아이템과 행운의 색상을 각각 하나씩 정해줘.

반드시 아래의 JSON 형식으로만 응답해:
{
  \"interpretation\": \"해몽 텍스트\",
  \"lucky_numbers\": [1, 2, 3, 4, 5, 6],
  \"lucky_item\": \"아이템 이름\",
  \"lucky_color\": \"색상 이름\"
}";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: String,
}

/// Schema the upstream model must fill: interpretation, exactly six numbers,
/// one item, one color.
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "interpretation": { "type": "STRING" },
            "lucky_numbers": {
                "type": "ARRAY",
                "items": { "type": "INTEGER" },
                "minItems": 6,
                "maxItems": 6
            },
            "lucky_item": { "type": "STRING" },
            "lucky_color": { "type": "STRING" }
        },
        "required": ["interpretation", "lucky_numbers", "lucky_item", "lucky_color"]
    })
}

fn candidate_text(envelope: GenerateContentResponse) -> Option<String> {
    envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
}

/// HTTP adapter for the generative-language API, authenticated with an
/// API-key query parameter.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key: None,
        }
    }

    /// Fixed credential instead of the per-request environment lookup.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn api_key(&self) -> Result<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        env::var(API_KEY_VAR).map_err(|_| FortuneError::MissingConfigError {
            field: API_KEY_VAR.to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl FortuneSource for GeminiClient {
    async fn divine(&self, dream: &str) -> Result<serde_json::Value> {
        let api_key = self.api_key()?;
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!("System: {}\nUser: {}", SYSTEM_INSTRUCTION, dream),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        tracing::debug!("Requesting fortune from {} ({})", self.base_url, self.model);
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Upstream response status: {}", status);

        if !status.is_success() {
            let message = response
                .json::<UpstreamErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error.map(|e| e.message))
                .unwrap_or_else(|| "Failed to fetch from Gemini".to_string());
            return Err(FortuneError::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GenerateContentResponse = response.json().await?;
        let text = candidate_text(envelope).ok_or_else(|| FortuneError::UpstreamShape {
            message: "no candidate text in response".to_string(),
        })?;

        let fortune: serde_json::Value = serde_json::from_str(&text)?;
        Ok(fortune)
    }
}
