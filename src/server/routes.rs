use crate::domain::model::{DreamRequest, ErrorBody};
use crate::server::state::AppState;
use crate::utils::error::FortuneError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Generic message for any failure the user should not see details of.
pub const MYSTIC_FAILURE_MESSAGE: &str =
    "신비로운 기운이 일시적으로 차단되었습니다. 잠시 후 다시 시도해주세요.";

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed. Use POST.";

pub async fn recommend_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DreamRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let fortune = state.service.recommend(&payload.dream).await?;
    Ok(Json(fortune))
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            details: None,
        }),
    )
}

/// Maps internal failures onto the endpoint's error contract: 400 for a
/// missing dream, 500 with a generic message (diagnostics in `details`)
/// for everything else.
pub struct ApiError(FortuneError);

impl From<FortuneError> for ApiError {
    fn from(err: FortuneError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            FortuneError::ValidationError { message } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message.clone(),
                    details: None,
                },
            ),
            err => {
                tracing::error!("Recommendation failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: MYSTIC_FAILURE_MESSAGE.to_string(),
                        details: Some(err.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
