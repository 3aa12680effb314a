use crate::domain::model::{FortuneResult, RenderedFortune, RevealStage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The upstream generative-language service, as seen by the recommendation
/// handler. Returns the structured payload exactly as the model produced it.
#[async_trait]
pub trait FortuneSource: Send + Sync {
    async fn divine(&self, dream: &str) -> Result<serde_json::Value>;
}

/// The recommendation endpoint, as seen by a client front end.
#[async_trait]
pub trait RecommendApi: Send + Sync {
    async fn recommend(&self, dream: &str) -> Result<FortuneResult>;
}

/// Render target driven by the reveal controller. Implementations only draw;
/// all sequencing and state decisions stay in the controller.
pub trait RevealSurface {
    fn enter_input(&mut self);
    fn enter_loading(&mut self);
    /// Called once with the full result before the staged reveal starts.
    fn prepare(&mut self, fortune: &RenderedFortune);
    fn reveal(&mut self, stage: RevealStage, fortune: &RenderedFortune);
    fn notify(&mut self, message: &str);
}
