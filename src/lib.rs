pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::api_client::RecommendClient;
pub use adapters::gemini::GeminiClient;
pub use config::ServerConfig;
pub use core::recommend::RecommendService;
pub use core::reveal::{CancelHandle, RevealController, UiState};
pub use domain::model::{
    Ball, BallColor, DreamRequest, FortuneResult, RenderedFortune, RevealStage, StagePlan,
};
pub use utils::error::{FortuneError, Result};
pub use utils::retry::RetryPolicy;

#[cfg(feature = "cli")]
pub use adapters::terminal::TerminalSurface;
#[cfg(feature = "cli")]
pub use config::console::ConsoleConfig;
