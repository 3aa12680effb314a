pub mod recommend;
pub mod reveal;

pub use crate::domain::model::{FortuneResult, RenderedFortune, RevealStage, StagePlan};
pub use crate::domain::ports::{FortuneSource, RecommendApi, RevealSurface};
pub use crate::utils::error::Result;
