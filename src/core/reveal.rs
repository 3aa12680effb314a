use crate::domain::model::{RenderedFortune, StagePlan};
use crate::domain::ports::{RecommendApi, RevealSurface};
use crate::utils::validation::validate_dream_text;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Warning shown when the submitted dream is too short to interpret.
pub const SHORT_DREAM_MESSAGE: &str = "꿈의 내용을 조금 더 자세히 적어주세요 (5자 이상).";

/// Visible states of the client UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Input,
    Loading,
    Result,
}

/// Invalidates pending reveal stages when bumped. Cloneable so a front end
/// can cancel from outside the controller borrow.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicU64>);

impl CancelHandle {
    /// Drop every stage that has not fired yet.
    pub fn cancel(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Drives one submit → loading → staged reveal cycle against a render
/// surface. Single-threaded cooperative: the stage delays are the only
/// suspension points, and a reset between them drops whatever is pending.
pub struct RevealController<A: RecommendApi, S: RevealSurface> {
    api: A,
    surface: S,
    plan: StagePlan,
    state: UiState,
    cancel: CancelHandle,
}

impl<A: RecommendApi, S: RevealSurface> RevealController<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        Self::with_plan(api, surface, StagePlan::default())
    }

    pub fn with_plan(api: A, surface: S, plan: StagePlan) -> Self {
        Self {
            api,
            surface,
            plan,
            state: UiState::Input,
            cancel: CancelHandle::default(),
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Submit a dream. A too-short dream is rejected synchronously without
    /// any network call; a failed call returns the UI to Input with a
    /// notification and no partial result.
    pub async fn submit(&mut self, dream: &str) -> UiState {
        if self.state != UiState::Input {
            tracing::debug!("Submit ignored outside Input state");
            return self.state;
        }

        if validate_dream_text(dream).is_err() {
            self.surface.notify(SHORT_DREAM_MESSAGE);
            return self.state;
        }

        self.state = UiState::Loading;
        self.surface.enter_loading();

        match self.api.recommend(dream.trim()).await {
            Ok(fortune) => {
                let rendered = fortune.rendered();
                self.surface.prepare(&rendered);
                self.state = UiState::Result;
                self.run_stages(&rendered).await;
            }
            Err(e) => {
                tracing::warn!("Recommendation call failed: {}", e);
                self.surface.notify(&e.user_message());
                self.reset();
            }
        }

        self.state
    }

    /// Retry action: clears the result and returns to a clean Input state.
    /// Any stages still pending from an in-flight reveal are invalidated.
    pub fn reset(&mut self) {
        self.cancel.cancel();
        self.state = UiState::Input;
        self.surface.enter_input();
    }

    async fn run_stages(&mut self, fortune: &RenderedFortune) {
        let generation = self.cancel.current();
        for (delay, stage) in self.plan.steps().to_vec() {
            tokio::time::sleep(delay).await;
            if self.cancel.current() != generation {
                tracing::debug!("Reveal cancelled before {:?}", stage);
                return;
            }
            self.surface.reveal(stage, fortune);
        }
    }
}
