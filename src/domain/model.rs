use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One dream submission. Created per request, discarded once the response
/// has been rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamRequest {
    #[serde(default)]
    pub dream: String,
}

/// Structured fortune produced by the upstream model.
///
/// The fixed-size array is the one shape invariant this system holds on its
/// own: exactly six numbers must be present before anything renders. Range
/// and uniqueness are left to the upstream output schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneResult {
    pub interpretation: String,
    pub lucky_numbers: [u8; 6],
    pub lucky_item: String,
    pub lucky_color: String,
}

impl FortuneResult {
    /// Display-ready form: balls sorted ascending and tagged with their
    /// color bucket.
    pub fn rendered(&self) -> RenderedFortune {
        let mut numbers = self.lucky_numbers;
        numbers.sort_unstable();
        RenderedFortune {
            interpretation: self.interpretation.clone(),
            balls: numbers.map(Ball::new),
            lucky_item: self.lucky_item.clone(),
            lucky_color: self.lucky_color.clone(),
        }
    }
}

/// Error body returned by the recommendation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Color bucket of a lotto ball, fixed by number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallColor {
    Yellow,
    Blue,
    Red,
    Gray,
    Green,
}

impl BallColor {
    pub fn for_number(number: u8) -> Self {
        match number {
            0..=10 => BallColor::Yellow,
            11..=20 => BallColor::Blue,
            21..=30 => BallColor::Red,
            31..=40 => BallColor::Gray,
            _ => BallColor::Green,
        }
    }

    /// Style class understood by the ball styling of web front ends.
    pub fn class_name(&self) -> &'static str {
        match self {
            BallColor::Yellow => "y1",
            BallColor::Blue => "y11",
            BallColor::Red => "y21",
            BallColor::Gray => "y31",
            BallColor::Green => "y41",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub number: u8,
    pub color: BallColor,
}

impl Ball {
    pub fn new(number: u8) -> Self {
        Self {
            number,
            color: BallColor::for_number(number),
        }
    }
}

/// Fortune prepared for staged display.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFortune {
    pub interpretation: String,
    pub balls: [Ball; 6],
    pub lucky_item: String,
    pub lucky_color: String,
}

/// Result sub-sections, revealed in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    Interpretation,
    Numbers,
    LuckyItems,
    RetryControl,
}

/// Ordered (delay, stage) pairs executed by the reveal scheduler. Each delay
/// is measured from the previous stage's trigger, not from request start.
#[derive(Debug, Clone, PartialEq)]
pub struct StagePlan {
    steps: Vec<(Duration, RevealStage)>,
}

impl Default for StagePlan {
    fn default() -> Self {
        Self {
            steps: vec![
                (Duration::from_millis(100), RevealStage::Interpretation),
                (Duration::from_millis(800), RevealStage::Numbers),
                (Duration::from_millis(1200), RevealStage::LuckyItems),
                (Duration::from_millis(800), RevealStage::RetryControl),
            ],
        }
    }
}

impl StagePlan {
    pub fn new(steps: Vec<(Duration, RevealStage)>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[(Duration, RevealStage)] {
        &self.steps
    }
}
