use crate::domain::model::{Ball, BallColor, RenderedFortune, RevealStage};
use crate::domain::ports::RevealSurface;
use std::io::Write;
use std::time::Duration;

fn ball_glyph(color: BallColor) -> &'static str {
    match color {
        BallColor::Yellow => "🟡",
        BallColor::Blue => "🔵",
        BallColor::Red => "🔴",
        BallColor::Gray => "⚫",
        BallColor::Green => "🟢",
    }
}

/// Staged terminal rendering of a fortune. Balls appear one by one within
/// the numbers stage, mirroring the staggered animation of the web front
/// end.
pub struct TerminalSurface {
    ball_stagger: Duration,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            ball_stagger: Duration::from_millis(100),
        }
    }

    fn print_ball(&self, ball: &Ball) {
        print!("{} {}  ", ball_glyph(ball.color), ball.number);
        let _ = std::io::stdout().flush();
        std::thread::sleep(self.ball_stagger);
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealSurface for TerminalSurface {
    fn enter_input(&mut self) {
        println!();
    }

    fn enter_loading(&mut self) {
        println!();
        println!("🔮 꿈의 기운을 읽는 중...");
    }

    fn prepare(&mut self, _fortune: &RenderedFortune) {
        println!();
    }

    fn reveal(&mut self, stage: RevealStage, fortune: &RenderedFortune) {
        match stage {
            RevealStage::Interpretation => {
                println!("📜 해몽: {}", fortune.interpretation);
            }
            RevealStage::Numbers => {
                print!("🎱 행운의 번호: ");
                let _ = std::io::stdout().flush();
                for ball in &fortune.balls {
                    self.print_ball(ball);
                }
                println!();
            }
            RevealStage::LuckyItems => {
                println!("🎁 행운의 아이템: {}", fortune.lucky_item);
                println!("🎨 행운의 색상: {}", fortune.lucky_color);
            }
            RevealStage::RetryControl => {
                println!("🔁 새 꿈을 입력하면 다시 해몽해 드립니다.");
            }
        }
    }

    fn notify(&mut self, message: &str) {
        println!("⚠️  {}", message);
    }
}
