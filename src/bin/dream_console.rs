use clap::Parser;
use dream_lotto::utils::{logger, validation::Validate};
use dream_lotto::{ConsoleConfig, RecommendClient, RevealController, TerminalSurface, UiState};
use std::io::{self, BufRead, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let api = RecommendClient::new(&config.endpoint);
    let surface = TerminalSurface::new();
    let mut controller = RevealController::new(api, surface);

    // Single-shot mode: one dream from the command line, one reveal.
    if let Some(dream) = &config.dream {
        let state = controller.submit(dream).await;
        if state != UiState::Result {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!("🔮 dream-lotto: 꿈 해몽과 행운의 번호");
    let stdin = io::stdin();
    loop {
        println!();
        println!("💭 꿈 내용을 입력하세요 (5자 이상, 빈 줄 입력 시 종료):");
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let dream = line.trim();
        if dream.is_empty() {
            break;
        }

        controller.submit(dream).await;
        controller.reset();
    }

    println!("👋 좋은 꿈 꾸세요!");
    Ok(())
}
