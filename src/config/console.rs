use crate::utils::validation::{validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "dream-console")]
#[command(about = "Terminal client for the dream-lotto fortune service")]
pub struct ConsoleConfig {
    /// Base URL of the recommendation service
    #[arg(long, default_value = "http://localhost:3000")]
    pub endpoint: String,

    /// Dream text; prompts interactively when omitted
    #[arg(long)]
    pub dream: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}
