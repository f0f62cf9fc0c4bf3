mod analyze;
mod bars;
mod quote;
mod symbols;

use std::sync::Arc;

use serde_json::Value;
use tickscope_core::{ReqwestHttpClient, StockFeed};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Output of one command: the JSON payload plus its text rendering.
pub struct CommandResult {
    pub data: Value,
    pub text: Vec<String>,
}

impl CommandResult {
    pub fn new(data: Value, text: Vec<String>) -> Self {
        Self { data, text }
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let feed = StockFeed::from_env(Arc::new(ReqwestHttpClient::new()));

    match &cli.command {
        Command::Analyze(args) => analyze::run(args, &feed).await,
        Command::Bars(args) => bars::run(args, &feed).await,
        Command::Quote(args) => quote::run(args, &feed).await,
        Command::Symbols => symbols::run(&feed).await,
    }
}
