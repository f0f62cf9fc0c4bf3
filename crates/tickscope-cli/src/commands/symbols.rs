use serde::Serialize;
use tickscope_core::{StockFeed, StockSummary};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SymbolsResponseData {
    live: bool,
    symbols: Vec<StockSummary>,
}

pub async fn run(feed: &StockFeed) -> Result<CommandResult, CliError> {
    let symbols = feed.summaries().await?;

    let mut text = vec![format!(
        "feed: {} ({} symbols)",
        if feed.is_live() { "alphavantage" } else { "synthetic" },
        symbols.len()
    )];
    for summary in &symbols {
        text.push(format!(
            "{:<8} {:<24} {:<6} {:>10.2}",
            summary.symbol.as_str(),
            summary.name,
            summary.exchange,
            summary.last_price
        ));
    }

    let data = serde_json::to_value(SymbolsResponseData {
        live: feed.is_live(),
        symbols,
    })?;
    Ok(CommandResult::new(data, text))
}
