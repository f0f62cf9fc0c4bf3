use serde::Serialize;
use tickscope_core::{StockFeed, StockSummary, Symbol};

use crate::cli::QuoteArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct QuoteResponseData {
    quotes: Vec<StockSummary>,
}

pub async fn run(args: &QuoteArgs, feed: &StockFeed) -> Result<CommandResult, CliError> {
    let symbols = args
        .symbols
        .iter()
        .map(|raw| Symbol::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let mut quotes = Vec::with_capacity(symbols.len());
    for symbol in &symbols {
        quotes.push(feed.quote(symbol).await?);
    }

    let text = quotes.iter().map(quote_line).collect();

    let data = serde_json::to_value(QuoteResponseData { quotes })?;
    Ok(CommandResult::new(data, text))
}

fn quote_line(quote: &StockSummary) -> String {
    let sign = if quote.change >= 0.0 { "+" } else { "" };
    format!(
        "{:<8} {:>10.2}  {sign}{:.2} ({sign}{:.2}%)  volume {:>12}",
        quote.symbol.as_str(),
        quote.last_price,
        quote.change,
        quote.change_percent,
        quote.volume
    )
}
