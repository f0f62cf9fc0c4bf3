use serde::Serialize;
use tickscope_core::{DailyBar, StockFeed, Symbol};

use crate::cli::BarsArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct BarsResponseData {
    symbol: Symbol,
    bars: Vec<DailyBar>,
}

pub async fn run(args: &BarsArgs, feed: &StockFeed) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    let mut bars = feed.daily_bars(&symbol).await?;
    if args.limit > 0 && bars.len() > args.limit {
        bars.drain(..bars.len() - args.limit);
    }

    let text = bars
        .iter()
        .map(|bar| {
            format!(
                "{}  open {:>10.2}  high {:>10.2}  low {:>10.2}  close {:>10.2}  volume {:>12}",
                bar.day, bar.open, bar.high, bar.low, bar.close, bar.volume
            )
        })
        .collect();

    let data = serde_json::to_value(BarsResponseData { symbol, bars })?;
    Ok(CommandResult::new(data, text))
}
