use tickscope_analytics::analyze;
use tickscope_core::{StockFeed, Symbol};

use crate::cli::AnalyzeArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(args: &AnalyzeArgs, feed: &StockFeed) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    let bars = feed.daily_bars(&symbol).await?;
    // A failed quote is not fatal: the analysis derives a summary from the
    // series tail when none is supplied.
    let summary = feed.quote(&symbol).await.ok();

    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let analysis = analyze(symbol, summary, bars, &mut rng);

    let mut text = analysis.evaluation_summary.clone();
    text.push(format!("Forecast (quarter): {}", analysis.forecast_quarter.summary));
    text.push(format!("Forecast (year): {}", analysis.forecast_year.summary));

    let data = serde_json::to_value(&analysis)?;
    Ok(CommandResult::new(data, text))
}
