//! One-call aggregate of the metric suite over a single column.

use crate::domain::error::RledgerError;
use crate::domain::ledger::{Column, Ledger};
use crate::domain::metrics::{self, DEFAULT_BREAKEVEN, RateBreakdown};

/// Parameters shared by the aggregated metrics. The breakeven threshold is
/// explicit here so no metric carries a hidden constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryConfig {
    pub breakeven: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            breakeven: DEFAULT_BREAKEVEN,
        }
    }
}

/// The full metric suite for one column. Field units are the column's
/// units (R-multiples or currency).
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub profit_factor: f64,
    pub expectancy: f64,
    pub expectancy_decomposed: f64,
    pub max_drawdown: f64,
    pub avg_drawdown: f64,
    pub payoff_ratio: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub rates: RateBreakdown,
}

/// Evaluate every metric over `column`. Read-only: the ledger is neither
/// mutated nor extended.
pub fn summarize(
    ledger: &Ledger,
    column: Column,
    config: &SummaryConfig,
) -> Result<Summary, RledgerError> {
    let values = ledger.numeric_column(column)?;
    let breakeven = if config.breakeven > 0.0 {
        Some(config.breakeven)
    } else {
        None
    };

    Ok(Summary {
        profit_factor: metrics::profit_factor(&values, config.breakeven),
        expectancy: metrics::expectancy(&values),
        expectancy_decomposed: metrics::expectancy_decomposed(&values, config.breakeven),
        max_drawdown: metrics::max_drawdown(&values),
        avg_drawdown: metrics::avg_drawdown(&values),
        payoff_ratio: metrics::payoff_ratio(&values),
        avg_win: metrics::avg_win(&values),
        avg_loss: metrics::avg_loss(&values),
        rates: metrics::win_rate(&values, breakeven),
    })
}
