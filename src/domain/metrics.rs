//! Performance metrics over a single numeric column.
//!
//! Every function here is pure: it reads a column (R-multiples or raw
//! profits), mutates nothing, creates nothing, and rounds its result to
//! 2 decimals at the point of return only. Undefined ratios surface as
//! `f64::INFINITY`; callers aggregating results must expect non-finite
//! values.
//!
//! The breakeven threshold is an explicit parameter with a stated default,
//! never a hidden constant.

use crate::domain::equity;
use crate::domain::round2;

/// Default breakeven threshold: a trade is a win as soon as it clears zero.
pub const DEFAULT_BREAKEVEN: f64 = 0.0;

/// Win/loss/breakeven counts and percentages for one column.
///
/// `breakeven_pct` / `breakevens` are populated only when a breakeven band
/// was requested. Percentages are of `total` and sum to 100 up to rounding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateBreakdown {
    pub win_pct: f64,
    pub loss_pct: f64,
    pub breakeven_pct: Option<f64>,
    pub wins: usize,
    pub losses: usize,
    pub breakevens: Option<usize>,
    pub total: usize,
}

/// `sum(values >= breakeven) / |sum(values < breakeven)|`.
///
/// A zero denominator returns `+inf` (no losing side to divide by).
pub fn profit_factor(values: &[f64], breakeven: f64) -> f64 {
    let gains: f64 = values.iter().filter(|&&v| v >= breakeven).sum();
    let losses: f64 = values.iter().filter(|&&v| v < breakeven).sum();
    if losses == 0.0 {
        return f64::INFINITY;
    }
    round2(gains / losses.abs())
}

/// Expectancy as the plain mean of the column. 0 for an empty column.
pub fn expectancy(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    round2(values.iter().sum::<f64>() / values.len() as f64)
}

/// Expectancy decomposed as `winRate * avgWin - lossRate * avgLoss`,
/// with wins above `breakeven` and the loss rate as its complement.
/// 0 for an empty column.
pub fn expectancy_decomposed(values: &[f64], breakeven: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total = values.len() as f64;
    let win_rate = values.iter().filter(|&&v| v > breakeven).count() as f64 / total;
    let loss_rate = 1.0 - win_rate;
    let avg_win = mean_subset(values, |v| v > 0.0);
    let avg_loss = mean_subset(values, |v| v < 0.0).abs();
    round2(win_rate * avg_win - loss_rate * avg_loss)
}

/// Classify every value as win (`v > breakeven`), breakeven
/// (`0 < v <= breakeven`, only when `breakeven` is `Some`), or loss
/// (`v <= 0`), returning counts and percentages of the total.
///
/// An empty column returns the degenerate all-zero breakdown rather than
/// an error, so transform chains that empty a ledger stay composable.
pub fn win_rate(values: &[f64], breakeven: Option<f64>) -> RateBreakdown {
    let total = values.len();
    if total == 0 {
        return RateBreakdown {
            breakeven_pct: breakeven.map(|_| 0.0),
            breakevens: breakeven.map(|_| 0),
            ..RateBreakdown::default()
        };
    }

    let pct = |count: usize| round2(count as f64 * 100.0 / total as f64);

    match breakeven {
        Some(be) => {
            let wins = values.iter().filter(|&&v| v > be).count();
            let breakevens = values.iter().filter(|&&v| v > 0.0 && v <= be).count();
            let losses = total - wins - breakevens;
            RateBreakdown {
                win_pct: pct(wins),
                loss_pct: pct(losses),
                breakeven_pct: Some(pct(breakevens)),
                wins,
                losses,
                breakevens: Some(breakevens),
                total,
            }
        }
        None => {
            let wins = values.iter().filter(|&&v| v > 0.0).count();
            let losses = total - wins;
            RateBreakdown {
                win_pct: pct(wins),
                loss_pct: pct(losses),
                breakeven_pct: None,
                wins,
                losses,
                breakevens: None,
                total,
            }
        }
    }
}

/// `mean(values > 0) / |mean(values <= 0)|`.
///
/// A zero or empty denominator returns `+inf`; an empty winning side
/// returns 0.
pub fn payoff_ratio(values: &[f64]) -> f64 {
    let has_wins = values.iter().any(|&v| v > 0.0);
    let has_losses = values.iter().any(|&v| v <= 0.0);
    if !has_losses {
        return f64::INFINITY;
    }
    if !has_wins {
        return 0.0;
    }
    let mean_win = mean_subset(values, |v| v > 0.0);
    let mean_loss = mean_subset(values, |v| v <= 0.0);
    if mean_loss == 0.0 {
        return f64::INFINITY;
    }
    round2(mean_win / mean_loss.abs())
}

/// Mean of the strictly positive values; 0 when there are none.
pub fn avg_win(values: &[f64]) -> f64 {
    if !values.iter().any(|&v| v > 0.0) {
        return 0.0;
    }
    round2(mean_subset(values, |v| v > 0.0))
}

/// Absolute mean of the strictly negative values; 0 when there are none.
pub fn avg_loss(values: &[f64]) -> f64 {
    if !values.iter().any(|&v| v < 0.0) {
        return 0.0;
    }
    round2(mean_subset(values, |v| v < 0.0).abs())
}

/// Max drawdown of the column's cumulative-sum curve. 0 or negative.
pub fn max_drawdown(values: &[f64]) -> f64 {
    round2(equity::max_drawdown(&equity::equity_curve(values)))
}

/// Average drawdown of the column's cumulative-sum curve. Always <= 0.
pub fn avg_drawdown(values: &[f64]) -> f64 {
    round2(equity::avg_drawdown(&equity::equity_curve(values)))
}

fn mean_subset(values: &[f64], keep: impl Fn(f64) -> bool) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in values {
        if keep(v) {
            sum += v;
            count += 1;
        }
    }
    if count == 0 { 0.0 } else { sum / count as f64 }
}
