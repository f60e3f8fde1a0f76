//! Per-symbol point-value estimation.
//!
//! The point value of an instrument is the currency value of one unit of
//! price movement for one unit of position size. It is recovered from the
//! trades themselves:
//!
//!   point_value = |profit| / (|price_entry - price_exit| * volume)
//!
//! and the per-symbol estimate is the MEDIAN over that symbol's trades,
//! which keeps outlier trades (entry ~ exit inflating the ratio) from
//! dominating the estimate.

use crate::domain::ledger::Ledger;
use crate::domain::round2;
use std::collections::BTreeMap;

/// Estimate the point value of every symbol in the ledger, rounded to
/// 2 decimals.
///
/// A trade with `price_entry == price_exit` or `volume == 0` produces an
/// `inf`/`NaN` ratio that still participates in the median. Callers who
/// want it excluded must filter such trades first.
pub fn point_values(ledger: &Ledger) -> BTreeMap<String, f64> {
    let mut per_symbol: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for trade in ledger {
        let ratio =
            trade.profit.abs() / ((trade.price_entry - trade.price_exit).abs() * trade.volume);
        per_symbol.entry(trade.symbol.clone()).or_default().push(ratio);
    }

    per_symbol
        .into_iter()
        .map(|(symbol, ratios)| (symbol, round2(median(&ratios))))
        .collect()
}

/// Median with midpoint interpolation for even lengths; `NaN` for an
/// empty slice. `NaN` elements sort last (`total_cmp`).
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
