//! Dataset transforms for outlier robustness.
//!
//! Transforms only select rows: they never compute a metric, never add or
//! remove columns, and always return a fresh ledger with the surviving rows
//! in their original relative order, re-indexed from 0.

use crate::domain::error::RledgerError;
use crate::domain::ledger::{Column, Ledger};
use std::collections::HashSet;

/// Keep only rows whose value in `column` lies within the
/// `[lower_q, upper_q]` quantile band, bounds inclusive.
///
/// `lower_q = 0, upper_q = 1` keeps every finite row. The quantiles are
/// computed over the finite values only; `NaN` rows satisfy no band and
/// are dropped. When the column has a natural floor (a full stop-out pins
/// `R_multiple` at -1.0) equal to the lower quantile value, no losing
/// trades are trimmed from that side; that is the documented behavior of
/// quantile trimming, not a defect.
pub fn trim_quantile(
    ledger: &Ledger,
    column: Column,
    lower_q: f64,
    upper_q: f64,
) -> Result<Ledger, RledgerError> {
    let values = ledger.numeric_column(column)?;
    if values.is_empty() {
        return Ok(ledger.clone());
    }

    let finite: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if finite.is_empty() {
        return Ok(ledger.select(&[]));
    }

    let lo = quantile(&finite, lower_q);
    let hi = quantile(&finite, upper_q);

    let keep: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v >= lo && v <= hi)
        .map(|(i, _)| i)
        .collect();

    Ok(ledger.select(&keep))
}

/// Drop the `n = round(percent * rows)` largest and `n` smallest values of
/// `column`, where the two index sets are unioned (overlap at small `n`
/// drops fewer than `2n` rows). `NaN` values rank in neither set, so
/// `NaN` rows survive the trim.
///
/// `percent = 0` is the identity.
pub fn trim_extremes(
    ledger: &Ledger,
    column: Column,
    percent: f64,
) -> Result<Ledger, RledgerError> {
    let values = ledger.numeric_column(column)?;
    let n = (percent * values.len() as f64).round() as usize;
    if n == 0 {
        return Ok(ledger.clone());
    }

    let mut order: Vec<usize> = (0..values.len()).filter(|&i| !values[i].is_nan()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut dropped: HashSet<usize> = HashSet::new();
    dropped.extend(order.iter().take(n));
    dropped.extend(order.iter().rev().take(n));

    let keep: Vec<usize> = (0..values.len()).filter(|i| !dropped.contains(i)).collect();
    Ok(ledger.select(&keep))
}

/// Linear-interpolation quantile of an unsorted, `NaN`-free column,
/// `q` in `[0, 1]`.
pub(crate) fn quantile(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * (pos - lower as f64)
    }
}
