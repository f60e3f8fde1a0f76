//! Equity curve and drawdown over an ordered numeric column.
//!
//! Row order is the time axis: the curve is the running cumulative sum of
//! the column, and drawdown is the pointwise distance below the running
//! peak of that curve.

use crate::domain::round2;

/// Running cumulative sum, each point rounded to 2 decimals. The
/// accumulator itself is not rounded, so rounding error does not compound.
pub fn equity_curve(values: &[f64]) -> Vec<f64> {
    let mut acc = 0.0;
    values
        .iter()
        .map(|v| {
            acc += v;
            round2(acc)
        })
        .collect()
}

/// Most negative excursion below the running peak: `min(equity - peak)`.
/// 0 for an empty curve; never positive.
pub fn max_drawdown(curve: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;
    for &equity in curve {
        if equity > peak {
            peak = equity;
        }
        let dd = equity - peak;
        if dd < worst {
            worst = dd;
        }
    }
    worst
}

/// Mean of the pointwise `equity - peak` series. 0 for an empty curve;
/// always <= 0 and >= [`max_drawdown`].
pub fn avg_drawdown(curve: &[f64]) -> f64 {
    if curve.is_empty() {
        return 0.0;
    }
    let mut peak = f64::NEG_INFINITY;
    let mut sum = 0.0_f64;
    for &equity in curve {
        if equity > peak {
            peak = equity;
        }
        sum += equity - peak;
    }
    sum / curve.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn curve_is_rounded_cumulative_sum() {
        let curve = equity_curve(&[1.0, -1.0, 2.0, -0.5, 0.5]);
        assert_eq!(curve, vec![1.0, 0.0, 2.0, 1.5, 2.0]);
    }

    #[test]
    fn curve_rounds_each_point_without_compounding() {
        // 0.005 + 0.004 = 0.009: second point must round the true running
        // sum (0.01), not the sum of rounded points (0.01 + 0.0).
        let curve = equity_curve(&[0.004, 0.005]);
        assert_eq!(curve, vec![0.0, 0.01]);
    }

    #[test]
    fn max_drawdown_of_reference_curve() {
        let curve = vec![1.0, 0.0, 2.0, 1.5, 2.0];
        assert_eq!(max_drawdown(&curve), -1.0);
    }

    #[test]
    fn avg_drawdown_of_reference_curve() {
        // equity - peak = [0, -1, 0, -0.5, 0], mean = -0.3
        let curve = vec![1.0, 0.0, 2.0, 1.5, 2.0];
        assert_relative_eq!(avg_drawdown(&curve), -0.3, epsilon = 1e-9);
    }

    #[test]
    fn monotone_curve_has_zero_drawdown() {
        let curve = vec![1.0, 2.0, 3.5, 4.0];
        assert_eq!(max_drawdown(&curve), 0.0);
        assert_eq!(avg_drawdown(&curve), 0.0);
    }

    #[test]
    fn all_losing_curve_drawdown_equals_total_decline() {
        let curve = equity_curve(&[-1.0, -0.5, -2.0]);
        assert_eq!(max_drawdown(&curve), -2.5);
    }

    #[test]
    fn empty_curve_is_zero() {
        assert_eq!(max_drawdown(&[]), 0.0);
        assert_eq!(avg_drawdown(&[]), 0.0);
    }

    #[test]
    fn avg_never_worse_than_max() {
        let curve = equity_curve(&[0.5, -2.0, 1.0, -0.3, 0.1]);
        assert!(avg_drawdown(&curve) >= max_drawdown(&curve));
        assert!(avg_drawdown(&curve) <= 0.0);
    }
}
