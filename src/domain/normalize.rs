//! R-multiple normalization.
//!
//! Converts each trade's stop-loss distance into a risk amount in currency,
//! then expresses profit as a multiple of that risk:
//!
//!   risk_usd   = |price_entry - stop_loss| * volume * point_value[symbol]
//!   r_multiple = profit / risk_usd
//!
//! Trades without an initial stop (`stop_loss == 0`) have undefined risk and
//! are dropped from the output, never approximated.

use crate::domain::ledger::{Column, Ledger, TradeRecord};
use crate::domain::point_value::point_values;
use crate::domain::round2;

/// Produce a new ledger with `R(usd)` and `R_multiple` committed on every
/// surviving row.
///
/// Idempotent: a ledger that already carries `R_multiple` is returned
/// unchanged. The point-value map is estimated over the FULL input ledger,
/// before the stop-loss filter, so the per-symbol sample is not shrunk by
/// the drop. Survivors keep their original relative order.
///
/// A `risk_usd` of 0 yields a non-finite `r_multiple`; the sentinel is
/// committed as-is rather than masked.
pub fn add_r_multiples(ledger: &Ledger) -> Ledger {
    if ledger.has_column(Column::RMultiple) {
        return ledger.clone();
    }

    let pv = point_values(ledger);

    let records = ledger
        .iter()
        .filter(|trade| trade.stop_loss != 0.0)
        .map(|trade| {
            let point_value = pv.get(&trade.symbol).copied().unwrap_or(f64::NAN);
            let risk_usd =
                round2((trade.price_entry - trade.stop_loss).abs() * trade.volume * point_value);
            let r_multiple = round2(trade.profit / risk_usd);
            TradeRecord {
                risk_usd: Some(risk_usd),
                r_multiple: Some(r_multiple),
                ..trade.clone()
            }
        })
        .collect();

    Ledger::new(records)
}
