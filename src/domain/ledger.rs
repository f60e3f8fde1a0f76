//! Trade ledger representation: records, named columns, row selection.

use crate::domain::error::RledgerError;
use std::fmt;

/// One closed trade from a broker report.
///
/// `stop_loss == 0.0` means no initial stop was defined. The derived
/// `risk_usd` / `r_multiple` fields are absent until
/// [`add_r_multiples`](crate::domain::normalize::add_r_multiples) runs.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub symbol: String,
    pub volume: f64,
    pub price_entry: f64,
    pub stop_loss: f64,
    pub price_exit: f64,
    pub profit: f64,
    pub risk_usd: Option<f64>,
    pub r_multiple: Option<f64>,
}

impl TradeRecord {
    pub fn value(&self, column: Column) -> Option<f64> {
        match column {
            Column::Profit => Some(self.profit),
            Column::PriceEntry => Some(self.price_entry),
            Column::PriceExit => Some(self.price_exit),
            Column::StopLoss => Some(self.stop_loss),
            Column::Volume => Some(self.volume),
            Column::RiskUsd => self.risk_usd,
            Column::RMultiple => self.r_multiple,
            Column::Symbol => None,
        }
    }
}

/// Named columns of the ledger, with the header names used by the
/// broker-report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Profit,
    PriceEntry,
    PriceExit,
    StopLoss,
    Volume,
    Symbol,
    RiskUsd,
    RMultiple,
}

impl Column {
    pub fn name(&self) -> &'static str {
        match self {
            Column::Profit => "Profit",
            Column::PriceEntry => "Price Entry",
            Column::PriceExit => "Price Exit",
            Column::StopLoss => "S / L",
            Column::Volume => "Volume",
            Column::Symbol => "Symbol",
            Column::RiskUsd => "R(usd)",
            Column::RMultiple => "R_multiple",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Column::Symbol)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered sequence of trade records.
///
/// Row order is the time order: metrics are order-independent, but the
/// equity/drawdown curve and every transform preserve it. Construction
/// copies, and no operation mutates a ledger in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<TradeRecord>,
}

impl Ledger {
    pub fn new(records: Vec<TradeRecord>) -> Self {
        Self { records }
    }

    /// Build by copying caller-owned records, so the caller's data is
    /// never aliased.
    pub fn from_records(records: &[TradeRecord]) -> Self {
        Self {
            records: records.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TradeRecord> {
        self.records.iter()
    }

    /// Whether the column can be read from every row. Base columns are
    /// always present; derived columns are present only once the
    /// normalizer has committed them on every record.
    pub fn has_column(&self, column: Column) -> bool {
        match column {
            Column::RiskUsd => self.records.iter().all(|t| t.risk_usd.is_some()),
            Column::RMultiple => self.records.iter().all(|t| t.r_multiple.is_some()),
            _ => true,
        }
    }

    /// Extract one numeric column in row order.
    ///
    /// The column check that precedes every metric and transform:
    /// `Symbol` is not numeric, and a derived column that the normalizer
    /// has not committed is missing, never silently defaulted.
    pub fn numeric_column(&self, column: Column) -> Result<Vec<f64>, RledgerError> {
        if !column.is_numeric() {
            return Err(RledgerError::InvalidColumnType { column });
        }
        if !self.has_column(column) {
            return Err(RledgerError::MissingColumn { column });
        }
        Ok(self
            .records
            .iter()
            .map(|t| t.value(column).unwrap_or(f64::NAN))
            .collect())
    }

    /// New ledger keeping only the rows at `indices`, in the order given.
    /// Positions re-index from 0 by construction.
    pub(crate) fn select(&self, indices: &[usize]) -> Ledger {
        Ledger {
            records: indices.iter().map(|&i| self.records[i].clone()).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a TradeRecord;
    type IntoIter = std::slice::Iter<'a, TradeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_trade(symbol: &str, profit: f64) -> TradeRecord {
        TradeRecord {
            symbol: symbol.to_string(),
            volume: 1.0,
            price_entry: 100.0,
            stop_loss: 95.0,
            price_exit: 105.0,
            profit,
            risk_usd: None,
            r_multiple: None,
        }
    }

    #[test]
    fn base_columns_always_present() {
        let ledger = Ledger::from_records(&[raw_trade("EURUSD", 50.0)]);
        assert!(ledger.has_column(Column::Profit));
        assert!(ledger.has_column(Column::StopLoss));
        assert!(!ledger.has_column(Column::RMultiple));
        assert!(!ledger.has_column(Column::RiskUsd));
    }

    #[test]
    fn numeric_column_extracts_in_row_order() {
        let ledger = Ledger::from_records(&[raw_trade("A", 10.0), raw_trade("B", -5.0)]);
        let profits = ledger.numeric_column(Column::Profit).unwrap();
        assert_eq!(profits, vec![10.0, -5.0]);
    }

    #[test]
    fn numeric_column_rejects_symbol() {
        let ledger = Ledger::from_records(&[raw_trade("A", 1.0)]);
        let err = ledger.numeric_column(Column::Symbol).unwrap_err();
        assert!(matches!(
            err,
            RledgerError::InvalidColumnType {
                column: Column::Symbol
            }
        ));
    }

    #[test]
    fn missing_derived_column_is_an_error() {
        let ledger = Ledger::from_records(&[raw_trade("A", 1.0)]);
        let err = ledger.numeric_column(Column::RMultiple).unwrap_err();
        assert!(matches!(
            err,
            RledgerError::MissingColumn {
                column: Column::RMultiple
            }
        ));
    }

    #[test]
    fn select_preserves_relative_order() {
        let ledger = Ledger::from_records(&[
            raw_trade("A", 1.0),
            raw_trade("B", 2.0),
            raw_trade("C", 3.0),
        ]);
        let picked = ledger.select(&[0, 2]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked.records()[0].symbol, "A");
        assert_eq!(picked.records()[1].symbol, "C");
    }

    #[test]
    fn from_records_copies_caller_data() {
        let source = vec![raw_trade("A", 1.0)];
        let ledger = Ledger::from_records(&source);
        drop(source);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn column_display_uses_header_names() {
        assert_eq!(Column::StopLoss.to_string(), "S / L");
        assert_eq!(Column::RiskUsd.to_string(), "R(usd)");
        assert_eq!(Column::RMultiple.to_string(), "R_multiple");
    }
}
